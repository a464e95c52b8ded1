use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};
use utoipa::ToSchema;
use validator::Validate;

use crate::account::{AccountDirectory, User};
use crate::error::ServiceError;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user_id as string)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

impl Claims {
    /// Account id carried by the token. Tokens are only ever issued with a
    /// numeric subject, so failure here means a foreign or tampered token.
    pub fn account_id(&self) -> Result<i64, ServiceError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| ServiceError::Unauthorized("Invalid token subject".to_string()))
    }
}

/// User Registration Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Alice Smith")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[schema(example = "alice@example.com")]
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[schema(example = "password123")]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// User Login Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Auth Response (JWT + account)
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub struct AuthService {
    db: Pool<Postgres>,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(db: Pool<Postgres>, jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            db,
            jwt_secret,
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    /// Register a new account and issue its first token
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let password_hash = hash_password(&req.password)?;
        let user = AccountDirectory::create(&self.db, &req.name, &req.email, &password_hash).await?;

        let token = self.issue_token(user.user_id)?;
        tracing::info!(user_id = user.user_id, "user registered");

        Ok(AuthResponse { token, user })
    }

    /// Verify credentials and issue a token
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ServiceError> {
        let user = AccountDirectory::find_by_email(&self.db, &req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        verify_password(&req.password, &user.password_hash)?;

        let token = self.issue_token(user.user_id)?;
        Ok(AuthResponse { token, user })
    }

    /// Verify a bearer token and return its typed claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|_| ServiceError::Unauthorized("Invalid or expired token".to_string()))?;
        Ok(token_data.claims)
    }

    fn issue_token(&self, user_id: i64) -> Result<String, ServiceError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| ServiceError::Storage("token expiry overflow".to_string()))?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| ServiceError::Storage(format!("Failed to generate token: {}", e)))
    }
}

/// Hash a raw password into an argon2 PHC string
pub(crate) fn hash_password(raw: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(raw.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Storage(format!("Hashing failed: {}", e)))
}

/// Verify a raw password against a stored argon2 PHC string
pub(crate) fn verify_password(raw: &str, stored: &str) -> Result<(), ServiceError> {
    let parsed_hash =
        PasswordHash::new(stored).map_err(|_| ServiceError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed_hash)
        .map_err(|_| ServiceError::InvalidCredentials)
}
