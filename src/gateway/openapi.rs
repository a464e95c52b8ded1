//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::account::User;
use crate::auth::service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::gateway::handlers::{
    CreateTransactionRequest, HealthResponse, SendMoneyRequest, SendMoneyResponse,
    StatementResponse,
};
use crate::ledger::{EntryKind, LedgerEntry};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wallet Ledger API",
        version = "0.1.0",
        description = "Minimal wallet ledger: register/login, record deposits and withdrawals, transfer funds between accounts.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::gateway::handlers::list_transactions,
        crate::gateway::handlers::create_transaction,
        crate::gateway::handlers::send_money,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            EntryKind,
            LedgerEntry,
            CreateTransactionRequest,
            SendMoneyRequest,
            SendMoneyResponse,
            StatementResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Transactions", description = "Balance, entry history, transfers (auth required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Wallet Ledger API");
    }

    #[test]
    fn test_wallet_routes_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/auth/register"));
        assert!(paths.paths.contains_key("/api/auth/login"));
        assert!(paths.paths.contains_key("/api/transactions"));
        assert!(paths.paths.contains_key("/api/transactions/send"));
        assert!(paths.paths.contains_key("/api/health"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_jwt"));
    }
}
