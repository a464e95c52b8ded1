use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::gateway::state::AppState;

/// Bearer-token middleware for protected routes.
///
/// Verifies the JWT once and injects the typed [`crate::auth::Claims`] into
/// request extensions; handlers read the account id from there instead of
/// re-parsing the token.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ServiceError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServiceError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServiceError::Unauthorized("Invalid token format".to_string()))?;

    let claims = state.auth.verify_token(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
