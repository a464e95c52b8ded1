pub mod handlers;
pub mod openapi;
pub mod state;

use anyhow::Context;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::AuthService;
use crate::db::Database;
use state::AppState;

/// Start the HTTP gateway and serve until shutdown.
pub async fn run_server(
    host: &str,
    port: u16,
    db: Arc<Database>,
    auth: Arc<AuthService>,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db, auth));

    // Public routes (no auth required)
    let auth_routes = Router::new()
        .route("/register", post(crate::auth::handlers::register))
        .route("/login", post(crate::auth::handlers::login));

    // Protected routes, gated by the JWT middleware
    let wallet_routes = Router::new()
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/transactions/send", post(handlers::send_money))
        .layer(from_fn_with_state(
            state.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    let app = Router::new()
        .route("/api/health", get(handlers::health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api", wallet_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port already in use?)", addr))?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📖 API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
