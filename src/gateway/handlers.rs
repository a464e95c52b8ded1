//! Wallet HTTP handlers
//!
//! All protected handlers read the authenticated account id from the typed
//! claims injected by the JWT middleware; nothing is fished out of ambient
//! request state by string key.

use axum::{Extension, Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use utoipa::ToSchema;

use super::state::AppState;
use crate::auth::Claims;
use crate::error::ServiceError;
use crate::ledger::{EntryKind, LedgerEntry};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// "deposit" or "withdrawal"
    #[serde(rename = "type")]
    #[schema(example = "deposit")]
    pub kind: String,
    /// Decimal string; floats never cross the wire.
    #[schema(example = "100.00")]
    pub amount: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMoneyRequest {
    #[schema(example = "bob@example.com")]
    pub recipient_email: String,
    #[schema(example = "25.00")]
    pub amount: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatementResponse {
    /// Net balance derived from the entries below.
    #[schema(value_type = String, example = "74.50")]
    pub balance: Decimal,
    pub transactions: Vec<LedgerEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendMoneyResponse {
    pub message: String,
    pub sender_transaction: LedgerEntry,
    pub recipient_transaction: LedgerEntry,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

fn parse_amount(raw: &str) -> Result<Decimal, ServiceError> {
    Decimal::from_str(raw)
        .map_err(|_| ServiceError::InvalidInput(format!("invalid amount: {}", raw)))
}

/// Balance and transaction history
///
/// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Derived balance plus entries, newest first", body = StatementResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Transactions"
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StatementResponse>, ServiceError> {
    let user_id = claims.account_id()?;
    let (balance, transactions) = state.coordinator.statement(user_id).await?;
    Ok(Json(StatementResponse {
        balance,
        transactions,
    }))
}

/// Record a deposit or withdrawal
///
/// POST /api/transactions
#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Entry created", body = LedgerEntry),
        (status = 400, description = "Unknown type or non-positive amount"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<LedgerEntry>), ServiceError> {
    let user_id = claims.account_id()?;
    let kind = EntryKind::from(req.kind.as_str());
    let amount = parse_amount(&req.amount)?;

    let entry = state.coordinator.create_entry(user_id, kind, amount).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Transfer funds to another account
///
/// POST /api/transactions/send
#[utoipa::path(
    post,
    path = "/api/transactions/send",
    request_body = SendMoneyRequest,
    responses(
        (status = 200, description = "Transfer committed", body = SendMoneyResponse),
        (status = 400, description = "Invalid amount, self-transfer or insufficient balance"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Recipient not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Transactions"
)]
pub async fn send_money(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SendMoneyRequest>,
) -> Result<Json<SendMoneyResponse>, ServiceError> {
    let sender_id = claims.account_id()?;
    let amount = parse_amount(&req.amount)?;

    let outcome = state
        .coordinator
        .transfer(sender_id, &req.recipient_email, amount)
        .await?;

    Ok(Json(SendMoneyResponse {
        message: "Money sent successfully".to_string(),
        sender_transaction: outcome.withdrawal,
        recipient_transaction: outcome.deposit,
    }))
}

/// Service health
///
/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ServiceError> {
    state.db.health_check().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimal_strings() {
        assert_eq!(parse_amount("100").unwrap(), Decimal::from(100));
        assert_eq!(parse_amount("0.01").unwrap(), Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("ten dollars"),
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(parse_amount(""), Err(ServiceError::InvalidInput(_))));
    }
}
