use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::Database;
use crate::transfer::TransferCoordinator;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool wrapper (health checks, migrations)
    pub db: Arc<Database>,
    /// Password hashing + JWT issuance/verification
    pub auth: Arc<AuthService>,
    /// Balance-checked money movement
    pub coordinator: Arc<TransferCoordinator>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>) -> Self {
        let coordinator = Arc::new(TransferCoordinator::new(db.pool().clone()));
        Self {
            db,
            auth,
            coordinator,
        }
    }
}
