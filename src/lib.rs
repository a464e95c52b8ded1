//! wallet-ledger - Minimal Wallet Ledger Service
//!
//! Users register and log in, record deposit/withdrawal entries, and transfer
//! funds between accounts. Balances are never stored: they are derived by
//! folding an account's append-only entry log.
//!
//! # Modules
//!
//! - [`ledger`] - Entry model, balance fold, and the append-only entry store
//! - [`account`] - User model and the email -> account directory
//! - [`transfer`] - Transfer coordinator (balance check + paired append, one transaction)
//! - [`auth`] - Password hashing, JWT issuance, bearer middleware
//! - [`gateway`] - Axum HTTP surface
//! - [`db`] - PostgreSQL pool and migrations
//! - [`config`] / [`logging`] - YAML config and tracing setup

pub mod account;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{AccountDirectory, User};
pub use auth::{AuthService, Claims};
pub use db::Database;
pub use error::ServiceError;
pub use ledger::{EntryKind, LedgerEntry, LedgerStore, balance};
pub use transfer::{TransferCoordinator, TransferOutcome};
