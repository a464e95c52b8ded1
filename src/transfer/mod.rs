//! Money movement between accounts
//!
//! The coordinator is the only writer that touches two accounts at once; it
//! wraps the balance check and the paired debit/credit append in a single
//! database transaction.

pub mod coordinator;

pub use coordinator::{TransferCoordinator, TransferOutcome};
