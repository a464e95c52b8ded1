//! Append-only wallet ledger
//!
//! - [`entry`] - `LedgerEntry` model, entry kinds, and the pure balance fold
//! - [`store`] - persistence of entries, usable inside a caller-scoped transaction

pub mod entry;
pub mod store;

pub use entry::{EntryKind, LedgerEntry, balance};
pub use store::LedgerStore;
