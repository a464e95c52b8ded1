//! Account management
//!
//! - [`models`] - the `User` account model
//! - [`directory`] - email -> account resolution and account creation

pub mod directory;
pub mod models;

pub use directory::AccountDirectory;
pub use models::User;
