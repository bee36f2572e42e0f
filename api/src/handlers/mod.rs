//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod clients;
pub mod extract;

pub use accounts::{get_account, get_accounts, new_account, remove_account, update_account};
pub use clients::{get_client, get_clients, new_client, remove_client, update_client};
