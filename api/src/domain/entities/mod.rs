//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;
pub mod client;

pub use account::{Account, AccountId, AccountType, NewAccount};
pub use client::{AddressId, Client, ClientId, ClientType, NewClient};
