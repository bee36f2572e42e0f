//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over PostgreSQL or SQLite).

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountId, Client, ClientId, NewAccount, NewClient};
use crate::error::DomainError;

/// Repository for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// List every account
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Find an account by ID
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Count stored accounts
    async fn count(&self) -> Result<u64, DomainError>;

    /// Insert a new account; the store assigns the ID
    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError>;

    /// Overwrite all mutable fields of an existing account.
    /// Returns `None` when no account has this ID.
    async fn update(
        &self,
        id: &AccountId,
        account: &NewAccount,
    ) -> Result<Option<Account>, DomainError>;

    /// Delete an account. Returns `false` when no account has this ID.
    async fn delete(&self, id: &AccountId) -> Result<bool, DomainError>;
}

/// Repository for Client entities
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// List every client
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Find a client by ID
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError>;

    /// Count stored clients
    async fn count(&self) -> Result<u64, DomainError>;

    /// Insert a new client; the store assigns the ID
    async fn create(&self, client: &NewClient) -> Result<Client, DomainError>;

    /// Overwrite all mutable fields of an existing client.
    /// Returns `None` when no client has this ID.
    async fn update(&self, id: &ClientId, client: &NewClient)
        -> Result<Option<Client>, DomainError>;

    /// Delete a client (and, through the schema, its accounts).
    /// Returns `false` when no client has this ID.
    async fn delete(&self, id: &ClientId) -> Result<bool, DomainError>;
}
