//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Account, AccountId, Client, ClientId, NewAccount, NewClient};
use crate::domain::ports::{AccountRepository, ClientRepository};
use crate::error::DomainError;

fn simulated_failure() -> DomainError {
    DomainError::Database("simulated failure".to_string())
}

// ============================================================================
// In-Memory Account Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    fail: bool,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.accounts.write().unwrap().insert(account.id, account);
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(simulated_failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        self.check()?;
        let accounts = self.accounts.read().unwrap();
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by_key(|a| a.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.check()?;
        Ok(self.accounts.read().unwrap().get(id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.accounts.read().unwrap().len() as u64)
    }

    async fn create(&self, new_account: &NewAccount) -> Result<Account, DomainError> {
        self.check()?;
        let mut accounts = self.accounts.write().unwrap();
        let next_id = accounts.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        let account = new_account.clone().with_id(AccountId(next_id));
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(
        &self,
        id: &AccountId,
        changes: &NewAccount,
    ) -> Result<Option<Account>, DomainError> {
        self.check()?;
        let mut accounts = self.accounts.write().unwrap();
        match accounts.get_mut(id) {
            Some(account) => {
                *account = changes.clone().with_id(*id);
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &AccountId) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.accounts.write().unwrap().remove(id).is_some())
    }
}

// ============================================================================
// In-Memory Client Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        self.clients.write().unwrap().insert(client.id, client);
        self
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let clients = self.clients.read().unwrap();
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by_key(|c| c.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.read().unwrap().get(id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.clients.read().unwrap().len() as u64)
    }

    async fn create(&self, new_client: &NewClient) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().unwrap();
        let next_id = clients.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        let client = new_client.clone().with_id(ClientId(next_id));
        clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn update(
        &self,
        id: &ClientId,
        changes: &NewClient,
    ) -> Result<Option<Client>, DomainError> {
        let mut clients = self.clients.write().unwrap();
        match clients.get_mut(id) {
            Some(client) => {
                *client = changes.clone().with_id(*id);
                Ok(Some(client.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ClientId) -> Result<bool, DomainError> {
        Ok(self.clients.write().unwrap().remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_account, test_client};

    #[tokio::test]
    async fn account_ids_continue_after_highest() {
        let repo = InMemoryAccountRepository::new().with_account(test_account());
        let new_account = NewAccount {
            name: "Second".to_string(),
            ..test_account_payload()
        };

        let created = repo.create(&new_account).await.unwrap();

        assert_eq!(created.id, AccountId(2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn client_update_missing_is_none() {
        let repo = InMemoryClientRepository::new();
        let changes = NewClient {
            name: "Nobody".to_string(),
            phone_number: None,
            client_type: test_client().client_type,
            email: None,
            address_id: test_client().address_id,
        };

        assert!(repo.update(&ClientId(5), &changes).await.unwrap().is_none());
    }

    fn test_account_payload() -> NewAccount {
        let account = test_account();
        NewAccount {
            name: account.name,
            account_type: account.account_type,
            balance: account.balance,
            is_active: account.is_active,
            client_id: account.client_id,
        }
    }
}
