//! Account service
//!
//! CRUD over accounts with existence checks and name validation.

use std::sync::Arc;

use crate::app::dto::AccountDto;
use crate::domain::entities::{AccountId, NewAccount};
use crate::domain::ports::AccountRepository;
use crate::error::{AppError, DomainError};

/// Service for managing accounts
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    accounts: Arc<AR>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(accounts: Arc<AR>) -> Self {
        Self { accounts }
    }

    /// List every account
    pub async fn get_accounts(&self) -> Result<Vec<AccountDto>, AppError> {
        let accounts = self.accounts.find_all().await?;
        Ok(accounts.into_iter().map(AccountDto::from).collect())
    }

    /// Find an account. A missing id is `None`, not an error.
    pub async fn get_account(&self, id: &AccountId) -> Result<Option<AccountDto>, AppError> {
        Ok(self.accounts.find_by_id(id).await?.map(AccountDto::from))
    }

    /// Number of stored accounts
    pub async fn count_accounts(&self) -> Result<u64, AppError> {
        Ok(self.accounts.count().await?)
    }

    /// Validate and persist a new account. The id on the DTO is ignored.
    pub async fn save_account(&self, dto: AccountDto) -> Result<AccountDto, AppError> {
        let new_account = NewAccount::try_from(dto)?;
        let account = self.accounts.create(&new_account).await?;

        tracing::info!(account_id = %account.id, client_id = %account.client_id, "Account created");

        Ok(account.into())
    }

    /// Overwrite an existing account
    ///
    /// Fails with `DomainError::NotFound("Account not found")` when the id is
    /// unknown, and with a validation error when the name is missing.
    pub async fn put_account(
        &self,
        id: &AccountId,
        dto: AccountDto,
    ) -> Result<AccountDto, AppError> {
        if self.accounts.find_by_id(id).await?.is_none() {
            return Err(account_not_found());
        }

        let changes = NewAccount::try_from(dto)?;
        let account = self
            .accounts
            .update(id, &changes)
            .await?
            .ok_or_else(account_not_found)?;

        tracing::info!(account_id = %id, "Account updated");

        Ok(account.into())
    }

    /// Delete an account. Returns `false` if it did not exist.
    pub async fn delete_account(&self, id: &AccountId) -> Result<bool, AppError> {
        let deleted = self.accounts.delete(id).await?;

        if deleted {
            tracing::info!(account_id = %id, "Account deleted");
        } else {
            tracing::debug!(account_id = %id, "Delete skipped, account does not exist");
        }

        Ok(deleted)
    }
}

fn account_not_found() -> AppError {
    AppError::Domain(DomainError::NotFound("Account not found".to_string()))
}
