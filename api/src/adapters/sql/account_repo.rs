//! SeaORM adapter for AccountRepository

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{Account, AccountId, NewAccount};
use crate::domain::ports::AccountRepository;
use crate::entity::accounts;
use crate::error::DomainError;

use super::write_error;

/// SQL implementation of AccountRepository
pub struct SqlAccountRepository {
    db: DatabaseConnection,
}

impl SqlAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for SqlAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let results = accounts::Entity::find()
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Account::try_from).collect()
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Account::try_from).transpose()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        accounts::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError> {
        let model = accounts::ActiveModel {
            id: NotSet,
            name: Set(account.name.clone()),
            account_type: Set(account.account_type.to_string()),
            balance: Set(account.balance.to_string()),
            is_active: Set(account.is_active),
            client_id: Set(account.client_id.0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        result.try_into()
    }

    async fn update(
        &self,
        id: &AccountId,
        account: &NewAccount,
    ) -> Result<Option<Account>, DomainError> {
        let existing = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if existing.is_none() {
            return Ok(None);
        }

        accounts::ActiveModel {
            id: Set(id.0),
            name: Set(account.name.clone()),
            account_type: Set(account.account_type.to_string()),
            balance: Set(account.balance.to_string()),
            is_active: Set(account.is_active),
            client_id: Set(account.client_id.0),
        }
        .update(&self.db)
        .await
        .map_err(write_error)?;

        Ok(Some(account.clone().with_id(*id)))
    }

    async fn delete(&self, id: &AccountId) -> Result<bool, DomainError> {
        let result = accounts::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<accounts::Model> for Account {
    type Error = DomainError;

    fn try_from(model: accounts::Model) -> Result<Self, Self::Error> {
        let account_type = model
            .account_type
            .parse()
            .map_err(DomainError::Internal)?;

        let balance = Decimal::from_str(&model.balance).map_err(|e| {
            DomainError::Internal(format!("Invalid stored balance {:?}: {}", model.balance, e))
        })?;

        Ok(Account {
            id: AccountId(model.id),
            name: model.name,
            account_type,
            balance,
            is_active: model.is_active,
            client_id: model.client_id.into(),
        })
    }
}
