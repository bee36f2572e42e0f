//! SeaORM adapter for ClientRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{Client, ClientId, NewClient};
use crate::domain::ports::ClientRepository;
use crate::entity::clients;
use crate::error::DomainError;

use super::write_error;

/// SQL implementation of ClientRepository
pub struct SqlClientRepository {
    db: DatabaseConnection,
}

impl SqlClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for SqlClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let results = clients::Entity::find()
            .order_by_asc(clients::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Client::try_from).collect()
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        let result = clients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Client::try_from).transpose()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        clients::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn create(&self, client: &NewClient) -> Result<Client, DomainError> {
        let model = clients::ActiveModel {
            id: NotSet,
            name: Set(client.name.clone()),
            phone_number: Set(client.phone_number.clone()),
            client_type: Set(client.client_type.to_string()),
            email: Set(client.email.clone()),
            address_id: Set(client.address_id.0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        result.try_into()
    }

    async fn update(
        &self,
        id: &ClientId,
        client: &NewClient,
    ) -> Result<Option<Client>, DomainError> {
        let existing = clients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if existing.is_none() {
            return Ok(None);
        }

        clients::ActiveModel {
            id: Set(id.0),
            name: Set(client.name.clone()),
            phone_number: Set(client.phone_number.clone()),
            client_type: Set(client.client_type.to_string()),
            email: Set(client.email.clone()),
            address_id: Set(client.address_id.0),
        }
        .update(&self.db)
        .await
        .map_err(write_error)?;

        Ok(Some(client.clone().with_id(*id)))
    }

    async fn delete(&self, id: &ClientId) -> Result<bool, DomainError> {
        let result = clients::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<clients::Model> for Client {
    type Error = DomainError;

    fn try_from(model: clients::Model) -> Result<Self, Self::Error> {
        let client_type = model.client_type.parse().map_err(DomainError::Internal)?;

        Ok(Client {
            id: ClientId(model.id),
            name: model.name,
            phone_number: model.phone_number,
            client_type,
            email: model.email,
            address_id: model.address_id.into(),
        })
    }
}
