//! Client service
//!
//! CRUD over clients. Same contract as the account service.

use std::sync::Arc;

use crate::app::dto::ClientDto;
use crate::domain::entities::{ClientId, NewClient};
use crate::domain::ports::ClientRepository;
use crate::error::{AppError, DomainError};

/// Service for managing clients
pub struct ClientService<CR>
where
    CR: ClientRepository,
{
    clients: Arc<CR>,
}

impl<CR> ClientService<CR>
where
    CR: ClientRepository,
{
    pub fn new(clients: Arc<CR>) -> Self {
        Self { clients }
    }

    /// List every client
    pub async fn get_clients(&self) -> Result<Vec<ClientDto>, AppError> {
        let clients = self.clients.find_all().await?;
        Ok(clients.into_iter().map(ClientDto::from).collect())
    }

    /// Find a client. A missing id is `None`, not an error.
    pub async fn get_client(&self, id: &ClientId) -> Result<Option<ClientDto>, AppError> {
        Ok(self.clients.find_by_id(id).await?.map(ClientDto::from))
    }

    /// Number of stored clients
    pub async fn count_clients(&self) -> Result<u64, AppError> {
        Ok(self.clients.count().await?)
    }

    /// Validate and persist a new client. The id on the DTO is ignored.
    pub async fn save_client(&self, dto: ClientDto) -> Result<ClientDto, AppError> {
        let new_client = NewClient::try_from(dto)?;
        let client = self.clients.create(&new_client).await?;

        tracing::info!(client_id = %client.id, "Client created");

        Ok(client.into())
    }

    /// Overwrite an existing client
    ///
    /// Fails with `DomainError::NotFound("Client not found")` when the id is
    /// unknown, and with a validation error when the name is missing.
    pub async fn put_client(&self, id: &ClientId, dto: ClientDto) -> Result<ClientDto, AppError> {
        if self.clients.find_by_id(id).await?.is_none() {
            return Err(client_not_found());
        }

        let changes = NewClient::try_from(dto)?;
        let client = self
            .clients
            .update(id, &changes)
            .await?
            .ok_or_else(client_not_found)?;

        tracing::info!(client_id = %id, "Client updated");

        Ok(client.into())
    }

    /// Delete a client. Returns `false` if it did not exist.
    pub async fn delete_client(&self, id: &ClientId) -> Result<bool, AppError> {
        let deleted = self.clients.delete(id).await?;

        if deleted {
            tracing::info!(client_id = %id, "Client deleted");
        }

        Ok(deleted)
    }
}

fn client_not_found() -> AppError {
    AppError::Domain(DomainError::NotFound("Client not found".to_string()))
}
