//! Entity <-> DTO mapping
//!
//! Every field maps by identity except the client email, which is `mail` on
//! the wire. Turning a DTO into a creation payload also enforces the required
//! name.

use crate::app::dto::{AccountDto, ClientDto};
use crate::domain::entities::{Account, Client, NewAccount, NewClient};
use crate::error::DomainError;

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        AccountDto {
            id: account.id.0,
            name: Some(account.name),
            account_type: account.account_type,
            balance: account.balance,
            is_active: account.is_active,
            client_id: account.client_id.0,
        }
    }
}

impl TryFrom<AccountDto> for NewAccount {
    type Error = DomainError;

    fn try_from(dto: AccountDto) -> Result<Self, Self::Error> {
        Ok(NewAccount {
            name: required_name(dto.name)?,
            account_type: dto.account_type,
            balance: dto.balance,
            is_active: dto.is_active,
            client_id: dto.client_id.into(),
        })
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        ClientDto {
            id: client.id.0,
            name: Some(client.name),
            phone_number: client.phone_number,
            client_type: client.client_type,
            mail: client.email,
            address_id: client.address_id.0,
        }
    }
}

impl TryFrom<ClientDto> for NewClient {
    type Error = DomainError;

    fn try_from(dto: ClientDto) -> Result<Self, Self::Error> {
        Ok(NewClient {
            name: required_name(dto.name)?,
            phone_number: dto.phone_number,
            client_type: dto.client_type,
            email: dto.mail,
            address_id: dto.address_id.into(),
        })
    }
}

fn required_name(name: Option<String>) -> Result<String, DomainError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(DomainError::Validation("Name is required".to_string())),
    }
}
