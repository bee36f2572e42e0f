//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use rust_decimal::Decimal;

use crate::app::{AccountDto, ClientDto};
use crate::domain::entities::{
    Account, AccountId, AccountType, AddressId, Client, ClientId, ClientType,
};
use crate::test_utils::InMemoryAccountRepository;

/// Create a test account with default values
pub fn test_account() -> Account {
    test_account_named(1, "Everyday Savings")
}

/// Create a test account with a specific id and name
pub fn test_account_named(id: i32, name: &str) -> Account {
    Account {
        id: AccountId(id),
        name: name.to_string(),
        account_type: AccountType::SavingsAccount,
        balance: Decimal::new(150_000, 2),
        is_active: true,
        client_id: ClientId(1),
    }
}

/// Fill a repository with `count` accounts numbered from 1
pub fn seeded_accounts(repo: InMemoryAccountRepository, count: i32) -> InMemoryAccountRepository {
    (1..=count).fold(repo, |repo, id| {
        repo.with_account(test_account_named(id, &format!("Account {}", id)))
    })
}

/// Request body for creating an account
pub fn new_account_dto() -> AccountDto {
    AccountDto {
        id: 0,
        name: Some("New Account".to_string()),
        account_type: AccountType::SavingsAccount,
        balance: Decimal::new(924, 0),
        is_active: true,
        client_id: 1,
    }
}

/// Create a test client with default values
pub fn test_client() -> Client {
    test_client_named(1, "Ana Ribeiro")
}

/// Create a test client with a specific id and name
pub fn test_client_named(id: i32, name: &str) -> Client {
    Client {
        id: ClientId(id),
        name: name.to_string(),
        phone_number: Some("351-912-345".to_string()),
        client_type: ClientType::Residential,
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        address_id: AddressId(1),
    }
}

/// Request body for creating a client
pub fn new_client_dto() -> ClientDto {
    ClientDto {
        id: 0,
        name: Some("New Client".to_string()),
        phone_number: Some("111-111-111".to_string()),
        client_type: ClientType::Residential,
        mail: Some("example@email.com".to_string()),
        address_id: 1,
    }
}
