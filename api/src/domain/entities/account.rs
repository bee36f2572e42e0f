//! Account domain entity
//!
//! A bank account held by a client.

use rust_decimal::Decimal;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::ClientId;

/// Unique identifier for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub i32);

impl From<i32> for AccountId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of account product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountType {
    SavingsAccount,
    Loan,
    CreditCard,
}

impl AccountType {
    /// Variants in ordinal order
    pub const ALL: [AccountType; 3] = [
        AccountType::SavingsAccount,
        AccountType::Loan,
        AccountType::CreditCard,
    ];
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::SavingsAccount => write!(f, "SavingsAccount"),
            AccountType::Loan => write!(f, "Loan"),
            AccountType::CreditCard => write!(f, "CreditCard"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "savingsaccount" => Ok(AccountType::SavingsAccount),
            "loan" => Ok(AccountType::Loan),
            "creditcard" => Ok(AccountType::CreditCard),
            _ => Err(format!("Unknown account type: {}", s)),
        }
    }
}

/// Accepts the variant name (any case) or its ordinal
impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccountTypeVisitor;

        impl<'de> Visitor<'de> for AccountTypeVisitor {
            type Value = AccountType;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an account type name or ordinal")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AccountType, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<AccountType, E> {
                usize::try_from(v)
                    .ok()
                    .and_then(|i| AccountType::ALL.get(i).copied())
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
            }
        }

        deserializer.deserialize_any(AccountTypeVisitor)
    }
}

/// A persisted bank account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub is_active: bool,
    pub client_id: ClientId,
}

/// Data needed to create or overwrite an account
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub is_active: bool,
    pub client_id: ClientId,
}

impl NewAccount {
    /// Attach an identifier, producing the persisted shape
    pub fn with_id(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            account_type: self.account_type,
            balance: self.balance,
            is_active: self.is_active,
            client_id: self.client_id,
        }
    }
}
