//! Transport shapes
//!
//! The JSON bodies exchanged over HTTP. Field names are camelCase and the
//! client email travels as `mail`. PascalCase keys and numeric enum values
//! are accepted on input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AccountType, ClientType};

/// Account as seen by API consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Ignored on input; assigned by the store
    #[serde(default, alias = "Id")]
    pub id: i32,
    /// Required; `null` or blank is rejected by validation
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(rename = "type", alias = "Type")]
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float", alias = "Balance")]
    pub balance: Decimal,
    #[serde(alias = "IsActive")]
    pub is_active: bool,
    #[serde(alias = "ClientId")]
    pub client_id: i32,
}

/// Client as seen by API consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "type", alias = "Type")]
    pub client_type: ClientType,
    /// Stored as the client's email
    #[serde(default, alias = "Mail")]
    pub mail: Option<String>,
    #[serde(alias = "AddressId")]
    pub address_id: i32,
}
