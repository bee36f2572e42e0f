//! Client domain entity
//!
//! A bank customer, either a private person or a business.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a postal address record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub i32);

impl From<i32> for AddressId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Client segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClientType {
    Residential,
    Business,
}

impl ClientType {
    pub const ALL: [ClientType; 2] = [ClientType::Residential, ClientType::Business];
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientType::Residential => write!(f, "Residential"),
            ClientType::Business => write!(f, "Business"),
        }
    }
}

impl std::str::FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residential" => Ok(ClientType::Residential),
            "business" => Ok(ClientType::Business),
            _ => Err(format!("Unknown client type: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for ClientType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClientTypeVisitor;

        impl<'de> Visitor<'de> for ClientTypeVisitor {
            type Value = ClientType;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a client type name or ordinal")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ClientType, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ClientType, E> {
                usize::try_from(v)
                    .ok()
                    .and_then(|i| ClientType::ALL.get(i).copied())
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
            }
        }

        deserializer.deserialize_any(ClientTypeVisitor)
    }
}

/// A persisted client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone_number: Option<String>,
    pub client_type: ClientType,
    pub email: Option<String>,
    pub address_id: AddressId,
}

/// Data needed to create or overwrite a client
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub phone_number: Option<String>,
    pub client_type: ClientType,
    pub email: Option<String>,
    pub address_id: AddressId,
}

impl NewClient {
    /// Attach an identifier, producing the persisted shape
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            phone_number: self.phone_number,
            client_type: self.client_type,
            email: self.email,
            address_id: self.address_id,
        }
    }
}
