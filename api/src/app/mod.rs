//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between transport DTOs, domain entities and ports.

pub mod account_service;
pub mod client_service;
pub mod dto;
pub mod mapping;

pub use account_service::AccountService;
pub use client_service::ClientService;
pub use dto::{AccountDto, ClientDto};
