//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same adapters run
//! against PostgreSQL in production and in-memory SQLite in tests.

pub mod account_repo;
pub mod client_repo;
pub mod schema;


pub use account_repo::SqlAccountRepository;
pub use client_repo::SqlClientRepository;
pub use schema::ensure_created;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Classify a write failure. A dangling foreign key is the caller's fault.
pub(crate) fn write_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Rejected write: {}", detail);
            DomainError::Validation("Referenced record does not exist".to_string())
        }
        _ => DomainError::Database(err.to_string()),
    }
}
