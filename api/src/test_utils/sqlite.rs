//! Ephemeral SQLite databases
//!
//! An in-memory SQLite database only lives as long as the connection that
//! opened it. The factory therefore opens exactly one connection on first use,
//! creates and seeds the schema on it, and hands out handles that all share
//! that connection. Each test owns its own factory, so data never leaks
//! between tests.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::adapters::ensure_created;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Longer than any test run; the pool must never recycle its one connection
const CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Default)]
pub struct SqliteContextFactory {
    connection: Option<DatabaseConnection>,
}

impl SqliteContextFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a handle to the factory's database, creating it on first call
    pub async fn create_context(&mut self) -> Result<DatabaseConnection, DbErr> {
        if let Some(connection) = &self.connection {
            return Ok(connection.clone());
        }

        let connection = Database::connect(connect_options()).await?;
        ensure_created(&connection).await?;

        self.connection = Some(connection.clone());
        Ok(connection)
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Close the shared connection. Safe to call more than once or before
    /// the first `create_context`.
    pub async fn dispose(&mut self) -> Result<(), DbErr> {
        match self.connection.take() {
            Some(connection) => connection.close().await,
            None => Ok(()),
        }
    }
}

/// The database is dropped when its last connection closes, so the pool
/// holds exactly one connection and never retires it.
fn connect_options() -> ConnectOptions {
    let mut options = ConnectOptions::new(IN_MEMORY_URL);
    options
        .max_connections(1)
        .min_connections(1)
        .max_lifetime(CONNECTION_LIFETIME)
        .idle_timeout(CONNECTION_LIFETIME)
        .sqlx_logging(false);
    options
}

impl Drop for SqliteContextFactory {
    fn drop(&mut self) {
        if self.connection.take().is_some() {
            tracing::debug!("Released in-memory test database");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::entity::accounts;

    #[test]
    fn pool_never_recycles_its_connection() {
        let options = connect_options();

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert!(options.get_max_lifetime().unwrap() >= Duration::from_secs(60 * 60 * 24));
        assert!(options.get_idle_timeout().unwrap() >= Duration::from_secs(60 * 60 * 24));
    }

    #[tokio::test]
    async fn first_context_is_seeded() {
        let mut factory = SqliteContextFactory::new();
        let db = factory.create_context().await.unwrap();

        let count = accounts::Entity::find().count(&db).await.unwrap();

        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn contexts_share_one_database() {
        let mut factory = SqliteContextFactory::new();
        let first = factory.create_context().await.unwrap();
        let second = factory.create_context().await.unwrap();

        accounts::Entity::delete_by_id(1).exec(&first).await.unwrap();

        let remaining = accounts::Entity::find().count(&second).await.unwrap();
        assert_eq!(remaining, 4);
    }

    #[tokio::test]
    async fn factories_are_isolated() {
        let mut dirty = SqliteContextFactory::new();
        let db = dirty.create_context().await.unwrap();
        accounts::Entity::delete_many().exec(&db).await.unwrap();

        let mut clean = SqliteContextFactory::new();
        let db = clean.create_context().await.unwrap();

        assert_eq!(accounts::Entity::find().count(&db).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn dispose_before_use_is_noop() {
        let mut factory = SqliteContextFactory::new();

        factory.dispose().await.unwrap();

        assert!(!factory.is_open());
    }

    #[tokio::test]
    async fn dispose_twice_is_noop() {
        let mut factory = SqliteContextFactory::new();
        factory.create_context().await.unwrap();

        factory.dispose().await.unwrap();
        factory.dispose().await.unwrap();

        assert!(!factory.is_open());
    }
}
