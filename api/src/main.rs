//! Bank API Server
//!
//! CRUD API over bank accounts and clients.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::{SqlAccountRepository, SqlClientRepository};
use app::{AccountService, ClientService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<SqlAccountRepository>>,
    pub client_service: Arc<ClientService<SqlClientRepository>>,
}

impl AppState {
    /// Wire repositories and services over one database handle
    pub fn new(db: DatabaseConnection) -> Self {
        let account_repo = Arc::new(SqlAccountRepository::new(db.clone()));
        let client_repo = Arc::new(SqlClientRepository::new(db));

        Self {
            account_service: Arc::new(AccountService::new(account_repo)),
            client_service: Arc::new(ClientService::new(client_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    let accounts: Router<AppState> = Router::new()
        .route("/Get", get(handlers::get_accounts))
        .route("/Get/:id", get(handlers::get_account))
        .route("/NewAccount", post(handlers::new_account))
        .route("/UpdateAccount/:id", put(handlers::update_account))
        .route("/RemoveAccount/:id", delete(handlers::remove_account));

    let clients: Router<AppState> = Router::new()
        .route("/Get", get(handlers::get_clients))
        .route("/Get/:id", get(handlers::get_client))
        .route("/NewClient", post(handlers::new_client))
        .route("/UpdateClient/:id", put(handlers::update_client))
        .route("/RemoveClient/:id", delete(handlers::remove_client));

    Router::new()
        .route("/health", get(health))
        .nest("/api/Accounts", accounts)
        .nest("/api/Clients", clients)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bank API...");

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.ensure_schema {
        adapters::ensure_created(&db)
            .await
            .context("Failed to create database schema")?;
    }

    let state = AppState::new(db);
    tracing::info!(
        accounts = state.account_service.count_accounts().await?,
        clients = state.client_service.count_clients().await?,
        "Store ready"
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
