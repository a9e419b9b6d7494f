//! Shared application state

use crate::{
    config::Config,
    db::{InMemoryVetRepository, PostgresVetRepository, VetRepository},
    services::VetService,
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    /// Read vets from Postgres (`database.url`).
    Postgres,
    /// Serve the seeded reference vets from memory.
    InMemory,
}

impl RepositoryKind {
    pub fn from_config(config: &Config) -> Self {
        match config.database.url.as_deref() {
            Some(url) if !url.trim().is_empty() => RepositoryKind::Postgres,
            _ => RepositoryKind::InMemory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    pub run_migrations: bool,
    pub repository: RepositoryKind,
}

impl AppStateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            run_migrations: config.database.run_migrations,
            repository: RepositoryKind::from_config(config),
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub vet_service: Arc<VetService>,
}

impl AppState {
    /// Initialize the application state, picking the repository from config
    pub async fn new(config: Config) -> Result<Self> {
        let options = AppStateOptions::from_config(&config);
        Self::new_with_options(config, options).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!(repository = ?options.repository, "Initializing application state...");

        let vet_repository: Arc<dyn VetRepository> = match options.repository {
            RepositoryKind::Postgres => {
                let db_pool = create_db_pool(&config).await?;

                if options.run_migrations {
                    tracing::info!("Running database migrations...");
                    sqlx::migrate!("./migrations").run(&db_pool).await?;
                }

                Arc::new(PostgresVetRepository::new(db_pool))
            }
            RepositoryKind::InMemory => {
                let repo = InMemoryVetRepository::seeded();
                tracing::info!(vets = repo.len(), "Using in-memory vet repository");
                Arc::new(repo)
            }
        };

        let state = Self::with_repository(config, vet_repository);
        tracing::info!("Application state initialized successfully");
        Ok(state)
    }

    /// Builds state around an already constructed repository
    pub fn with_repository(config: Config, vet_repository: Arc<dyn VetRepository>) -> Self {
        let vet_service = Arc::new(VetService::new(vet_repository, config.web.page_size));

        Self {
            config: Arc::new(config),
            vet_service,
        }
    }
}

async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| crate::Error::Internal("database.url is not set".to_string()))?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .connect(url)
        .await
        .map_err(crate::Error::Database)?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
