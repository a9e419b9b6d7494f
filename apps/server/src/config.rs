//! Configuration management for the petclinic server

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection URL. When unset, vets are served from the
    /// seeded in-memory repository.
    /// Environment variable: `PETCLINIC__DATABASE__URL` (or `DATABASE_URL`)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_pool_min_size")]
    pub pool_min_size: u32,
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
    #[serde(default = "default_pool_timeout")]
    pub pool_timeout_seconds: u64,
    /// Apply the bundled schema and seed data at startup. Default: true
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            pool_min_size: default_pool_min_size(),
            pool_max_size: default_pool_max_size(),
            pool_timeout_seconds: default_pool_timeout(),
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Number of vets shown per page on `/vets.html`. Default: 5
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub file_enabled: bool,
    #[serde(default = "default_log_directory")]
    pub file_directory: String,
    #[serde(default = "default_log_file_prefix")]
    pub file_prefix: String,
    /// One of `minutely`, `hourly`, `daily`, `never`
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_log_directory(),
            file_prefix: default_log_file_prefix(),
            file_rotation: default_log_rotation(),
        }
    }
}

pub(crate) const LOG_ROTATIONS: &[&str] = &["minutely", "hourly", "daily", "never"];

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_pool_min_size() -> u32 {
    1
}

fn default_pool_max_size() -> u32 {
    10
}

fn default_pool_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "./logs".to_string()
}

fn default_log_file_prefix() -> String {
    "petclinic".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration from environment and config files
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("database.pool_min_size", default_pool_min_size())?
            .set_default("database.pool_max_size", default_pool_max_size())?
            .set_default("database.pool_timeout_seconds", default_pool_timeout())?
            .set_default("database.run_migrations", default_true())?
            .set_default("web.page_size", default_page_size() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("logging.file_enabled", false)?
            .set_default("logging.file_directory", default_log_directory())?
            .set_default("logging.file_prefix", default_log_file_prefix())?
            .set_default("logging.file_rotation", default_log_rotation())?
            .add_source(config::File::with_name("config").required(false))
            // Example: PETCLINIC__WEB__PAGE_SIZE=10 -> config.web.page_size
            .add_source(
                config::Environment::with_prefix("PETCLINIC")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Self = config.try_deserialize()?;

        if std::env::var("PETCLINIC__DATABASE__URL").is_err() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                config.database.url = Some(url);
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.web.page_size == 0 {
            return Err("web.page_size must be > 0".to_string());
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be > 0".to_string());
        }
        if self.database.pool_max_size < self.database.pool_min_size {
            return Err(
                "database.pool_max_size must be >= database.pool_min_size".to_string(),
            );
        }
        if !LOG_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                LOG_ROTATIONS.join(", "),
                self.logging.file_rotation
            ));
        }
        Ok(())
    }
}
