// src/common/config.rs
//! Runtime configuration read from the environment

use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://candidat_api.db";
const DEFAULT_APP_NAME: &str = "testifyApp";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080,http://localhost:9000";

/// Which persistence adapter backs the candidat store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub store_backend: StoreBackend,
    pub app_name: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or unparsable
    /// values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{}, falling back to sqlite", e);
                StoreBackend::Sqlite
            }),
            None => StoreBackend::Sqlite,
        };

        let app_name = lookup("APP_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = lookup("RESET_DB")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            database_url,
            store_backend,
            app_name,
            port,
            cors_origins,
            reset_db,
        }
    }
}
