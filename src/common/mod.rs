// Common module - shared types and utilities for the API

pub mod alerts;
pub mod config;
pub mod error;
pub mod migrations;
pub mod state;

// Re-export commonly used types for convenience
pub use alerts::HeaderUtil;
pub use config::{AppConfig, StoreBackend};
pub use error::ApiError;
pub use state::AppState;
