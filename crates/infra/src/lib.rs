//! Infrastructure layer: persistence and configuration.

pub mod config;
pub mod state_store;

pub use catering_observability::LogFormat;
pub use config::AppConfig;
pub use state_store::{InMemoryStateStore, JsonFileStateStore, StateStore, StoreError};
