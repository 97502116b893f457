//! Error types for configuration and snapshot loading.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot io: {0}")] Io(#[from] std::io::Error),
    #[error("snapshot json: {0}")] Json(#[from] serde_json::Error),
    #[error("duplicate {table} row for key {key} in {contract}")] DuplicateKey { contract: String, table: &'static str, key: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)] Load(#[from] config::ConfigError),
}
