use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    #[error("failed to read storage key {key}: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("failed to write storage key {key}: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("malformed record at {key}: {reason}")]
    MalformedRecord { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
