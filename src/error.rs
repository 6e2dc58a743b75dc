//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// The phone number is already present in the record
    #[error("Phone number already exists in the record: {0}")]
    DuplicatePhone(String),

    /// The phone number is not present in the record
    #[error("Phone number not found in record: {0}")]
    NotFound(String),

    /// Loading or saving the backing store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted blob could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
