//! Address Book - a single-user contact book with validated fields and file
//! persistence.
//!
//! Contacts are stored in memory while the program runs and written to disk
//! when the user exits.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The `Record` type for a single contact
//! - **matching**: Name/phone substring matching used by search
//! - **storage**: Persistence seam and the JSON file implementation
//! - **address_book**: The in-memory store with find/add/delete/batching
//! - **cli**: Command parsing and dispatch for the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod address_book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod storage;

pub use address_book::{AddressBook, RecordBatches};
pub use cli::{Command, Controller, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, StorageError};
pub use matching::{MatchType, RecordMatch, RecordMatcher};
pub use models::Record;
pub use storage::{JsonFileStorage, Snapshot, Storage};
