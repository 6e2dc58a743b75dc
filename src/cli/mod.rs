//! Interactive command layer.
//!
//! [`Command`] parses a typed line and [`Controller`] runs it against an
//! address book. The binary in `main.rs` owns the read/print loop.

pub mod commands;
pub mod controller;

pub use commands::{Command, CommandError, USAGE};
pub use controller::{Controller, Reply, NO_RESULTS};
