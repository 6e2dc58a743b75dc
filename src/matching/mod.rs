//! Matching utilities for record lookup.
//!
//! This module provides the substring matching behind
//! [`AddressBook::find`](crate::AddressBook::find): case-insensitive on
//! names, case-sensitive on phone numbers.

pub mod record_matcher;

pub use record_matcher::{MatchType, RecordMatch, RecordMatcher};
