//! Domain value objects and types.
//!
//! This module contains the validated scalar fields a contact is built from:
//! names, phone numbers, and birthdays. Each value object validates at
//! construction time, so an invalid phone or birthday can never be
//! represented in the system. Changing a field means constructing a new
//! value and replacing the old one.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

use std::fmt;

/// A validated scalar value held by a record.
///
/// Every field renders as its underlying string through `Display`.
pub trait Field: fmt::Display {
    /// Get the underlying value.
    fn value(&self) -> &str;
}
