//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of unique phones, and an optional
/// birthday.
///
/// No two phones in a record share a value. All phone mutation goes through
/// the methods below so the invariant holds after every call, including
/// failed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Wire shape of a record before the phone invariant is re-checked.
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = AddressBookError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let mut record = Record::new(stored.name.into_inner());
        for phone in stored.phones {
            record.push_phone(phone)?;
        }
        record.birthday = stored.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with initial phones and an optional birthday.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidValue` for a malformed phone or birthday and with
    /// `DuplicatePhone` if the same number is listed twice.
    pub fn with_details<I, S>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
    ) -> AddressBookResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::new(name);
        for phone in phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday)?;
        }
        Ok(record)
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The record's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The record's birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: impl Into<String>) -> AddressBookResult<()> {
        let phone = Phone::new(number)?;
        self.push_phone(phone)
    }

    fn push_phone(&mut self, phone: Phone) -> AddressBookResult<()> {
        if self.phones.contains(&phone) {
            return Err(AddressBookError::DuplicatePhone(phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `old` is not in the record
    /// - `InvalidValue` if `new` is not a valid phone
    /// - `DuplicatePhone` if `new` is already in the record
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> AddressBookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| AddressBookError::NotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;
        if self.phones.contains(&replacement) {
            return Err(AddressBookError::DuplicatePhone(replacement.into_inner()));
        }

        tracing::debug!(name = %self.name, old, new = %replacement, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Remove a phone by value.
    pub fn remove_phone(&mut self, number: &str) -> AddressBookResult<Phone> {
        let index = self
            .position_of(number)
            .ok_or_else(|| AddressBookError::NotFound(number.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> AddressBookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Remove the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today until the next birthday, or `None` without a birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// A birthday falling on `today` yields 0. Feb 29 birthdays are counted
    /// to Feb 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.in_year(today.year())?;
        if next < today {
            next = birthday.in_year(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn john() -> Record {
        Record::with_details("John Doe", ["1234567890"], Some("1990-05-15")).unwrap()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John Doe");
        assert_eq!(record.name().as_str(), "John Doe");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_with_details_rejects_duplicates_and_bad_values() {
        let dup = Record::with_details("A", ["1234567890", "1234567890"], None);
        assert!(matches!(dup, Err(AddressBookError::DuplicatePhone(_))));

        let bad_phone = Record::with_details("A", ["12"], None);
        assert!(matches!(bad_phone, Err(AddressBookError::InvalidValue(_))));

        let bad_birthday = Record::with_details("A", Vec::<String>::new(), Some("05/15/1990"));
        assert!(matches!(bad_birthday, Err(AddressBookError::InvalidValue(_))));
    }

    #[test]
    fn test_add_phone_twice_fails_and_keeps_length() {
        let mut record = john();
        let result = record.add_phone("1234567890");
        assert!(matches!(result, Err(AddressBookError::DuplicatePhone(_))));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_untouched() {
        let mut record = john();
        assert!(record.add_phone("abc").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        assert_eq!(
            record.find_phone("1234567890").map(Phone::as_str),
            Some("1234567890")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record =
            Record::with_details("A", ["1111111111", "2222222222", "3333333333"], None).unwrap();
        record.edit_phone("2222222222", "9999999999").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "9999999999", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_then_find() {
        let mut record = john();
        record.edit_phone("1234567890", "9999999999").unwrap();
        assert!(record.find_phone("1234567890").is_none());
        assert!(record.find_phone("9999999999").is_some());
    }

    #[test]
    fn test_edit_missing_phone_is_not_found() {
        let mut record = john();
        let before = record.clone();
        let result = record.edit_phone("0000000000", "9999999999");
        assert!(matches!(result, Err(AddressBookError::NotFound(_))));
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_to_existing_is_duplicate() {
        let mut record = Record::with_details("A", ["1111111111", "2222222222"], None).unwrap();
        let result = record.edit_phone("1111111111", "2222222222");
        assert!(matches!(result, Err(AddressBookError::DuplicatePhone(_))));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_to_invalid_value() {
        let mut record = john();
        let result = record.edit_phone("1234567890", "12");
        assert!(matches!(result, Err(AddressBookError::InvalidValue(_))));
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert!(record.phones().is_empty());

        let result = record.remove_phone("1234567890");
        assert!(matches!(result, Err(AddressBookError::NotFound(_))));
    }

    #[test]
    fn test_set_and_clear_birthday() {
        let mut record = Record::new("A");
        assert!(record.set_birthday("2001-13-01").is_err());
        assert!(record.birthday().is_none());

        record.set_birthday("2001-12-01").unwrap();
        assert_eq!(record.birthday().map(Birthday::as_str), Some("2001-12-01"));

        record.clear_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("A");
        assert_eq!(record.days_to_birthday(), None);
        assert_eq!(record.days_to_birthday_from(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let record = john();
        assert_eq!(record.days_to_birthday_from(date(2025, 5, 10)), Some(5));
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = john();
        assert_eq!(record.days_to_birthday_from(date(2025, 5, 15)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_already_passed_rolls_over() {
        let record = john();
        // 2025-05-16 -> 2026-05-15
        assert_eq!(record.days_to_birthday_from(date(2025, 5, 16)), Some(364));
    }

    #[test]
    fn test_days_to_birthday_is_within_a_year() {
        let record = john();
        let days = record.days_to_birthday().unwrap();
        assert!((0..=365).contains(&days));
    }

    #[test]
    fn test_leap_day_birthday() {
        let record = Record::with_details("Leap", Vec::<String>::new(), Some("2000-02-29")).unwrap();
        // Common year: observed on Feb 28.
        assert_eq!(record.days_to_birthday_from(date(2023, 2, 1)), Some(27));
        assert_eq!(record.days_to_birthday_from(date(2023, 2, 28)), Some(0));
        // Leap year: the real date.
        assert_eq!(record.days_to_birthday_from(date(2024, 2, 1)), Some(28));
        // Passed in 2023, next is 2024-02-29.
        assert_eq!(record.days_to_birthday_from(date(2023, 3, 1)), Some(365));
    }

    #[test]
    fn test_display() {
        let mut record = john();
        assert_eq!(
            record.to_string(),
            "Contact name: John Doe, phones: 1234567890, birthday: 1990-05-15"
        );

        record.add_phone("5555555555").unwrap();
        record.clear_birthday();
        assert_eq!(
            record.to_string(),
            "Contact name: John Doe, phones: 1234567890; 5555555555, birthday: None"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let record = john();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_phones() {
        let json = r#"{"name":"A","phones":["1234567890","1234567890"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let record: Record = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }
}
