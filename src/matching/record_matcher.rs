//! Substring matching of a query against records.
//!
//! Every match is reported separately: a record whose name matches and
//! whose two phones also match yields three results. Callers that want one
//! entry per record deduplicate themselves.

use crate::models::Record;

/// A record together with the reason it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch<'a> {
    /// The matched record
    pub record: &'a Record,

    /// What part of the record matched
    pub match_type: MatchType,
}

/// The part of a record that matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchType {
    /// The query is a case-insensitive substring of the name
    Name,

    /// The query is a substring of the phone at this position
    Phone(usize),
}

/// Matches a query against names and phones.
#[derive(Debug, Clone)]
pub struct RecordMatcher {
    query: String,
    query_lower: String,
}

impl RecordMatcher {
    /// Create a matcher for `query`.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            query_lower: query.to_lowercase(),
        }
    }

    /// All matches of this query within a single record, name first, then
    /// phones in order.
    pub fn match_record<'a>(&self, record: &'a Record) -> Vec<RecordMatch<'a>> {
        let mut matches = Vec::new();

        if self.matches_name(record.name().as_str()) {
            matches.push(RecordMatch {
                record,
                match_type: MatchType::Name,
            });
        }

        for (index, phone) in record.phones().iter().enumerate() {
            if phone.as_str().contains(self.query.as_str()) {
                matches.push(RecordMatch {
                    record,
                    match_type: MatchType::Phone(index),
                });
            }
        }

        matches
    }

    /// All matches across `records`, in record order.
    pub fn find_matches<'a, I>(&self, records: I) -> Vec<RecordMatch<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .flat_map(|record| self.match_record(record))
            .collect()
    }

    fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(self.query_lower.as_str())
    }
}
