//! Command dispatch over an [`AddressBook`].

use super::commands::{Command, USAGE};
use crate::address_book::AddressBook;
use crate::error::AddressBookResult;
use crate::models::Record;

/// Message printed by `search` when nothing matches.
pub const NO_RESULTS: &str = "No matching records found.";

/// Text produced by one command, and whether the loop should stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Lines to print, in order
    pub lines: Vec<String>,

    /// Whether the command loop should terminate
    pub exit: bool,
}

impl Reply {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            exit: false,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

/// Runs commands against an address book and renders their results.
///
/// Data-layer errors are returned from [`Controller::execute`] unchanged;
/// [`Controller::handle_line`] turns them into an `Error: ...` line.
#[derive(Debug)]
pub struct Controller {
    book: AddressBook,
    page_size: usize,
}

impl Controller {
    /// Create a controller that prints `show` output in batches of `page_size`.
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self { book, page_size }
    }

    /// The address book being driven.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line, rendering any failure as text.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::default(),
            Err(e) => return Reply::say(e.to_string()),
        };

        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                Reply::say(format!("Error: {}", e))
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> AddressBookResult<Reply> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Search(query) => Ok(self.search(&query)),
            Command::Add { name, phones } => {
                let record = Record::with_details(name.as_str(), phones, None)?;
                let verb = if self.book.get(&name).is_some() {
                    "replaced"
                } else {
                    "added"
                };
                let line = format!("Contact {}: {}", verb, record);
                self.book.add_record(record);
                Ok(Reply::say(line))
            }
            Command::AddPhone { name, phone } => self.with_record(&name, |record| {
                record.add_phone(phone)?;
                Ok(format!("Phone added: {}", record))
            }),
            Command::EditPhone { name, old, new } => self.with_record(&name, |record| {
                record.edit_phone(&old, new)?;
                Ok(format!("Phone updated: {}", record))
            }),
            Command::RemovePhone { name, phone } => self.with_record(&name, |record| {
                record.remove_phone(&phone)?;
                Ok(format!("Phone removed: {}", record))
            }),
            Command::Birthday { name, birthday } => self.with_record(&name, |record| {
                record.set_birthday(birthday)?;
                Ok(match record.days_to_birthday() {
                    Some(days) => format!("Birthday set: {} (in {} days)", record, days),
                    None => format!("Birthday set: {}", record),
                })
            }),
            Command::Delete(name) => Ok(match self.book.delete(&name) {
                Some(_) => Reply::say(format!("Contact deleted: {}", name)),
                None => Reply::say(format!("Contact not found: {}", name)),
            }),
            Command::Show => Ok(self.show()),
            Command::Help => Ok(Reply::lines(
                USAGE.iter().map(|line| line.to_string()).collect(),
            )),
            Command::Exit => {
                self.book.dump()?;
                Ok(Reply {
                    lines: vec!["Good bye!".to_string()],
                    exit: true,
                })
            }
        }
    }

    fn search(&self, query: &str) -> Reply {
        let results = self.book.find(query);
        if results.is_empty() {
            return Reply::say(NO_RESULTS);
        }
        Reply::lines(results.iter().map(|record| record.to_string()).collect())
    }

    fn show(&self) -> Reply {
        if self.book.is_empty() {
            return Reply::say("Address book is empty.");
        }

        let mut lines = Vec::new();
        for (page, batch) in self.book.iterator(self.page_size).enumerate() {
            lines.push(format!("--- Page {} ---", page + 1));
            for record in batch {
                match record.days_to_birthday() {
                    Some(days) => lines.push(format!("{} (birthday in {} days)", record, days)),
                    None => lines.push(record.to_string()),
                }
            }
        }
        Reply::lines(lines)
    }

    fn with_record<F>(&mut self, name: &str, action: F) -> AddressBookResult<Reply>
    where
        F: FnOnce(&mut Record) -> AddressBookResult<String>,
    {
        match self.book.get_mut(name) {
            Some(record) => action(record).map(Reply::say),
            None => Ok(Reply::say(format!("Contact not found: {}", name))),
        }
    }
}
