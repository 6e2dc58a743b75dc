//! Parsing of command lines typed at the prompt.
//!
//! The first word selects the command. Names may contain spaces, so fixed
//! trailing arguments (phones, dates) are taken from the end of the line and
//! whatever remains in between is the name.

use thiserror::Error;

/// Usage lines shown by `help`, one per command.
pub const USAGE: &[&str] = &[
    "search <query>                    find contacts by name or phone",
    "add <name> [phone...]             add a contact, replacing one with the same name",
    "add-phone <name> <phone>          add a phone to a contact",
    "edit-phone <name> <old> <new>     replace a contact's phone",
    "remove-phone <name> <phone>       remove a phone from a contact",
    "birthday <name> <YYYY-MM-DD>      set a contact's birthday",
    "delete <name>                     delete a contact",
    "show                              list all contacts",
    "help                              show this help",
    "exit                              save and quit",
];

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add { name: String, phones: Vec<String> },
    AddPhone { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Birthday { name: String, birthday: String },
    Delete(String),
    Show,
    Help,
    Exit,
}

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Unknown command: {0}. Type 'help' to list commands.")]
    Unknown(String),

    /// The command is known but its arguments are missing
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match word.to_lowercase().as_str() {
            "search" => Command::Search(rest.to_string()),
            "add" => {
                let split = args
                    .iter()
                    .rposition(|arg| !arg.chars().all(|c| c.is_ascii_digit()))
                    .map_or(0, |last_name_word| last_name_word + 1);
                let (name, phones) = args.split_at(split);
                if name.is_empty() {
                    return Err(CommandError::Usage("add <name> [phone...]"));
                }
                Command::Add {
                    name: name.join(" "),
                    phones: phones.iter().map(|phone| phone.to_string()).collect(),
                }
            }
            "add-phone" => {
                let (name, [phone]) = split_trailing::<1>(&args)
                    .ok_or(CommandError::Usage("add-phone <name> <phone>"))?;
                Command::AddPhone { name, phone }
            }
            "edit-phone" => {
                let (name, [old, new]) = split_trailing::<2>(&args)
                    .ok_or(CommandError::Usage("edit-phone <name> <old> <new>"))?;
                Command::EditPhone { name, old, new }
            }
            "remove-phone" => {
                let (name, [phone]) = split_trailing::<1>(&args)
                    .ok_or(CommandError::Usage("remove-phone <name> <phone>"))?;
                Command::RemovePhone { name, phone }
            }
            "birthday" => {
                let (name, [birthday]) = split_trailing::<1>(&args)
                    .ok_or(CommandError::Usage("birthday <name> <YYYY-MM-DD>"))?;
                Command::Birthday { name, birthday }
            }
            "delete" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("delete <name>"));
                }
                Command::Delete(args.join(" "))
            }
            "show" => Command::Show,
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split `args` into a name (at least one word) and `N` trailing values.
fn split_trailing<const N: usize>(args: &[&str]) -> Option<(String, [String; N])> {
    if args.len() <= N {
        return None;
    }
    let (name, tail) = args.split_at(args.len() - N);
    let values: [String; N] = std::array::from_fn(|i| tail[i].to_string());
    Some((name.join(" "), values))
}
