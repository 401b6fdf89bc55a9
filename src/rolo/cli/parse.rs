//! Turns one input line into a [`Command`].
//!
//! The first whitespace-delimited token is the command name and is
//! lower-cased. Whatever follows is split on commas and each piece trimmed;
//! argument text is otherwise passed through untouched. Argument counts are
//! checked here, so a command that reaches the API is always well-formed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Exit,
    AddContact {
        name: String,
        address: String,
        phone: String,
        email: String,
        birthday: String,
    },
    SearchContact {
        query: String,
    },
    UpcomingBirthdays {
        days: u32,
    },
    AddNote {
        text: String,
    },
    SearchNote {
        query: String,
    },
    DeleteContact {
        name: String,
    },
    DeleteNote {
        text: String,
    },
    EditContact {
        name: String,
        field: String,
        value: String,
    },
    EditNote {
        index: usize,
        text: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid command.")]
    Unknown(String),
}

const USAGE_ADD_CONTACT: &str = "add_contact <name>, <address>, <phone>, <email>, <birthday>";
const USAGE_SEARCH_CONTACT: &str = "search_contact <query>";
const USAGE_UPCOMING: &str = "upcoming_birthdays <days>";
const USAGE_ADD_NOTE: &str = "add_note <note>";
const USAGE_SEARCH_NOTE: &str = "search_note <query>";
const USAGE_DELETE_CONTACT: &str = "delete_contact <name>";
const USAGE_DELETE_NOTE: &str = "delete_note <note>";
const USAGE_EDIT_CONTACT: &str = "edit_contact <name>, <field>, <value>";
const USAGE_EDIT_NOTE: &str = "edit_note <index>, <new_note>";

/// Splits a line into its lower-cased command token and trimmed arguments.
///
/// Returns `None` for a blank line.
pub fn split_input(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    };

    let args = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(|arg| arg.trim().to_string()).collect()
    };

    Some((command.to_lowercase(), args))
}

impl Command {
    /// Parses one input line. `Ok(None)` means the line was blank.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let Some((name, args)) = split_input(line) else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "close" | "exit" => Command::Exit,
            "hello" => Command::Hello,
            "add_contact" => {
                let [name, address, phone, email, birthday] =
                    take_args::<5>(args, USAGE_ADD_CONTACT)?;
                Command::AddContact {
                    name,
                    address,
                    phone,
                    email,
                    birthday,
                }
            }
            "search_contact" => {
                let [query] = take_args::<1>(args, USAGE_SEARCH_CONTACT)?;
                Command::SearchContact { query }
            }
            "upcoming_birthdays" => {
                let [days] = take_args::<1>(args, USAGE_UPCOMING)?;
                let days =
                    parse_number(&days, u32::MAX).ok_or(ParseError::Usage(USAGE_UPCOMING))?;
                Command::UpcomingBirthdays { days }
            }
            "add_note" => {
                let [text] = take_args::<1>(args, USAGE_ADD_NOTE)?;
                Command::AddNote { text }
            }
            "search_note" => {
                let [query] = take_args::<1>(args, USAGE_SEARCH_NOTE)?;
                Command::SearchNote { query }
            }
            "delete_contact" => {
                let [name] = take_args::<1>(args, USAGE_DELETE_CONTACT)?;
                Command::DeleteContact { name }
            }
            "delete_note" => {
                let [text] = take_args::<1>(args, USAGE_DELETE_NOTE)?;
                Command::DeleteNote { text }
            }
            "edit_contact" => {
                let [name, field, value] = take_args::<3>(args, USAGE_EDIT_CONTACT)?;
                Command::EditContact { name, field, value }
            }
            "edit_note" => {
                let [index, text] = take_args::<2>(args, USAGE_EDIT_NOTE)?;
                let index = parse_number(&index, usize::MAX)
                    .ok_or(ParseError::Usage(USAGE_EDIT_NOTE))?;
                Command::EditNote { index, text }
            }
            _ => return Err(ParseError::Unknown(name)),
        };

        Ok(Some(command))
    }
}

fn take_args<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> Result<[String; N], ParseError> {
    args.try_into().map_err(|_| ParseError::Usage(usage))
}

/// Accepts plain ASCII digit strings only: no sign, no spaces. Values too
/// large for `T` saturate to `max`.
fn parse_number<T: std::str::FromStr>(s: &str, max: T) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse().unwrap_or(max))
}
