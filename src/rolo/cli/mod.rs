//! The interactive command loop.
//!
//! [`Repl`] reads one line at a time, parses it into a [`Command`], runs it
//! against the [`AssistantApi`] and prints the outcome. It stays in the
//! running state until `close`/`exit` or end of input.

mod parse;
mod print;

use parse::Command;
use print::{print_birthdays, print_contacts, print_messages, print_notes};
use rolo::api::{AssistantApi, CmdMessage, CmdResult};
use rolo::error::Result as RoloResult;
use rolo::store::Persistence;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "How can I help you?";
const GOODBYE: &str = "Good bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

/// Which collection a command's result lists, if any.
enum Listing {
    Nothing,
    Contacts,
    Birthdays,
    Notes,
}

pub struct Repl<S: Persistence> {
    api: AssistantApi<S>,
    color: bool,
}

impl<S: Persistence> Repl<S> {
    pub fn new(api: AssistantApi<S>, color: bool) -> Self {
        Self { api, color }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", WELCOME)?;

        // Lines that are not valid UTF-8 are decoded lossily.
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("end of input");
                writeln!(out)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line, out)? == State::Terminated {
                break;
            }
        }
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<State> {
        match Command::parse(line) {
            Ok(None) => Ok(State::Running),
            Ok(Some(command)) => self.execute(command, out),
            Err(e) => {
                log::debug!("rejected input {:?}: {:?}", line.trim(), e);
                writeln!(out, "{}", e)?;
                Ok(State::Running)
            }
        }
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<State> {
        let api = &mut self.api;
        let (outcome, listing): (RoloResult<CmdResult>, Listing) = match command {
            Command::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(State::Terminated);
            }
            Command::Hello => {
                writeln!(out, "{}", GREETING)?;
                return Ok(State::Running);
            }
            Command::AddContact {
                name,
                address,
                phone,
                email,
                birthday,
            } => (
                api.add_contact(&name, &address, &phone, &email, &birthday),
                Listing::Nothing,
            ),
            Command::SearchContact { query } => (api.search_contacts(&query), Listing::Contacts),
            Command::UpcomingBirthdays { days } => {
                (api.upcoming_birthdays(days), Listing::Birthdays)
            }
            Command::AddNote { text } => (api.add_note(&text), Listing::Nothing),
            Command::SearchNote { query } => (api.search_notes(&query), Listing::Notes),
            Command::DeleteContact { name } => (api.delete_contact(&name), Listing::Nothing),
            Command::DeleteNote { text } => (api.delete_note(&text), Listing::Nothing),
            Command::EditContact { name, field, value } => {
                (api.edit_contact(&name, &field, &value), Listing::Nothing)
            }
            Command::EditNote { index, text } => (api.edit_note(index, &text), Listing::Nothing),
        };

        match outcome {
            Ok(result) => {
                match listing {
                    Listing::Nothing => {}
                    Listing::Contacts => print_contacts(out, &result.listed_contacts)?,
                    Listing::Birthdays => print_birthdays(out, &result.upcoming_birthdays)?,
                    Listing::Notes => print_notes(out, &result.listed_notes)?,
                }
                print_messages(out, &result.messages, self.color)?;
            }
            Err(e) => print_messages(out, &[CmdMessage::error(e.to_string())], self.color)?,
        }
        Ok(State::Running)
    }
}
