//! # API Facade
//!
//! [`AssistantApi`] is the application state: the contact book, the notebook,
//! the configuration and the persistence backend they are saved through. It
//! is the single entry point for every operation the command loop offers.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to [`ContactBook`] and [`Notebook`]
//! - **Persists** the affected collection after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`), never strings on stdout
//!
//! ## Persistence Failures
//!
//! A failed save does not undo the mutation and is not returned as an error:
//! memory stays the source of truth for the running process. The failure is
//! logged, attached to the result as a warning message, and kept until
//! [`AssistantApi::take_persist_error`] collects it, for callers that need to
//! know the data did not reach disk.
//!
//! ## Generic Over Persistence
//!
//! - Production: `AssistantApi<FileStore>`
//! - Testing: `AssistantApi<InMemoryStore>`

use crate::config::RoloConfig;
use crate::contacts::ContactBook;
use crate::error::{Result, RoloError};
use crate::model::{ContactEntry, UpcomingBirthday};
use crate::notes::Notebook;
use crate::store::Persistence;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<ContactEntry>,
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
    pub listed_notes: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<ContactEntry>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_upcoming_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.upcoming_birthdays = birthdays;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<String>) -> Self {
        self.listed_notes = notes;
        self
    }
}

pub struct AssistantApi<S: Persistence> {
    store: S,
    config: RoloConfig,
    contacts: ContactBook,
    notes: Notebook,
    persist_error: Option<RoloError>,
}

impl<S: Persistence> AssistantApi<S> {
    /// Loads both collections from `store`.
    ///
    /// Missing data is an empty book; unreadable or corrupt data is an error,
    /// so a bad file is never silently replaced by an empty one.
    pub fn open(store: S, config: RoloConfig) -> Result<Self> {
        let contacts = ContactBook::from_map(store.load_contacts()?);
        let notes = Notebook::from_notes(store.load_notes()?);
        log::debug!(
            "opened with {} contacts and {} notes",
            contacts.len(),
            notes.len()
        );
        Ok(Self {
            store,
            config,
            contacts,
            notes,
            persist_error: None,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn notes(&self) -> &Notebook {
        &self.notes
    }

    /// The most recent save failure not yet collected, if any.
    pub fn take_persist_error(&mut self) -> Option<RoloError> {
        self.persist_error.take()
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        birthday: &str,
    ) -> Result<CmdResult> {
        self.contacts.add(name, address, phone, email, birthday)?;
        let mut result = CmdResult::default()
            .with_message(CmdMessage::success(format!("Contact {} added.", name)));
        self.persist_contacts(&mut result);
        Ok(result)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        Ok(CmdResult::default().with_listed_contacts(self.contacts.search(query)))
    }

    /// Birthdays within `days` days of the local date today.
    pub fn upcoming_birthdays(&self, days: u32) -> Result<CmdResult> {
        self.upcoming_birthdays_from(days, Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(&self, days: u32, today: NaiveDate) -> Result<CmdResult> {
        let upcoming = self
            .contacts
            .upcoming_birthdays(days, today, self.config.leap_day);
        Ok(CmdResult::default().with_upcoming_birthdays(upcoming))
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        if !self.contacts.delete(name) {
            return Err(RoloError::ContactNotFound(name.to_string()));
        }
        let mut result = CmdResult::default()
            .with_message(CmdMessage::success(format!("Contact {} deleted.", name)));
        self.persist_contacts(&mut result);
        Ok(result)
    }

    pub fn edit_contact(&mut self, name: &str, field: &str, value: &str) -> Result<CmdResult> {
        let field = self.contacts.edit(name, field, value)?;
        let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
            "Contact {} {} updated to {}.",
            name, field, value
        )));
        self.persist_contacts(&mut result);
        Ok(result)
    }

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        self.notes.add(text);
        let mut result = CmdResult::default().with_message(CmdMessage::success("Note added."));
        self.persist_notes(&mut result);
        Ok(result)
    }

    pub fn search_notes(&self, query: &str) -> Result<CmdResult> {
        Ok(CmdResult::default().with_listed_notes(self.notes.search(query)))
    }

    pub fn delete_note(&mut self, text: &str) -> Result<CmdResult> {
        if !self.notes.delete(text) {
            return Err(RoloError::NoteNotFound(text.to_string()));
        }
        let mut result = CmdResult::default().with_message(CmdMessage::success("Note deleted."));
        self.persist_notes(&mut result);
        Ok(result)
    }

    pub fn edit_note(&mut self, index: usize, text: &str) -> Result<CmdResult> {
        self.notes.edit(index, text)?;
        let mut result = CmdResult::default().with_message(CmdMessage::success("Note updated."));
        self.persist_notes(&mut result);
        Ok(result)
    }

    fn persist_contacts(&mut self, result: &mut CmdResult) {
        if let Err(e) = self.store.save_contacts(self.contacts.as_map()) {
            log::error!("failed to save contacts: {}", e);
            result.add_message(CmdMessage::warning(format!("Error saving data: {}", e)));
            self.persist_error = Some(e);
        }
    }

    fn persist_notes(&mut self, result: &mut CmdResult) {
        if let Err(e) = self.store.save_notes(self.notes.as_slice()) {
            log::error!("failed to save notes: {}", e);
            result.add_message(CmdMessage::warning(format!("Error saving notes: {}", e)));
            self.persist_error = Some(e);
        }
    }
}
