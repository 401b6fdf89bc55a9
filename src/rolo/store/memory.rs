use super::{ContactMap, Persistence};
use crate::error::{Result, RoloError};
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the value's lifetime.
///
/// Uses interior mutability since rolo is single-threaded and the
/// `Persistence` trait takes `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: RefCell<ContactMap>,
    notes: RefCell<Vec<String>>,
    contact_saves: Cell<usize>,
    note_saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail until turned off again.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful contact saves so far.
    pub fn contact_saves(&self) -> usize {
        self.contact_saves.get()
    }

    /// Number of successful note saves so far.
    pub fn note_saves(&self) -> usize {
        self.note_saves.get()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RoloError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        Ok(())
    }
}

impl Persistence for InMemoryStore {
    fn load_contacts(&self) -> Result<ContactMap> {
        Ok(self.contacts.borrow().clone())
    }

    fn save_contacts(&self, contacts: &ContactMap) -> Result<()> {
        self.check_writable()?;
        *self.contacts.borrow_mut() = contacts.clone();
        self.contact_saves.set(self.contact_saves.get() + 1);
        Ok(())
    }

    fn load_notes(&self) -> Result<Vec<String>> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &[String]) -> Result<()> {
        self.check_writable()?;
        *self.notes.borrow_mut() = notes.to_vec();
        self.note_saves.set(self.note_saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Contact;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(self, name: &str, birthday: (i32, u32, u32)) -> Self {
            let (y, m, d) = birthday;
            let contact = Contact::new(
                format!("{} Street 1", name),
                "1234567890".to_string(),
                format!("{}@example.com", name.to_lowercase()),
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            );
            self.store
                .contacts
                .borrow_mut()
                .insert(name.to_string(), contact);
            self
        }

        pub fn with_notes(self, notes: &[&str]) -> Self {
            self.store
                .notes
                .borrow_mut()
                .extend(notes.iter().map(|n| n.to_string()));
            self
        }
    }
}
