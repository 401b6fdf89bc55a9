//! # Persistence Layer
//!
//! The [`Persistence`] trait is the seam between the in-memory books and
//! wherever their data lives. The API is generic over it so tests can run
//! against [`memory::InMemoryStore`] without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with optional
//!   write-failure simulation
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── contacts.json   # Whole name -> contact map (JSON object)
//! ├── notes.txt       # One note per line, in order
//! └── config.json     # Optional settings (see config.rs)
//! ```
//!
//! Both files are rewritten in full on every save. A missing file loads as
//! an empty collection.

use crate::error::Result;
use crate::model::Contact;
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

pub type ContactMap = BTreeMap<String, Contact>;

/// Abstract interface for loading and saving the two collections.
pub trait Persistence {
    /// Load the contact map. A store with no contacts yet returns an empty map.
    fn load_contacts(&self) -> Result<ContactMap>;

    /// Replace the stored contact map with `contacts`.
    fn save_contacts(&self, contacts: &ContactMap) -> Result<()>;

    /// Load notes in order. A store with no notes yet returns an empty list.
    fn load_notes(&self) -> Result<Vec<String>>;

    /// Replace the stored notes with `notes`.
    fn save_notes(&self, notes: &[String]) -> Result<()>;
}
