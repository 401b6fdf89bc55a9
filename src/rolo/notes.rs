//! # Notebook
//!
//! An ordered list of one-line notes. Duplicates are allowed; a note has no
//! identity beyond its position (used by [`Notebook::edit`]) and its text
//! (used by [`Notebook::delete`] and [`Notebook::search`]).
//!
//! Notes are held without a line terminator. The file store adds one per
//! note on write, so any line break inside the text would split the note on
//! the next load; [`Notebook::add`] and [`Notebook::edit`] fold them into
//! spaces.

use crate::error::{Result, RoloError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<String>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<String>) -> Self {
        Self { notes }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn add(&mut self, text: &str) {
        self.notes.push(single_line(text));
    }

    /// Case-insensitive substring match, in notebook order.
    pub fn search(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Removes the first note whose trimmed text equals `text`.
    ///
    /// With duplicate notes only the earliest one goes.
    pub fn delete(&mut self, text: &str) -> bool {
        let wanted = text.trim();
        match self.notes.iter().position(|note| note.trim() == wanted) {
            Some(pos) => {
                self.notes.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn edit(&mut self, index: usize, text: &str) -> Result<()> {
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(RoloError::InvalidNoteIndex(index))?;
        *slot = single_line(text);
        Ok(())
    }
}

fn single_line(text: &str) -> String {
    if text.contains(['\n', '\r']) {
        text.replace("\r\n", " ").replace(['\n', '\r'], " ")
    } else {
        text.to_string()
    }
}
