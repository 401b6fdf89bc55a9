use super::{ContactMap, Persistence};
use crate::error::{Result, RoloError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONTACTS_FILENAME: &str = "contacts.json";
pub const NOTES_FILENAME: &str = "notes.txt";

/// File-backed store rooted at a data directory.
///
/// The file names inside the directory are fixed. Writes go straight to the
/// target file, so a crash mid-write can truncate it.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(CONTACTS_FILENAME)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RoloError::Io)?;
        }
        Ok(())
    }
}

/// Reads a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RoloError::Io(e)),
    }
}

impl Persistence for FileStore {
    fn load_contacts(&self) -> Result<ContactMap> {
        let path = self.contacts_path();
        let Some(content) = read_optional(&path)? else {
            log::debug!("no contacts file at {}, starting empty", path.display());
            return Ok(ContactMap::new());
        };
        let contacts: ContactMap =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        log::debug!("loaded {} contacts from {}", contacts.len(), path.display());
        Ok(contacts)
    }

    fn save_contacts(&self, contacts: &ContactMap) -> Result<()> {
        self.ensure_dir()?;
        let path = self.contacts_path();
        let content = serde_json::to_string_pretty(contacts).map_err(RoloError::Serialization)?;
        fs::write(&path, content).map_err(RoloError::Io)?;
        log::debug!("saved {} contacts to {}", contacts.len(), path.display());
        Ok(())
    }

    fn load_notes(&self) -> Result<Vec<String>> {
        let path = self.notes_path();
        let Some(content) = read_optional(&path)? else {
            log::debug!("no notes file at {}, starting empty", path.display());
            return Ok(Vec::new());
        };
        // `lines` strips "\n" and "\r\n" alike.
        let notes: Vec<String> = content.lines().map(str::to_string).collect();
        log::debug!("loaded {} notes from {}", notes.len(), path.display());
        Ok(notes)
    }

    fn save_notes(&self, notes: &[String]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.notes_path();
        let mut content = String::new();
        for note in notes {
            content.push_str(note);
            content.push('\n');
        }
        fs::write(&path, content).map_err(RoloError::Io)?;
        log::debug!("saved {} notes to {}", notes.len(), path.display());
        Ok(())
    }
}
