use thiserror::Error;

/// Input that failed one of the contact validators.
///
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid birthday format. Please use YYYY-MM-DD.")]
    Birthday,

    #[error("Invalid phone number format.")]
    Phone,

    #[error("Invalid email format.")]
    Email,
}

#[derive(Error, Debug)]
pub enum RoloError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Invalid field.")]
    InvalidField(String),

    #[error("Note not found.")]
    NoteNotFound(String),

    #[error("Invalid note index.")]
    InvalidNoteIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
