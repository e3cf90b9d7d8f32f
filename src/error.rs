//! Error types for the contact book.
//!
//! Operation errors (`DuplicateName`, `NotFound`, `MissingField`) are reported
//! to the user and the menu keeps running. Storage errors carry the path of the
//! backing file so the message says exactly which location failed.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for contact book operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Add was given a name that already exists under case-insensitive comparison.
    #[error("a contact named '{name}' already exists")]
    DuplicateName { name: String },

    /// Update or delete could not find an exact match for the name.
    #[error("contact '{name}' not found")]
    NotFound { name: String },

    /// A required field was left blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A row in the backing file is missing a required column.
    #[error("malformed record in {} at line {line}: {message}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// The backing file exists but could not be read.
    #[error("failed to read contacts from {}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file (or its directory) could not be written.
    #[error("cannot write contacts to {}", path.display())]
    StorageUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded.
    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),
}

/// A specialized Result type for contact book operations.
pub type Result<T> = std::result::Result<T, ContactError>;

impl From<figment::Error> for ContactError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl ContactError {
    /// Whether the menu loop can report this error and carry on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName { .. }
                | Self::NotFound { .. }
                | Self::MissingField { .. }
                | Self::StorageUnwritable { .. }
        )
    }
}
