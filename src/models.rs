//! Domain model for a single contact plus the flat row shape used by the CSV
//! store. `Contact` stays a light-weight data holder; the store and the menu
//! decide how it is persisted and presented.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column order of the backing file. The header row is written from this list.
pub const COLUMNS: [&str; 3] = ["name", "phone", "email"];

/// Spelling some older files use for a missing email.
const LITERAL_NONE: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in the contact book. The `name` doubles as the business key and is
/// compared case-insensitively everywhere.
pub struct Contact {
    /// Display name, also the key that add, update and delete look up.
    pub name: String,
    /// Phone number kept exactly as typed; no format is enforced.
    pub phone: String,
    /// `None` when the contact has no email. Never `Some("")`.
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: Option<&str>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: normalize_email(email),
        }
    }

    /// Full-string, case-insensitive comparison against `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive containment check against `name` only.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Flatten into the row shape written to disk.
    pub fn to_row(&self) -> ContactRow {
        ContactRow {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Build a contact from a parsed row, folding every "no email" spelling
    /// into `None`.
    pub fn from_row(row: ContactRow) -> Self {
        Self {
            name: row.name,
            phone: row.phone,
            email: normalize_email(row.email.as_deref()),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)?;
        if let Some(email) = &self.email {
            write!(f, " <{email}>")?;
        }
        Ok(())
    }
}

/// Key/value view of a contact as it appears in the backing file. `email` is
/// optional because rows written by hand may leave the column out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    /// Value of the `name` column.
    pub name: String,
    /// Value of the `phone` column.
    pub phone: String,
    /// Value of the `email` column; empty cells read as `None`.
    #[serde(default)]
    pub email: Option<String>,
}

/// Collapse absent, blank, and literal `"None"` emails into `None`.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    match email.map(str::trim) {
        None | Some("") | Some(LITERAL_NONE) => None,
        Some(value) => Some(value.to_string()),
    }
}
