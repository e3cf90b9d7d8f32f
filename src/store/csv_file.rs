use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::debug;

use crate::error::{ContactError, Result};
use crate::models::{Contact, ContactRow, COLUMNS};

/// Columns every data row must carry a value for.
const REQUIRED_COLUMNS: [&str; 2] = ["name", "phone"];

/// Flat-file store holding the whole contact list in one CSV file. Every save
/// rewrites the file from scratch in collection order.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every contact from the backing file. A file that does not exist yet
    /// is an empty book; a row missing `name` or `phone` aborts the load.
    pub fn load(&self) -> Result<Vec<Contact>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contacts file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ContactError::StorageRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // Rows may omit the trailing email column.
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|err| self.read_error(err))?
            .clone();

        let mut contacts = Vec::new();
        let mut record = StringRecord::new();
        while reader
            .read_record(&mut record)
            .map_err(|err| self.read_error(err))?
        {
            self.check_required(&headers, &record)?;
            let row: ContactRow = record
                .deserialize(Some(&headers))
                .map_err(|err| self.read_error(err))?;
            contacts.push(Contact::from_row(row));
        }

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    /// Truncate the backing file and write the header followed by one row per
    /// contact. Not atomic: a crash halfway through leaves a partial file.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        let file = File::create(&self.path).map_err(|err| self.unwritable(err))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        writer
            .write_record(COLUMNS)
            .map_err(|err| self.unwritable(err.into()))?;
        for contact in contacts {
            writer
                .serialize(contact.to_row())
                .map_err(|err| self.unwritable(err.into()))?;
        }
        writer.flush().map_err(|err| self.unwritable(err))?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn unwritable(&self, source: io::Error) -> ContactError {
        ContactError::StorageUnwritable {
            path: self.path.clone(),
            source,
        }
    }

    /// Name the first required column that `record` has no value for, either
    /// because the header lacks it or because the row ends before it.
    fn check_required(&self, headers: &StringRecord, record: &StringRecord) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            let present = headers
                .iter()
                .position(|header| header == column)
                .is_some_and(|index| index < record.len());
            if !present {
                return Err(ContactError::MalformedRecord {
                    path: self.path.clone(),
                    line: record.position().map_or(0, csv::Position::line),
                    message: format!("missing field `{column}`"),
                });
            }
        }
        Ok(())
    }

    fn read_error(&self, err: csv::Error) -> ContactError {
        if err.is_io_error() {
            return ContactError::StorageRead {
                path: self.path.clone(),
                source: err.into(),
            };
        }

        let line = err.position().map_or(0, csv::Position::line);
        let message = match err.kind() {
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => err.to_string(),
        };
        ContactError::MalformedRecord {
            path: self.path.clone(),
            line,
            message,
        }
    }
}
