use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{ContactError, Result};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".contact-book";
/// CSV file name stored inside the application data directory.
const DATA_FILE_NAME: &str = "contacts.csv";

/// Resolve the default backing file inside the user's home. Falls back to the
/// working directory when no home directory can be located.
pub fn default_data_file() -> PathBuf {
    match BaseDirs::new() {
        Some(base_dirs) => base_dirs.home_dir().join(DATA_DIR_NAME).join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_DIR_NAME).join(DATA_FILE_NAME),
    }
}

/// Make sure the directory holding `path` exists so the first save has
/// somewhere to land. A location we cannot create is reported immediately.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ContactError::StorageUnwritable {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
