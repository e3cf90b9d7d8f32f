//! Persistence module split across logical submodules.

mod csv_file;
mod paths;

pub use csv_file::Store;
pub use paths::{default_data_file, ensure_parent_dir};
