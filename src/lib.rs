//! Core library surface for the contact book.
//!
//! `main.rs` wires these pieces together; tests drive them directly.
pub mod book;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use book::{ContactBook, ContactUpdate};
pub use config::Config;
pub use error::{ContactError, Result};
pub use logging::init_logging;
pub use models::Contact;
pub use store::Store;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
