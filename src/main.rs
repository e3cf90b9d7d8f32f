//! Binary entry point: resolve where the contacts live, load them, and run the
//! menu until the user exits.
use anyhow::Context;
use clap::Parser;
use contact_book::cli::Cli;
use contact_book::store::ensure_parent_dir;
use contact_book::{init_logging, run_app, App, Config, ContactBook, Store};
use tracing::info;

/// Startup failures (bad config, malformed contacts file, unwritable data
/// directory) end the process with a non-zero status and the error chain.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.as_deref())?;
    let data_file = cli.file.clone().unwrap_or_else(|| config.data_file());
    info!(path = %data_file.display(), "using contacts file");

    ensure_parent_dir(&data_file)?;
    let book = ContactBook::open(Store::new(&data_file))
        .with_context(|| format!("failed to open contact book at {}", data_file.display()))?;

    let mut app = App::new(book);
    run_app(&mut app)
}
