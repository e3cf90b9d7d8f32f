//! Command-line flags for the `contact-book` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// contact-book - a personal contact list kept in a CSV file
#[derive(Debug, Parser)]
#[command(name = "contact-book")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file holding the contacts (overrides config and environment)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file_flag() {
        let cli = Cli::try_parse_from(["contact-book", "--file", "/tmp/c.csv"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/c.csv")));
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["contact-book", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        let cli = Cli::try_parse_from(["contact-book", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Verbose);

        let cli = Cli::try_parse_from(["contact-book", "-q", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}
