//! Configuration loading with figment.
//!
//! Sources, lowest precedence first:
//! 1. Defaults
//! 2. TOML file (`<config dir>/contact-book/config.toml` unless overridden)
//! 3. Environment variables prefixed with `CONTACT_BOOK_`
//!
//! The `--file` flag is applied on top by the binary.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::default_data_file;

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "CONTACT_BOOK_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backing CSV file. Defaults to `~/.contact-book/contacts.csv`.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration, reading the TOML file at `config_path` when given
    /// and the default location otherwise. A missing file is not an error.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(file) = config_file {
            figment = figment.merge(Toml::file(file));
        }
        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }

    /// `<config dir>/contact-book/config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "contact-book")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// The backing file, falling back to the default under the home directory.
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_data_file() {
        let config = Config::default();
        assert!(config.data_file().ends_with("contacts.csv"));
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"data_file = "/tmp/book.csv""#)?;
            let config = Config::load_from(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.data_file(), PathBuf::from("/tmp/book.csv"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"data_file = "/tmp/book.csv""#)?;
            jail.set_env("CONTACT_BOOK_DATA_FILE", "/tmp/env.csv");
            let config = Config::load_from(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.data_file(), PathBuf::from("/tmp/env.csv"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(Path::new("absent.toml"))).unwrap();
            assert_eq!(config, Config::default());
            Ok(())
        });
    }
}
