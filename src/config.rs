//! Configuration management for the library desk

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::{error::AppResult, repository::DataFiles};

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory the three collection files live in
    pub dir: PathBuf,
    pub books_file: String,
    pub readers_file: String,
    pub loans_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("data.dir", ".")?
            .set_default("data.books_file", "books.json")?
            .set_default("data.readers_file", "readers.json")?
            .set_default("data.loans_file", "loans.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. LIBRARY_DATA__BOOKS_FILE)
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl DataConfig {
    /// Resolve the configured file names against the data directory
    pub fn files(&self) -> DataFiles {
        DataFiles {
            books: self.dir.join(&self.books_file),
            readers: self.dir.join(&self.readers_file),
            loans: self.dir.join(&self.loans_file),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            books_file: "books.json".to_string(),
            readers_file: "readers.json".to_string(),
            loans_file: "loans.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
