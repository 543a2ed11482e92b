use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("Failed to read language file directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read language file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Language files must be flat JSON objects mapping message keys to strings.
    #[error("Language file {path} is not a flat JSON object of strings: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The default language has no file in the language directory.
    #[error("No language file found for default language '{0}'")]
    MissingDefaultLanguage(String),
}
