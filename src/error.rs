use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the i18n and content modules.
#[derive(Debug, Error)]
pub enum Error {
    /// The key is absent (or empty) even in the base locale's table.
    /// This is a content authoring defect and is never masked.
    #[error("Translation key \"{key}\" does not exist.")]
    MissingTranslation { key: String },

    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// The base locale has no table, so nothing can fall back to it.
    #[error("base locale file {file} is missing from {}", .dir.display())]
    MissingBaseLocale { dir: PathBuf, file: String },

    #[error("failed to read translation directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("post \"{slug}\" has no authors")]
    PostWithoutAuthors { slug: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
