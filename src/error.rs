use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fatal: without a catalog there is no entity set to work on.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse catalog {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("entity name '{name}' does not map to a plain file name inside the image directory")]
    InvalidName { name: String },

    #[error("entities '{first}' and '{second}' both map to image file '{filename}'")]
    DuplicateFilename {
        first: String,
        second: String,
        filename: String,
    },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("image service response carried no image url")]
    MissingLocator,
}

/// Per-entity failure. Never aborts a run.
#[derive(Error, Debug)]
pub enum FillError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("image download failed with status {0}")]
    TransferStatus(u16),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
