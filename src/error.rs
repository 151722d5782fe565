use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-level collaborators. Conversion itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read config file at {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
