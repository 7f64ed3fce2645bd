use std::path::PathBuf;

use mapcycle_kv::KvError;
use thiserror::Error;

/// Errors that can stop one stage of a mapcycle run.
///
/// None of these abort the run as a whole: a failed input stage hands an
/// empty map list to the output stage, and a failed output stage is
/// reported back to the caller.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The input document could not be opened or read
    #[error("Failed to load {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input document was read but is not valid KeyValues text
    #[error("Failed to parse {}: {source}", path.display())]
    InvalidDocument { path: PathBuf, source: KvError },

    /// The mapcycle file could not be opened for writing
    #[error("Failed to open {} for writing: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing to an already opened mapcycle file failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur while reading `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}
