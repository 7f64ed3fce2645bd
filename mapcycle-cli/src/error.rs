use thiserror::Error;

/// Errors that can occur while setting up a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
