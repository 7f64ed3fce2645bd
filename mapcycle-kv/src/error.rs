/// Errors that can occur while reading a KeyValues document.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of document (section opened on line {line} is never closed)")]
    UnexpectedEof { line: usize },

    #[error("Unexpected {token} on line {line}")]
    UnexpectedToken { line: usize, token: String },

    #[error("Unterminated string starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("Document contains no sections")]
    Empty,
}

impl KvError {
    pub fn unexpected(line: usize, token: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            line,
            token: token.into(),
        }
    }
}
