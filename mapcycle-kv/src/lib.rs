//! Reader for Valve's KeyValues text format (`items_game.txt` and friends).

pub mod document;
pub mod error;
pub mod parser;

pub use document::KvSection;
pub use error::KvError;
pub use parser::{parse_document, parse_file};
