use std::path::Path;

use crate::document::KvSection;
use crate::error::KvError;

/// Parse a KeyValues document and return its root section.
///
/// Format:
/// ```text
/// "items_game"
/// {
///     "maps"
///     {
///         "ctf"
///         {
///             "mm_type"  "core"   // comments run to end of line
///             "maplist" { "1" { "name" "ctf_2fort" "enabled" "1" } }
///         }
///     }
/// }
/// ```
///
/// Keys and values may be quoted or bare. Platform conditionals such as
/// `[$WIN32]` are skipped without being evaluated. Only the first top-level
/// section is returned; anything after it is ignored.
pub fn parse_document(text: &str) -> Result<KvSection, KvError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lexer = Lexer::new(text);

    loop {
        let (key, line) = match lexer.next_token()? {
            None => return Err(KvError::Empty),
            Some((Token::Str(key), line)) => (key, line),
            Some((token, line)) => return Err(KvError::unexpected(line, token.describe())),
        };

        match lexer.next_token()? {
            Some((Token::Open, opened_on)) => {
                let root = parse_section(&mut lexer, key, opened_on)?;
                if lexer.next_token()?.is_some() {
                    log::debug!("Ignoring content after root section '{}'", root.name());
                }
                return Ok(root);
            }
            Some((Token::Str(_), _)) => {
                log::debug!("Ignoring top-level attribute '{key}' on line {line}");
            }
            Some((token, line)) => return Err(KvError::unexpected(line, token.describe())),
            None => return Err(KvError::UnexpectedEof { line }),
        }
    }
}

/// Parse a KeyValues document from a file path.
pub fn parse_file(path: &Path) -> Result<KvSection, KvError> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

/// Parse the body of a section whose opening brace has been consumed.
fn parse_section(lexer: &mut Lexer, name: String, opened_on: usize) -> Result<KvSection, KvError> {
    let mut section = KvSection::new(name);

    loop {
        let key = match lexer.next_token()? {
            Some((Token::Close, _)) => return Ok(section),
            Some((Token::Str(key), _)) => key,
            Some((Token::Open, line)) => return Err(KvError::unexpected(line, "'{'")),
            None => return Err(KvError::UnexpectedEof { line: opened_on }),
        };

        match lexer.next_token()? {
            Some((Token::Str(value), _)) => section.push_attribute(key, value),
            Some((Token::Open, line)) => {
                let child = parse_section(lexer, key, line)?;
                section.push_child(child);
            }
            Some((Token::Close, line)) => return Err(KvError::unexpected(line, "'}'")),
            None => return Err(KvError::UnexpectedEof { line: opened_on }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Str(String),
    Open,
    Close,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Str(s) => format!("\"{s}\""),
            Token::Open => "'{'".to_string(),
            Token::Close => "'}'".to_string(),
        }
    }
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Skip whitespace, `//` comments and `[...]` conditionals.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '/' && self.peek_next() == Some('/') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.bump();
                }
            } else if c == '[' {
                while let Some(c) = self.bump() {
                    if c == ']' || c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next token with the line it starts on.
    fn next_token(&mut self) -> Result<Option<(Token, usize)>, KvError> {
        self.skip_trivia();
        let line = self.line;

        let token = match self.peek() {
            None => return Ok(None),
            Some('{') => {
                self.bump();
                Token::Open
            }
            Some('}') => {
                self.bump();
                Token::Close
            }
            Some('"') => {
                self.bump();
                Token::Str(self.quoted(line)?)
            }
            Some(_) => Token::Str(self.bare()),
        };

        Ok(Some((token, line)))
    }

    fn quoted(&mut self, start_line: usize) -> Result<String, KvError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(KvError::UnterminatedString { line: start_line }),
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\\') => value.push('\\'),
                    Some('"') => value.push('"'),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => return Err(KvError::UnterminatedString { line: start_line }),
                },
                Some(c) => value.push(c),
            }
        }
    }

    fn bare(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '{' | '}' | '"') {
                break;
            }
            value.push(c);
            self.bump();
        }
        value
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
