//! Single-pass validation and population.
//!
//! Each physical line is classified by [`line::classify`](crate::line::classify)
//! and immediately applied to the [`Document`] under construction. The
//! document doubles as the record of seen sections and keys, so what is
//! validated and what is stored cannot diverge. The first violation aborts
//! the parse.

use std::io::BufRead;

use crate::document::Document;
use crate::error::ParseError;
use crate::line::{Line, classify};

/// UTF-8 byte order mark, tolerated at the very start of the input.
const BOM: char = '\u{feff}';

/// How a repeated key inside one section is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Fail with [`ParseError::DuplicateKey`].
    #[default]
    Reject,
    /// Keep the last value and log a warning.
    Overwrite,
}

/// How a key-value line before the first section header is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanKeys {
    /// Skip the line.
    #[default]
    Ignore,
    /// Fail with [`ParseError::KeyOutsideSection`].
    Reject,
}

/// Parser configuration. The default is the strict policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Policy for repeated keys.
    pub duplicate_keys: DuplicateKeys,
    /// Policy for keys outside any section.
    pub orphan_keys: OrphanKeys,
}

/// Reusable INI parser.
///
/// # Examples
///
/// ```
/// use iniparser::{DuplicateKeys, ParseOptions, Parser};
///
/// let parser = Parser::with_options(ParseOptions {
///     duplicate_keys: DuplicateKeys::Overwrite,
///     ..ParseOptions::default()
/// });
/// let doc = parser.parse("[S]\nk=1\nk=2\n").unwrap();
/// assert_eq!(doc.get("S", "k").unwrap(), "2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Create a parser with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options.
    #[must_use]
    pub const fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with.
    #[must_use]
    pub const fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a complete text.
    ///
    /// # Errors
    ///
    /// Returns the first violation found; see [`ParseError`].
    pub fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let mut state = ParseState::new(self.options);
        for line in text.lines() {
            state.feed(line)?;
        }
        state.finish()
    }

    /// Parse from a buffered reader, one line at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Read`] if the reader fails, otherwise the first
    /// violation found.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document, ParseError> {
        let mut state = ParseState::new(self.options);
        for line in reader.lines() {
            let line = line.map_err(|source| ParseError::Read {
                line: state.line + 1,
                source,
            })?;
            state.feed(&line)?;
        }
        state.finish()
    }
}

/// Parse `text` with the default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(text: &str) -> Result<Document, ParseError> {
    Parser::new().parse(text)
}

/// Parse `text` with explicit options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Document, ParseError> {
    Parser::with_options(options).parse(text)
}

/// State of an in-progress parse.
struct ParseState {
    options: ParseOptions,
    document: Document,
    current: Option<String>,
    /// 1-based number of the last line fed.
    line: usize,
}

impl ParseState {
    const fn new(options: ParseOptions) -> Self {
        Self {
            options,
            document: Document::new(),
            current: None,
            line: 0,
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line += 1;
        let raw = if self.line == 1 {
            raw.strip_prefix(BOM).unwrap_or(raw)
        } else {
            raw
        };

        let classified = classify(raw);
        tracing::trace!(line = self.line, kind = ?classified, "classified line");

        match classified {
            Line::Blank | Line::Comment => Ok(()),
            Line::Section(name) => self.open_section(name),
            Line::KeyValue { key, value } => self.store_entry(key, value, raw),
            Line::Malformed(text) => Err(ParseError::MissingOperator {
                line: self.line,
                text: text.to_string(),
            }),
        }
    }

    fn open_section(&mut self, name: &str) -> Result<(), ParseError> {
        if name.is_empty() {
            return Err(ParseError::EmptySectionName { line: self.line });
        }
        if !self.document.insert_section(name) {
            return Err(ParseError::DuplicateSection {
                name: name.to_string(),
                line: self.line,
            });
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    fn store_entry(&mut self, key: &str, value: &str, raw: &str) -> Result<(), ParseError> {
        if key.is_empty() {
            return Err(ParseError::EmptyKey {
                line: self.line,
                text: raw.trim().to_string(),
            });
        }

        let Some(current) = self.current.as_deref() else {
            return match self.options.orphan_keys {
                OrphanKeys::Ignore => {
                    tracing::warn!(line = self.line, key, "ignoring key outside of any section");
                    Ok(())
                }
                OrphanKeys::Reject => Err(ParseError::KeyOutsideSection {
                    key: key.to_string(),
                    line: self.line,
                }),
            };
        };

        let section = self.document.section_entry(current);

        if section.contains_key(key) {
            match self.options.duplicate_keys {
                DuplicateKeys::Reject => {
                    return Err(ParseError::DuplicateKey {
                        key: key.to_string(),
                        section: current.to_string(),
                        line: self.line,
                    });
                }
                DuplicateKeys::Overwrite => {
                    tracing::warn!(
                        line = self.line,
                        section = current,
                        key,
                        "repeated key, keeping the last value"
                    );
                }
            }
        }

        section.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn finish(self) -> Result<Document, ParseError> {
        if self.document.is_empty() {
            return Err(ParseError::NoSectionsFound);
        }
        tracing::debug!(
            lines = self.line,
            sections = self.document.len(),
            keys = self.document.key_count(),
            "parsed document"
        );
        Ok(self.document)
    }
}
