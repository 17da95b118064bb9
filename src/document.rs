//! The parsed document and its accessors.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LookupError, ParseError};
use crate::parser::{ParseOptions, Parser};
use crate::render::write_document;
use crate::section::Section;

/// An INI document: section names mapped to [`Section`]s.
///
/// Built by one parse call, then queried with [`get`](Self::get) and mutated
/// with [`set`](Self::set). Sections iterate in lexicographic name order,
/// which is also the order [`render`](crate::render()) emits them in.
///
/// # Examples
///
/// ```
/// use iniparser::Document;
///
/// let mut doc = Document::parse("[Database]\nname = John\n").unwrap();
/// assert_eq!(doc.get("Database", "name").unwrap(), "John");
///
/// doc.set("Database", "port", "5432");
/// assert_eq!(doc.to_string(), "[Database]\nname=John\nport=5432\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

/// What [`Document::set`] had to do to store a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// An existing key was overwritten.
    Updated,
    /// The section existed but the key was new.
    InsertedKey,
    /// Neither the section nor the key existed.
    InsertedSection,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }

    /// Parse INI text with the default (strict) options.
    ///
    /// # Errors
    ///
    /// Returns the first grammar or uniqueness violation, or
    /// [`ParseError::NoSectionsFound`] if the text declares no sections.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Parser::new().parse(text)
    }

    /// Parse INI text with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Document::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self, ParseError> {
        Parser::with_options(options).parse(text)
    }

    /// Parse INI text line by line from a reader.
    ///
    /// # Errors
    ///
    /// See [`Document::parse`]; additionally returns [`ParseError::Read`] if
    /// the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        Parser::new().parse_reader(reader)
    }

    /// Names of all sections, in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoSectionsFound`] if the document is empty.
    pub fn section_names(&self) -> Result<Vec<&str>, LookupError> {
        if self.sections.is_empty() {
            return Err(LookupError::NoSectionsFound);
        }
        Ok(self.sections.keys().map(String::as_str).collect())
    }

    /// Read-only view of every section.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoSectionsFound`] if the document is empty.
    pub fn sections(&self) -> Result<&BTreeMap<String, Section>, LookupError> {
        if self.sections.is_empty() {
            return Err(LookupError::NoSectionsFound);
        }
        Ok(&self.sections)
    }

    /// The section named `name`, if present.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Value of `key` in section `section`.
    ///
    /// An empty value is returned as `Ok("")`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SectionNotFound`] or [`LookupError::KeyNotFound`].
    pub fn get(&self, section: &str, key: &str) -> Result<&str, LookupError> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| LookupError::SectionNotFound(section.to_string()))?;
        entries.get(key).ok_or_else(|| LookupError::KeyNotFound {
            key: key.to_string(),
            section: section.to_string(),
        })
    }

    /// Insert or overwrite `key` in `section`, creating the section if needed.
    ///
    /// The section name, key and value are trimmed the same way the parser
    /// trims them. Never fails; uniqueness rules only apply while parsing.
    ///
    /// No other check is made, so a document built from an empty key, a key
    /// containing `=`, a name starting with `;` or `#`, or any text containing
    /// a line break renders to text that does not parse back into the same
    /// document.
    ///
    /// ```
    /// use iniparser::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set(" Server ", " host ", " example.org ");
    /// assert_eq!(doc.get("Server", "host").unwrap(), "example.org");
    /// ```
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> SetOutcome {
        let (key, value) = (trimmed(key.into()), trimmed(value.into()));
        match self.sections.entry(trimmed(section.into())) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Section::new()).insert(key, value);
                SetOutcome::InsertedSection
            }
            btree_map::Entry::Occupied(mut slot) => match slot.get_mut().insert(key, value) {
                Some(_) => SetOutcome::Updated,
                None => SetOutcome::InsertedKey,
            },
        }
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over `(name, section)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    /// Total number of keys across all sections.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Declare an empty section; returns `false` if it already existed.
    pub(crate) fn insert_section(&mut self, name: &str) -> bool {
        if self.sections.contains_key(name) {
            return false;
        }
        self.sections.insert(name.to_string(), Section::new());
        true
    }

    /// Mutable access for the parser, which owns uniqueness checks.
    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}

/// `text` without leading and trailing whitespace, reusing the allocation
/// when there is nothing to strip.
fn trimmed(text: String) -> String {
    if text.trim().len() == text.len() {
        text
    } else {
        text.trim().to_string()
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, self)
    }
}
