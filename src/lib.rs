//! Strict INI parsing.
//!
//! Text is parsed in a single pass into a [`Document`], a mapping from
//! section names to [`Section`]s of string keys and values. Parsing fails fast
//! on the first grammar or uniqueness violation, lookups return typed errors,
//! and [`render()`] turns a document back into canonical INI text.
//!
//! The public API is organised into layers:
//!
//! - **[`line`]**: classify one physical line
//! - **[`parser`]**: validate and populate a [`Document`] in one pass
//! - **[`document`]** / **[`section`]**: the model plus `get`/`set` access
//! - **[`render`](mod@render)**: serialize a [`Document`]
//! - **[`file`]**: `.ini` load/save through a [`TextStore`]
//!
//! ```
//! use iniparser::{Document, LookupError};
//!
//! let text = "[Credentials]\nuser=root\nport=3000\n[Numbers]\n[Database]\nname=John\n";
//! let doc = Document::parse(text).unwrap();
//!
//! assert_eq!(doc.section_names().unwrap(), ["Credentials", "Database", "Numbers"]);
//! assert_eq!(doc.get("Database", "name"), Ok("John"));
//! assert!(matches!(doc.get("Numbers", "one"), Err(LookupError::KeyNotFound { .. })));
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod document;
pub mod error;
pub mod file;
pub mod line;
pub mod parser;
pub mod render;
pub mod section;

pub use document::{Document, SetOutcome};
pub use error::{FileError, IniError, LookupError, ParseError};
pub use file::{FsStore, TextStore, load_file, save_file};
pub use parser::{DuplicateKeys, OrphanKeys, ParseOptions, Parser, parse, parse_with};
pub use render::render;
pub use section::Section;
