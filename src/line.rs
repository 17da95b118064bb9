//! Classification of single physical lines.
//!
//! Whitespace policy: a line is trimmed at its edges before classification,
//! and header names, keys and values are trimmed again after extraction.
//! Interior whitespace is preserved, so `name = John Smith` keeps its space.

/// A classified line with its extracted payload.
///
/// Payloads borrow from the input line and are already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `;` or `#`.
    Comment,
    /// `[name]`; the name may be empty, which the parser rejects.
    Section(&'a str),
    /// `key=value`, split on the first `=`.
    KeyValue {
        /// Text before the first `=`.
        key: &'a str,
        /// Text after the first `=`, further `=` included.
        value: &'a str,
    },
    /// Anything else.
    Malformed(&'a str),
}

/// Classify one line of INI text.
///
/// # Examples
///
/// ```
/// use iniparser::line::{Line, classify};
///
/// assert_eq!(classify("  ; note"), Line::Comment);
/// assert_eq!(classify("[ Database ]"), Line::Section("Database"));
/// assert_eq!(
///     classify("url = a=b"),
///     Line::KeyValue { key: "url", value: "a=b" }
/// );
/// assert_eq!(classify("key2"), Line::Malformed("key2"));
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Line::Blank;
    }

    if trimmed.starts_with(';') || trimmed.starts_with('#') {
        return Line::Comment;
    }

    if let Some(name) = parse_section_header(trimmed) {
        return Line::Section(name);
    }

    if let Some((key, value)) = trimmed.split_once('=') {
        return Line::KeyValue {
            key: key.trim(),
            value: value.trim(),
        };
    }

    Line::Malformed(trimmed)
}

/// Extract the trimmed name from a `[name]` line.
fn parse_section_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.trim())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t  "), Line::Blank);
        assert_eq!(classify("\r"), Line::Blank);
    }

    #[test]
    fn comment_lines() {
        assert_eq!(classify("; semicolon"), Line::Comment);
        assert_eq!(classify("# hash"), Line::Comment);
        assert_eq!(classify("   ;indented"), Line::Comment);
    }

    #[test]
    fn comment_wins_over_operator() {
        assert_eq!(classify("# key=value"), Line::Comment);
    }

    #[test]
    fn section_header() {
        assert_eq!(classify("[Database]"), Line::Section("Database"));
    }

    #[test]
    fn section_header_trims_name() {
        assert_eq!(classify("  [  Email Settings ]  "), Line::Section("Email Settings"));
    }

    #[test]
    fn empty_section_header_is_still_a_header() {
        assert_eq!(classify("[]"), Line::Section(""));
        assert_eq!(classify("[   ]"), Line::Section(""));
    }

    #[test]
    fn header_wins_over_operator() {
        assert_eq!(classify("[a=b]"), Line::Section("a=b"));
    }

    #[test]
    fn key_value_trims_both_sides() {
        assert_eq!(
            classify("  user =  root "),
            Line::KeyValue {
                key: "user",
                value: "root"
            }
        );
    }

    #[test]
    fn key_value_splits_on_first_equals() {
        assert_eq!(
            classify("query=a=1&b=2"),
            Line::KeyValue {
                key: "query",
                value: "a=1&b=2"
            }
        );
    }

    #[test]
    fn key_value_keeps_interior_whitespace() {
        assert_eq!(
            classify("name = John  Smith"),
            Line::KeyValue {
                key: "name",
                value: "John  Smith"
            }
        );
    }

    #[test]
    fn key_value_with_empty_value() {
        assert_eq!(
            classify("password="),
            Line::KeyValue {
                key: "password",
                value: ""
            }
        );
    }

    #[test]
    fn key_value_with_empty_key() {
        assert_eq!(classify("= d"), Line::KeyValue { key: "", value: "d" });
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(classify("key2"), Line::Malformed("key2"));
        assert_eq!(classify(" ] "), Line::Malformed("]"));
        assert_eq!(classify("[unterminated"), Line::Malformed("[unterminated"));
    }
}
