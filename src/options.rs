//! Configuration options for reading and parsing.
//!
//! This module provides the types that customize each phase:
//!
//! - [`ReadOptions`]: comment markers and an optional validation schema,
//!   consumed by [`read`](crate::read)
//! - [`ParseOptions`]: whitespace policy and key aliases, consumed by
//!   [`ParsedSource::parse`](crate::ParsedSource::parse)
//! - [`WhitespacePolicy`]: the tri-state rule for keys and section names
//!   containing whitespace
//! - [`LineEnding`]: the detected (or requested) end-of-line convention
//!
//! ## Examples
//!
//! ```rust
//! use typed_ini::{read, ParseOptions, ReadOptions, WhitespacePolicy};
//!
//! let source = read(
//!     "a=1 # trailing comment",
//!     ReadOptions::new().with_comment_marker("#"),
//! );
//! let doc = source
//!     .parse(&ParseOptions::new().with_whitespace_policy(WhitespacePolicy::Ignore))
//!     .unwrap();
//! assert_eq!(doc.get("a").and_then(|v| v.as_f64()), Some(1.0));
//! ```

use crate::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// End-of-line convention of a source text or a stringified document.
///
/// [`read`](crate::read) detects `CrLf` when `\r\n` appears anywhere in
/// the input, `Lf` otherwise. The stringify engine joins emitted lines
/// with the chosen variant and appends one trailing line ending.
///
/// # Examples
///
/// ```rust
/// use typed_ini::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Detects the line ending of a text: `CrLf` if a `\r\n` occurs
    /// anywhere, `Lf` otherwise.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Policy for keys and section names that contain whitespace.
///
/// - `Error` (default): the line raises a syntax error
/// - `Ignore`: the line is silently dropped; a dropped section header
///   leaves the previously active section active
/// - `Allow`: the line is processed normally
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WhitespacePolicy {
    #[default]
    Error,
    Ignore,
    Allow,
}

/// Options for [`read`](crate::read): comment markers and an optional
/// schema to validate parsed documents against.
///
/// # Examples
///
/// ```rust
/// use typed_ini::ReadOptions;
///
/// // Default: semicolon comments only.
/// let options = ReadOptions::new();
/// assert_eq!(options.comment_with, vec![";".to_string()]);
///
/// // Semicolon and hash comments.
/// let options = ReadOptions::new().with_comment_markers([";", "#"]);
/// assert_eq!(options.comment_with.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadOptions {
    /// Comment markers, tried in order. Never empty; defaults to `;`.
    pub comment_with: Vec<String>,
    /// Schema applied after parsing when present.
    pub validation_schema: Option<Schema>,
}

impl ReadOptions {
    /// Creates default options: semicolon comments, no schema.
    #[must_use]
    pub fn new() -> Self {
        ReadOptions {
            comment_with: vec![";".to_string()],
            validation_schema: None,
        }
    }

    /// Replaces the comment markers with a single marker.
    #[must_use]
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_with = vec![marker.into()];
        self
    }

    /// Replaces the comment markers with a list, tried in the given order.
    #[must_use]
    pub fn with_comment_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_with = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a schema to validate parsed documents against.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.validation_schema = Some(schema);
        self
    }

    /// The effective marker list: the configured markers, or the default
    /// semicolon when the list was emptied.
    pub(crate) fn markers(&self) -> Vec<String> {
        if self.comment_with.is_empty() {
            vec![";".to_string()]
        } else {
            self.comment_with.clone()
        }
    }
}

/// Options for [`ParsedSource::parse`](crate::ParsedSource::parse).
///
/// # Examples
///
/// ```rust
/// use typed_ini::{ParseOptions, WhitespacePolicy};
///
/// let options = ParseOptions::new()
///     .with_whitespace_policy(WhitespacePolicy::Allow)
///     .with_alias("old_name", "new_name");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Policy for keys and section names containing whitespace.
    pub keys_with_spaces: WhitespacePolicy,
    /// Alias table applied to the typed tree after coercion. Renames are
    /// applied at every nesting level; iteration order decides which
    /// source key wins when two of them map to the same alias.
    pub aliases: Option<IndexMap<String, String>>,
}

impl ParseOptions {
    /// Creates default options: whitespace errors, no aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whitespace policy for keys and section names.
    #[must_use]
    pub fn with_whitespace_policy(mut self, policy: WhitespacePolicy) -> Self {
        self.keys_with_spaces = policy;
        self
    }

    /// Adds one alias: properties named `from` are renamed to `to`.
    #[must_use]
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases
            .get_or_insert_with(IndexMap::new)
            .insert(from.into(), to.into());
        self
    }

    /// Replaces the alias table wholesale.
    #[must_use]
    pub fn with_aliases(mut self, aliases: IndexMap<String, String>) -> Self {
        self.aliases = Some(aliases);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(LineEnding::detect("a=1\nb=2"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a=1\r\nb=2"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
        // A single CRLF anywhere wins, even with LF lines elsewhere.
        assert_eq!(LineEnding::detect("a=1\nb=2\r\n"), LineEnding::CrLf);
    }

    #[test]
    fn test_default_marker_restored_when_emptied() {
        let options = ReadOptions::new().with_comment_markers(Vec::<String>::new());
        assert_eq!(options.markers(), vec![";".to_string()]);
    }

    #[test]
    fn test_alias_builder_preserves_order() {
        let options = ParseOptions::new()
            .with_alias("a", "x")
            .with_alias("b", "x");
        let aliases = options.aliases.unwrap();
        let keys: Vec<_> = aliases.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
