//! # typed_ini
//!
//! A lenient, typed INI parser and serializer.
//!
//! ## What does "typed" mean here?
//!
//! Classic INI parsing hands back raw strings for everything. This crate
//! infers scalar types while parsing: decimal, hex (`0x1F`), binary
//! (`0b101`), and octal (`0o17`) numbers, `true`/`false` booleans,
//! bracketed comma-lists (`[a, b, c]`), and strings for everything else.
//! The result is a typed tree you can match on instead of re-parsing.
//!
//! ## Key Features
//!
//! - **Typed scalars**: numbers, booleans, arrays, and strings inferred
//!   with a fixed precedence
//! - **One-level sections**: `[name]` headers group keys without deep
//!   nesting
//! - **Configurable comments**: one or more markers, tried in order
//! - **Duplicate-key promotion**: repeated keys accumulate into arrays
//! - **Key aliasing**: rename properties at every nesting level
//! - **Schema validation**: declare required properties, primitive kinds,
//!   emails, URLs, hex strings, and allowed-value sets
//! - **Stringify**: serialize a typed tree back to INI text
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! typed_ini = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use typed_ini::{parse, IniValue};
//!
//! let doc = parse(
//!     "debug=true\nretries=3\n; connection settings\n[db]\nhost=localhost\nport=5432",
//! )
//! .unwrap();
//!
//! assert_eq!(doc.get("debug"), Some(&IniValue::Bool(true)));
//! assert_eq!(doc.get("retries"), Some(&IniValue::Number(3.0)));
//!
//! let db = doc.get("db").and_then(|v| v.as_section()).unwrap();
//! assert_eq!(db.get("port"), Some(&IniValue::Number(5432.0)));
//! ```
//!
//! ### Options and validation
//!
//! ```rust
//! use typed_ini::{read, ParseOptions, ReadOptions, Schema, SchemaKind};
//!
//! let schema = Schema::new().field("email", SchemaKind::Email, true);
//! let source = read(
//!     "email = admin@example.com # ok",
//!     ReadOptions::new()
//!         .with_comment_markers([";", "#"])
//!         .with_schema(schema),
//! );
//! let doc = source.parse(&ParseOptions::new()).unwrap();
//! assert!(doc.get("email").is_some());
//! ```
//!
//! ### Building and stringifying
//!
//! ```rust
//! use typed_ini::{ini, stringify};
//!
//! let doc = ini! {
//!     "debug": true,
//!     "db": { "host": "localhost", "port": 5432 },
//! };
//!
//! assert_eq!(
//!     stringify(&doc).unwrap(),
//!     "debug = true\n\n[db]\nhost = localhost\nport = 5432\n"
//! );
//! ```
//!
//! ## Known Limitations
//!
//! The dialect and its inherited quirks are documented in [`format`]:
//! no quoting or escaping, no multi-line values, arrays stringify as
//! plain comma joins, and an empty value evaluates to the number 0.
//!
//! ## Feature Flags
//!
//! - `async`: async file helpers (`read_file_async`, `parse_file_async`,
//!   `write_file_async`) backed by `tokio::fs`

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod schema;
pub mod stringify;
pub mod value;

pub use error::{Error, Result};
pub use map::IniMap;
pub use options::{LineEnding, ParseOptions, ReadOptions, WhitespacePolicy};
pub use parse::{ParsedSource, SourceLine};
pub use schema::{Schema, SchemaKind, SchemaNode};
pub use stringify::{stringify, stringify_with_eol};
pub use value::IniValue;

use std::path::Path;

/// Reads a text buffer: detects the line ending, strips comments and
/// blank lines, and retains the raw text. Parsing is a separate step on
/// the returned [`ParsedSource`].
///
/// # Examples
///
/// ```rust
/// use typed_ini::{read, ParseOptions, ReadOptions};
///
/// let source = read("a=1\n; comment", ReadOptions::new());
/// let doc = source.parse(&ParseOptions::new()).unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
#[must_use]
pub fn read(text: impl Into<String>, options: ReadOptions) -> ParsedSource {
    ParsedSource::from_text(text.into(), options)
}

/// Reads a byte buffer, validating it as UTF-8 first.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_slice(bytes: &[u8], options: ReadOptions) -> Result<ParsedSource> {
    let text = std::str::from_utf8(bytes).map_err(Error::custom)?;
    Ok(read(text, options))
}

/// Parses a text buffer with default options: semicolon comments, no
/// schema, whitespace in keys is an error.
///
/// # Examples
///
/// ```rust
/// use typed_ini::{parse, IniValue};
///
/// let doc = parse("mode=fast").unwrap();
/// assert_eq!(doc.get("mode"), Some(&IniValue::String("fast".to_string())));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed lines.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<IniMap> {
    read(text, ReadOptions::new()).parse(&ParseOptions::new())
}

/// Reads a file with default options.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the path does not exist, and
/// [`Error::Io`] for other I/O failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_file(path: impl AsRef<Path>) -> Result<ParsedSource> {
    read_file_with_options(path, ReadOptions::new())
}

/// Reads a file with the given options.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the path does not exist, and
/// [`Error::Io`] for other I/O failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_file_with_options(path: impl AsRef<Path>, options: ReadOptions) -> Result<ParsedSource> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(e.to_string()))?;
    Ok(read(text, options))
}

/// Reads and parses a file with default options in one step.
///
/// # Errors
///
/// Returns [`Error::NotFound`], [`Error::Io`], or any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file(path: impl AsRef<Path>) -> Result<IniMap> {
    read_file(path)?.parse(&ParseOptions::new())
}

/// Stringifies a document and writes it to a file.
///
/// # Errors
///
/// Returns [`Error::Type`] for unrepresentable values and [`Error::Io`]
/// for write failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file(
    path: impl AsRef<Path>,
    doc: &IniMap,
    line_ending: LineEnding,
) -> Result<()> {
    let text = stringify_with_eol(doc, line_ending)?;
    std::fs::write(path, text).map_err(|e| Error::io(e.to_string()))
}

/// Async variant of [`read_file_with_options`], backed by `tokio::fs`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the path does not exist, and
/// [`Error::Io`] for other I/O failures.
#[cfg(feature = "async")]
pub async fn read_file_async(
    path: impl AsRef<Path>,
    options: ReadOptions,
) -> Result<ParsedSource> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::io(e.to_string()))?
    {
        return Err(Error::not_found(path.display().to_string()));
    }
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(read(text, options))
}

/// Async variant of [`parse_file`].
///
/// # Errors
///
/// Returns [`Error::NotFound`], [`Error::Io`], or any parse error.
#[cfg(feature = "async")]
pub async fn parse_file_async(path: impl AsRef<Path>) -> Result<IniMap> {
    let source = read_file_async(path, ReadOptions::new()).await?;
    source.parse(&ParseOptions::new())
}

/// Async variant of [`write_file`], backed by `tokio::fs`.
///
/// # Errors
///
/// Returns [`Error::Type`] for unrepresentable values and [`Error::Io`]
/// for write failures.
#[cfg(feature = "async")]
pub async fn write_file_async(
    path: impl AsRef<Path>,
    doc: &IniMap,
    line_ending: LineEnding,
) -> Result<()> {
    let text = stringify_with_eol(doc, line_ending)?;
    tokio::fs::write(path, text)
        .await
        .map_err(|e| Error::io(e.to_string()))
}
