//! Error types for INI parsing, validation, and stringification.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed lines (missing `=`, numeric key or
//!   section names, disallowed whitespace) with the 1-based source line
//! - **Type Errors**: schema validation failures and stringify violations,
//!   naming the offending property and the violated constraint
//! - **Not Found**: file-level helpers only, raised when a path does not
//!   exist before any I/O is attempted
//! - **I/O Errors**: file reading/writing failures
//!
//! All errors are raised at the point of detection; nothing is retried or
//! accumulated. The library performs no logging of its own.
//!
//! ## Examples
//!
//! ```rust
//! use typed_ini::{parse, Error};
//!
//! let result = parse("no separator on this line");
//! match result {
//!     Err(Error::Syntax { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected a syntax error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
///
/// Syntax errors always carry the 1-based line number of the original
/// input, counted before comment and blank lines were stripped. Type
/// errors always name the property that violated a constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed line encountered by the structural parser.
    #[error("syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// Schema validation failure or stringify type violation.
    #[error("type error for property '{property}': {msg}")]
    Type { property: String, msg: String },

    /// Path passed to a file-level helper does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// I/O failure while reading or writing a file.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used by serde integration points.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error citing a 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_ini::Error;
    ///
    /// let err = Error::syntax(10, "expected a key-value pair");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a type error naming the offending property.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_ini::Error;
    ///
    /// let err = Error::type_error("email", "must be a valid email address");
    /// assert!(err.to_string().contains("'email'"));
    /// ```
    pub fn type_error(property: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Type {
            property: property.into(),
            msg: msg.into(),
        }
    }

    /// Creates the "required" type error for a missing schema property.
    pub fn required(property: impl Into<String>) -> Self {
        Error::Type {
            property: property.into(),
            msg: "required".to_string(),
        }
    }

    /// Creates a not-found error for a missing file path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Error::NotFound(path.into())
    }

    /// Creates an I/O error. The source error is stringified so that
    /// `Error` stays `Clone`.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the source line number for syntax errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
