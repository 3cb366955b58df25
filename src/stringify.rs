//! Serialization of typed documents back to INI text.
//!
//! The engine walks a document read-only in insertion order. Scalar
//! properties are emitted first as `key = value` lines; section-valued
//! properties are deferred and emitted afterwards, each preceded by one
//! blank line and its `[name]` header. The output joins every emitted
//! line with the chosen line ending and appends one trailing line ending.
//!
//! Two deliberate asymmetries with the parser:
//!
//! - arrays are emitted as a plain comma join, not bracket syntax, so a
//!   bracket literal does not survive a parse/stringify round trip
//! - comments and blank lines were stripped at read time and cannot be
//!   reproduced
//!
//! A value that is neither a scalar nor a flat section (a section nested
//! inside a section, or inside an array) raises a type error naming the
//! property.
//!
//! ## Usage
//!
//! ```rust
//! use typed_ini::{parse, stringify};
//!
//! let doc = parse("a=1\n[db]\nhost=localhost").unwrap();
//! let text = stringify(&doc).unwrap();
//! assert_eq!(text, "a = 1\n\n[db]\nhost = localhost\n");
//! ```

use crate::options::LineEnding;
use crate::value::format_number;
use crate::{Error, IniMap, IniValue, Result};

/// Serializes a document to INI text with LF line endings.
///
/// # Errors
///
/// Returns [`Error::Type`] when a property holds a section nested where
/// only scalars are allowed.
pub fn stringify(doc: &IniMap) -> Result<String> {
    stringify_with_eol(doc, LineEnding::Lf)
}

/// Serializes a document to INI text with the given line ending.
///
/// # Errors
///
/// Returns [`Error::Type`] when a property holds a section nested where
/// only scalars are allowed.
pub fn stringify_with_eol(doc: &IniMap, line_ending: LineEnding) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut sections: Vec<(&String, &IniMap)> = Vec::new();

    for (key, value) in doc {
        match value {
            IniValue::Section(section) => sections.push((key, section)),
            scalar => lines.push(format!("{} = {}", key, render_scalar(key, scalar)?)),
        }
    }

    for (name, section) in sections {
        lines.push(String::new());
        lines.push(format!("[{}]", name));
        for (key, value) in section {
            lines.push(format!("{} = {}", key, render_scalar(key, value)?));
        }
    }

    let eol = line_ending.as_str();
    Ok(lines.join(eol) + eol)
}

fn render_scalar(property: &str, value: &IniValue) -> Result<String> {
    match value {
        IniValue::Number(n) => Ok(format_number(*n)),
        IniValue::Bool(b) => Ok(b.to_string()),
        IniValue::String(s) => Ok(s.clone()),
        IniValue::Array(elements) => {
            let mut parts = Vec::with_capacity(elements.len());
            for element in elements {
                parts.push(render_scalar(property, element)?);
            }
            Ok(parts.join(","))
        }
        IniValue::Section(_) => Err(Error::type_error(
            property,
            "must be a string, number, boolean, or array",
        )),
    }
}
