//! Declarative schema validation for parsed documents.
//!
//! A [`Schema`] describes the properties a document must carry. Each
//! entry is either a leaf constraint — a [`SchemaKind`] plus a required
//! flag — or a nested schema, meaning the property must be a section
//! matching it.
//!
//! Validation is fail-fast: the first violation is returned as an
//! [`Error::Type`] naming the property, and nothing further is checked.
//! Success produces no output. Properties present in the document but not
//! declared in the schema are left alone.
//!
//! ## Examples
//!
//! ```rust
//! use typed_ini::{parse, Schema, SchemaKind};
//!
//! let schema = Schema::new()
//!     .field("email", SchemaKind::Email, true)
//!     .field("retries", SchemaKind::Number, false)
//!     .section("db", Schema::new().field("host", SchemaKind::String, true));
//!
//! let doc = parse("email=admin@example.com\n[db]\nhost=localhost").unwrap();
//! assert!(schema.validate(&doc).is_ok());
//!
//! let doc = parse("email=not-an-email\n[db]\nhost=localhost").unwrap();
//! assert!(schema.validate(&doc).is_err());
//! ```

use crate::{Error, IniMap, IniValue, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});
static HEX_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]*$").expect("valid hex value regex"));

/// Constraint kinds for leaf schema entries.
///
/// `OneOf` is the allowed-value set: the property must be a string and a
/// member of the listed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    String,
    Number,
    Boolean,
    Array,
    /// Lowercase hexadecimal string (`^[a-f0-9]*$`).
    Hex,
    Email,
    Url,
    /// The property must be a section.
    SectionHeader,
    /// The property must be one of the listed string values.
    OneOf(Vec<String>),
}

/// One schema entry: a leaf constraint or a nested section schema.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaNode {
    Field { kind: SchemaKind, required: bool },
    Section(Schema),
}

/// A declarative description of the properties a document must carry.
///
/// Entries are validated in insertion order, so the first declared
/// violation is the one reported.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Schema(IndexMap<String, SchemaNode>);

impl Schema {
    /// Creates an empty schema, which accepts any document.
    #[must_use]
    pub fn new() -> Self {
        Schema(IndexMap::new())
    }

    /// Declares a leaf property with a constraint kind and required flag.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: SchemaKind, required: bool) -> Self {
        self.0
            .insert(name.into(), SchemaNode::Field { kind, required });
        self
    }

    /// Declares a property that must be a section matching a sub-schema.
    #[must_use]
    pub fn section(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.0.insert(name.into(), SchemaNode::Section(schema));
        self
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validates a document, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] naming the property and the violated
    /// constraint.
    pub fn validate(&self, doc: &IniMap) -> Result<()> {
        for (name, node) in &self.0 {
            match node {
                SchemaNode::Section(sub_schema) => match doc.get(name) {
                    Some(IniValue::Section(section)) => sub_schema.validate(section)?,
                    _ => return Err(Error::type_error(name, "must be a section")),
                },
                SchemaNode::Field { kind, required } => match doc.get(name) {
                    None => {
                        if *required {
                            return Err(Error::required(name));
                        }
                    }
                    Some(value) => check_kind(name, kind, value)?,
                },
            }
        }
        Ok(())
    }
}

fn check_kind(name: &str, kind: &SchemaKind, value: &IniValue) -> Result<()> {
    match kind {
        SchemaKind::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.iter().any(|candidate| candidate == s) => Ok(()),
            _ => Err(Error::type_error(
                name,
                format!("must be one of: {}", allowed.join(", ")),
            )),
        },
        SchemaKind::Email => match value.as_str() {
            Some(s) if EMAIL_RE.is_match(s) => Ok(()),
            _ => Err(Error::type_error(name, "must be a valid email address")),
        },
        SchemaKind::Url => match value.as_str() {
            Some(s) if Url::parse(s).is_ok() => Ok(()),
            _ => Err(Error::type_error(name, "must be a valid URL")),
        },
        SchemaKind::Hex => match value.as_str() {
            Some(s) if HEX_VALUE_RE.is_match(s) => Ok(()),
            _ => Err(Error::type_error(
                name,
                "must be a lowercase hexadecimal string",
            )),
        },
        SchemaKind::String => {
            if value.is_string() {
                Ok(())
            } else {
                Err(Error::type_error(name, "must be a string"))
            }
        }
        SchemaKind::Number => match value.as_f64() {
            Some(n) if !n.is_nan() => Ok(()),
            _ => Err(Error::type_error(name, "must be a number")),
        },
        SchemaKind::Boolean => {
            if value.is_bool() {
                Ok(())
            } else {
                Err(Error::type_error(name, "must be a boolean"))
            }
        }
        SchemaKind::Array => {
            if value.is_array() {
                Ok(())
            } else {
                Err(Error::type_error(name, "must be an array"))
            }
        }
        SchemaKind::SectionHeader => {
            if value.is_section() {
                Ok(())
            } else {
                Err(Error::type_error(name, "must be a section"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(entries: &[(&str, IniValue)]) -> IniMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_required_missing() {
        let schema = Schema::new().field("email", SchemaKind::Email, true);
        let err = schema.validate(&IniMap::new()).unwrap_err();
        assert_eq!(err, Error::required("email"));
    }

    #[test]
    fn test_optional_missing_is_ok() {
        let schema = Schema::new().field("email", SchemaKind::Email, false);
        assert!(schema.validate(&IniMap::new()).is_ok());
    }

    #[test]
    fn test_email() {
        let schema = Schema::new().field("email", SchemaKind::Email, true);
        assert!(schema
            .validate(&doc(&[("email", IniValue::from("a@b.com"))]))
            .is_ok());
        assert!(schema
            .validate(&doc(&[("email", IniValue::from("not-an-email"))]))
            .is_err());
        // Numbers are not email strings.
        assert!(schema
            .validate(&doc(&[("email", IniValue::Number(5.0))]))
            .is_err());
    }

    #[test]
    fn test_url() {
        let schema = Schema::new().field("endpoint", SchemaKind::Url, true);
        assert!(schema
            .validate(&doc(&[("endpoint", IniValue::from("https://example.com/x"))]))
            .is_ok());
        assert!(schema
            .validate(&doc(&[("endpoint", IniValue::from("not a url"))]))
            .is_err());
    }

    #[test]
    fn test_hex_is_lowercase_only() {
        let schema = Schema::new().field("token", SchemaKind::Hex, true);
        assert!(schema
            .validate(&doc(&[("token", IniValue::from("deadbeef01"))]))
            .is_ok());
        assert!(schema
            .validate(&doc(&[("token", IniValue::from("DEADBEEF"))]))
            .is_err());
    }

    #[test]
    fn test_number_rejects_nan() {
        let schema = Schema::new().field("count", SchemaKind::Number, true);
        assert!(schema
            .validate(&doc(&[("count", IniValue::Number(3.0))]))
            .is_ok());
        assert!(schema
            .validate(&doc(&[("count", IniValue::Number(f64::NAN))]))
            .is_err());
    }

    #[test]
    fn test_one_of_lists_allowed_values() {
        let schema = Schema::new().field(
            "mode",
            SchemaKind::OneOf(vec!["dev".to_string(), "prod".to_string()]),
            true,
        );
        assert!(schema
            .validate(&doc(&[("mode", IniValue::from("dev"))]))
            .is_ok());
        let err = schema
            .validate(&doc(&[("mode", IniValue::from("staging"))]))
            .unwrap_err();
        assert!(err.to_string().contains("dev, prod"));
    }

    #[test]
    fn test_nested_schema_requires_section() {
        let schema = Schema::new().section(
            "db",
            Schema::new().field("host", SchemaKind::String, true),
        );
        // Absent and wrongly typed both fail the section check.
        assert!(schema.validate(&IniMap::new()).is_err());
        assert!(schema
            .validate(&doc(&[("db", IniValue::from("not a section"))]))
            .is_err());

        let inner = doc(&[("host", IniValue::from("localhost"))]);
        assert!(schema
            .validate(&doc(&[("db", IniValue::Section(inner))]))
            .is_ok());
    }

    #[test]
    fn test_fail_fast_reports_first_declared_violation() {
        let schema = Schema::new()
            .field("first", SchemaKind::Number, true)
            .field("second", SchemaKind::Number, true);
        let err = schema.validate(&IniMap::new()).unwrap_err();
        assert_eq!(err, Error::required("first"));
    }

    #[test]
    fn test_undeclared_properties_are_ignored() {
        let schema = Schema::new().field("known", SchemaKind::Number, false);
        let document = doc(&[("unknown", IniValue::from("anything"))]);
        assert!(schema.validate(&document).is_ok());
    }
}
