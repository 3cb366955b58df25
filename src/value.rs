//! Typed value representation and scalar type inference.
//!
//! This module provides the [`IniValue`] enum which represents any value a
//! parsed document can hold, together with [`IniValue::evaluate`], the
//! inference step that turns one raw scalar token into a typed value.
//!
//! ## Core Types
//!
//! - [`IniValue`]: a tagged union (number, boolean, string, array, section)
//!   decided once at construction — consumers match on the tag instead of
//!   re-inspecting values at runtime
//!
//! ## Inference Precedence
//!
//! [`IniValue::evaluate`] applies pattern tests in a strict order, first
//! match wins:
//!
//! 1. `^[0-9]*\.?[0-9]*$` → decimal number (the empty string matches and
//!    evaluates to `0`, an inherited quirk)
//! 2. exactly `true` or `false` → boolean
//! 3. starts with `[` and ends with `]` → array of trimmed string elements,
//!    never recursively evaluated
//! 4. `^0x[0-9A-Fa-f]*$` → base-16 number
//! 5. `^0b[01]*$` → base-2 number
//! 6. `^0o[0-7]*$` → base-8 number
//! 7. anything else → string, unchanged
//!
//! ```rust
//! use typed_ini::IniValue;
//!
//! assert_eq!(IniValue::evaluate("0x1F"), IniValue::Number(31.0));
//! assert_eq!(IniValue::evaluate("true"), IniValue::Bool(true));
//! assert_eq!(IniValue::evaluate("hello"), IniValue::String("hello".to_string()));
//! ```

use crate::IniMap;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("valid decimal regex"));
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9A-Fa-f]*$").expect("valid hex regex"));
static BINARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0b[01]*$").expect("valid binary regex"));
static OCTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0o[0-7]*$").expect("valid octal regex"));

/// A typed INI value.
///
/// Every value in a parsed document is one of these variants. Numbers are
/// 64-bit floats regardless of the literal form they were written in
/// (decimal, hex, binary, or octal). Arrays come from two places with
/// deliberately different element typing:
///
/// - a bracket literal (`tags=[a, b, c]`) produces all-`String` elements,
///   never coerced further
/// - duplicate-key promotion (`a=1` then `a=x`) produces elements that were
///   each evaluated independently
///
/// # Examples
///
/// ```rust
/// use typed_ini::IniValue;
///
/// let num = IniValue::Number(42.0);
/// let text = IniValue::from("hello");
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum IniValue {
    Number(f64),
    Bool(bool),
    String(String),
    Array(Vec<IniValue>),
    Section(IniMap),
}

impl IniValue {
    /// Infers a typed value from one raw scalar token.
    ///
    /// Tests are applied in the strict order documented at the module
    /// level; the first match wins. The token is expected to be already
    /// trimmed (the parser trims before evaluating).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_ini::IniValue;
    ///
    /// assert_eq!(IniValue::evaluate("3.14"), IniValue::Number(3.14));
    /// assert_eq!(IniValue::evaluate("0b101"), IniValue::Number(5.0));
    /// assert_eq!(IniValue::evaluate("0o17"), IniValue::Number(15.0));
    /// // The empty string numerically evaluates to zero.
    /// assert_eq!(IniValue::evaluate(""), IniValue::Number(0.0));
    ///
    /// // Bracket-literal elements stay strings.
    /// let arr = IniValue::evaluate("[1, 2]");
    /// assert_eq!(
    ///     arr,
    ///     IniValue::Array(vec![
    ///         IniValue::String("1".to_string()),
    ///         IniValue::String("2".to_string()),
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(token: &str) -> IniValue {
        if DECIMAL_RE.is_match(token) {
            return IniValue::Number(parse_decimal(token));
        }
        if token == "true" {
            return IniValue::Bool(true);
        }
        if token == "false" {
            return IniValue::Bool(false);
        }
        if token.starts_with('[') && token.ends_with(']') {
            let inner = &token[1..token.len() - 1];
            let elements = inner
                .split(',')
                .map(|element| IniValue::String(element.trim().to_string()))
                .collect();
            return IniValue::Array(elements);
        }
        if HEX_RE.is_match(token) {
            return IniValue::Number(parse_radix(&token[2..], 16));
        }
        if BINARY_RE.is_match(token) {
            return IniValue::Number(parse_radix(&token[2..], 2));
        }
        if OCTAL_RE.is_match(token) {
            return IniValue::Number(parse_radix(&token[2..], 8));
        }
        IniValue::String(token.to_string())
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, IniValue::Number(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, IniValue::Bool(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, IniValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, IniValue::Array(_))
    }

    /// Returns `true` if the value is a section.
    #[inline]
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, IniValue::Section(_))
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IniValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IniValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<IniValue>> {
        match self {
            IniValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a section, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&IniMap> {
        match self {
            IniValue::Section(map) => Some(map),
            _ => None,
        }
    }
}

fn parse_decimal(token: &str) -> f64 {
    // "" matched the decimal pattern and numerically evaluates to zero.
    if token.is_empty() {
        return 0.0;
    }
    token.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    // A bare prefix ("0x", "0b", "0o") has no digits to convert.
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    })
}

/// Formats a number the way the stringify engine emits it: no trailing
/// `.0` on whole values, `Infinity`/`-Infinity`/`NaN` spelled out.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Number(n) => write!(f, "{}", format_number(*n)),
            IniValue::Bool(b) => write!(f, "{}", b),
            IniValue::String(s) => write!(f, "{}", s),
            IniValue::Array(arr) => {
                // Plain comma join; bracket syntax is not reconstructed.
                write!(
                    f,
                    "{}",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            IniValue::Section(_) => write!(f, "{{section}}"),
        }
    }
}

impl Serialize for IniValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            IniValue::Number(n) => serializer.serialize_f64(*n),
            IniValue::Bool(b) => serializer.serialize_bool(*b),
            IniValue::String(s) => serializer.serialize_str(s),
            IniValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            IniValue::Section(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IniValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IniValueVisitor;

        impl<'de> Visitor<'de> for IniValueVisitor {
            type Value = IniValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, boolean, string, array, or map")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }
                Ok(IniValue::Array(vec))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = IniMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(IniValue::Section(map))
            }
        }

        deserializer.deserialize_any(IniValueVisitor)
    }
}

impl TryFrom<IniValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Number(n) => Ok(n),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<IniValue> for bool {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<IniValue> for String {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for IniValue {
    fn from(value: bool) -> Self {
        IniValue::Bool(value)
    }
}

impl From<i8> for IniValue {
    fn from(value: i8) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<i16> for IniValue {
    fn from(value: i16) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<i32> for IniValue {
    fn from(value: i32) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<u8> for IniValue {
    fn from(value: u8) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<u16> for IniValue {
    fn from(value: u16) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<u32> for IniValue {
    fn from(value: u32) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<f32> for IniValue {
    fn from(value: f32) -> Self {
        IniValue::Number(f64::from(value))
    }
}

impl From<f64> for IniValue {
    fn from(value: f64) -> Self {
        IniValue::Number(value)
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        IniValue::String(value)
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue::String(value.to_string())
    }
}

impl From<Vec<IniValue>> for IniValue {
    fn from(value: Vec<IniValue>) -> Self {
        IniValue::Array(value)
    }
}

impl From<IniMap> for IniValue {
    fn from(value: IniMap) -> Self {
        IniValue::Section(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_precedence() {
        assert_eq!(IniValue::evaluate("42"), IniValue::Number(42.0));
        assert_eq!(IniValue::evaluate("3.14"), IniValue::Number(3.14));
        assert_eq!(IniValue::evaluate(".5"), IniValue::Number(0.5));
        assert_eq!(IniValue::evaluate("5."), IniValue::Number(5.0));
        assert_eq!(IniValue::evaluate(""), IniValue::Number(0.0));
    }

    #[test]
    fn test_lone_dot_is_nan() {
        match IniValue::evaluate(".") {
            IniValue::Number(n) => assert!(n.is_nan()),
            other => panic!("expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_numbers_are_strings() {
        // The decimal pattern has no sign, so negatives fall through.
        assert_eq!(
            IniValue::evaluate("-1"),
            IniValue::String("-1".to_string())
        );
    }

    #[test]
    fn test_booleans() {
        assert_eq!(IniValue::evaluate("true"), IniValue::Bool(true));
        assert_eq!(IniValue::evaluate("false"), IniValue::Bool(false));
        assert_eq!(
            IniValue::evaluate("True"),
            IniValue::String("True".to_string())
        );
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(IniValue::evaluate("0x1F"), IniValue::Number(31.0));
        assert_eq!(IniValue::evaluate("0xff"), IniValue::Number(255.0));
        assert_eq!(IniValue::evaluate("0b101"), IniValue::Number(5.0));
        assert_eq!(IniValue::evaluate("0o17"), IniValue::Number(15.0));
    }

    #[test]
    fn test_bare_radix_prefix_is_nan() {
        for token in ["0x", "0b", "0o"] {
            match IniValue::evaluate(token) {
                IniValue::Number(n) => assert!(n.is_nan(), "{} should be NaN", token),
                other => panic!("expected number for {}, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_invalid_radix_digits_are_strings() {
        assert_eq!(
            IniValue::evaluate("0xZZ"),
            IniValue::String("0xZZ".to_string())
        );
        assert_eq!(
            IniValue::evaluate("0b12"),
            IniValue::String("0b12".to_string())
        );
        assert_eq!(
            IniValue::evaluate("0o8"),
            IniValue::String("0o8".to_string())
        );
    }

    #[test]
    fn test_array_literal_elements_stay_strings() {
        let arr = IniValue::evaluate("[1, true, 0x1F]");
        assert_eq!(
            arr,
            IniValue::Array(vec![
                IniValue::String("1".to_string()),
                IniValue::String("true".to_string()),
                IniValue::String("0x1F".to_string()),
            ])
        );
    }

    #[test]
    fn test_empty_array_literal() {
        // "[]" splits into a single empty-string element.
        assert_eq!(
            IniValue::evaluate("[]"),
            IniValue::Array(vec![IniValue::String(String::new())])
        );
    }

    #[test]
    fn test_unmatched_bracket_is_string() {
        assert_eq!(
            IniValue::evaluate("[a, b"),
            IniValue::String("[a, b".to_string())
        );
    }

    #[test]
    fn test_display_join() {
        let arr = IniValue::Array(vec![
            IniValue::Number(1.0),
            IniValue::Number(2.0),
            IniValue::String("x".to_string()),
        ]);
        assert_eq!(arr.to_string(), "1,2,x");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_accessors() {
        let value = IniValue::Number(42.0);
        assert!(value.is_number());
        assert_eq!(value.as_f64(), Some(42.0));
        assert_eq!(value.as_str(), None);

        let value = IniValue::from("hi");
        assert_eq!(value.as_str(), Some("hi"));
        assert!(!value.is_section());
    }

    #[test]
    fn test_tryfrom_extractors() {
        let n: f64 = IniValue::Number(2.5).try_into().unwrap();
        assert_eq!(n, 2.5);

        let b: bool = IniValue::Bool(true).try_into().unwrap();
        assert!(b);

        let s: String = IniValue::from("hello").try_into().unwrap();
        assert_eq!(s, "hello");

        assert!(f64::try_from(IniValue::Bool(false)).is_err());
    }
}
