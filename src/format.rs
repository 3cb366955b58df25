//! The INI dialect accepted and produced by this crate.
//!
//! # Overview
//!
//! The format is a lenient, line-oriented INI variant: one assignment or
//! section header per line, with scalar values inferred into types
//! instead of being left as raw strings. It is deliberately forgiving —
//! there is no quoting, no escaping, no value interpolation, and no
//! multi-line values.
//!
//! # Lines
//!
//! ```text
//! ; a comment line
//! debug = true
//! retries = 3
//!
//! [db]
//! host = localhost
//! port = 5432
//! ```
//!
//! **Rules**:
//! - The end-of-line convention is detected per input: CRLF if `\r\n`
//!   occurs anywhere, LF otherwise
//! - Comment markers (default `;`, configurable as a list) truncate a
//!   line from the marker onward; markers are tried in configured order
//!   and the first one whose remainder is free of the other markers wins.
//!   Stripping is not escape-aware
//! - Blank lines (after stripping and trimming) are dropped
//! - Sections nest exactly one level: a `[name]` header makes `name` the
//!   active scope for every following assignment; there is no way to
//!   return to the top level
//! - Repeating a `[name]` header resets that section to empty
//!
//! # Scalar Type Inference
//!
//! Each value token is tested in strict order, first match wins:
//!
//! | Pattern | Result | Example |
//! |---------|--------|---------|
//! | `^[0-9]*\.?[0-9]*$` | decimal number | `3.14` → 3.14 |
//! | `true` / `false` | boolean | `true` |
//! | `[` ... `]` | array of trimmed strings | `[a, b]` → `["a", "b"]` |
//! | `^0x[0-9A-Fa-f]*$` | base-16 number | `0x1F` → 31 |
//! | `^0b[01]*$` | base-2 number | `0b101` → 5 |
//! | `^0o[0-7]*$` | base-8 number | `0o17` → 15 |
//! | anything else | string, unchanged | `localhost` |
//!
//! Numbers are 64-bit floats regardless of literal form. The decimal
//! pattern carries no sign, so `-1` is a string.
//!
//! # Duplicate Keys
//!
//! Assigning the same key twice in one scope promotes the value to a
//! two-element array; further assignments append. Promotion happens on
//! the raw text, and each element is then inferred independently:
//!
//! ```text
//! a = 1
//! a = 2
//! a = x
//! ```
//!
//! yields `a = [1, 2, "x"]`. This is different from a bracket literal
//! (`a = [1, 2, x]`), whose elements always stay strings.
//!
//! # Key and Section Name Rules
//!
//! - A name that the inference step would classify as a number is a
//!   syntax error (this includes the empty name, which evaluates to 0)
//! - A name containing whitespace follows the configured tri-state
//!   policy: `error` (default, syntax error), `ignore` (the line is
//!   dropped; a dropped header leaves the previous section active), or
//!   `allow`
//!
//! # Inherited Quirks
//!
//! These behaviors are preserved for compatibility with configurations
//! written against earlier implementations of the dialect:
//!
//! - **Empty value is zero.** `key =` evaluates to the number 0, because
//!   the empty string matches the decimal pattern
//! - **Lossy second `=`.** A line is split on every `=` and only the
//!   first two tokens are kept: `key=a=b` assigns `a` and silently drops
//!   `=b`
//! - **Bare radix prefixes are NaN.** `0x`, `0b`, and `0o` with no digits
//!   match their patterns but have nothing to convert
//! - **`[]` is a one-element array** containing the empty string, the
//!   result of splitting an empty bracket body on commas
//!
//! # Stringify
//!
//! Serialization walks a document in insertion order: scalar properties
//! first as `key = value` lines, then each section after a blank line
//! and its `[name]` header. Arrays are emitted as a plain comma join
//! (`a = 1,2,x`) — bracket syntax is not reconstructed, so array-valued
//! properties do not round-trip through parse/stringify. Values nested
//! deeper than one section level cannot be represented and raise a type
//! error naming the property.
//!
//! # Non-Goals
//!
//! - Multi-line values
//! - Value interpolation or substitution
//! - Quoting or escaping of delimiter characters inside strings and
//!   array elements
//! - Preservation of comments or blank lines through a round trip
//! - More than one level of section nesting

// This module contains only documentation; no implementation code
