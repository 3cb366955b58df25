//! Line normalization and structural parsing.
//!
//! Parsing happens in fixed stages:
//!
//! 1. **Normalize**: detect the end-of-line convention, split into lines,
//!    strip comments and blank lines, trim what remains. Each surviving
//!    line keeps its 1-based source line number so syntax errors can cite
//!    the original input.
//! 2. **Structure**: [`DocumentBuilder`] consumes normalized lines,
//!    tracking the active `[section]` and applying duplicate-key
//!    promotion over raw string values. The builder owns the in-progress
//!    tree exclusively and releases an immutable typed document from
//!    `finish`.
//! 3. **Coerce**: every raw leaf goes through
//!    [`IniValue::evaluate`](crate::IniValue::evaluate) exactly once.
//!    Elements of promotion arrays are evaluated independently; elements
//!    of bracket literals were already fixed as strings by the evaluator.
//! 4. **Alias** (optional): rename properties at every nesting level.
//! 5. **Validate** (optional): run the schema supplied at read time.
//!
//! All scanning is loop-based; recursion appears only where it is bounded
//! by tree depth, never by input length.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use typed_ini::{parse, IniValue};
//!
//! let doc = parse("port=5432\n[db]\nhost=localhost").unwrap();
//! assert_eq!(doc.get("port"), Some(&IniValue::Number(5432.0)));
//! ```

use crate::options::{LineEnding, ParseOptions, ReadOptions, WhitespacePolicy};
use crate::schema::Schema;
use crate::{Error, IniMap, IniValue, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("valid section regex"));

/// One normalized line together with its 1-based line number in the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// A read source: the raw text, its detected line ending, and the
/// normalized lines ready for parsing.
///
/// Created by [`read`](crate::read) or [`read_file`](crate::read_file).
/// Parsing is a separate step so one source can be parsed repeatedly with
/// different [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use typed_ini::{read, LineEnding, ParseOptions, ReadOptions};
///
/// let source = read("a=1\r\n; comment\r\nb=2", ReadOptions::new());
/// assert_eq!(source.line_ending(), LineEnding::CrLf);
/// assert_eq!(source.lines().len(), 2);
///
/// let doc = source.parse(&ParseOptions::new()).unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ParsedSource {
    text: String,
    lines: Vec<SourceLine>,
    line_ending: LineEnding,
    schema: Option<Schema>,
}

impl ParsedSource {
    pub(crate) fn from_text(text: String, options: ReadOptions) -> Self {
        let line_ending = LineEnding::detect(&text);
        let lines = normalize(&text, &options.markers(), line_ending);
        ParsedSource {
            text,
            lines,
            line_ending,
            schema: options.validation_schema,
        }
    }

    /// The raw text this source was read from, unchanged.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The detected end-of-line convention.
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The normalized lines, each carrying its original line number.
    #[must_use]
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Parses the normalized lines into a typed document.
    ///
    /// Runs the structural parse, the coercion pass, the alias rewrite
    /// (when `options.aliases` is set), and schema validation (when the
    /// source was read with a schema), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] for malformed lines and [`Error::Type`]
    /// for schema violations.
    pub fn parse(&self, options: &ParseOptions) -> Result<IniMap> {
        let mut builder = DocumentBuilder::new(options.keys_with_spaces);
        for line in &self.lines {
            builder.consume(line)?;
        }
        let mut doc = builder.finish();
        if let Some(aliases) = &options.aliases {
            apply_aliases(&mut doc, aliases);
        }
        if let Some(schema) = &self.schema {
            schema.validate(&doc)?;
        }
        Ok(doc)
    }

    /// Parses and immediately re-stringifies using the detected line
    /// ending. Comments and blank lines do not survive the round trip,
    /// and bracket array literals come back as plain comma joins.
    ///
    /// # Errors
    ///
    /// Returns any error `parse` or the stringify engine would return.
    pub fn reformat(&self, options: &ParseOptions) -> Result<String> {
        let doc = self.parse(options)?;
        crate::stringify::stringify_with_eol(&doc, self.line_ending)
    }
}

/// Splits, strips comments from, and trims the raw text, keeping only
/// non-blank lines and their original 1-based numbers.
fn normalize(text: &str, markers: &[String], line_ending: LineEnding) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    for (index, raw) in text.split(line_ending.as_str()).enumerate() {
        let stripped = strip_comment(raw, markers);
        let trimmed = stripped.trim();
        if !trimmed.is_empty() {
            lines.push(SourceLine {
                number: index + 1,
                text: trimmed.to_string(),
            });
        }
    }
    lines
}

/// Truncates a line at its comment, if any.
///
/// Markers are tried in configured order; the first marker whose
/// truncation point leaves a remainder free of every other marker is
/// applied. No marker is escape-aware.
fn strip_comment<'a>(line: &'a str, markers: &[String]) -> &'a str {
    if !markers.iter().any(|m| line.contains(m.as_str())) {
        return line;
    }
    for marker in markers {
        if let Some(index) = line.find(marker.as_str()) {
            let remainder = &line[..index];
            let clean = markers
                .iter()
                .all(|other| other == marker || !remainder.contains(other.as_str()));
            if clean {
                return remainder;
            }
        }
    }
    line
}

/// A raw scalar slot: one assignment, or the accumulating array that
/// duplicate-key promotion builds out of repeated assignments.
#[derive(Debug, Clone)]
enum RawValue {
    One(String),
    Many(Vec<String>),
}

fn promote(slot: &mut RawValue, value: String) {
    match slot {
        RawValue::One(first) => {
            let first = std::mem::take(first);
            *slot = RawValue::Many(vec![first, value]);
        }
        RawValue::Many(items) => items.push(value),
    }
}

fn coerce(raw: RawValue) -> IniValue {
    match raw {
        RawValue::One(token) => IniValue::evaluate(&token),
        RawValue::Many(items) => IniValue::Array(
            items
                .iter()
                .map(|token| IniValue::evaluate(token))
                .collect(),
        ),
    }
}

#[derive(Debug, Clone)]
enum RawEntry {
    Value(RawValue),
    Section(IndexMap<String, RawValue>),
}

/// Builds the raw document line by line, then coerces it into the typed
/// tree in one pass. The raw tree is never visible outside the builder.
struct DocumentBuilder {
    policy: WhitespacePolicy,
    root: IndexMap<String, RawEntry>,
    current: Option<String>,
}

impl DocumentBuilder {
    fn new(policy: WhitespacePolicy) -> Self {
        DocumentBuilder {
            policy,
            root: IndexMap::new(),
            current: None,
        }
    }

    fn consume(&mut self, line: &SourceLine) -> Result<()> {
        if let Some(caps) = SECTION_RE.captures(&line.text) {
            let name = caps[1].trim().to_string();
            if IniValue::evaluate(&name).is_number() {
                return Err(Error::syntax(line.number, "section name cannot be a number"));
            }
            if name.contains(char::is_whitespace) {
                match self.policy {
                    WhitespacePolicy::Allow => {}
                    // The previously active section stays active.
                    WhitespacePolicy::Ignore => return Ok(()),
                    WhitespacePolicy::Error => {
                        return Err(Error::syntax(
                            line.number,
                            format!("section name '{}' contains whitespace", name),
                        ));
                    }
                }
            }
            // A repeated header resets the section to empty.
            self.root
                .insert(name.clone(), RawEntry::Section(IndexMap::new()));
            self.current = Some(name);
            return Ok(());
        }

        if !line.text.contains('=') {
            return Err(Error::syntax(line.number, "expected a key-value pair"));
        }

        // Split on every '=' and keep only the first two tokens; content
        // after a second '=' is dropped.
        let mut tokens = line.text.split('=');
        let key = tokens.next().unwrap_or("").trim().to_string();
        let value = tokens.next().unwrap_or("").trim().to_string();

        if IniValue::evaluate(&key).is_number() {
            return Err(Error::syntax(line.number, "key cannot be a number"));
        }
        if key.contains(char::is_whitespace) {
            match self.policy {
                WhitespacePolicy::Allow => {}
                WhitespacePolicy::Ignore => return Ok(()),
                WhitespacePolicy::Error => {
                    return Err(Error::syntax(
                        line.number,
                        format!("key '{}' contains whitespace", key),
                    ));
                }
            }
        }

        self.assign(key, value);
        Ok(())
    }

    fn assign(&mut self, key: String, value: String) {
        match &self.current {
            None => match self.root.get_mut(&key) {
                Some(RawEntry::Value(slot)) => promote(slot, value),
                _ => {
                    self.root.insert(key, RawEntry::Value(RawValue::One(value)));
                }
            },
            Some(section_name) => {
                let Some(RawEntry::Section(section)) = self.root.get_mut(section_name) else {
                    return;
                };
                match section.get_mut(&key) {
                    Some(slot) => promote(slot, value),
                    None => {
                        section.insert(key, RawValue::One(value));
                    }
                }
            }
        }
    }

    fn finish(self) -> IniMap {
        let mut doc = IniMap::with_capacity(self.root.len());
        for (key, entry) in self.root {
            let value = match entry {
                RawEntry::Value(raw) => coerce(raw),
                RawEntry::Section(entries) => {
                    let mut section = IniMap::with_capacity(entries.len());
                    for (name, raw) in entries {
                        section.insert(name, coerce(raw));
                    }
                    IniValue::Section(section)
                }
            };
            doc.insert(key, value);
        }
        doc
    }
}

/// Renames properties according to the alias table, at every nesting
/// level. Sections are rewritten before their own name is considered.
/// The copy happens before the removal, so an alias that maps a name to
/// itself removes the property, and of two source keys mapping to the
/// same alias the later one wins.
pub(crate) fn apply_aliases(map: &mut IniMap, aliases: &IndexMap<String, String>) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if let Some(IniValue::Section(section)) = map.get_mut(&key) {
            apply_aliases(section, aliases);
        }
        if let Some(alias) = aliases.get(&key) {
            if let Some(value) = map.get(&key).cloned() {
                map.insert(alias.clone(), value);
                map.shift_remove(&key);
            }
        }
    }
}
