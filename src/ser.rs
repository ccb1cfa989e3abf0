//! Canonical encoding.
//!
//! This module provides the [`Encoder`] that writes a [`Value`] as canonical
//! text. Objects are written with their keys sorted; everything that JSON
//! cannot express natively is written as a tagged array.
//!
//! ## Usage
//!
//! Most users should use [`encode`](crate::encode) from the crate root:
//!
//! ```rust
//! use serde_canon::{canon, encode};
//!
//! let value = canon!({"foo": 1, "bar": 2, "baz": 3});
//! assert_eq!(encode(&value).unwrap(), r#"["Object","bar",2,"baz",3,"foo",1]"#);
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use serde_canon::{canon, CanonOptions, Encoder};
//!
//! let mut encoder = Encoder::new(CanonOptions::new());
//! encoder.encode(&canon!([1, 2, 3])).unwrap();
//! assert_eq!(encoder.into_inner(), r#"["Array",1,2,3]"#);
//! ```

use chrono::{DateTime, Datelike, Utc};

use crate::path::Path;
use crate::{CanonOptions, Error, Number, ObjectMap, Result, Tag, Value};

/// The canonical encoder.
///
/// Writes into a single growing buffer; one encoder can only produce one
/// document.
pub struct Encoder {
    output: String,
    options: CanonOptions,
    indent_level: usize,
}

impl Encoder {
    pub fn new(options: CanonOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the canonical text of `value`.
    ///
    /// # Errors
    ///
    /// [`Error::Unserializable`] if `value` contains a function at any depth,
    /// [`Error::DepthLimitExceeded`] if it nests deeper than `max_depth`.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        self.write_value(value, &Path::Root, 0)
    }

    fn write_value(&mut self, value: &Value, path: &Path<'_>, depth: usize) -> Result<()> {
        if writes_array(value) {
            self.options.check_depth(depth, path)?;
        }

        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n)?,
            Value::String(s) => write_json_string(&mut self.output, s)?,
            Value::Undefined => {
                self.begin_tagged(Tag::Undefined)?;
                self.end_array();
            }
            Value::Array(items) => self.write_sequence(Tag::Array, items, path, depth)?,
            Value::Arguments(items) => self.write_sequence(Tag::Arguments, items, path, depth)?,
            Value::Object(obj) => self.write_object(obj, path, depth)?,
            Value::Date(dt) => {
                self.begin_tagged(Tag::Date)?;
                self.next_element();
                write_json_string(&mut self.output, &format_date(dt))?;
                self.end_array();
            }
            Value::RegExp(re) => {
                self.begin_tagged(Tag::RegExp)?;
                self.next_element();
                write_json_string(&mut self.output, &re.to_string())?;
                self.end_array();
            }
            Value::Function(func) => {
                let path = path.to_string();
                tracing::debug!(%path, name = func.name(), "refusing to encode a function");
                return Err(Error::unserializable(&path));
            }
        }
        Ok(())
    }

    fn write_number(&mut self, n: &Number) -> Result<()> {
        match n.special_token() {
            Some(token) => {
                self.begin_tagged(Tag::Number)?;
                self.next_element();
                write_json_string(&mut self.output, token)?;
                self.end_array();
            }
            None => n.write_finite(&mut self.output),
        }
        Ok(())
    }

    fn write_sequence(
        &mut self,
        tag: Tag,
        items: &[Value],
        path: &Path<'_>,
        depth: usize,
    ) -> Result<()> {
        self.begin_tagged(tag)?;
        for (i, item) in items.iter().enumerate() {
            self.next_element();
            self.write_value(item, &path.index(i + 1), depth + 1)?;
        }
        self.end_array();
        Ok(())
    }

    fn write_object(&mut self, obj: &ObjectMap, path: &Path<'_>, depth: usize) -> Result<()> {
        self.begin_tagged(Tag::Object)?;
        for (i, (key, value)) in obj.sorted_entries().into_iter().enumerate() {
            self.next_element();
            write_json_string(&mut self.output, key)?;
            self.next_element();
            self.write_value(value, &path.index(2 * i + 2), depth + 1)?;
        }
        self.end_array();
        Ok(())
    }

    /// Opens a JSON array and writes its tag as the first element.
    fn begin_tagged(&mut self, tag: Tag) -> Result<()> {
        self.output.push('[');
        self.indent_level += 1;
        self.write_newline();
        write_json_string(&mut self.output, tag.as_str())
    }

    /// Separates the previous element from the next one.
    fn next_element(&mut self) {
        self.output.push(',');
        self.write_newline();
    }

    fn end_array(&mut self) {
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            self.output
                .extend(std::iter::repeat(' ').take(self.indent_level * self.options.indent));
        }
    }
}

/// Whether `value` is written as a JSON array.
fn writes_array(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => false,
        Value::Number(n) => n.special_token().is_some(),
        _ => true,
    }
}

pub(crate) fn encode_value(value: &Value, options: &CanonOptions) -> Result<String> {
    let mut encoder = Encoder::new(options.clone());
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}

/// Writes `s` as a JSON string literal.
///
/// serde_json escapes the same characters `JSON.stringify` does: quotes,
/// backslashes and control characters, with short forms where they exist.
pub(crate) fn write_json_string(out: &mut String, s: &str) -> Result<()> {
    let literal = serde_json::to_string(s).map_err(Error::custom)?;
    out.push_str(&literal);
    Ok(())
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, or `±YYYYYY-...` outside years 0..=9999.
pub(crate) fn format_date(dt: &DateTime<Utc>) -> String {
    let year = dt.year();
    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!("{}{:06}", sign, year.unsigned_abs())
    };
    format!("{}{}", year, dt.format("-%m-%dT%H:%M:%S%.3fZ"))
}
