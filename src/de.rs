//! Canonical decoding.
//!
//! Decoding runs in two passes:
//!
//! 1. serde_json reads the text into a preliminary tree of plain JSON nodes.
//!    Its diagnostics become [`Error::Syntax`] with line, column and the
//!    offending source line.
//! 2. [`reconstruct`] walks that tree and rebuilds each tagged array into the
//!    [`Value`] it names, rejecting JSON that does not follow the tag protocol.
//!
//! ## Usage
//!
//! ```rust
//! use serde_canon::{decode, Value};
//!
//! let value = decode(r#"["Array",1,["Undefined"]]"#).unwrap();
//! assert_eq!(value, Value::Array(vec![Value::from(1), Value::Undefined]));
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, TimeZone, Utc};
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::error::Category;

use crate::options::depth_exceeded;
use crate::path::Path;
use crate::{CanonOptions, Error, Number, ObjectMap, RegExp, Result, Tag, Value};

/// A plain JSON node, before tags are interpreted.
#[derive(Debug, PartialEq)]
pub(crate) enum Json {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Json>),
    /// Never canonical, so its members are checked for syntax but not kept.
    Object,
    /// A container nested deeper than `limit`, skipped without being built.
    TooDeep { limit: usize },
}

/// Builds [`Json`] nodes from serde_json's event stream.
///
/// Containers past `max_depth` are skipped with [`IgnoredAny`], which does not
/// recurse, so a depth limit also bounds the stack used while parsing.
#[derive(Clone, Copy)]
struct JsonSeed {
    depth: usize,
    max_depth: Option<usize>,
}

impl JsonSeed {
    fn nested(self) -> Self {
        JsonSeed {
            depth: self.depth + 1,
            ..self
        }
    }

    /// The limit this level exceeds, if any.
    fn exceeded(self) -> Option<usize> {
        self.max_depth.filter(|&limit| self.depth > limit)
    }
}

impl<'de> DeserializeSeed<'de> for JsonSeed {
    type Value = Json;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Json, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for JsonSeed {
    type Value = Json;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> std::result::Result<Json, E> {
        Ok(Json::Null)
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Json, E> {
        Ok(Json::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Json, E> {
        Ok(Json::Number(Number::Integer(value)))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Json, E> {
        Ok(Json::Number(Number::from(value)))
    }

    // `-0` and integers too wide for u64 arrive here as well.
    fn visit_f64<E>(self, value: f64) -> std::result::Result<Json, E> {
        Ok(Json::Number(Number::from_f64(value)))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Json, E> {
        Ok(Json::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Json, E> {
        Ok(Json::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Json, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if let Some(limit) = self.exceeded() {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            return Ok(Json::TooDeep { limit });
        }
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self.nested())? {
            items.push(item);
        }
        Ok(Json::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Json, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(match self.exceeded() {
            Some(limit) => Json::TooDeep { limit },
            None => Json::Object,
        })
    }
}

/// Parses one complete JSON document; only whitespace may follow the value.
///
/// serde_json's own recursion limit is switched off: nesting is bounded by
/// `max_depth` alone, the same way the encoder bounds it.
pub(crate) fn parse_json(text: &str, options: &CanonOptions) -> Result<Json> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let seed = JsonSeed {
        depth: 0,
        max_depth: options.max_depth,
    };
    let json = seed
        .deserialize(&mut deserializer)
        .map_err(|err| syntax_error(text, &err))?;
    deserializer.end().map_err(|err| syntax_error(text, &err))?;
    Ok(json)
}

const SYNTAX_HINTS: &[(&str, &str)] = &[
    ("trailing comma", "Trailing commas are not allowed in JSON"),
    ("expected `,` or `]`", "Separate array elements with commas"),
    ("key must be a string", "Object keys must be quoted"),
    ("trailing characters", "A canonical document holds exactly one value"),
    (
        "expected value",
        "Non-finite numbers are written [\"Number\",\"NaN\"], undefined as [\"Undefined\"]",
    ),
    (
        "number out of range",
        "Non-finite numbers are written [\"Number\",\"Infinity\"]",
    ),
    (
        "invalid escape",
        "Valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX",
    ),
    (
        "control character",
        "Control characters must be written as \\uXXXX escapes",
    ),
];

fn syntax_error(text: &str, err: &serde_json::Error) -> Error {
    let (line, col) = (err.line(), err.column());
    let full = err.to_string();
    let position = format!(" at line {} column {}", line, col);
    let msg = full.strip_suffix(&position).unwrap_or(&full);
    let hint = match err.classify() {
        Category::Eof => None,
        _ => SYNTAX_HINTS
            .iter()
            .find(|(prefix, _)| msg.starts_with(prefix))
            .map(|(_, hint)| *hint),
    };
    tracing::debug!(line, col, %msg, "rejecting invalid JSON");
    Error::syntax_with_context(line, col, msg, source_line(text, line, col), hint)
}

/// Reports bytes that are not UTF-8 at the position where decoding stopped.
pub(crate) fn invalid_utf8(bytes: &[u8], err: std::str::Utf8Error) -> Error {
    let valid = &bytes[..err.valid_up_to()];
    let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
    let col = valid.len() - line_start + 1;
    let context = std::str::from_utf8(&valid[line_start..]).unwrap_or_default();
    tracing::debug!(line, col, "rejecting input that is not UTF-8");
    Error::syntax_with_context(
        line,
        col,
        &err.to_string(),
        source_line(context, 1, col),
        Some("Canonical text is UTF-8"),
    )
}

/// The source line an error points at.
fn source_line(text: &str, line: usize, col: usize) -> &str {
    let source = text
        .split('\n')
        .nth(line.saturating_sub(1))
        .unwrap_or_default();
    let source = source.strip_suffix('\r').unwrap_or(source);
    // Long single-line documents are cut down to the neighbourhood of the error.
    if source.len() > 120 {
        let offset = col.min(source.len());
        let from = floor_char_boundary(source, offset.saturating_sub(60));
        let to = floor_char_boundary(source, (offset + 60).min(source.len()));
        &source[from..to]
    } else {
        source
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn malformed(path: &Path<'_>, msg: impl Into<String>) -> Error {
    let path = path.to_string();
    let msg = msg.into();
    tracing::debug!(%path, %msg, "rejecting malformed canonical form");
    Error::malformed(&path, msg)
}

/// Rebuilds a [`Value`] from a parsed JSON tree by interpreting its tags.
pub(crate) fn reconstruct(json: Json, path: &Path<'_>) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(b)),
        Json::Number(n) => Ok(Value::Number(n)),
        Json::String(s) => Ok(Value::String(s)),
        Json::Array(items) => reconstruct_tagged(items, path),
        Json::Object => Err(malformed(
            path,
            "bare JSON objects are not canonical; objects are written as [\"Object\", key, value, ...]",
        )),
        Json::TooDeep { limit } => Err(depth_exceeded(path, limit)),
    }
}

fn reconstruct_tagged(items: Vec<Json>, path: &Path<'_>) -> Result<Value> {
    let mut items = items.into_iter();
    let tag = match items.next() {
        Some(Json::String(name)) => {
            Tag::from_wire(&name).ok_or_else(|| malformed(path, format!("unknown tag {:?}", name)))?
        }
        Some(_) => {
            return Err(malformed(
                path,
                "untagged array; the first element must be a tag string",
            ))
        }
        None => return Err(malformed(path, "empty array has no tag")),
    };
    let payload: Vec<Json> = items.collect();

    match tag {
        Tag::Number => {
            let token = single_string(payload, tag, path)?;
            Number::from_special_token(&token)
                .map(Value::Number)
                .ok_or_else(|| {
                    malformed(
                        &path.index(1),
                        format!(
                            "expected \"Infinity\", \"-Infinity\" or \"NaN\", found {:?}",
                            token
                        ),
                    )
                })
        }
        Tag::Undefined => {
            if payload.is_empty() {
                Ok(Value::Undefined)
            } else {
                Err(malformed(
                    path,
                    format!("\"Undefined\" takes no payload, found {} values", payload.len()),
                ))
            }
        }
        Tag::Arguments => reconstruct_items(payload, path).map(Value::Arguments),
        Tag::Array => reconstruct_items(payload, path).map(Value::Array),
        Tag::Object => reconstruct_object(payload, path).map(Value::Object),
        Tag::Date => {
            let text = single_string(payload, tag, path)?;
            parse_date(&text)
                .map(Value::Date)
                .ok_or_else(|| malformed(&path.index(1), format!("invalid timestamp {:?}", text)))
        }
        Tag::RegExp => {
            let text = single_string(payload, tag, path)?;
            RegExp::parse_literal(&text)
                .map(Value::RegExp)
                .map_err(|err| malformed(&path.index(1), err.to_string()))
        }
    }
}

fn single_string(payload: Vec<Json>, tag: Tag, path: &Path<'_>) -> Result<String> {
    let count = payload.len();
    let mut payload = payload.into_iter();
    match (payload.next(), count) {
        (Some(Json::String(s)), 1) => Ok(s),
        (Some(_), 1) => Err(malformed(
            &path.index(1),
            format!("\"{}\" payload must be a string", tag),
        )),
        _ => Err(malformed(
            path,
            format!("\"{}\" takes exactly one payload value, found {}", tag, count),
        )),
    }
}

fn reconstruct_items(payload: Vec<Json>, path: &Path<'_>) -> Result<Vec<Value>> {
    payload
        .into_iter()
        .enumerate()
        .map(|(i, item)| reconstruct(item, &path.index(i + 1)))
        .collect()
}

/// Later duplicates of a key replace earlier values; key order is not checked.
fn reconstruct_object(payload: Vec<Json>, path: &Path<'_>) -> Result<ObjectMap> {
    if payload.len() % 2 != 0 {
        return Err(malformed(
            path,
            format!(
                "\"Object\" payload must alternate keys and values, found {} values",
                payload.len()
            ),
        ));
    }

    let mut map = ObjectMap::with_capacity(payload.len() / 2);
    let mut payload = payload.into_iter().enumerate();
    while let (Some((i, key)), Some((j, value))) = (payload.next(), payload.next()) {
        let key = match key {
            Json::String(key) => key,
            _ => return Err(malformed(&path.index(i + 1), "object key must be a string")),
        };
        let value = reconstruct(value, &path.index(j + 1))?;
        map.insert(key, value);
    }
    Ok(map)
}

/// Parses an RFC 3339 timestamp, or the `±YYYYYY-MM-DDTHH:MM:SS.sssZ` form used
/// for years outside 0..=9999, truncated to milliseconds.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let dt = match DateTime::parse_from_rfc3339(text) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => parse_expanded_year(text)?,
    };
    Some(dt.trunc_subsecs(3))
}

fn parse_expanded_year(text: &str) -> Option<DateTime<Utc>> {
    if !text.starts_with(['+', '-']) {
        return None;
    }
    let year: i32 = text.get(..7)?.parse().ok()?;
    let rest = text.get(7..)?.strip_prefix('-')?;
    let (month, rest) = rest.split_once('-')?;
    let (day, time) = rest.split_once('T')?;
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    let time = NaiveTime::parse_from_str(time.strip_suffix('Z')?, "%H:%M:%S%.f").ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

pub(crate) fn decode_value(text: &str, options: &CanonOptions) -> Result<Value> {
    let json = parse_json(text, options)?;
    reconstruct(json, &Path::Root)
}
