//! # serde_canon
//!
//! A canonical, lossless text encoding for dynamically typed values.
//!
//! ## What is the canonical form?
//!
//! Every value is written as JSON text, but anything JSON cannot represent
//! faithfully is written as a *tagged array*: a JSON array whose first element
//! is a type tag naming how to rebuild the value.
//!
//! | Value                        | Canonical text                          |
//! |------------------------------|-----------------------------------------|
//! | `true`, `null`, `"s"`, `0`   | `true`, `null`, `"s"`, `0`              |
//! | negative zero                | `-0`                                    |
//! | infinity, NaN                | `["Number","Infinity"]`, `["Number","NaN"]` |
//! | undefined                    | `["Undefined"]`                         |
//! | array                        | `["Array",1,2,3]`                       |
//! | argument list                | `["Arguments","x","y"]`                 |
//! | object                       | `["Object","a",1,"b",2]` (sorted keys)  |
//! | date                         | `["Date","2012-10-14T20:27:37.000Z"]`   |
//! | regular expression           | `["RegExp","/^foo$/im"]`                |
//!
//! Because object keys are sorted and numbers have exactly one spelling,
//! two equal values always encode to byte-identical text. This makes the
//! output suitable for hashing, caching and comparing structured data.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_canon::{canon, decode, encode};
//!
//! let value = canon!({"foo": 1, "bar": 2, "baz": 3});
//! let text = encode(&value).unwrap();
//! assert_eq!(text, r#"["Object","bar",2,"baz",3,"foo",1]"#);
//!
//! assert_eq!(decode(&text).unwrap(), value);
//! ```
//!
//! ### Functions are refused
//!
//! ```rust
//! use serde_canon::{encode, ErrorKind, Function, Value};
//!
//! let f = Value::Function(Function::new("add", |_| Value::Undefined));
//! let err = encode(&Value::Array(vec![Value::from(-1), f])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unserializable);
//! assert_eq!(err.to_string(), "Functions cannot be serialized");
//! ```
//!
//! ### Rust types through serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_canon::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     name: String,
//!     id: u32,
//! }
//!
//! let user = User { name: "Alice".to_string(), id: 123 };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#"["Object","id",123,"name","Alice"]"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(back, user);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `trace` on every public entry point and
//! `debug` whenever an input is rejected. Install a subscriber to see them.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - Nesting depth can be bounded with [`CanonOptions::with_max_depth`]
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`basic.rs`** - encoding and decoding values
//! - **`extended_types.rs`** - dates, regular expressions, undefined and non-finite numbers
//! - **`serde_bridge.rs`** - structs and enums through serde
//!
//! Run any of them with: `cargo run --example <name>`

mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod number;
pub mod options;
mod path;
pub mod regexp;
pub mod ser;
pub mod tag;
pub mod value;
pub mod value_de;
pub mod value_ser;

pub use error::{Error, ErrorKind, Result};
pub use map::ObjectMap;
pub use number::Number;
pub use options::CanonOptions;
pub use regexp::RegExp;
pub use ser::Encoder;
pub use tag::Tag;
pub use value::{Function, Value};
pub use value_de::ValueDeserializer;
pub use value_ser::ValueSerializer;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encodes `value` in canonical form.
///
/// # Examples
///
/// ```rust
/// use serde_canon::{canon, encode};
///
/// assert_eq!(encode(&canon!([1, 2, 3])).unwrap(), r#"["Array",1,2,3]"#);
/// assert_eq!(encode(&canon!(-0.0)).unwrap(), "-0");
/// ```
///
/// # Errors
///
/// [`ErrorKind::Unserializable`] if `value` contains a [`Function`] anywhere.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &CanonOptions::default())
}

/// Encodes `value` with custom options.
///
/// # Errors
///
/// [`ErrorKind::Unserializable`] for functions, [`ErrorKind::DepthLimitExceeded`]
/// if `options.max_depth` is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: &CanonOptions) -> Result<String> {
    tracing::trace!(kind = value.type_name(), pretty = options.pretty, "encoding value");
    ser::encode_value(value, options)
}

/// Decodes canonical text back into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_canon::{decode, Value};
///
/// assert_eq!(decode(r#"["Undefined"]"#).unwrap(), Value::Undefined);
/// assert!(decode("-0").unwrap().as_f64().unwrap().is_sign_negative());
/// ```
///
/// # Errors
///
/// [`ErrorKind::Syntax`] if the text is not valid JSON, and
/// [`ErrorKind::MalformedCanonicalForm`] if it is JSON that does not follow the
/// tagged-array protocol.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &CanonOptions::default())
}

/// Decodes canonical text with custom options.
///
/// # Errors
///
/// As [`decode`], plus [`ErrorKind::DepthLimitExceeded`] if `options.max_depth`
/// is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(text: &str, options: &CanonOptions) -> Result<Value> {
    tracing::trace!(len = text.len(), "decoding value");
    de::decode_value(text, options)
}

/// Serializes any `T: Serialize` to canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_canon::to_string;
/// use std::collections::HashMap;
///
/// let mut scores = HashMap::new();
/// scores.insert("zed", 1);
/// scores.insert("amy", 2);
/// assert_eq!(to_string(&scores).unwrap(), r#"["Object","amy",2,"zed",1]"#);
/// ```
///
/// # Errors
///
/// Returns an error if `T`'s `Serialize` implementation fails or produces a
/// map with keys that are not strings or integers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &CanonOptions::default())
}

/// Serializes any `T: Serialize` to pretty-printed text.
///
/// The output decodes to the same value but is not the canonical form.
///
/// # Errors
///
/// As [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &CanonOptions::pretty())
}

/// Serializes any `T: Serialize` with custom options.
///
/// # Errors
///
/// As [`to_string`], plus [`ErrorKind::DepthLimitExceeded`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &CanonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    encode_with_options(&value, options)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_canon::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if `T`'s `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value_ser::to_value(value)
}

/// Reads a `T: Deserialize` out of a [`Value`].
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    value_de::from_value(value)
}

/// Serializes any `T: Serialize` to a writer in canonical form.
///
/// # Examples
///
/// ```rust
/// use serde_canon::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, br#"["Array",1,2]"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &CanonOptions::default())
}

/// Serializes any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &CanonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Deserializes a `T` from canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_canon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"["Object","x",1,"y",2]"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text does not decode, or the decoded value cannot be
/// read as `T`. Syntax errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Deserializes a `T` from bytes of canonical text.
///
/// # Errors
///
/// Returns a syntax error if the bytes are not valid UTF-8, or as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| de::invalid_utf8(v, e))?;
    from_str(s)
}

/// Deserializes a `T` from an I/O stream of canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_canon::from_reader;
/// use std::io::Cursor;
///
/// let numbers: Vec<i32> = from_reader(Cursor::new(br#"["Array",1,2,3]"#)).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, or as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}
