//! Type tags and the canonical wire format.
//!
//! # Overview
//!
//! Canonical text is always a valid JSON document. Atomic values use the
//! token shapes a standard JSON encoder produces, with a single exception:
//! negative zero is written `-0`. Every other value is written as a JSON array
//! whose first element is a [`Tag`] string naming how the rest of the array
//! (the *payload*) is reconstructed.
//!
//! | Value | Canonical text |
//! |-------|----------------|
//! | `true`, `false`, `null` | `true`, `false`, `null` |
//! | finite number | `0`, `-0`, `42`, `3.5`, `1e+21`, `1.5e-7` |
//! | string | `"foo bar"` (JSON escaping) |
//! | non-finite number | `["Number","Infinity"]`, `["Number","-Infinity"]`, `["Number","NaN"]` |
//! | undefined | `["Undefined"]` |
//! | argument list | `["Arguments","x","y"]` |
//! | array | `["Array",1,2,3]` |
//! | object | `["Object","bar",2,"baz",3,"foo",1]` |
//! | date | `["Date","2012-10-14T20:27:37.000Z"]` |
//! | regular expression | `["RegExp","/^foo$/im"]` |
//!
//! # Objects
//!
//! Object payloads alternate key and value. Keys are emitted in ascending
//! ordinal order of their string value, so two objects holding the same pairs
//! always produce the same text no matter how they were built.
//!
//! # Numbers
//!
//! Finite numbers follow the ECMAScript `Number::toString` rules: the shortest
//! digit string that round-trips, in plain notation when the decimal exponent
//! lies in `[-6, 21)` and in `d.ddde±x` notation otherwise. Integers are
//! printed exactly.
//!
//! # Dates
//!
//! Dates are UTC timestamps with millisecond precision and a literal `Z`
//! suffix. Years outside `0..=9999` use the expanded form `+YYYYYY` / `-YYYYYY`.
//!
//! # Regular expressions
//!
//! The payload is `/`, the pattern source, `/`, then the flags in the order
//! `d g i m s u v y`. The decoder splits at the *last* `/`, so the source may
//! itself contain slashes.
//!
//! # Limitations
//!
//! - Functions have no canonical form; encoding one is an error.
//! - Bare JSON objects (`{...}`) and untagged arrays are not canonical and are
//!   rejected by the decoder.
//! - Whitespace between tokens is accepted when decoding but never produced by
//!   the compact encoder.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The leading string of a tagged array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Number,
    Undefined,
    Arguments,
    Date,
    RegExp,
    Array,
    Object,
}

impl Tag {
    /// All tags, in the order they are documented.
    pub const ALL: [Tag; 7] = [
        Tag::Number,
        Tag::Undefined,
        Tag::Arguments,
        Tag::Date,
        Tag::RegExp,
        Tag::Array,
        Tag::Object,
    ];

    /// Returns the tag as it appears on the wire.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Tag;
    ///
    /// assert_eq!(Tag::RegExp.as_str(), "RegExp");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Number => "Number",
            Tag::Undefined => "Undefined",
            Tag::Arguments => "Arguments",
            Tag::Date => "Date",
            Tag::RegExp => "RegExp",
            Tag::Array => "Array",
            Tag::Object => "Object",
        }
    }

    /// Looks up a wire tag. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|tag| tag.as_str() == s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_wire(s).ok_or_else(|| Error::invalid_value(format!("unknown tag {:?}", s)))
    }
}

/// Payload strings of the `Number` tag.
pub(crate) const INFINITY: &str = "Infinity";
pub(crate) const NEG_INFINITY: &str = "-Infinity";
pub(crate) const NAN: &str = "NaN";
