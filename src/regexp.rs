//! Regular expression values.
//!
//! The crate does not execute patterns; a [`RegExp`] is the pair of a pattern
//! source and a flag set, which is all the canonical form records.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Recognised flags, in canonical order.
pub const FLAG_ORDER: &str = "dgimsuvy";

/// A regular expression: pattern source plus single-character mode flags.
///
/// Flags are validated and stored in the canonical order `d g i m s u v y`,
/// so `RegExp::new("a", "mi")` and `RegExp::new("a", "im")` are equal.
///
/// # Examples
///
/// ```rust
/// use serde_canon::RegExp;
///
/// let re = RegExp::new("^foo$", "mi").unwrap();
/// assert_eq!(re.flags(), "im");
/// assert_eq!(re.to_string(), "/^foo$/im");
///
/// assert!(RegExp::new("a", "gg").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Creates a regular expression, normalising the flag order.
    ///
    /// An empty source becomes `(?:)`, the source of a pattern that matches
    /// the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for unknown or repeated flags, or for
    /// `u` and `v` used together.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self> {
        let mut source = source.into();
        if source.is_empty() {
            source.push_str("(?:)");
        }
        Ok(RegExp {
            source,
            flags: canonical_flags(flags)?,
        })
    }

    /// The pattern source, without delimiting slashes.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags, in canonical order.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns `true` if `flag` is set.
    #[must_use]
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Parses the `/source/flags` literal form, splitting at the last `/`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::RegExp;
    ///
    /// let re = RegExp::parse_literal("/a/b/g").unwrap();
    /// assert_eq!(re.source(), "a/b");
    /// assert_eq!(re.flags(), "g");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the literal is not delimited by
    /// slashes or carries invalid flags.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        let body = literal.strip_prefix('/').ok_or_else(|| {
            Error::invalid_value(format!("regular expression {:?} must start with '/'", literal))
        })?;
        let split = body.rfind('/').ok_or_else(|| {
            Error::invalid_value(format!(
                "regular expression {:?} has no closing '/'",
                literal
            ))
        })?;
        RegExp::new(&body[..split], &body[split + 1..])
    }
}

fn canonical_flags(flags: &str) -> Result<String> {
    let mut seen = [false; FLAG_ORDER.len()];
    for flag in flags.chars() {
        let index = FLAG_ORDER
            .find(flag)
            .ok_or_else(|| Error::invalid_value(format!("unknown regular expression flag {:?}", flag)))?;
        if seen[index] {
            return Err(Error::invalid_value(format!(
                "duplicate regular expression flag {:?}",
                flag
            )));
        }
        seen[index] = true;
    }

    let canonical: String = FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect();
    if canonical.contains('u') && canonical.contains('v') {
        return Err(Error::invalid_value(
            "regular expression flags 'u' and 'v' are mutually exclusive",
        ));
    }
    Ok(canonical)
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl FromStr for RegExp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RegExp::parse_literal(s)
    }
}
