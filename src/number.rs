//! Numeric values and their canonical text.
//!
//! [`Number`] keeps integers exact and stores every other value as an IEEE-754
//! double, with dedicated variants for the non-finite values that JSON cannot
//! express.

use std::fmt;

use crate::tag;

/// A numeric value: an exact integer, a finite float, or a non-finite special value.
///
/// Equality is numeric: `Integer(1) == Float(1.0)`, `-0 == 0`, and `NaN` is
/// never equal to anything, itself included.
///
/// # Examples
///
/// ```rust
/// use serde_canon::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::from_f64(f64::INFINITY);
///
/// assert!(integer.is_integer());
/// assert_eq!(float.as_f64(), 3.5);
/// assert_eq!(infinity, Number::Infinity);
/// assert_ne!(Number::NaN, Number::NaN);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Builds a number from a float, moving non-finite values to their dedicated variants.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }

    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` for Infinity, -Infinity and NaN, however they are stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Number;
    ///
    /// assert!(Number::NaN.is_special());
    /// assert!(Number::Float(f64::NEG_INFINITY).is_special());
    /// assert!(!Number::Integer(42).is_special());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.special_token().is_some()
    }

    /// Returns `true` if this is negative zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Number;
    ///
    /// assert!(Number::Float(-0.0).is_negative_zero());
    /// assert!(!Number::Float(0.0).is_negative_zero());
    /// assert!(!Number::Integer(0).is_negative_zero());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_negative_zero(&self) -> bool {
        matches!(self, Number::Float(f) if *f == 0.0 && f.is_sign_negative())
    }

    /// Returns `true` if the value is NaN.
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.as_f64().is_nan()
    }

    /// The `Number` tag payload for a non-finite value, `None` for finite ones.
    #[must_use]
    pub fn special_token(&self) -> Option<&'static str> {
        match self {
            Number::Integer(_) => None,
            Number::Infinity => Some(tag::INFINITY),
            Number::NegativeInfinity => Some(tag::NEG_INFINITY),
            Number::NaN => Some(tag::NAN),
            Number::Float(f) if f.is_nan() => Some(tag::NAN),
            Number::Float(f) if *f == f64::INFINITY => Some(tag::INFINITY),
            Number::Float(f) if *f == f64::NEG_INFINITY => Some(tag::NEG_INFINITY),
            Number::Float(_) => None,
        }
    }

    /// Inverse of [`Number::special_token`].
    #[must_use]
    pub fn from_special_token(token: &str) -> Option<Self> {
        match token {
            tag::INFINITY => Some(Number::Infinity),
            tag::NEG_INFINITY => Some(Number::NegativeInfinity),
            tag::NAN => Some(Number::NaN),
            _ => None,
        }
    }

    /// Converts this number to an `i64` if it holds a whole value in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Appends the atomic canonical text of a finite number.
    ///
    /// Non-finite values have no atomic form; callers check
    /// [`Number::special_token`] first.
    pub(crate) fn write_finite(&self, out: &mut String) {
        match self {
            Number::Integer(i) => out.push_str(&i.to_string()),
            Number::Float(f) => write_f64(out, *f),
            _ => {}
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special_token() {
            Some(token) => f.write_str(token),
            None if self.is_negative_zero() => f.write_str("-0"),
            None => {
                let mut out = String::new();
                self.write_finite(&mut out);
                f.write_str(&out)
            }
        }
    }
}

/// ECMAScript `Number::toString(10)` for a finite double.
///
/// `{:e}` already yields the shortest round-trip digits; only the placement of
/// the decimal point and exponent differs from JavaScript.
fn write_f64(out: &mut String, value: f64) {
    if value == 0.0 {
        out.push_str(if value.is_sign_negative() { "-0" } else { "0" });
        return;
    }
    if value < 0.0 {
        out.push('-');
    }

    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // value = 0.digits * 10^n
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n - 1 < 0 { '-' } else { '+' });
        out.push_str(&(n - 1).abs().to_string());
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Number::Integer(value as i64)
        } else {
            Number::Float(value as f64)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from_f64(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}
