//! Error types for canonical encoding and decoding.
//!
//! Every failure carries a distinguishable [`ErrorKind`] so callers can branch
//! on the cause instead of inspecting message text.
//!
//! ## Error Categories
//!
//! - **Unserializable**: the value handed to the encoder contains a function
//! - **Syntax**: the decoder input is not valid JSON (line/column information included)
//! - **Malformed canonical form**: valid JSON that breaks the tag protocol
//! - **Depth limit**: nesting deeper than [`CanonOptions::max_depth`](crate::CanonOptions)
//! - **Invalid value**: a value that cannot be constructed, such as a regular
//!   expression with duplicate flags
//! - **I/O**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_canon::{decode, ErrorKind};
//!
//! let err = decode("[\"Array\", 1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//!
//! let err = decode("[\"Set\", 1]").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedCanonicalForm);
//! ```

use std::fmt;
use thiserror::Error;

/// The message carried by every [`Error::Unserializable`].
pub const FUNCTIONS_CANNOT_BE_SERIALIZED: &str = "Functions cannot be serialized";

/// Represents all possible errors that can occur during canonical encoding/decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The encoder met a value outside the serializable domain.
    ///
    /// `path` locates the offending value (`$`, `$[2]`, `$[1][4]`, ...).
    #[error("{msg}")]
    Unserializable { path: String, msg: String },

    /// Syntax error with detailed context
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// Valid JSON that does not follow the canonical tag protocol.
    #[error("Malformed canonical form at {path}: {msg}")]
    MalformedCanonicalForm { path: String, msg: String },

    /// Nesting exceeded the configured maximum depth.
    #[error("Nesting depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { path: String, limit: usize },

    /// A value could not be constructed.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The category of an [`Error`], for callers that branch on the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unserializable,
    Syntax,
    MalformedCanonicalForm,
    DepthLimitExceeded,
    InvalidValue,
    Io,
    Custom,
}

impl Error {
    /// Creates the error raised when the encoder meets a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Error;
    ///
    /// let err = Error::unserializable("$[2]");
    /// assert_eq!(err.to_string(), "Functions cannot be serialized");
    /// ```
    pub fn unserializable(path: &str) -> Self {
        Error::Unserializable {
            path: path.to_string(),
            msg: FUNCTIONS_CANNOT_BE_SERIALIZED.to_string(),
        }
    }

    /// Creates a syntax error with line and column information.
    ///
    /// Use [`Error::syntax_with_context`] for more detailed error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error with the offending source line and an optional hint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Error;
    ///
    /// let err = Error::syntax_with_context(
    ///     1,
    ///     9,
    ///     "expected ',' or ']'",
    ///     "[\"Array\" 1]",
    ///     Some("Separate array elements with commas"),
    /// );
    /// assert!(err.to_string().contains("Help:"));
    /// ```
    pub fn syntax_with_context(
        line: usize,
        col: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates a tag protocol violation located at `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Error;
    ///
    /// let err = Error::malformed("$[1]", "unknown tag \"Set\"");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Malformed canonical form at $[1]: unknown tag \"Set\""
    /// );
    /// ```
    pub fn malformed(path: &str, msg: impl Into<String>) -> Self {
        Error::MalformedCanonicalForm {
            path: path.to_string(),
            msg: msg.into(),
        }
    }

    pub fn depth_limit(path: &str, limit: usize) -> Self {
        Error::DepthLimitExceeded {
            path: path.to_string(),
            limit,
        }
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Error::InvalidValue(msg.into())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unserializable { .. } => ErrorKind::Unserializable,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::MalformedCanonicalForm { .. } => ErrorKind::MalformedCanonicalForm,
            Error::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the location inside the value tree, for errors that have one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Unserializable { path, .. }
            | Error::MalformedCanonicalForm { path, .. }
            | Error::DepthLimitExceeded { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
