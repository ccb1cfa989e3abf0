//! Configuration options for encoding and decoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_canon::{canon, decode_with_options, encode_with_options, CanonOptions};
//!
//! let value = canon!([1, [2]]);
//!
//! // Pretty output for humans; decodes to the same value but is not canonical
//! let pretty = encode_with_options(&value, &CanonOptions::pretty()).unwrap();
//! assert!(pretty.contains('\n'));
//!
//! // Refuse any array nested inside another
//! let options = CanonOptions::new().with_max_depth(0);
//! assert!(decode_with_options(r#"["Array",["Array",1]]"#, &options).is_err());
//! ```

/// Configuration options for canonical encoding and decoding.
///
/// The defaults produce the canonical form and accept any nesting depth.
///
/// # Examples
///
/// ```rust
/// use serde_canon::CanonOptions;
///
/// let options = CanonOptions::new();
/// assert!(!options.pretty);
/// assert_eq!(options.max_depth, None);
///
/// let options = CanonOptions::pretty().with_indent(4).with_max_depth(64);
/// assert_eq!(options.indent, 4);
/// assert_eq!(options.max_depth, Some(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonOptions {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    /// Put each array element on its own line.
    pub pretty: bool,
    /// Deepest nesting accepted by encode and decode; `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl Default for CanonOptions {
    fn default() -> Self {
        CanonOptions {
            indent: 2,
            pretty: false,
            max_depth: None,
        }
    }
}

impl CanonOptions {
    /// Creates default options (canonical compact output, unbounded depth).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// Pretty text decodes to the same value, but only compact text is canonical.
    #[must_use]
    pub fn pretty() -> Self {
        CanonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the deepest nesting level accepted.
    ///
    /// Level 0 is the top-level value; each JSON array or object nested
    /// inside another adds a level. Scalars never count.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub(crate) fn check_depth(&self, depth: usize, path: &crate::path::Path<'_>) -> crate::Result<()> {
        match self.max_depth {
            Some(limit) if depth > limit => Err(depth_exceeded(path, limit)),
            _ => Ok(()),
        }
    }
}

pub(crate) fn depth_exceeded(path: &crate::path::Path<'_>, limit: usize) -> crate::Error {
    let path = path.to_string();
    tracing::debug!(%path, limit, "nesting depth limit exceeded");
    crate::Error::depth_limit(&path, limit)
}
