//! Locations inside an encoded value, for error messages.

use std::fmt;

/// Position of a value inside the canonical JSON tree.
///
/// Indices count JSON array slots, tag included, so the first payload element
/// of the top-level value is `$[1]`.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Path<'a> {
    Root,
    Index(&'a Path<'a>, usize),
}

impl<'a> Path<'a> {
    pub(crate) fn index(&'a self, index: usize) -> Path<'a> {
        Path::Index(self, index)
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Root => f.write_str("$"),
            Path::Index(parent, index) => write!(f, "{}[{}]", parent, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let root = Path::Root;
        let first = root.index(1);
        let nested = first.index(4);
        assert_eq!(root.to_string(), "$");
        assert_eq!(nested.to_string(), "$[1][4]");
    }
}
