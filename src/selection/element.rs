//! # Path Elements
//!
//! One hop of a selection path. Elements are immutable values; equality,
//! hashing and `Display` are structural:
//!
//! | Element | Matches | Displays as |
//! |---------|---------|-------------|
//! | [`PathElement::ChildName`] | the child with exactly that name | the name |
//! | [`PathElement::ChildPattern`] | every child whose name matches the glob | the raw glob |
//! | [`PathElement::Parent`] | the parent, whatever its name | `..` |

use crate::selection::error::SelectionError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Shell-style glob (`*`, `?`) compiled once from its raw text.
#[derive(Clone, Debug)]
pub struct ChildPattern {
    raw: String,
    compiled: glob::Pattern,
}

impl ChildPattern {
    /// Compiles `raw`. Malformed globs are rejected here, never while routing.
    pub fn new(raw: impl Into<String>) -> Result<Self, SelectionError> {
        let raw = raw.into();
        let compiled = glob::Pattern::new(&raw).map_err(|source| SelectionError::InvalidPattern {
            pattern: raw.clone(),
            source,
        })?;
        Ok(Self { raw, compiled })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, name: &str) -> bool {
        self.compiled.matches(name)
    }
}

// The compiled form is a function of `raw`, so `raw` alone decides identity.
impl PartialEq for ChildPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ChildPattern {}

impl Hash for ChildPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathElement {
    ChildName(String),
    ChildPattern(ChildPattern),
    Parent,
}

impl PathElement {
    pub fn child_name(name: impl Into<String>) -> Self {
        PathElement::ChildName(name.into())
    }

    pub fn child_pattern(raw: impl Into<String>) -> Result<Self, SelectionError> {
        ChildPattern::new(raw).map(PathElement::ChildPattern)
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::ChildName(name) => f.write_str(name),
            PathElement::ChildPattern(pattern) => f.write_str(pattern.as_str()),
            PathElement::Parent => f.write_str(".."),
        }
    }
}
