//! Error types for structural validation and registry construction.

use std::fmt::{self, Display};

use serde_json::Value;
use thiserror::Error;

/// One step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside the document being validated.
///
/// Rendered as a dotted path with array indexes in brackets, for example
/// `chains[3].best_apis.rpc[0].address`. The document root renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// The innermost object key on the path, if any.
    pub fn last_key(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A value did not conform to its descriptor.
///
/// Every variant is terminal: validation stops at the first failure and
/// returns no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    #[error("Invalid value for key \"{path}\". Expected type {expected} but got {actual}")]
    InvalidValue {
        path: FieldPath,
        expected: String,
        actual: Value,
    },

    #[error("Missing required key \"{path}\". Expected type {expected}")]
    MissingField { path: FieldPath, expected: String },

    #[error("Unexpected key \"{path}\" with value {actual}")]
    UnexpectedField { path: FieldPath, actual: Value },

    /// None of a union's alternatives matched. Lists every alternative tried.
    #[error("Invalid value for key \"{path}\". Expected one of {} but got {actual}", render_alternatives(.alternatives))]
    NoMatchingAlternative {
        path: FieldPath,
        alternatives: Vec<String>,
        actual: Value,
    },

    /// A descriptor named a definition the registry does not hold.
    #[error("Unresolved schema reference \"{0}\"")]
    UnresolvedReference(String),
}

impl CastError {
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            CastError::InvalidValue { path, .. }
            | CastError::MissingField { path, .. }
            | CastError::UnexpectedField { path, .. }
            | CastError::NoMatchingAlternative { path, .. } => Some(path),
            CastError::UnresolvedReference(_) => None,
        }
    }
}

fn render_alternatives(alternatives: &[String]) -> String {
    format!("[{}]", alternatives.join(", "))
}

/// A schema table is not well formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Root definition \"{0}\" is not defined")]
    MissingRoot(String),

    #[error("Definition \"{from}\" references undefined \"{name}\"")]
    UnresolvedReference { from: String, name: String },

    /// References that loop back on themselves through unions and aliases
    /// only, so validation would never descend into the input.
    #[error("Reference cycle without an intervening record or sequence: {}", .0.join(" -> "))]
    ReferenceCycle(Vec<String>),
}
