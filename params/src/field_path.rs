//! Field paths binding inputs to slots of the values array.
//!
//! Every input is addressed as `rich_parameter_values[<index>].value`, where
//! the index is the position of the parameter definition. API validation
//! errors use the same path shape, which is how they find their input.

#[cfg(test)]
#[path = "field_path_test.rs"]
mod field_path_test;

use std::fmt;
use std::str::FromStr;

/// Name of the values array inside the form values.
pub const VALUES_FIELD: &str = "rich_parameter_values";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldPathError {
    #[error("field path must start with `rich_parameter_values[`: {0}")]
    UnknownRoot(String),
    #[error("field path index is not a number: {0}")]
    BadIndex(String),
    #[error("field path must end with `].value`: {0}")]
    UnknownLeaf(String),
}

/// Path of the `value` field of one entry in the values array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    index: usize,
}

impl FieldPath {
    #[must_use]
    pub fn value(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// DOM id for the input bound to this path.
    #[must_use]
    pub fn dom_id(self) -> String {
        format!("{VALUES_FIELD}-{}-value", self.index)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{VALUES_FIELD}[{}].value", self.index)
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(VALUES_FIELD)
            .and_then(|r| r.strip_prefix('['))
            .ok_or_else(|| FieldPathError::UnknownRoot(s.to_owned()))?;
        let (index, leaf) = rest
            .split_once(']')
            .ok_or_else(|| FieldPathError::UnknownLeaf(s.to_owned()))?;
        if leaf != ".value" {
            return Err(FieldPathError::UnknownLeaf(s.to_owned()));
        }
        // Digits only: `usize::from_str` also takes a leading `+`.
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldPathError::BadIndex(s.to_owned()));
        }
        let index = index
            .parse::<usize>()
            .map_err(|_| FieldPathError::BadIndex(s.to_owned()))?;
        Ok(Self { index })
    }
}
