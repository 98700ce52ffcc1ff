//! Form-state controller for the parameter values array.
//!
//! DESIGN
//! ======
//! `FormController` is the seam the view model talks to; `FormState` is the
//! in-memory implementation. It owns the values, the touched set, and the
//! current field errors, and delegates every validation pass to an injected
//! `SchemaValidator`. Values are re-validated after each change; errors are
//! only shown for touched fields, which is decided by the field helpers.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::BTreeSet;

use crate::field_path::FieldPath;
use crate::types::{WorkspaceBuildParameter, WorkspaceParametersFormValues};
use crate::validation::{FieldErrors, SchemaValidator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no parameter at index {index} (form has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("value for `{found}` cannot be stored at index {index}, which belongs to `{expected}`")]
    NameMismatch { index: usize, expected: String, found: String },
    #[error("Immutable parameters cannot be changed: {name}")]
    ImmutableParameter { name: String },
    #[error("the workspace must be updated before its parameters can be edited")]
    Disabled,
    #[error("{} parameter value(s) failed validation", .errors.len())]
    Invalid { errors: FieldErrors },
}

/// Field get/set/validate operations over the values array.
pub trait FormController {
    fn values(&self) -> &[WorkspaceBuildParameter];

    fn field_value(&self, path: FieldPath) -> Option<&str> {
        self.values().get(path.index()).map(|p| p.value.as_str())
    }

    /// Replace the entry at `index`, leaving every other entry untouched.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for an index past the end and `NameMismatch`
    /// when the value names a different parameter than the slot holds.
    fn set_field_value(&mut self, index: usize, value: WorkspaceBuildParameter) -> Result<(), FormError>;

    fn set_touched(&mut self, path: FieldPath);

    fn is_touched(&self, path: FieldPath) -> bool;

    fn errors(&self) -> &FieldErrors;

    fn field_error(&self, path: FieldPath) -> Option<&str> {
        self.errors().get(&path).map(String::as_str)
    }

    /// Run the validator over all values. Returns `true` when valid.
    fn validate(&mut self) -> bool;

    /// Touch every field, validate, and hand back the values when valid.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` with the current field errors when validation fails.
    fn submit(&mut self) -> Result<WorkspaceParametersFormValues, FormError>;
}

/// In-memory form state for one edit session.
pub struct FormState<V> {
    values: Vec<WorkspaceBuildParameter>,
    touched: BTreeSet<FieldPath>,
    errors: FieldErrors,
    validator: V,
}

impl<V: SchemaValidator> FormState<V> {
    /// Start a session; initial values are validated but nothing is touched.
    pub fn new(initial_values: Vec<WorkspaceBuildParameter>, validator: V) -> Self {
        let errors = validator.validate(&initial_values);
        Self { values: initial_values, touched: BTreeSet::new(), errors, validator }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<V: SchemaValidator> FormController for FormState<V> {
    fn values(&self) -> &[WorkspaceBuildParameter] {
        &self.values
    }

    fn set_field_value(&mut self, index: usize, value: WorkspaceBuildParameter) -> Result<(), FormError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        if slot.name != value.name {
            return Err(FormError::NameMismatch { index, expected: slot.name.clone(), found: value.name });
        }
        *slot = value;
        self.validate();
        Ok(())
    }

    fn set_touched(&mut self, path: FieldPath) {
        if path.index() < self.values.len() {
            self.touched.insert(path);
        }
    }

    fn is_touched(&self, path: FieldPath) -> bool {
        self.touched.contains(&path)
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn validate(&mut self) -> bool {
        self.errors = self.validator.validate(&self.values);
        self.is_valid()
    }

    fn submit(&mut self) -> Result<WorkspaceParametersFormValues, FormError> {
        self.touched = (0..self.values.len()).map(FieldPath::value).collect();
        if !self.validate() {
            return Err(FormError::Invalid { errors: self.errors.clone() });
        }
        Ok(WorkspaceParametersFormValues { rich_parameter_values: self.values.clone() })
    }
}
