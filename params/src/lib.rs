//! Workspace parameter form model.
//!
//! This crate is UI-framework agnostic: it holds the API types, section
//! partitioning, initial-value derivation, the validation schema, and the
//! form controller that the Leptos client renders and the server reuses
//! for build validation.

pub mod controller;
pub mod field_path;
pub mod form;
pub mod helpers;
pub mod initial;
pub mod partition;
pub mod types;
pub mod validation;

pub use controller::{FormController, FormError, FormState};
pub use field_path::{FieldPath, FieldPathError};
pub use form::{ParametersForm, UPDATE_REQUIRED_MESSAGE, is_form_disabled};
pub use helpers::{FieldHelpers, field_helpers};
pub use initial::initial_rich_parameter_values;
pub use partition::{IndexedParameter, Partition, Section, partition, section_for};
pub use types::*;
pub use validation::{FieldErrors, RichParameterSchema, SchemaValidator};
