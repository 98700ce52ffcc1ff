//! View model behind the workspace parameters form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos component keeps one `ParametersForm` in a signal for the whole
//! edit session. Rendering reads sections and field helpers from it; input
//! events call `change`/`blur`; the submit button calls `submit`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::controller::{FormController, FormError, FormState};
use crate::field_path::FieldPath;
use crate::helpers::{FieldHelpers, field_helpers};
use crate::initial::initial_rich_parameter_values;
use crate::partition::{Partition, partition};
use crate::types::{
    ApiError, TemplateVersionParameter, Workspace, WorkspaceBuildParameter, WorkspaceParametersFormValues,
};
use crate::validation::RichParameterSchema;

/// Warning shown above the form when editing is locked.
pub const UPDATE_REQUIRED_MESSAGE: &str =
    "The template for this workspace requires automatic updates. Update the workspace to edit parameters.";

/// Editing is locked when the workspace is outdated, the template requires
/// its active version, and the caller may not change versions.
#[must_use]
pub fn is_form_disabled(workspace: &Workspace, can_change_versions: bool) -> bool {
    workspace.outdated && workspace.template_require_active_version && !can_change_versions
}

/// Form state, definitions, and lock flag for one edit session.
pub struct ParametersForm<C = FormState<RichParameterSchema>> {
    definitions: Vec<TemplateVersionParameter>,
    partition: Partition,
    controller: C,
    disabled: bool,
}

impl ParametersForm {
    /// Start an edit session with the default controller and schema.
    #[must_use]
    pub fn new(
        workspace: &Workspace,
        definitions: Vec<TemplateVersionParameter>,
        build_parameters: &[WorkspaceBuildParameter],
        can_change_versions: bool,
    ) -> Self {
        let initial = initial_rich_parameter_values(&definitions, build_parameters);
        let schema = RichParameterSchema::new(&definitions, build_parameters);
        let controller = FormState::new(initial, schema);
        Self::with_controller(definitions, controller, is_form_disabled(workspace, can_change_versions))
    }
}

impl<C: FormController> ParametersForm<C> {
    /// Start an edit session over an injected controller.
    ///
    /// The controller's values must be index-aligned with `definitions`.
    pub fn with_controller(definitions: Vec<TemplateVersionParameter>, controller: C, disabled: bool) -> Self {
        let partition = partition(&definitions);
        Self { definitions, partition, controller, disabled }
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn values(&self) -> &[WorkspaceBuildParameter] {
        self.controller.values()
    }

    /// Store a new value for the parameter at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ImmutableParameter` for read-only parameters, `Disabled` when
    /// editing is locked, and `IndexOutOfRange` for an unknown index.
    pub fn change(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        let parameter = self
            .definitions
            .get(index)
            .ok_or(FormError::IndexOutOfRange { index, len: self.definitions.len() })?;
        if !parameter.mutable {
            return Err(FormError::ImmutableParameter { name: parameter.name.clone() });
        }
        if self.disabled {
            return Err(FormError::Disabled);
        }
        let entry = WorkspaceBuildParameter::new(parameter.name.clone(), value);
        self.controller.set_field_value(index, entry)
    }

    /// Mark the field at `index` as touched.
    pub fn blur(&mut self, index: usize) {
        self.controller.set_touched(FieldPath::value(index));
    }

    #[must_use]
    pub fn field(&self, index: usize, submit_error: Option<&ApiError>) -> FieldHelpers {
        field_helpers(&self.controller, FieldPath::value(index), submit_error)
    }

    /// Validate and return the full values array.
    ///
    /// # Errors
    ///
    /// Returns `Disabled` when editing is locked and `Invalid` when any field
    /// fails validation.
    pub fn submit(&mut self) -> Result<WorkspaceParametersFormValues, FormError> {
        if self.disabled {
            return Err(FormError::Disabled);
        }
        self.controller.submit()
    }
}
