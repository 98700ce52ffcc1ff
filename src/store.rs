//! In-memory workspace store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds every workspace the server knows about together with its template
//! parameter definitions and the parameter values of its latest build. The
//! REST handlers read from it and append builds to it.
//!
//! DESIGN
//! ======
//! `WorkspaceRecord::apply_build` is synchronous and owns all build rules so
//! it can be tested without a runtime; `WorkspaceStore` only wraps it in the
//! write lock so validation and append happen atomically.
//!
//! ERROR HANDLING
//! ==============
//! Field-level problems are collected into one `ApiError` whose
//! `validations` use the same `rich_parameter_values[<i>].value` paths the
//! form binds its inputs to, so the client can show each message inline.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use params::field_path::VALUES_FIELD;
use params::{
    ApiError, BuildTransition, CreateWorkspaceBuildRequest, FieldPath, RichParameterSchema,
    TemplateVersionParameter, ValidationError, Workspace, WorkspaceBuild, WorkspaceBuildParameter,
    WorkspaceParameters, initial_rich_parameter_values, is_form_disabled,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid build parameters.";

/// A workspace plus everything needed to start a new build of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    pub workspace: Workspace,
    pub template_version_rich_parameters: Vec<TemplateVersionParameter>,
    /// Parameter values of the latest build.
    #[serde(default)]
    pub build_parameters: Vec<WorkspaceBuildParameter>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("workspace not found: {0}")]
    NotFound(Uuid),
    #[error("workspace {0} must be updated to the active template version first")]
    UpdateRequired(Uuid),
    #[error("transition {0:?} does not accept parameter values")]
    UnsupportedTransition(BuildTransition),
    #[error("workspace {0} has no build numbers left")]
    BuildNumberExhausted(Uuid),
    #[error("{}", .0)]
    Invalid(ApiError),
}

impl StoreError {
    /// Body returned to API clients.
    #[must_use]
    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::Invalid(err) => err.clone(),
            Self::UpdateRequired(_) => {
                ApiError::new("Workspace update required.").with_detail(params::UPDATE_REQUIRED_MESSAGE)
            }
            other => ApiError::new(other.to_string()),
        }
    }
}

impl WorkspaceRecord {
    #[must_use]
    pub fn parameters(&self, can_change_versions: bool) -> WorkspaceParameters {
        WorkspaceParameters {
            template_version_rich_parameters: self.template_version_rich_parameters.clone(),
            build_parameters: self.build_parameters.clone(),
            can_change_versions,
        }
    }

    /// Validate `request` and record it as the next build.
    ///
    /// Definitions missing from the request keep their previous value (or
    /// default), so clients may send only what changed. Nothing is modified
    /// when an error is returned.
    ///
    /// # Errors
    ///
    /// - `UpdateRequired` when the workspace must move to the active version
    /// - `UnsupportedTransition` for anything but a start
    /// - `BuildNumberExhausted` when the build counter cannot advance
    /// - `Invalid` with per-field validations otherwise
    pub fn apply_build(
        &mut self,
        request: &CreateWorkspaceBuildRequest,
        can_change_versions: bool,
    ) -> Result<WorkspaceBuild, StoreError> {
        if is_form_disabled(&self.workspace, can_change_versions) {
            return Err(StoreError::UpdateRequired(self.workspace.id));
        }
        if request.transition != BuildTransition::Start {
            return Err(StoreError::UnsupportedTransition(request.transition));
        }

        let definitions = &self.template_version_rich_parameters;
        let validations = validate_build_values(definitions, &self.build_parameters, &request.rich_parameter_values);
        if !validations.is_empty() {
            let mut err = ApiError::new(INVALID_PARAMETERS_MESSAGE);
            err.validations = validations;
            return Err(StoreError::Invalid(err));
        }

        let resolved = resolve_values(definitions, &self.build_parameters, &request.rich_parameter_values);
        let previous = &self.workspace.latest_build;
        let build_number = previous
            .build_number
            .checked_add(1)
            .ok_or(StoreError::BuildNumberExhausted(self.workspace.id))?;
        let build = WorkspaceBuild {
            id: Uuid::new_v4(),
            workspace_id: self.workspace.id,
            build_number,
            template_version_id: previous.template_version_id,
            transition: BuildTransition::Start,
        };
        self.workspace.latest_build = build.clone();
        self.build_parameters = resolved;
        Ok(build)
    }
}

/// Field validations for submitted values.
///
/// Every value-level message is reported at the path of its definition's
/// index, the slot the form binds that parameter to, whatever the order or
/// subset the request sends. Unknown and repeated names belong to no slot
/// and are reported against the whole `rich_parameter_values` array.
/// Required definitions the request leaves out are checked after merging
/// with their carried-over value.
#[must_use]
pub fn validate_build_values(
    definitions: &[TemplateVersionParameter],
    previous: &[WorkspaceBuildParameter],
    values: &[WorkspaceBuildParameter],
) -> Vec<ValidationError> {
    let schema = RichParameterSchema::new(definitions, previous);
    let mut seen = HashSet::new();
    let mut validations = Vec::new();
    let mut reject = |field: String, detail: String| validations.push(ValidationError { field, detail });

    for value in values {
        let Some(index) = definitions.iter().position(|d| d.name == value.name) else {
            reject(
                VALUES_FIELD.to_owned(),
                format!("Parameter \"{}\" is not defined by the template.", value.name),
            );
            continue;
        };
        if !seen.insert(value.name.as_str()) {
            reject(VALUES_FIELD.to_owned(), format!("Parameter \"{}\" is set more than once.", value.name));
            continue;
        }
        let field = FieldPath::value(index).to_string();
        if !definitions[index].mutable {
            let changed = previous
                .iter()
                .find(|p| p.name == value.name)
                .is_some_and(|p| p.value != value.value);
            if changed {
                reject(
                    field,
                    format!(
                        "Parameter \"{}\" is not mutable, so it can't be updated after creating a workspace.",
                        value.name
                    ),
                );
                continue;
            }
        }
        if let Err(detail) = schema.check(value) {
            reject(field, detail);
        }
    }

    let carried = initial_rich_parameter_values(definitions, previous);
    for (index, value) in carried.iter().enumerate() {
        if seen.contains(value.name.as_str()) {
            continue;
        }
        if let Err(detail) = schema.check(value) {
            reject(FieldPath::value(index).to_string(), detail);
        }
    }

    validations
}

/// Full value list for a new build: submitted values override carried ones.
fn resolve_values(
    definitions: &[TemplateVersionParameter],
    previous: &[WorkspaceBuildParameter],
    values: &[WorkspaceBuildParameter],
) -> Vec<WorkspaceBuildParameter> {
    initial_rich_parameter_values(definitions, previous)
        .into_iter()
        .map(|carried| values.iter().find(|v| v.name == carried.name).cloned().unwrap_or(carried))
        .collect()
}

// =============================================================================
// STORE
// =============================================================================

/// Shared handle over all workspace records.
#[derive(Clone, Default)]
pub struct WorkspaceStore {
    records: Arc<RwLock<HashMap<Uuid, WorkspaceRecord>>>,
}

impl WorkspaceStore {
    #[must_use]
    pub fn new(records: Vec<WorkspaceRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.workspace.id, r)).collect();
        Self { records: Arc::new(RwLock::new(records)) }
    }

    /// All workspaces ordered by owner, then name.
    pub async fn list(&self) -> Vec<Workspace> {
        let records = self.records.read().await;
        let mut items: Vec<Workspace> = records.values().map(|r| r.workspace.clone()).collect();
        items.sort_by(|a, b| (&a.owner_name, &a.name).cmp(&(&b.owner_name, &b.name)));
        items
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub async fn workspace(&self, id: Uuid) -> Result<Workspace, StoreError> {
        let records = self.records.read().await;
        records.get(&id).map(|r| r.workspace.clone()).ok_or(StoreError::NotFound(id))
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub async fn parameters(&self, id: Uuid, can_change_versions: bool) -> Result<WorkspaceParameters, StoreError> {
        let records = self.records.read().await;
        records
            .get(&id)
            .map(|r| r.parameters(can_change_versions))
            .ok_or(StoreError::NotFound(id))
    }

    /// Validate and append a build under the write lock.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, otherwise see [`WorkspaceRecord::apply_build`].
    pub async fn create_build(
        &self,
        id: Uuid,
        request: &CreateWorkspaceBuildRequest,
        can_change_versions: bool,
    ) -> Result<WorkspaceBuild, StoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.apply_build(request, can_change_versions)
    }
}
