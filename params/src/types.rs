//! Workspace, template-parameter, and build-parameter DTOs.
//!
//! DESIGN
//! ======
//! These types mirror the JSON payloads exchanged between the settings page
//! and the workspace API, so the same definitions serve the server handlers,
//! the REST helpers, and the form model without conversion layers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::field_path::FieldPath;

/// Value type declared by a template parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    #[default]
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "list(string)")]
    ListString,
    /// Any type this client does not know how to validate.
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Direction a numeric parameter is allowed to move between builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Monotonic {
    Increasing,
    Decreasing,
}

/// One selectable value of an option-based parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersionParameterOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

/// A parameter definition owned by a template version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersionParameter {
    /// Stable identifier; build values are matched to definitions by this name.
    pub name: String,
    /// Human label; falls back to `name` when empty.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Markdown description as authored in the template.
    #[serde(default)]
    pub description: String,
    /// Description with markdown stripped, used for plain-text rendering.
    #[serde(default)]
    pub description_plaintext: String,
    #[serde(rename = "type", default)]
    pub kind: ParameterType,
    /// Whether the value may change after the workspace is created.
    #[serde(default)]
    pub mutable: bool,
    /// Whether the value applies to a single workspace start only.
    #[serde(default)]
    pub ephemeral: bool,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub options: Vec<TemplateVersionParameterOption>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub validation_error: Option<String>,
    #[serde(default)]
    pub validation_regex: Option<String>,
    #[serde(default)]
    pub validation_min: Option<i64>,
    #[serde(default)]
    pub validation_max: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_monotonic")]
    pub validation_monotonic: Option<Monotonic>,
}

impl TemplateVersionParameter {
    /// Label shown next to the input.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// Plain-text description, falling back to the raw description.
    #[must_use]
    pub fn plain_description(&self) -> &str {
        if self.description_plaintext.is_empty() {
            &self.description
        } else {
            &self.description_plaintext
        }
    }
}

/// The concrete value assigned to a parameter for one workspace build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBuildParameter {
    pub name: String,
    pub value: String,
}

impl WorkspaceBuildParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Values handed to the submit callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceParametersFormValues {
    pub rich_parameter_values: Vec<WorkspaceBuildParameter>,
}

/// Lifecycle transition requested by a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTransition {
    #[default]
    Start,
    Stop,
    Delete,
}

/// Summary of a workspace build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBuild {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub build_number: u32,
    pub template_version_id: Uuid,
    pub transition: BuildTransition,
}

/// A workspace as returned by `GET /api/workspaces/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub owner_name: String,
    pub template_name: String,
    /// The latest build does not use the template's active version.
    #[serde(default)]
    pub outdated: bool,
    /// The template forces workspaces onto its active version.
    #[serde(default)]
    pub template_require_active_version: bool,
    pub latest_build: WorkspaceBuild,
}

/// Parameter bundle returned by `GET /api/workspaces/{id}/parameters`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceParameters {
    pub template_version_rich_parameters: Vec<TemplateVersionParameter>,
    pub build_parameters: Vec<WorkspaceBuildParameter>,
    #[serde(default)]
    pub can_change_versions: bool,
}

/// Body of `POST /api/workspaces/{id}/builds`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkspaceBuildRequest {
    #[serde(default)]
    pub transition: BuildTransition,
    #[serde(default)]
    pub rich_parameter_values: Vec<WorkspaceBuildParameter>,
}

/// A field-scoped rejection reported by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Form field path, e.g. `rich_parameter_values[2].value`.
    pub field: String,
    pub detail: String,
}

/// Error body returned by the API for any non-success response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<ValidationError>,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), detail: None, validations: Vec::new() }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Detail reported for a specific field path, if any.
    ///
    /// Validations whose `field` is not a value path (for example the bare
    /// `rich_parameter_values` array) never match.
    #[must_use]
    pub fn field_detail(&self, path: FieldPath) -> Option<&str> {
        self.validations
            .iter()
            .find(|v| v.field.parse::<FieldPath>().is_ok_and(|p| p == path))
            .map(|v| v.detail.as_str())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) if !detail.is_empty() => write!(f, "{}: {detail}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

fn deserialize_monotonic<'de, D>(deserializer: D) -> Result<Option<Monotonic>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("increasing") => Ok(Some(Monotonic::Increasing)),
        Some("decreasing") => Ok(Some(Monotonic::Decreasing)),
        Some(other) => Err(serde::de::Error::custom(format!("unknown monotonic direction: {other}"))),
    }
}
