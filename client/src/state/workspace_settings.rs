//! Load/submit state for the workspace parameters settings page.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the page's async tasks only call
//! `begin_*`/`finish_*` and the state machine stays testable without a
//! browser. `revision` changes on every successful load or build so the form
//! remounts with freshly derived initial values.

#[cfg(test)]
#[path = "workspace_settings_test.rs"]
mod workspace_settings_test;

use crate::net::types::{
    ApiError, BuildTransition, CreateWorkspaceBuildRequest, Workspace, WorkspaceBuild, WorkspaceParameters,
    WorkspaceParametersFormValues,
};

#[derive(Clone, Debug, Default)]
pub struct WorkspaceSettingsState {
    pub workspace: Option<Workspace>,
    pub parameters: Option<WorkspaceParameters>,
    pub loading: bool,
    pub load_error: Option<ApiError>,
    pub submitting: bool,
    pub submit_error: Option<ApiError>,
    pub last_build: Option<WorkspaceBuild>,
    pub revision: u64,
}

impl WorkspaceSettingsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn finish_load(&mut self, result: Result<(Workspace, WorkspaceParameters), ApiError>) {
        self.loading = false;
        match result {
            Ok((workspace, parameters)) => {
                self.workspace = Some(workspace);
                self.parameters = Some(parameters);
                self.revision += 1;
            }
            Err(err) => self.load_error = Some(err),
        }
    }

    /// Returns `false` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.submit_error = None;
        true
    }

    /// Record the build outcome. Returns `true` when the page should reload.
    pub fn finish_submit(&mut self, result: Result<WorkspaceBuild, ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(build) => {
                self.last_build = Some(build);
                true
            }
            Err(err) => {
                self.submit_error = Some(err);
                false
            }
        }
    }

    /// Whether the form can be rendered.
    pub fn is_ready(&self) -> bool {
        self.workspace.is_some() && self.parameters.is_some()
    }
}

/// Start-build request carrying the submitted values.
pub fn build_request(values: WorkspaceParametersFormValues) -> CreateWorkspaceBuildRequest {
    CreateWorkspaceBuildRequest {
        transition: BuildTransition::Start,
        rich_parameter_values: values.rich_parameter_values,
    }
}

/// Banner text shown after a successful submission.
pub fn build_started_message(build: &WorkspaceBuild) -> String {
    format!("Build #{} started with the updated parameters.", build.build_number)
}
