//! Workspace list state for the landing page.

#[cfg(test)]
#[path = "workspaces_test.rs"]
mod workspaces_test;

use crate::net::types::{ApiError, Workspace};

#[derive(Clone, Debug, Default)]
pub struct WorkspacesState {
    pub items: Vec<Workspace>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl WorkspacesState {
    pub fn finish_load(&mut self, result: Result<Vec<Workspace>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut items) => {
                items.sort_by(|a, b| (&a.owner_name, &a.name).cmp(&(&b.owner_name, &b.name)));
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }
}

/// Route of the parameters settings page for a workspace.
pub fn parameters_settings_href(workspace: &Workspace) -> String {
    format!("/workspaces/{}/settings/parameters", workspace.id)
}

/// Route of the workspace overview page.
pub fn workspace_href(workspace_id: &str) -> String {
    format!("/workspaces/{workspace_id}")
}
