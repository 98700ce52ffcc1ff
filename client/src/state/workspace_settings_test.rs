use uuid::Uuid;

use super::*;
use crate::net::types::WorkspaceBuildParameter;

fn build(number: u32) -> WorkspaceBuild {
    WorkspaceBuild {
        id: Uuid::nil(),
        workspace_id: Uuid::nil(),
        build_number: number,
        template_version_id: Uuid::nil(),
        transition: BuildTransition::Start,
    }
}

fn workspace() -> Workspace {
    Workspace {
        id: Uuid::nil(),
        name: "dev".to_owned(),
        owner_name: "alice".to_owned(),
        template_name: "docker".to_owned(),
        outdated: false,
        template_require_active_version: false,
        latest_build: build(1),
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn default_state_is_not_ready() {
    let state = WorkspaceSettingsState::default();
    assert!(!state.is_ready());
    assert!(!state.loading);
    assert_eq!(state.revision, 0);
}

#[test]
fn finish_load_success_bumps_revision() {
    let mut state = WorkspaceSettingsState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Ok((workspace(), WorkspaceParameters::default())));
    assert!(!state.loading);
    assert!(state.is_ready());
    assert_eq!(state.revision, 1);
}

#[test]
fn finish_load_error_keeps_previous_data() {
    let mut state = WorkspaceSettingsState::default();
    state.finish_load(Ok((workspace(), WorkspaceParameters::default())));
    state.begin_load();
    state.finish_load(Err(ApiError::new("gone")));
    assert!(state.is_ready());
    assert_eq!(state.load_error, Some(ApiError::new("gone")));
    assert_eq!(state.revision, 1);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = WorkspaceSettingsState { load_error: Some(ApiError::new("x")), ..Default::default() };
    state.begin_load();
    assert!(state.load_error.is_none());
}

// =============================================================
// submit
// =============================================================

#[test]
fn begin_submit_rejects_double_submission() {
    let mut state = WorkspaceSettingsState::default();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut state = WorkspaceSettingsState { submit_error: Some(ApiError::new("x")), ..Default::default() };
    assert!(state.begin_submit());
    assert!(state.submit_error.is_none());
}

#[test]
fn finish_submit_success_requests_reload() {
    let mut state = WorkspaceSettingsState::default();
    state.begin_submit();
    assert!(state.finish_submit(Ok(build(2))));
    assert!(!state.submitting);
    assert_eq!(state.last_build.map(|b| b.build_number), Some(2));
}

#[test]
fn finish_submit_error_is_kept_for_the_form() {
    let mut state = WorkspaceSettingsState::default();
    state.begin_submit();
    assert!(!state.finish_submit(Err(ApiError::new("Invalid parameters"))));
    assert!(!state.submitting);
    assert_eq!(state.submit_error.map(|e| e.message), Some("Invalid parameters".to_owned()));
}

// =============================================================
// helpers
// =============================================================

#[test]
fn build_request_starts_with_all_values() {
    let values = WorkspaceParametersFormValues {
        rich_parameter_values: vec![WorkspaceBuildParameter::new("region", "eu")],
    };
    let req = build_request(values);
    assert_eq!(req.transition, BuildTransition::Start);
    assert_eq!(req.rich_parameter_values, vec![WorkspaceBuildParameter::new("region", "eu")]);
}

#[test]
fn build_started_message_mentions_build_number() {
    assert_eq!(build_started_message(&build(7)), "Build #7 started with the updated parameters.");
}
