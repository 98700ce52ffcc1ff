use uuid::Uuid;

use super::*;
use crate::net::types::{BuildTransition, WorkspaceBuild};

fn workspace(owner: &str, name: &str) -> Workspace {
    Workspace {
        id: Uuid::nil(),
        name: name.to_owned(),
        owner_name: owner.to_owned(),
        template_name: "docker".to_owned(),
        outdated: false,
        template_require_active_version: false,
        latest_build: WorkspaceBuild {
            id: Uuid::nil(),
            workspace_id: Uuid::nil(),
            build_number: 1,
            template_version_id: Uuid::nil(),
            transition: BuildTransition::Start,
        },
    }
}

#[test]
fn finish_load_sorts_by_owner_then_name() {
    let mut state = WorkspacesState { loading: true, ..Default::default() };
    state.finish_load(Ok(vec![workspace("bob", "a"), workspace("alice", "z"), workspace("alice", "b")]));
    let names: Vec<(&str, &str)> =
        state.items.iter().map(|w| (w.owner_name.as_str(), w.name.as_str())).collect();
    assert_eq!(names, vec![("alice", "b"), ("alice", "z"), ("bob", "a")]);
    assert!(!state.loading);
}

#[test]
fn finish_load_error_is_recorded() {
    let mut state = WorkspacesState::default();
    state.finish_load(Err(ApiError::new("down")));
    assert_eq!(state.error, Some(ApiError::new("down")));
}

#[test]
fn hrefs_point_at_workspace_routes() {
    let ws = workspace("alice", "dev");
    assert_eq!(
        parameters_settings_href(&ws),
        "/workspaces/00000000-0000-0000-0000-000000000000/settings/parameters"
    );
    assert_eq!(workspace_href("abc"), "/workspaces/abc");
}
