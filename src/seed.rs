//! Workspace fixtures the server starts with.
//!
//! A JSON file (array of `WorkspaceRecord`) can replace the built-in demo
//! data via `WSPARAMS_SEED`.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use std::path::{Path, PathBuf};

use params::{
    BuildTransition, Monotonic, ParameterType, TemplateVersionParameter, TemplateVersionParameterOption, Workspace,
    WorkspaceBuild, WorkspaceBuildParameter,
};
use uuid::Uuid;

use crate::store::WorkspaceRecord;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse seed file {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

/// Load workspace records from a JSON fixture.
///
/// # Errors
///
/// Returns `SeedError` when the file cannot be read or decoded.
pub fn load_seed(path: &Path) -> Result<Vec<WorkspaceRecord>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read { path: path.to_owned(), source })?;
    parse_seed(&raw).map_err(|source| SeedError::Parse { path: path.to_owned(), source })
}

fn parse_seed(raw: &str) -> Result<Vec<WorkspaceRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn workspace(owner: &str, name: &str, template: &str, outdated: bool, require_active: bool) -> Workspace {
    let id = Uuid::new_v4();
    Workspace {
        id,
        name: name.to_owned(),
        owner_name: owner.to_owned(),
        template_name: template.to_owned(),
        outdated,
        template_require_active_version: require_active,
        latest_build: WorkspaceBuild {
            id: Uuid::new_v4(),
            workspace_id: id,
            build_number: 1,
            template_version_id: Uuid::new_v4(),
            transition: BuildTransition::Start,
        },
    }
}

fn option(name: &str, value: &str) -> TemplateVersionParameterOption {
    TemplateVersionParameterOption { name: name.to_owned(), value: value.to_owned(), ..Default::default() }
}

fn docker_parameters() -> Vec<TemplateVersionParameter> {
    vec![
        TemplateVersionParameter {
            name: "region".to_owned(),
            display_name: Some("Region".to_owned()),
            description: "Where the workspace runs.".to_owned(),
            kind: ParameterType::String,
            mutable: true,
            default_value: "us-east".to_owned(),
            options: vec![option("US East", "us-east"), option("EU West", "eu-west"), option("Asia Pacific", "ap-south")],
            ..Default::default()
        },
        TemplateVersionParameter {
            name: "dotfiles_uri".to_owned(),
            display_name: Some("Dotfiles repository".to_owned()),
            description: "Git URL cloned into your home directory on start.".to_owned(),
            kind: ParameterType::String,
            mutable: true,
            validation_regex: Some(r"^(https://|git@).*$".to_owned()),
            validation_error: Some("Must be an https:// or git@ URL.".to_owned()),
            ..Default::default()
        },
        TemplateVersionParameter {
            name: "disk_size".to_owned(),
            display_name: Some("Disk size (GB)".to_owned()),
            kind: ParameterType::Number,
            mutable: true,
            required: true,
            default_value: "20".to_owned(),
            validation_min: Some(10),
            validation_max: Some(500),
            validation_monotonic: Some(Monotonic::Increasing),
            ..Default::default()
        },
        TemplateVersionParameter {
            name: "ide_extensions".to_owned(),
            display_name: Some("IDE extensions".to_owned()),
            kind: ParameterType::ListString,
            mutable: true,
            default_value: "[]".to_owned(),
            ..Default::default()
        },
        TemplateVersionParameter {
            name: "reset_home".to_owned(),
            display_name: Some("Reset home directory".to_owned()),
            description: "Wipe the home volume on the next start.".to_owned(),
            kind: ParameterType::Bool,
            mutable: true,
            ephemeral: true,
            default_value: "false".to_owned(),
            ..Default::default()
        },
        TemplateVersionParameter {
            name: "cpu".to_owned(),
            display_name: Some("CPU cores".to_owned()),
            kind: ParameterType::Number,
            mutable: false,
            default_value: "2".to_owned(),
            validation_min: Some(1),
            validation_max: Some(16),
            ..Default::default()
        },
    ]
}

/// Demo data: one editable workspace and one locked to the active version.
#[must_use]
pub fn demo_workspaces() -> Vec<WorkspaceRecord> {
    let build_parameters = vec![
        WorkspaceBuildParameter::new("region", "eu-west"),
        WorkspaceBuildParameter::new("dotfiles_uri", "https://github.com/alice/dotfiles"),
        WorkspaceBuildParameter::new("disk_size", "50"),
        WorkspaceBuildParameter::new("ide_extensions", r#"["rust-lang.rust-analyzer"]"#),
        WorkspaceBuildParameter::new("cpu", "4"),
    ];
    vec![
        WorkspaceRecord {
            workspace: workspace("alice", "dev", "docker", false, false),
            template_version_rich_parameters: docker_parameters(),
            build_parameters: build_parameters.clone(),
        },
        WorkspaceRecord {
            workspace: workspace("bob", "legacy", "docker", true, true),
            template_version_rich_parameters: docker_parameters(),
            build_parameters,
        },
    ]
}
