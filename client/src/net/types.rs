//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The definitions live in the `params` crate so the server handlers, the form
//! model, and these REST helpers agree on one schema.

pub use params::types::{
    ApiError, BuildTransition, CreateWorkspaceBuildRequest, TemplateVersionParameter, ValidationError, Workspace,
    WorkspaceBuild, WorkspaceBuildParameter, WorkspaceParameters, WorkspaceParametersFormValues,
};
