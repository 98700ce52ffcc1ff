//! REST API helpers for the workspace endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-OK responses decode the
//! server's `ApiError` body so field validations reach the form; transport
//! and decode failures are wrapped into an `ApiError` with the cause as
//! detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, CreateWorkspaceBuildRequest, Workspace, WorkspaceBuild, WorkspaceParameters};

#[cfg(any(test, feature = "hydrate"))]
const WORKSPACES_ENDPOINT: &str = "/api/workspaces";

#[cfg(any(test, feature = "hydrate"))]
fn workspace_endpoint(workspace_id: &str) -> String {
    format!("{WORKSPACES_ENDPOINT}/{workspace_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn workspace_parameters_endpoint(workspace_id: &str) -> String {
    format!("{WORKSPACES_ENDPOINT}/{workspace_id}/parameters")
}

#[cfg(any(test, feature = "hydrate"))]
fn workspace_builds_endpoint(workspace_id: &str) -> String {
    format!("{WORKSPACES_ENDPOINT}/{workspace_id}/builds")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_error(status: u16) -> ApiError {
    ApiError::new(format!("request failed: {status}"))
}

/// Decode an error body, falling back to a status-only error.
#[cfg(any(test, feature = "hydrate"))]
fn decode_error_body(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| request_failed_error(status))
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::new("Unable to reach the server").with_detail(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::new("not available on server")
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(decode_error_body(status, &body));
    }
    resp.json::<T>().await.map_err(transport_error)
}

/// Fetch all workspaces from `/api/workspaces`.
///
/// # Errors
///
/// Returns the server's error body or a transport error.
pub async fn fetch_workspaces() -> Result<Vec<Workspace>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WORKSPACES_ENDPOINT)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch one workspace from `/api/workspaces/{id}`.
///
/// # Errors
///
/// Returns the server's error body or a transport error.
pub async fn fetch_workspace(workspace_id: &str) -> Result<Workspace, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&workspace_endpoint(workspace_id))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workspace_id;
        Err(unavailable())
    }
}

/// Fetch parameter definitions, last build values, and version permission
/// from `/api/workspaces/{id}/parameters`.
///
/// # Errors
///
/// Returns the server's error body or a transport error.
pub async fn fetch_workspace_parameters(workspace_id: &str) -> Result<WorkspaceParameters, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&workspace_parameters_endpoint(workspace_id))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workspace_id;
        Err(unavailable())
    }
}

/// Start a new build with edited parameters via `POST /api/workspaces/{id}/builds`.
///
/// # Errors
///
/// Returns the server's `ApiError` (including field validations) on
/// rejection, or a transport error.
pub async fn create_workspace_build(
    workspace_id: &str,
    request: &CreateWorkspaceBuildRequest,
) -> Result<WorkspaceBuild, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&workspace_builds_endpoint(workspace_id))
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace_id, request);
        Err(unavailable())
    }
}
