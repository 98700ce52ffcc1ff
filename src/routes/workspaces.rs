//! Workspace and build routes.

#[cfg(test)]
#[path = "workspaces_test.rs"]
mod workspaces_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use params::{ApiError, CreateWorkspaceBuildRequest, Workspace, WorkspaceBuild, WorkspaceParameters};
use uuid::Uuid;

use crate::state::AppState;
use crate::store::StoreError;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::UpdateRequired(_) => StatusCode::FORBIDDEN,
        StoreError::BuildNumberExhausted(_) => StatusCode::CONFLICT,
        StoreError::UnsupportedTransition(_) | StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
    }
}

fn store_error_response(err: StoreError) -> (StatusCode, Json<ApiError>) {
    (store_error_to_status(&err), Json(err.to_api_error()))
}

/// `GET /api/workspaces` — list workspaces.
pub async fn list_workspaces(State(state): State<AppState>) -> Json<Vec<Workspace>> {
    Json(state.store.list().await)
}

/// `GET /api/workspaces/:id` — fetch one workspace.
pub async fn get_workspace(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Workspace>> {
    state.store.workspace(id).await.map(Json).map_err(store_error_response)
}

/// `GET /api/workspaces/:id/parameters` — definitions plus latest build values.
pub async fn get_workspace_parameters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WorkspaceParameters>> {
    state
        .store
        .parameters(id, state.can_change_versions)
        .await
        .map(Json)
        .map_err(store_error_response)
}

/// `POST /api/workspaces/:id/builds` — start a build with new parameter values.
pub async fn create_workspace_build(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateWorkspaceBuildRequest>,
) -> ApiResult<(StatusCode, Json<WorkspaceBuild>)> {
    match state.store.create_build(id, &body, state.can_change_versions).await {
        Ok(build) => {
            tracing::info!(
                workspace_id = %id,
                build_number = build.build_number,
                parameters = body.rich_parameter_values.len(),
                "workspace build started"
            );
            Ok((StatusCode::CREATED, Json(build)))
        }
        Err(err) => {
            let validations = match &err {
                StoreError::Invalid(api) => api.validations.len(),
                _ => 0,
            };
            tracing::warn!(workspace_id = %id, error = %err, validations, "workspace build rejected");
            Err(store_error_response(err))
        }
    }
}
