//! Workspace settings page for editing build parameters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/workspaces/:id/settings/parameters`. Loads the workspace and its
//! parameter bundle, renders `WorkspaceParametersForm`, and starts a new
//! build with the submitted values. A successful build reloads the bundle so
//! the form restarts from the values the server accepted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{Alert, AlertSeverity};
use crate::components::workspace_parameters_form::WorkspaceParametersForm;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::{ApiError, Workspace, WorkspaceParameters};
use crate::net::types::WorkspaceParametersFormValues;
use crate::state::workspace_settings::{WorkspaceSettingsState, build_request, build_started_message};
use crate::state::workspaces::workspace_href;

#[cfg(feature = "hydrate")]
async fn load_settings(workspace_id: &str) -> Result<(Workspace, WorkspaceParameters), ApiError> {
    let workspace = api::fetch_workspace(workspace_id).await?;
    let parameters = api::fetch_workspace_parameters(workspace_id).await?;
    Ok((workspace, parameters))
}

#[component]
pub fn WorkspaceParametersPage() -> impl IntoView {
    let params = use_params_map();
    let workspace_id = move || params.read().get("id").unwrap_or_default();
    let state = RwSignal::new(WorkspaceSettingsState::default());
    let navigate = use_navigate();

    let load = move |id: String| {
        state.update(WorkspaceSettingsState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = load_settings(&id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("workspace settings load failed: {e}");
            }
            state.update(|s| s.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    Effect::new(move || load(workspace_id()));

    let on_submit = Callback::new(move |values: WorkspaceParametersFormValues| {
        if !state.try_update(WorkspaceSettingsState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = build_request(values);
        let id = params.read_untracked().get("id").unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::create_workspace_build(&id, &request).await;
            match &result {
                Ok(build) => leptos::logging::log!("workspace build #{} started", build.build_number),
                Err(e) => leptos::logging::warn!("workspace build rejected: {e}"),
            }
            if state.try_update(|s| s.finish_submit(result)).unwrap_or(false) {
                load(id);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, request);
    });

    // Cancel routes through a signal so navigation happens inside an effect.
    let cancelled = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| cancelled.set(true));
    Effect::new(move || {
        if cancelled.get() {
            cancelled.set(false);
            let id = params.read_untracked().get("id").unwrap_or_default();
            navigate(&workspace_href(&id), NavigateOptions::default());
        }
    });

    let revision = Memo::new(move |_| state.with(|s| s.revision));
    let is_submitting = Signal::derive(move || state.with(|s| s.submitting));
    let submit_error = Signal::derive(move || state.with(|s| s.submit_error.clone()));

    let title = move || {
        state.with(|s| {
            s.workspace
                .as_ref()
                .map_or_else(String::new, |w| format!("{}/{}", w.owner_name, w.name))
        })
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <a class="settings-page__back" href=move || workspace_href(&workspace_id())>
                    "← Back to workspace"
                </a>
                <h1 class="settings-page__title">"Workspace parameters"</h1>
                <p class="settings-page__subtitle">{title}</p>
            </header>

            {move || state.with(|s| s.load_error.clone()).map(|err| view! {
                <Alert severity=AlertSeverity::Error>{err.to_string()}</Alert>
            })}
            {move || state.with(|s| s.submit_error.clone()).map(|err| view! {
                <Alert severity=AlertSeverity::Error>{err.to_string()}</Alert>
            })}
            {move || state.with(|s| s.last_build.as_ref().map(build_started_message)).map(|message| view! {
                <Alert severity=AlertSeverity::Success>{message}</Alert>
            })}

            {move || {
                // Remount the form only when a fresh bundle arrives.
                revision.track();
                let loaded = state.with_untracked(|s| s.workspace.clone().zip(s.parameters.clone()));
                match loaded {
                    Some((workspace, parameters)) => view! {
                        <WorkspaceParametersForm
                            workspace=workspace
                            template_version_rich_parameters=parameters.template_version_rich_parameters
                            build_parameters=parameters.build_parameters
                            can_change_versions=parameters.can_change_versions
                            is_submitting=is_submitting
                            error=submit_error
                            on_cancel=on_cancel
                            on_submit=on_submit
                        />
                    }
                    .into_any(),
                    None => view! {
                        <Show when=move || state.with(|s| s.loading && !s.is_ready())>
                            <p class="settings-page__loading">"Loading parameters…"</p>
                        </Show>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
