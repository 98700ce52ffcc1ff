//! Workspace overview page; the parameters form's cancel target.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert::{Alert, AlertSeverity};
use crate::net::types::{ApiError, Workspace};
use crate::state::workspaces::parameters_settings_href;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let workspace = RwSignal::new(None::<Workspace>);
    let error = RwSignal::new(None::<ApiError>);

    Effect::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_workspace(&id).await {
                Ok(ws) => {
                    workspace.set(Some(ws));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="workspace-page">
            {move || error.get().map(|err| view! {
                <Alert severity=AlertSeverity::Error>{err.to_string()}</Alert>
            })}
            {move || workspace.get().map(|ws| {
                let settings = parameters_settings_href(&ws);
                let outdated = ws.outdated;
                view! {
                    <h1>{format!("{}/{}", ws.owner_name, ws.name)}</h1>
                    <dl class="workspace-page__facts">
                        <dt>"Template"</dt>
                        <dd>{ws.template_name}</dd>
                        <dt>"Latest build"</dt>
                        <dd>{format!("#{}", ws.latest_build.build_number)}</dd>
                    </dl>
                    <Show when=move || outdated>
                        <Alert severity=AlertSeverity::Info>
                            "A newer template version is available."
                        </Alert>
                    </Show>
                    <a class="btn" href=settings>"Edit parameters"</a>
                }
            })}
            <a href="/">"All workspaces"</a>
        </div>
    }
}
