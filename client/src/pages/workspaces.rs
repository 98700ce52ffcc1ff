//! Landing page listing workspaces with links to their parameter settings.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertSeverity};
use crate::state::workspaces::{WorkspacesState, parameters_settings_href, workspace_href};

#[component]
pub fn WorkspacesPage() -> impl IntoView {
    let state = RwSignal::new(WorkspacesState { loading: true, ..Default::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_workspaces().await;
        state.update(|s| s.finish_load(result));
    });

    view! {
        <div class="workspaces-page">
            <h1>"Workspaces"</h1>
            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <Alert severity=AlertSeverity::Error>{err.to_string()}</Alert>
            })}
            <Show when=move || state.with(|s| s.loading)>
                <p class="workspaces-page__loading">"Loading workspaces…"</p>
            </Show>
            <ul class="workspaces-page__list">
                {move || {
                    state
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|ws| {
                            let overview = workspace_href(&ws.id.to_string());
                            let settings = parameters_settings_href(&ws);
                            let outdated = ws.outdated;
                            view! {
                                <li class="workspace-row">
                                    <a class="workspace-row__name" href=overview>
                                        {format!("{}/{}", ws.owner_name, ws.name)}
                                    </a>
                                    <span class="workspace-row__template">{ws.template_name}</span>
                                    <Show when=move || outdated>
                                        <span class="workspace-row__badge">"Outdated"</span>
                                    </Show>
                                    <a class="workspace-row__settings" href=settings>"Parameters"</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
