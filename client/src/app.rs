//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    workspace::WorkspacePage, workspace_parameters::WorkspaceParametersPage, workspaces::WorkspacesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/wsparams.css"/>
        <Title text="Workspaces"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacesPage/>
                <Route path=(StaticSegment("workspaces"), ParamSegment("id")) view=WorkspacePage/>
                <Route
                    path=(
                        StaticSegment("workspaces"),
                        ParamSegment("id"),
                        StaticSegment("settings"),
                        StaticSegment("parameters"),
                    )
                    view=WorkspaceParametersPage
                />
            </Routes>
        </Router>
    }
}
