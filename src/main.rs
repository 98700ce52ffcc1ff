mod config;
mod routes;
mod seed;
mod state;
mod store;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");

    let records = match &config.seed_path {
        Some(path) => seed::load_seed(path).expect("seed load failed"),
        None => seed::demo_workspaces(),
    };
    tracing::info!(
        workspaces = records.len(),
        seed = ?config.seed_path,
        can_change_versions = config.can_change_versions,
        "workspace store seeded"
    );

    let state = state::AppState::new(store::WorkspaceStore::new(records), config.can_change_versions);

    let app = routes::leptos_app(state).expect("router init failed");
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "wsparams listening");
    axum::serve(listener, app).await.expect("server failed");
}
