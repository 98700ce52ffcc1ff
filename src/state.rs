//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the workspace store and the caller's version-change permission,
//! which every request shares because there is no per-user authentication.

use crate::store::WorkspaceStore;

/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: WorkspaceStore,
    pub can_change_versions: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: WorkspaceStore, can_change_versions: bool) -> Self {
        Self { store, can_change_versions }
    }
}
