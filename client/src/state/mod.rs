//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by route so pages depend on small focused models that can
//! be tested without a reactive runtime.

pub mod workspace_settings;
pub mod workspaces;
