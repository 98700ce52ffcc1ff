//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and submission and delegates rendering
//! details to `components`.

pub mod workspace;
pub mod workspace_parameters;
pub mod workspaces;
