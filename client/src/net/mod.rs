//! Network modules for REST calls and shared DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The settings page talks to the workspace API over plain HTTP; `types`
//! re-exports the DTOs shared with the server so both sides serialize the
//! same shapes.

pub mod api;
pub mod types;
