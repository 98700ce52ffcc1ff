//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace settings surfaces. Form layout pieces are
//! shared; `workspace_parameters_form` wires the parameter model into them.

pub mod alert;
pub mod form;
pub mod rich_parameter_input;
pub mod workspace_parameters_form;
