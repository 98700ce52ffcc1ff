//! Initial form values derived from definitions and the previous build.

#[cfg(test)]
#[path = "initial_test.rs"]
mod initial_test;

use crate::types::{TemplateVersionParameter, WorkspaceBuildParameter};

/// One value per definition, in definition order.
///
/// Ephemeral parameters always restart from their default because their
/// values are not persisted between starts. Other parameters reuse the
/// previous build value with the same name, or the default when absent.
#[must_use]
pub fn initial_rich_parameter_values(
    definitions: &[TemplateVersionParameter],
    build_parameters: &[WorkspaceBuildParameter],
) -> Vec<WorkspaceBuildParameter> {
    definitions
        .iter()
        .map(|parameter| {
            let previous = (!parameter.ephemeral)
                .then(|| build_parameters.iter().find(|p| p.name == parameter.name))
                .flatten();
            match previous {
                Some(previous) => previous.clone(),
                None => WorkspaceBuildParameter::new(&parameter.name, &parameter.default_value),
            }
        })
        .collect()
}
