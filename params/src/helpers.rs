//! Per-field props derived from form state and the submission error.

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;

use crate::controller::FormController;
use crate::field_path::FieldPath;
use crate::types::ApiError;

/// Everything an input needs to render its binding and error state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldHelpers {
    /// Bound field path, e.g. `rich_parameter_values[0].value`.
    pub name: String,
    pub id: String,
    pub value: String,
    pub error: bool,
    pub helper_text: Option<String>,
}

/// Build the helpers for one field.
///
/// An API validation error for the same path wins over the schema error;
/// the schema error is only shown once the field has been touched.
pub fn field_helpers<C: FormController + ?Sized>(
    form: &C,
    path: FieldPath,
    submit_error: Option<&ApiError>,
) -> FieldHelpers {
    let name = path.to_string();
    let api_error = submit_error.and_then(|err| err.field_detail(path));
    let form_error = form.is_touched(path).then(|| form.field_error(path)).flatten();
    let helper_text = api_error.or(form_error).map(str::to_owned);

    FieldHelpers {
        id: path.dom_id(),
        value: form.field_value(path).unwrap_or_default().to_owned(),
        error: helper_text.is_some(),
        helper_text,
        name,
    }
}
