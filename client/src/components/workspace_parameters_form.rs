//! Form for editing a workspace's build parameters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the workspace settings page. The form owns one
//! `ParametersForm` signal for the edit session; inputs bind to
//! `rich_parameter_values[<index>].value` by the definition's original index,
//! and `on_submit` receives the whole values array.
//!
//! DESIGN
//! ======
//! Definitions are static for the lifetime of the component, so sections and
//! inputs are built once; only values, errors, and disabled flags are
//! reactive. The caller remounts the form to load a new definition set.

#[cfg(test)]
#[path = "workspace_parameters_form_test.rs"]
mod workspace_parameters_form_test;

use leptos::prelude::*;
use params::{
    ApiError, FormError, IndexedParameter, ParametersForm, Section, TemplateVersionParameter,
    UPDATE_REQUIRED_MESSAGE, Workspace, WorkspaceBuildParameter, WorkspaceParametersFormValues,
};

use crate::components::alert::{Alert, AlertSeverity};
use crate::components::form::{FormFields, FormFooter, FormSection, HorizontalForm};
use crate::components::rich_parameter_input::RichParameterInput;

pub const NO_PARAMETERS_MESSAGE: &str = "This template has no parameters.";

/// Whether inputs in `section` are disabled.
///
/// Immutable inputs are always read-only; the others lock while the form is
/// disabled or a submission is in flight.
pub fn input_disabled(section: Section, form_disabled: bool, is_submitting: bool) -> bool {
    !section.is_editable() || form_disabled || is_submitting
}

/// Whether a rejected change points at a wiring bug rather than a locked form.
///
/// Immutable inputs are rendered disabled, so a change reaching one is a
/// logic error.
pub fn is_logic_violation(err: &FormError) -> bool {
    matches!(
        err,
        FormError::ImmutableParameter { .. } | FormError::IndexOutOfRange { .. } | FormError::NameMismatch { .. }
    )
}

/// Editable parameter form with three sections and a save/cancel footer.
#[component]
pub fn WorkspaceParametersForm(
    workspace: Workspace,
    template_version_rich_parameters: Vec<TemplateVersionParameter>,
    build_parameters: Vec<WorkspaceBuildParameter>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(optional)] can_change_versions: bool,
    #[prop(into)] error: Signal<Option<ApiError>>,
    on_cancel: Callback<()>,
    on_submit: Callback<WorkspaceParametersFormValues>,
) -> impl IntoView {
    let form = RwSignal::new(ParametersForm::new(
        &workspace,
        template_version_rich_parameters,
        &build_parameters,
        can_change_versions,
    ));
    let disabled = form.with_untracked(|f| f.is_disabled());
    let partition = form.with_untracked(|f| f.partition().clone());

    let on_form_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        match form.try_update(|f| f.submit()) {
            Some(Ok(values)) => on_submit.run(values),
            Some(Err(err)) => leptos::logging::log!("parameters not submitted: {err}"),
            None => {}
        }
    });

    let render_input = move |section: Section, item: &IndexedParameter| {
        let index = item.index;
        let field = Signal::derive(move || form.with(|f| error.with(|e| f.field(index, e.as_ref()))));
        let locked = Signal::derive(move || input_disabled(section, disabled, is_submitting.get()));
        let on_change = Callback::new(move |value: String| {
            let Some(Err(err)) = form.try_update(|f| f.change(index, value)) else {
                return;
            };
            if is_logic_violation(&err) {
                leptos::logging::error!("{err}");
            } else {
                leptos::logging::warn!("parameter change ignored: {err}");
            }
        });
        let on_blur = Callback::new(move |()| form.update(|f| f.blur(index)));
        view! {
            <RichParameterInput
                parameter=item.parameter.clone()
                field=field
                disabled=locked
                on_change=on_change
                on_blur=on_blur
            />
        }
    };

    let empty = partition.is_empty();
    let sections = partition
        .visible_sections()
        .map(|(section, items)| {
            let inputs = items.iter().map(|item| render_input(section, item)).collect_view();
            view! {
                <FormSection title=section.title() description=section.description()>
                    <FormFields>{inputs}</FormFields>
                </FormSection>
            }
        })
        .collect_view();

    view! {
        {disabled.then(|| view! {
            <Alert severity=AlertSeverity::Warning>{UPDATE_REQUIRED_MESSAGE}</Alert>
        })}
        <HorizontalForm on_submit=on_form_submit>
            {empty.then(|| view! { <p class="form-empty">{NO_PARAMETERS_MESSAGE}</p> })}
            {sections}
            <FormFooter on_cancel=on_cancel is_loading=is_submitting submit_disabled=disabled/>
        </HorizontalForm>
    }
}
