//! Input for a single template parameter.
//!
//! DESIGN
//! ======
//! The widget is chosen from the parameter's shape (options, type) by the
//! pure `input_kind` helper; binding and error state arrive as a
//! `FieldHelpers` signal so the parent form stays the only owner of values.

#[cfg(test)]
#[path = "rich_parameter_input_test.rs"]
mod rich_parameter_input_test;

use leptos::prelude::*;
use params::{FieldHelpers, ParameterType, TemplateVersionParameter};

/// Widget used to edit a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// One radio per template option.
    Options,
    /// True/False radios.
    Bool,
    Number,
    /// Textarea holding a JSON array of strings.
    List,
    Text,
}

pub fn input_kind(parameter: &TemplateVersionParameter) -> InputKind {
    match parameter.kind {
        ParameterType::ListString => InputKind::List,
        _ if !parameter.options.is_empty() => InputKind::Options,
        ParameterType::Bool => InputKind::Bool,
        ParameterType::Number => InputKind::Number,
        ParameterType::String | ParameterType::Unknown => InputKind::Text,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioChoice {
    pub label: String,
    pub description: String,
    pub value: String,
}

/// Radio choices for option and bool parameters; empty for other kinds.
pub fn radio_choices(parameter: &TemplateVersionParameter) -> Vec<RadioChoice> {
    match input_kind(parameter) {
        InputKind::Options => parameter
            .options
            .iter()
            .map(|option| RadioChoice {
                label: if option.name.is_empty() { option.value.clone() } else { option.name.clone() },
                description: option.description.clone(),
                value: option.value.clone(),
            })
            .collect(),
        InputKind::Bool => [("True", "true"), ("False", "false")]
            .into_iter()
            .map(|(label, value)| RadioChoice {
                label: label.to_owned(),
                description: String::new(),
                value: value.to_owned(),
            })
            .collect(),
        InputKind::Number | InputKind::List | InputKind::Text => Vec::new(),
    }
}

/// Placeholder hint for free-form inputs.
pub fn placeholder(parameter: &TemplateVersionParameter) -> String {
    match input_kind(parameter) {
        InputKind::List => r#"["first", "second"]"#.to_owned(),
        InputKind::Number => match (parameter.validation_min, parameter.validation_max) {
            (Some(min), Some(max)) => format!("{min} – {max}"),
            _ => String::new(),
        },
        _ => parameter.default_value.clone(),
    }
}

/// Labeled input bound to one slot of the parameter values.
#[component]
pub fn RichParameterInput(
    parameter: TemplateVersionParameter,
    #[prop(into)] field: Signal<FieldHelpers>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let (id, name) = field.with_untracked(|f| (f.id.clone(), f.name.clone()));
    let label = parameter.label().to_owned();
    let description = parameter.plain_description().to_owned();
    let icon = (!parameter.icon.is_empty()).then(|| parameter.icon.clone());
    let required = parameter.required;
    let ephemeral = parameter.ephemeral;
    let kind = input_kind(&parameter);
    let hint = placeholder(&parameter);
    let helper_id = format!("{id}-helper");
    let has_description = !description.is_empty();
    let input_type = if kind == InputKind::Number { "number" } else { "text" };

    let blur = move |_: leptos::ev::FocusEvent| {
        if let Some(on_blur) = on_blur {
            on_blur.run(());
        }
    };
    let current = move || field.with(|f| f.value.clone());

    let control = match kind {
        InputKind::Options | InputKind::Bool => {
            let choices = radio_choices(&parameter)
                .into_iter()
                .map(|choice| {
                    let checked_value = choice.value.clone();
                    let value = choice.value.clone();
                    let description = (!choice.description.is_empty()).then(|| {
                        view! { <span class="rich-parameter__option-description">{choice.description}</span> }
                    });
                    view! {
                        <label class="rich-parameter__radio">
                            <input
                                type="radio"
                                name=name.clone()
                                value=choice.value
                                prop:checked=move || field.with(|f| f.value == checked_value)
                                disabled=move || disabled.get()
                                on:change=move |_| on_change.run(value.clone())
                                on:blur=blur
                            />
                            <span class="rich-parameter__option-label">{choice.label}</span>
                            {description}
                        </label>
                    }
                })
                .collect_view();
            view! {
                <div class="rich-parameter__radio-group" role="radiogroup" id=id.clone()>
                    {choices}
                </div>
            }
            .into_any()
        }
        InputKind::List => view! {
            <textarea
                id=id.clone()
                name=name.clone()
                class="rich-parameter__textarea"
                placeholder=hint
                aria-describedby=helper_id.clone()
                prop:value=current
                disabled=move || disabled.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:blur=blur
            ></textarea>
        }
        .into_any(),
        InputKind::Number | InputKind::Text => view! {
            <input
                id=id.clone()
                name=name.clone()
                class="rich-parameter__input"
                type=input_type
                placeholder=hint
                aria-describedby=helper_id.clone()
                prop:value=current
                disabled=move || disabled.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:blur=blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="rich-parameter" class:rich-parameter--error=move || field.with(|f| f.error)>
            <label class="rich-parameter__label" for=id>
                {icon.map(|src| view! { <img class="rich-parameter__icon" src=src alt=""/> })}
                <span class="rich-parameter__title">{label}</span>
                <Show when=move || required>
                    <span class="rich-parameter__required" title="Required">"*"</span>
                </Show>
                <Show when=move || ephemeral>
                    <span class="rich-parameter__tag">"Ephemeral"</span>
                </Show>
            </label>
            <Show when=move || has_description>
                <p class="rich-parameter__description">{description.clone()}</p>
            </Show>
            {control}
            <p
                id=helper_id
                class="rich-parameter__helper"
                class:rich-parameter__helper--error=move || field.with(|f| f.error)
            >
                {move || field.with(|f| f.helper_text.clone().unwrap_or_default())}
            </p>
        </div>
    }
}
