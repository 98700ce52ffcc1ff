//! Form layout building blocks.
//!
//! DESIGN
//! ======
//! Sections pair a title/description column with a fields column, matching
//! the settings pages' horizontal layout. The footer owns the cancel and
//! submit buttons so every settings form gets the same loading behavior.

use leptos::prelude::*;

/// `<form>` wrapper with the horizontal settings layout.
#[component]
pub fn HorizontalForm(on_submit: Callback<leptos::ev::SubmitEvent>, children: Children) -> impl IntoView {
    view! {
        <form class="form form--horizontal" data-testid="form" on:submit=move |ev| on_submit.run(ev)>
            {children()}
        </form>
    }
}

/// Titled group of fields.
#[component]
pub fn FormSection(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="form-section">
            <div class="form-section__info">
                <h2 class="form-section__title">{title}</h2>
                <p class="form-section__description">{description}</p>
            </div>
            <div class="form-section__body">{children()}</div>
        </section>
    }
}

/// Vertical stack of inputs inside a section.
#[component]
pub fn FormFields(children: Children) -> impl IntoView {
    view! { <div class="form-fields">{children()}</div> }
}

/// Cancel + submit buttons.
///
/// Submit is disabled while loading or when `submit_disabled` is set.
#[component]
pub fn FormFooter(
    on_cancel: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into, default = false.into())] submit_disabled: Signal<bool>,
    #[prop(into, default = "Save".to_owned())] submit_label: String,
) -> impl IntoView {
    view! {
        <div class="form-footer">
            <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button
                class="btn btn--primary"
                class:btn--loading=move || is_loading.get()
                type="submit"
                disabled=move || is_loading.get() || submit_disabled.get()
            >
                {move || if is_loading.get() { "Saving…".to_owned() } else { submit_label.clone() }}
            </button>
        </div>
    }
}
