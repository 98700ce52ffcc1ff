//! Inline status banner.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertSeverity {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Info => "alert alert--info",
            Self::Success => "alert alert--success",
            Self::Warning => "alert alert--warning",
            Self::Error => "alert alert--error",
        }
    }

    fn role(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

/// Banner with a severity color and arbitrary content.
#[component]
pub fn Alert(#[prop(optional)] severity: AlertSeverity, children: Children) -> impl IntoView {
    view! {
        <div class=severity.class_name() role=severity.role()>
            {children()}
        </div>
    }
}
