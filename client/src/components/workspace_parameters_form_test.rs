use super::*;

#[test]
fn immutable_inputs_are_always_disabled() {
    assert!(input_disabled(Section::Immutable, false, false));
}

#[test]
fn mutable_inputs_follow_lock_and_submission() {
    for section in [Section::Parameters, Section::Ephemeral] {
        assert!(!input_disabled(section, false, false));
        assert!(input_disabled(section, true, false));
        assert!(input_disabled(section, false, true));
    }
}

#[test]
fn immutable_change_is_a_logic_violation() {
    assert!(is_logic_violation(&FormError::ImmutableParameter { name: "cpu".to_owned() }));
    assert!(is_logic_violation(&FormError::IndexOutOfRange { index: 3, len: 1 }));
}

#[test]
fn locked_form_change_is_not_a_logic_violation() {
    assert!(!is_logic_violation(&FormError::Disabled));
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;
    use params::{BuildTransition, WorkspaceBuild};
    use uuid::Uuid;

    use super::*;

    fn workspace(outdated: bool, require_active: bool) -> Workspace {
        Workspace {
            id: Uuid::nil(),
            name: "dev".to_owned(),
            owner_name: "alice".to_owned(),
            template_name: "docker".to_owned(),
            outdated,
            template_require_active_version: require_active,
            latest_build: WorkspaceBuild {
                id: Uuid::nil(),
                workspace_id: Uuid::nil(),
                build_number: 1,
                template_version_id: Uuid::nil(),
                transition: BuildTransition::Start,
            },
        }
    }

    fn param(name: &str, mutable: bool, ephemeral: bool) -> TemplateVersionParameter {
        TemplateVersionParameter {
            name: name.to_owned(),
            mutable,
            ephemeral,
            ..Default::default()
        }
    }

    fn render(workspace: Workspace, definitions: Vec<TemplateVersionParameter>) -> String {
        let owner = Owner::new();
        owner.set();
        view! {
            <WorkspaceParametersForm
                workspace=workspace
                template_version_rich_parameters=definitions
                build_parameters=Vec::new()
                is_submitting=false
                error=Signal::stored(None::<ApiError>)
                on_cancel=Callback::new(|()| {})
                on_submit=Callback::new(|_: WorkspaceParametersFormValues| {})
            />
        }
        .to_html()
    }

    #[test]
    fn banner_only_when_locked() {
        let defs = vec![param("region", true, false)];
        assert!(render(workspace(true, true), defs.clone()).contains(UPDATE_REQUIRED_MESSAGE));
        assert!(!render(workspace(true, false), defs).contains(UPDATE_REQUIRED_MESSAGE));
    }

    #[test]
    fn three_sections_for_mixed_definitions() {
        let html = render(
            workspace(false, false),
            vec![param("region", true, false), param("reset_db", true, true), param("cpu", false, false)],
        );
        assert_eq!(html.matches(r#"class="form-section""#).count(), 3);
        assert!(html.contains("Ephemeral Parameters"));
        assert!(html.contains("Immutable parameters"));
        assert!(html.contains("rich_parameter_values[2].value"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let html = render(workspace(false, false), vec![param("region", true, false)]);
        assert_eq!(html.matches(r#"class="form-section""#).count(), 1);
        assert!(!html.contains("Ephemeral Parameters"));
        assert!(!html.contains("Immutable parameters"));
        assert!(!html.contains(NO_PARAMETERS_MESSAGE));
    }

    #[test]
    fn no_definitions_render_no_sections() {
        let html = render(workspace(false, false), Vec::new());
        assert_eq!(html.matches(r#"class="form-section""#).count(), 0);
        assert!(html.contains(NO_PARAMETERS_MESSAGE));
    }
}
