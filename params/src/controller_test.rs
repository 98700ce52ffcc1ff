use super::*;

/// Rejects any value equal to "bad".
struct RejectBad;

impl SchemaValidator for RejectBad {
    fn validate(&self, values: &[WorkspaceBuildParameter]) -> FieldErrors {
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.value == "bad")
            .map(|(i, _)| (FieldPath::value(i), "bad value".to_owned()))
            .collect()
    }
}

fn state(values: &[(&str, &str)]) -> FormState<RejectBad> {
    let values = values.iter().map(|(n, v)| WorkspaceBuildParameter::new(*n, *v)).collect();
    FormState::new(values, RejectBad)
}

// =============================================================
// set_field_value
// =============================================================

#[test]
fn set_field_value_updates_only_target_slot() {
    let mut form = state(&[("a", "1"), ("b", "2"), ("c", "3")]);
    form.set_field_value(1, WorkspaceBuildParameter::new("b", "20")).unwrap();
    assert_eq!(
        form.values(),
        &[
            WorkspaceBuildParameter::new("a", "1"),
            WorkspaceBuildParameter::new("b", "20"),
            WorkspaceBuildParameter::new("c", "3"),
        ]
    );
    assert_eq!(form.field_value(FieldPath::value(1)), Some("20"));
}

#[test]
fn set_field_value_rejects_out_of_range() {
    let mut form = state(&[("a", "1")]);
    assert_eq!(
        form.set_field_value(4, WorkspaceBuildParameter::new("a", "2")),
        Err(FormError::IndexOutOfRange { index: 4, len: 1 })
    );
}

#[test]
fn set_field_value_rejects_name_mismatch() {
    let mut form = state(&[("a", "1"), ("b", "2")]);
    let err = form.set_field_value(0, WorkspaceBuildParameter::new("b", "9")).unwrap_err();
    assert_eq!(
        err,
        FormError::NameMismatch { index: 0, expected: "a".to_owned(), found: "b".to_owned() }
    );
    assert_eq!(form.field_value(FieldPath::value(0)), Some("1"));
}

#[test]
fn set_field_value_revalidates() {
    let mut form = state(&[("a", "1")]);
    assert!(form.is_valid());
    form.set_field_value(0, WorkspaceBuildParameter::new("a", "bad")).unwrap();
    assert_eq!(form.field_error(FieldPath::value(0)), Some("bad value"));
    form.set_field_value(0, WorkspaceBuildParameter::new("a", "good")).unwrap();
    assert!(form.is_valid());
}

// =============================================================
// touched / submit
// =============================================================

#[test]
fn initial_errors_are_computed_but_nothing_is_touched() {
    let form = state(&[("a", "bad")]);
    assert_eq!(form.errors().len(), 1);
    assert!(!form.is_touched(FieldPath::value(0)));
}

#[test]
fn set_touched_ignores_unknown_paths() {
    let mut form = state(&[("a", "1")]);
    form.set_touched(FieldPath::value(0));
    form.set_touched(FieldPath::value(5));
    assert!(form.is_touched(FieldPath::value(0)));
    assert!(!form.is_touched(FieldPath::value(5)));
}

#[test]
fn submit_touches_all_and_returns_values() {
    let mut form = state(&[("a", "1"), ("b", "2")]);
    let values = form.submit().unwrap();
    assert_eq!(values.rich_parameter_values.len(), 2);
    assert!(form.is_touched(FieldPath::value(0)));
    assert!(form.is_touched(FieldPath::value(1)));
}

#[test]
fn submit_fails_with_errors() {
    let mut form = state(&[("a", "1"), ("b", "bad")]);
    match form.submit() {
        Err(FormError::Invalid { errors }) => {
            assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![FieldPath::value(1)]);
        }
        other => panic!("expected invalid, got {other:?}"),
    }
}

#[test]
fn submit_empty_form_yields_empty_values() {
    let mut form = state(&[]);
    assert_eq!(form.submit().unwrap(), WorkspaceParametersFormValues { rich_parameter_values: vec![] });
}

#[test]
fn invalid_error_message_counts_fields() {
    let mut errors = FieldErrors::new();
    errors.insert(FieldPath::value(0), "x".to_owned());
    errors.insert(FieldPath::value(2), "y".to_owned());
    assert_eq!(FormError::Invalid { errors }.to_string(), "2 parameter value(s) failed validation");
}
