use super::*;
use crate::types::TemplateVersionParameterOption;

fn param(name: &str, kind: ParameterType) -> TemplateVersionParameter {
    TemplateVersionParameter {
        name: name.to_owned(),
        kind,
        mutable: true,
        ..Default::default()
    }
}

fn value(name: &str, v: &str) -> WorkspaceBuildParameter {
    WorkspaceBuildParameter::new(name, v)
}

fn check(defs: &[TemplateVersionParameter], v: &WorkspaceBuildParameter) -> Result<(), String> {
    RichParameterSchema::new(defs, &[]).check(v)
}

// =============================================================
// Required / unknown
// =============================================================

#[test]
fn required_empty_value_fails() {
    let mut p = param("region", ParameterType::String);
    p.required = true;
    assert_eq!(check(&[p.clone()], &value("region", "  ")), Err(REQUIRED_MESSAGE.to_owned()));
    assert_eq!(check(&[p], &value("region", "eu")), Ok(()));
}

#[test]
fn optional_empty_value_passes_all_types() {
    for kind in [ParameterType::String, ParameterType::Number, ParameterType::Bool, ParameterType::ListString] {
        assert_eq!(check(&[param("x", kind)], &value("x", "")), Ok(()));
    }
}

#[test]
fn value_without_definition_passes() {
    assert_eq!(check(&[], &value("ghost", "anything")), Ok(()));
}

// =============================================================
// Numbers
// =============================================================

#[test]
fn number_rejects_non_numeric() {
    let p = param("cpu", ParameterType::Number);
    assert_eq!(check(&[p], &value("cpu", "four")), Err(NOT_A_NUMBER_MESSAGE.to_owned()));
}

#[test]
fn number_range_messages() {
    let mut both = param("cpu", ParameterType::Number);
    both.validation_min = Some(1);
    both.validation_max = Some(8);
    assert_eq!(check(&[both.clone()], &value("cpu", "4")), Ok(()));
    assert_eq!(check(&[both.clone()], &value("cpu", "9")), Err("Value must be between 1 and 8.".to_owned()));
    assert_eq!(check(&[both], &value("cpu", "0")), Err("Value must be between 1 and 8.".to_owned()));

    let mut min_only = param("cpu", ParameterType::Number);
    min_only.validation_min = Some(2);
    assert_eq!(
        check(&[min_only], &value("cpu", "1")),
        Err("Value must be greater than or equal to 2.".to_owned())
    );

    let mut max_only = param("cpu", ParameterType::Number);
    max_only.validation_max = Some(2);
    assert_eq!(
        check(&[max_only], &value("cpu", "3")),
        Err("Value must be less than or equal to 2.".to_owned())
    );
}

#[test]
fn number_range_uses_template_message() {
    let mut p = param("cpu", ParameterType::Number);
    p.validation_min = Some(1);
    p.validation_max = Some(8);
    p.validation_error = Some("Pick {min}-{max} cores, not {value}".to_owned());
    assert_eq!(check(&[p], &value("cpu", "16")), Err("Pick 1-8 cores, not 16".to_owned()));
}

#[test]
fn number_monotonic_increasing_compares_with_last_build() {
    let mut p = param("disk", ParameterType::Number);
    p.validation_monotonic = Some(Monotonic::Increasing);
    let schema = RichParameterSchema::new(&[p], &[value("disk", "20")]);
    assert_eq!(schema.check(&value("disk", "30")), Ok(()));
    assert_eq!(schema.check(&value("disk", "20")), Ok(()));
    assert_eq!(
        schema.check(&value("disk", "10")),
        Err("Value must only ever increase (last value was 20).".to_owned())
    );
}

#[test]
fn number_monotonic_decreasing_compares_with_last_build() {
    let mut p = param("ttl", ParameterType::Number);
    p.validation_monotonic = Some(Monotonic::Decreasing);
    let schema = RichParameterSchema::new(&[p], &[value("ttl", "5")]);
    assert_eq!(schema.check(&value("ttl", "3")), Ok(()));
    assert_eq!(
        schema.check(&value("ttl", "6")),
        Err("Value must only ever decrease (last value was 5).".to_owned())
    );
}

#[test]
fn number_monotonic_without_last_build_passes() {
    let mut p = param("disk", ParameterType::Number);
    p.validation_monotonic = Some(Monotonic::Increasing);
    assert_eq!(check(&[p], &value("disk", "1")), Ok(()));
}

// =============================================================
// Strings, bools, lists, options
// =============================================================

#[test]
fn string_regex_mismatch_uses_default_message() {
    let mut p = param("name", ParameterType::String);
    p.validation_regex = Some("^[a-z]+$".to_owned());
    assert_eq!(check(&[p.clone()], &value("name", "abc")), Ok(()));
    assert_eq!(check(&[p], &value("name", "ABC")), Err(PATTERN_MESSAGE.to_owned()));
}

#[test]
fn string_regex_mismatch_uses_template_message() {
    let mut p = param("name", ParameterType::String);
    p.validation_regex = Some("^[a-z]+$".to_owned());
    p.validation_error = Some("{value} must match {regex}".to_owned());
    assert_eq!(check(&[p], &value("name", "A1")), Err("A1 must match ^[a-z]+$".to_owned()));
}

#[test]
fn invalid_regex_is_reported_not_panicked() {
    let mut p = param("name", ParameterType::String);
    p.validation_regex = Some("([a-z".to_owned());
    let err = check(&[p], &value("name", "abc")).unwrap_err();
    assert!(err.starts_with("Invalid validation pattern"));
}

#[test]
fn bool_accepts_only_true_false() {
    let p = param("gpu", ParameterType::Bool);
    assert_eq!(check(&[p.clone()], &value("gpu", "true")), Ok(()));
    assert_eq!(check(&[p.clone()], &value("gpu", "false")), Ok(()));
    assert_eq!(check(&[p], &value("gpu", "yes")), Err(NOT_A_BOOL_MESSAGE.to_owned()));
}

#[test]
fn list_requires_json_string_array() {
    let p = param("tags", ParameterType::ListString);
    assert_eq!(check(&[p.clone()], &value("tags", r#"["a","b"]"#)), Ok(()));
    assert_eq!(check(&[p.clone()], &value("tags", "a,b")), Err(NOT_A_LIST_MESSAGE.to_owned()));
    assert_eq!(check(&[p], &value("tags", "[1,2]")), Err(NOT_A_LIST_MESSAGE.to_owned()));
}

fn option(v: &str) -> TemplateVersionParameterOption {
    TemplateVersionParameterOption {
        name: v.to_uppercase(),
        value: v.to_owned(),
        ..Default::default()
    }
}

#[test]
fn options_restrict_values() {
    let mut p = param("region", ParameterType::String);
    p.options = vec![option("us"), option("eu")];
    assert_eq!(check(&[p.clone()], &value("region", "eu")), Ok(()));
    assert_eq!(check(&[p], &value("region", "ap")), Err(NOT_AN_OPTION_MESSAGE.to_owned()));
}

#[test]
fn list_options_restrict_each_item() {
    let mut p = param("regions", ParameterType::ListString);
    p.options = vec![option("us"), option("eu")];
    assert_eq!(check(&[p.clone()], &value("regions", r#"["us","eu"]"#)), Ok(()));
    assert_eq!(check(&[p], &value("regions", r#"["us","ap"]"#)), Err(NOT_AN_OPTION_MESSAGE.to_owned()));
}

// =============================================================
// SchemaValidator
// =============================================================

#[test]
fn validate_keys_errors_by_index() {
    let mut cpu = param("cpu", ParameterType::Number);
    cpu.validation_max = Some(4);
    let defs = [param("region", ParameterType::String), cpu];
    let schema = RichParameterSchema::new(&defs, &[]);
    let errors = schema.validate(&[value("region", "eu"), value("cpu", "9")]);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&FieldPath::value(1)).map(String::as_str),
        Some("Value must be less than or equal to 4.")
    );
}

#[test]
fn validate_empty_values_has_no_errors() {
    let schema = RichParameterSchema::new(&[], &[]);
    assert!(schema.validate(&[]).is_empty());
}
