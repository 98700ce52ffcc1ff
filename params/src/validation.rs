//! Validation schema for rich parameter values.
//!
//! DESIGN
//! ======
//! `SchemaValidator` is the seam the form controller validates through;
//! `RichParameterSchema` is the implementation built from a template
//! version's definitions and the previous build's values. Values are matched
//! to definitions by name, so an unknown name passes here and is left to the
//! server to reject.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use crate::field_path::FieldPath;
use crate::types::{Monotonic, ParameterType, TemplateVersionParameter, WorkspaceBuildParameter};

/// Error message per field path. Absent paths are valid.
pub type FieldErrors = BTreeMap<FieldPath, String>;

pub const REQUIRED_MESSAGE: &str = "Parameter is required.";
pub const NOT_A_NUMBER_MESSAGE: &str = "Value must be a number.";
pub const NOT_A_BOOL_MESSAGE: &str = "Value must be either true or false.";
pub const NOT_A_LIST_MESSAGE: &str = "Value must be a JSON array of strings.";
pub const NOT_AN_OPTION_MESSAGE: &str = "Value must be one of the available options.";
pub const PATTERN_MESSAGE: &str = "Value does not match the required pattern.";

/// Array-shape validator over the full values list.
pub trait SchemaValidator {
    fn validate(&self, values: &[WorkspaceBuildParameter]) -> FieldErrors;
}

struct ParameterRule {
    parameter: TemplateVersionParameter,
    regex: Option<Result<Regex, String>>,
    last_value: Option<String>,
}

/// Schema derived from parameter definitions.
pub struct RichParameterSchema {
    rules: HashMap<String, ParameterRule>,
}

impl RichParameterSchema {
    #[must_use]
    pub fn new(definitions: &[TemplateVersionParameter], last_build: &[WorkspaceBuildParameter]) -> Self {
        let rules = definitions
            .iter()
            .map(|parameter| {
                let regex = parameter
                    .validation_regex
                    .as_deref()
                    .filter(|pattern| !pattern.is_empty())
                    .map(|pattern| {
                        Regex::new(pattern).map_err(|e| format!("Invalid validation pattern: {e}"))
                    });
                let last_value = last_build
                    .iter()
                    .find(|p| p.name == parameter.name)
                    .map(|p| p.value.clone());
                let rule = ParameterRule { parameter: parameter.clone(), regex, last_value };
                (parameter.name.clone(), rule)
            })
            .collect();
        Self { rules }
    }

    /// Check a single value against the definition with the same name.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the field.
    pub fn check(&self, value: &WorkspaceBuildParameter) -> Result<(), String> {
        let Some(rule) = self.rules.get(&value.name) else {
            return Ok(());
        };
        let parameter = &rule.parameter;
        let raw = value.value.as_str();

        if raw.trim().is_empty() {
            return if parameter.required { Err(REQUIRED_MESSAGE.to_owned()) } else { Ok(()) };
        }

        match parameter.kind {
            ParameterType::Number => check_number(rule, raw)?,
            ParameterType::String => check_pattern(rule, raw)?,
            ParameterType::Bool => {
                if raw != "true" && raw != "false" {
                    return Err(NOT_A_BOOL_MESSAGE.to_owned());
                }
            }
            ParameterType::ListString => {
                let items: Vec<String> =
                    serde_json::from_str(raw).map_err(|_| NOT_A_LIST_MESSAGE.to_owned())?;
                if !parameter.options.is_empty() && !items.iter().all(|item| is_option(parameter, item)) {
                    return Err(NOT_AN_OPTION_MESSAGE.to_owned());
                }
                return Ok(());
            }
            ParameterType::Unknown => {}
        }

        if !parameter.options.is_empty() && !is_option(parameter, raw) {
            return Err(NOT_AN_OPTION_MESSAGE.to_owned());
        }
        Ok(())
    }
}

impl SchemaValidator for RichParameterSchema {
    fn validate(&self, values: &[WorkspaceBuildParameter]) -> FieldErrors {
        values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| self.check(value).err().map(|msg| (FieldPath::value(index), msg)))
            .collect()
    }
}

fn is_option(parameter: &TemplateVersionParameter, value: &str) -> bool {
    parameter.options.iter().any(|option| option.value == value)
}

fn check_number(rule: &ParameterRule, raw: &str) -> Result<(), String> {
    let parameter = &rule.parameter;
    let number = parse_number(raw).ok_or_else(|| NOT_A_NUMBER_MESSAGE.to_owned())?;

    #[allow(clippy::cast_precision_loss)]
    let out_of_range = match (parameter.validation_min, parameter.validation_max) {
        (Some(min), Some(max)) if number < min as f64 || number > max as f64 => {
            Some(format!("Value must be between {min} and {max}."))
        }
        (Some(min), None) if number < min as f64 => Some(format!("Value must be greater than or equal to {min}.")),
        (None, Some(max)) if number > max as f64 => Some(format!("Value must be less than or equal to {max}.")),
        _ => None,
    };
    if let Some(default_message) = out_of_range {
        return Err(custom_message(parameter, raw).unwrap_or(default_message));
    }

    let last = rule.last_value.as_deref().and_then(|last| parse_number(last).map(|n| (last, n)));
    match (parameter.validation_monotonic, last) {
        (Some(Monotonic::Increasing), Some((last, previous))) if number < previous => {
            Err(format!("Value must only ever increase (last value was {last})."))
        }
        (Some(Monotonic::Decreasing), Some((last, previous))) if number > previous => {
            Err(format!("Value must only ever decrease (last value was {last})."))
        }
        _ => Ok(()),
    }
}

fn check_pattern(rule: &ParameterRule, raw: &str) -> Result<(), String> {
    match &rule.regex {
        None => Ok(()),
        Some(Err(message)) => Err(message.clone()),
        Some(Ok(regex)) if regex.is_match(raw) => Ok(()),
        Some(Ok(_)) => Err(custom_message(&rule.parameter, raw).unwrap_or_else(|| PATTERN_MESSAGE.to_owned())),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Template-authored message with `{min}`, `{max}`, `{value}`, `{regex}` filled in.
fn custom_message(parameter: &TemplateVersionParameter, value: &str) -> Option<String> {
    let template = parameter.validation_error.as_deref().filter(|t| !t.trim().is_empty())?;
    let min = parameter.validation_min.map(|n| n.to_string()).unwrap_or_default();
    let max = parameter.validation_max.map(|n| n.to_string()).unwrap_or_default();
    let regex = parameter.validation_regex.as_deref().unwrap_or_default();
    Some(
        template
            .replace("{min}", &min)
            .replace("{max}", &max)
            .replace("{value}", value)
            .replace("{regex}", regex),
    )
}
