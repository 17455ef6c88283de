use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::model::QuestionModel;
use crate::spec::question::QuestionType;
use crate::visibility::{FieldGroup, VisibilityFlags, resolve};

const REFERENCE_PATTERN: &str = r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)?$";
const LOCATION_LEVEL_PATTERN: &str = r"^L[0-5]$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
const TIME_PATTERN: &str = r"^\d{2}:\d{2}(:\d{2})?$";
const DATE_TIME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2})?$";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub path: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Checks a question model against the field groups its type shows.
pub fn validate(model: &QuestionModel) -> ValidationResult {
    let flags = resolve(model.kind);
    let mut errors = Vec::new();

    for group in FieldGroup::ALL {
        if !flags.get(group) && is_populated(model, group) {
            errors.push(error(
                group.key(),
                &format!("not used by {} questions", model.kind),
                "hidden_field",
            ));
        }
    }

    if flags.min && flags.max {
        check_bounds(model, &mut errors);
    }

    if flags.options && model.options.is_empty() {
        errors.push(error(
            FieldGroup::Options.key(),
            "object questions require at least one option",
            "missing_options",
        ));
    }

    if flags.reference {
        match model.reference.as_deref() {
            None => errors.push(error(
                FieldGroup::Reference.key(),
                "reference questions require a target table",
                "missing_reference",
            )),
            Some(target) if !matches_pattern(REFERENCE_PATTERN, target) => {
                errors.push(error(
                    FieldGroup::Reference.key(),
                    "reference must be a table or table.field name",
                    "invalid_reference",
                ))
            }
            Some(_) => {}
        }
    }

    if flags.location_fields && model.location_fields.is_empty() {
        errors.push(error(
            FieldGroup::LocationFields.key(),
            "location questions require at least one location level",
            "missing_location_fields",
        ));
    }

    if flags.location_fields {
        for level in &model.location_fields {
            if !matches_pattern(LOCATION_LEVEL_PATTERN, level) {
                errors.push(error(
                    FieldGroup::LocationFields.key(),
                    &format!("'{}' is not a location level (L0..L5)", level),
                    "invalid_location_level",
                ));
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// Returns a copy of `model` with every setting its type hides cleared.
pub fn prune(model: &QuestionModel) -> QuestionModel {
    prune_with(model, &resolve(model.kind))
}

fn prune_with(model: &QuestionModel, flags: &VisibilityFlags) -> QuestionModel {
    let mut pruned = model.clone();
    for group in flags.hidden_groups() {
        match group {
            FieldGroup::Max => pruned.max = None,
            FieldGroup::Min => pruned.min = None,
            FieldGroup::Reference => pruned.reference = None,
            FieldGroup::Represent => pruned.represent = None,
            FieldGroup::Filter => pruned.filter = None,
            FieldGroup::LocationFields => pruned.location_fields.clear(),
            FieldGroup::Options => pruned.options.clear(),
            FieldGroup::Multiple => pruned.multiple = false,
            FieldGroup::DefaultAnswer => pruned.default_answer = None,
        }
    }
    pruned
}

fn is_populated(model: &QuestionModel, group: FieldGroup) -> bool {
    match group {
        FieldGroup::Max => model.max.is_some(),
        FieldGroup::Min => model.min.is_some(),
        FieldGroup::Reference => model.reference.is_some(),
        FieldGroup::Represent => model.represent.is_some(),
        FieldGroup::Filter => model.filter.is_some(),
        FieldGroup::LocationFields => !model.location_fields.is_empty(),
        FieldGroup::Options => !model.options.is_empty(),
        FieldGroup::Multiple => model.multiple,
        FieldGroup::DefaultAnswer => model.default_answer.is_some(),
    }
}

fn check_bounds(model: &QuestionModel, errors: &mut Vec<ValidationError>) {
    let mut bounds_ok = true;
    for (group, bound) in [
        (FieldGroup::Min, model.min.as_ref()),
        (FieldGroup::Max, model.max.as_ref()),
    ] {
        if let Some(value) = bound
            && !bound_matches_type(model.kind, value)
        {
            bounds_ok = false;
            let expected = match model.kind {
                QuestionType::Integer => "a whole number",
                QuestionType::Float => "a number",
                QuestionType::Date => "an ISO date (YYYY-MM-DD)",
                QuestionType::Time => "an ISO time (HH:MM or HH:MM:SS)",
                QuestionType::DateTime => "an ISO date-time (YYYY-MM-DDTHH:MM[:SS])",
                _ => "a value of the question type",
            };
            errors.push(error(
                group.key(),
                &format!("{} bound must be {}", group.key(), expected),
                "bound_type_mismatch",
            ));
        }
    }

    if !bounds_ok {
        return;
    }

    let exceeds = match (model.min.as_ref(), model.max.as_ref()) {
        (Some(Value::Number(min)), Some(Value::Number(max))) => {
            matches!((min.as_f64(), max.as_f64()), (Some(min), Some(max)) if min > max)
        }
        (Some(Value::String(min)), Some(Value::String(max))) => min > max,
        _ => false,
    };
    if exceeds {
        errors.push(error(
            FieldGroup::Min.key(),
            "minimum is greater than maximum",
            "min_exceeds_max",
        ));
    }
}

fn bound_matches_type(kind: QuestionType, value: &Value) -> bool {
    match kind {
        QuestionType::Integer => value.is_i64(),
        QuestionType::Float => value.is_number(),
        QuestionType::Date => matches_temporal(DATE_PATTERN, value),
        QuestionType::Time => matches_temporal(TIME_PATTERN, value),
        QuestionType::DateTime => matches_temporal(DATE_TIME_PATTERN, value),
        _ => true,
    }
}

fn matches_temporal(pattern: &str, value: &Value) -> bool {
    value
        .as_str()
        .map(|text| matches_pattern(pattern, text))
        .unwrap_or(false)
}

fn matches_pattern(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|regex| regex.is_match(text))
        .unwrap_or(false)
}

fn error(field: &str, message: &str, code: &str) -> ValidationError {
    ValidationError {
        field: field.into(),
        path: format!("/{}", field),
        message: message.into(),
        code: code.into(),
    }
}
