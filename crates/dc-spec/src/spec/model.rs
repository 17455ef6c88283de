use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::question::QuestionType;

/// Settings stored with a question; which of them apply depends on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionModel {
    /// Question type code (1 String .. 9 Location).
    #[serde(rename = "type")]
    #[schemars(with = "u8")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Lower bound: a number for numeric types, an ISO string for temporal types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    /// Target table (optionally `table.field`) of a reference question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub represent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Location hierarchy levels to collect (`L0`..`L5`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_answer: Option<Value>,
}

impl QuestionModel {
    /// An empty model of the given type.
    pub fn new(kind: QuestionType) -> Self {
        Self {
            kind,
            question: None,
            min: None,
            max: None,
            reference: None,
            represent: None,
            filter: None,
            location_fields: Vec::new(),
            options: Vec::new(),
            multiple: false,
            default_answer: None,
        }
    }
}

/// JSON Schema describing [`QuestionModel`].
pub fn schema() -> schemars::Schema {
    schemars::schema_for!(QuestionModel)
}
