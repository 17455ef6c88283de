use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Supported question data types, carried on the wire as their integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum QuestionType {
    String,
    Integer,
    Float,
    Object,
    Date,
    Time,
    DateTime,
    Reference,
    Location,
}

impl QuestionType {
    /// Every type in code order.
    pub const ALL: [QuestionType; 9] = [
        QuestionType::String,
        QuestionType::Integer,
        QuestionType::Float,
        QuestionType::Object,
        QuestionType::Date,
        QuestionType::Time,
        QuestionType::DateTime,
        QuestionType::Reference,
        QuestionType::Location,
    ];

    pub fn code(self) -> u8 {
        match self {
            QuestionType::String => 1,
            QuestionType::Integer => 2,
            QuestionType::Float => 3,
            QuestionType::Object => 4,
            QuestionType::Date => 5,
            QuestionType::Time => 6,
            QuestionType::DateTime => 7,
            QuestionType::Reference => 8,
            QuestionType::Location => 9,
        }
    }

    /// Looks up the type for a raw code as selected in the form.
    pub fn from_code(code: i64) -> Result<Self, ResolveError> {
        Self::ALL
            .into_iter()
            .find(|kind| i64::from(kind.code()) == code)
            .ok_or_else(|| ResolveError::UnknownQuestionType(code.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            QuestionType::String => "String",
            QuestionType::Integer => "Integer",
            QuestionType::Float => "Float",
            QuestionType::Object => "Object",
            QuestionType::Date => "Date",
            QuestionType::Time => "Time",
            QuestionType::DateTime => "DateTime",
            QuestionType::Reference => "Reference",
            QuestionType::Location => "Location",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, QuestionType::Integer | QuestionType::Float)
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            QuestionType::Date | QuestionType::Time | QuestionType::DateTime
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the integer code or the type name (case-insensitive).
impl FromStr for QuestionType {
    type Err = ResolveError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        let normalized = trimmed.to_ascii_lowercase().replace('_', "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ResolveError::UnknownQuestionType(trimmed.to_string()))
    }
}

impl TryFrom<i64> for QuestionType {
    type Error = ResolveError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<QuestionType> for u8 {
    fn from(kind: QuestionType) -> Self {
        kind.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_contiguous_and_ordered() {
        for (index, kind) in QuestionType::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.code()), index + 1);
            assert_eq!(QuestionType::from_code(index as i64 + 1).unwrap(), *kind);
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        for code in [0, 10, -1, 255] {
            assert!(matches!(
                QuestionType::from_code(code),
                Err(ResolveError::UnknownQuestionType(_))
            ));
        }
    }

    #[test]
    fn parses_names_and_codes() {
        assert_eq!(
            "datetime".parse::<QuestionType>().unwrap(),
            QuestionType::DateTime
        );
        assert_eq!(
            "date_time".parse::<QuestionType>().unwrap(),
            QuestionType::DateTime
        );
        assert_eq!(" 8 ".parse::<QuestionType>().unwrap(), QuestionType::Reference);
        assert!("Boolean".parse::<QuestionType>().is_err());
    }

    #[test]
    fn serializes_as_code() {
        let value = serde_json::to_value(QuestionType::Location).unwrap();
        assert_eq!(value, serde_json::json!(9));
        let parsed: QuestionType = serde_json::from_value(serde_json::json!(4)).unwrap();
        assert_eq!(parsed, QuestionType::Object);
        assert!(serde_json::from_value::<QuestionType>(serde_json::json!(10)).is_err());
    }
}
