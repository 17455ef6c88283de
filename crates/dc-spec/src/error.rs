use thiserror::Error;

/// Failure to map a selected value onto a question type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown question type '{0}' (expected a code in 1..=9 or a type name)")]
    UnknownQuestionType(String),
}
