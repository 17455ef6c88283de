#![allow(missing_docs)]

pub mod error;
pub mod host;
pub mod render;
pub mod spec;
pub mod validate;
pub mod visibility;

pub use error::ResolveError;
pub use host::{QuestionFormHost, RegionMap, RegionSink, UnknownTypePolicy};
pub use render::{render_json, render_table_json, render_table_text, render_text};
pub use spec::{QuestionModel, QuestionType};
pub use validate::{ValidationError, ValidationResult, prune, validate};
pub use visibility::{FieldGroup, VisibilityFlags, resolve, resolve_code, resolve_name};
