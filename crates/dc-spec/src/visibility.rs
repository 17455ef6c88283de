use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::spec::question::QuestionType;

/// Form regions that are shown or hidden as a unit depending on the question type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldGroup {
    Max,
    Min,
    Reference,
    Represent,
    Filter,
    LocationFields,
    Options,
    Multiple,
    DefaultAnswer,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 9] = [
        FieldGroup::Max,
        FieldGroup::Min,
        FieldGroup::Reference,
        FieldGroup::Represent,
        FieldGroup::Filter,
        FieldGroup::LocationFields,
        FieldGroup::Options,
        FieldGroup::Multiple,
        FieldGroup::DefaultAnswer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldGroup::Max => "max",
            FieldGroup::Min => "min",
            FieldGroup::Reference => "reference",
            FieldGroup::Represent => "represent",
            FieldGroup::Filter => "filter",
            FieldGroup::LocationFields => "location_fields",
            FieldGroup::Options => "options",
            FieldGroup::Multiple => "multiple",
            FieldGroup::DefaultAnswer => "default_answer",
        }
    }

    /// Row id of the region in the question editor, e.g. `dc_question_max__row`.
    pub fn region_id(self) -> String {
        format!("dc_question_{}__row", self.key())
    }
}

/// Visibility of every field group for one question type. `Default` hides everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct VisibilityFlags {
    pub max: bool,
    pub min: bool,
    pub reference: bool,
    pub represent: bool,
    pub filter: bool,
    pub location_fields: bool,
    pub options: bool,
    pub multiple: bool,
    pub default_answer: bool,
}

impl VisibilityFlags {
    pub fn get(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::Max => self.max,
            FieldGroup::Min => self.min,
            FieldGroup::Reference => self.reference,
            FieldGroup::Represent => self.represent,
            FieldGroup::Filter => self.filter,
            FieldGroup::LocationFields => self.location_fields,
            FieldGroup::Options => self.options,
            FieldGroup::Multiple => self.multiple,
            FieldGroup::DefaultAnswer => self.default_answer,
        }
    }

    /// Flags in region order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldGroup, bool)> + '_ {
        FieldGroup::ALL.into_iter().map(|group| (group, self.get(group)))
    }

    pub fn visible_groups(&self) -> Vec<FieldGroup> {
        self.iter()
            .filter(|(_, visible)| *visible)
            .map(|(group, _)| group)
            .collect()
    }

    pub fn hidden_groups(&self) -> Vec<FieldGroup> {
        self.iter()
            .filter(|(_, visible)| !*visible)
            .map(|(group, _)| group)
            .collect()
    }
}

/// JSON Schema describing [`VisibilityFlags`].
pub fn flags_schema() -> schemars::Schema {
    schemars::schema_for!(VisibilityFlags)
}

/// Decides which field groups the editor shows for `kind`.
pub fn resolve(kind: QuestionType) -> VisibilityFlags {
    // default_answer stays visible unless a row hides it; only Location does.
    let base = VisibilityFlags {
        default_answer: true,
        ..VisibilityFlags::default()
    };

    match kind {
        QuestionType::String => base,
        QuestionType::Integer
        | QuestionType::Float
        | QuestionType::Date
        | QuestionType::Time
        | QuestionType::DateTime => VisibilityFlags {
            max: true,
            min: true,
            ..base
        },
        QuestionType::Object => VisibilityFlags {
            options: true,
            multiple: true,
            ..base
        },
        QuestionType::Reference => VisibilityFlags {
            reference: true,
            represent: true,
            filter: true,
            ..base
        },
        QuestionType::Location => VisibilityFlags {
            location_fields: true,
            default_answer: false,
            ..base
        },
    }
}

/// Resolves a raw code as read from the type selector.
pub fn resolve_code(code: i64) -> Result<VisibilityFlags, ResolveError> {
    QuestionType::from_code(code).map(resolve)
}

/// Resolves a type given by name or by code in text form.
pub fn resolve_name(raw: &str) -> Result<VisibilityFlags, ResolveError> {
    raw.parse::<QuestionType>().map(resolve)
}
