//! Applies resolved visibility to the regions of a question editor.
//!
//! The host owns the single "type selection changed" entry point: it resolves the
//! selected code and pushes one show/hide per region into a [`RegionSink`].

use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::spec::question::QuestionType;
use crate::visibility::{FieldGroup, VisibilityFlags, resolve};

/// Anything that can show or hide a named region.
pub trait RegionSink {
    fn set_region(&mut self, group: FieldGroup, visible: bool);
}

/// Region id to visibility, as last applied.
pub type RegionMap = std::collections::BTreeMap<String, bool>;

impl RegionSink for RegionMap {
    fn set_region(&mut self, group: FieldGroup, visible: bool) {
        self.insert(group.region_id(), visible);
    }
}

/// What the host does with its regions when the selected code is not a known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Leave regions as they were.
    #[default]
    KeepPrevious,
    /// Hide every region.
    HideAll,
}

impl UnknownTypePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownTypePolicy::KeepPrevious => "keep",
            UnknownTypePolicy::HideAll => "hide-all",
        }
    }
}

impl FromStr for UnknownTypePolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "keep" | "keep-previous" => Ok(UnknownTypePolicy::KeepPrevious),
            "hide-all" | "hide" => Ok(UnknownTypePolicy::HideAll),
            other => Err(format!(
                "unknown policy '{}' (expected keep or hide-all)",
                other
            )),
        }
    }
}

pub struct QuestionFormHost<S: RegionSink> {
    sink: S,
    policy: UnknownTypePolicy,
    current: Option<(QuestionType, VisibilityFlags)>,
}

impl<S: RegionSink> QuestionFormHost<S> {
    pub fn new(sink: S, policy: UnknownTypePolicy) -> Self {
        Self {
            sink,
            policy,
            current: None,
        }
    }

    /// Handles a change of the selected type code.
    pub fn on_type_selected(&mut self, code: i64) -> Result<VisibilityFlags, ResolveError> {
        match QuestionType::from_code(code) {
            Ok(kind) => Ok(self.apply(kind)),
            Err(err) => {
                warn!(code, policy = self.policy.as_str(), "unknown question type selected");
                if self.policy == UnknownTypePolicy::HideAll {
                    self.apply_flags(&VisibilityFlags::default());
                    self.current = None;
                }
                Err(err)
            }
        }
    }

    /// Resolves `kind` and applies every region.
    pub fn apply(&mut self, kind: QuestionType) -> VisibilityFlags {
        let flags = resolve(kind);
        debug!(
            kind = kind.name(),
            visible = flags.visible_groups().len(),
            "applying question type visibility"
        );
        self.apply_flags(&flags);
        self.current = Some((kind, flags));
        flags
    }

    fn apply_flags(&mut self, flags: &VisibilityFlags) {
        for (group, visible) in flags.iter() {
            self.sink.set_region(group, visible);
        }
    }

    /// Type and flags last applied successfully, if the regions currently reflect one.
    pub fn current(&self) -> Option<(QuestionType, VisibilityFlags)> {
        self.current
    }

    pub fn policy(&self) -> UnknownTypePolicy {
        self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
