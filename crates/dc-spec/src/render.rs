use serde_json::{Map, Value, json};

use crate::spec::question::QuestionType;
use crate::visibility::{FieldGroup, VisibilityFlags, resolve};

/// Render one resolution as a structured JSON value.
pub fn render_json(kind: QuestionType, flags: &VisibilityFlags) -> Value {
    let mut map = Map::new();
    for (group, visible) in flags.iter() {
        map.insert(group.key().into(), Value::Bool(visible));
    }

    json!({
        "code": kind.code(),
        "type": kind.name(),
        "visible": group_keys(&flags.visible_groups()),
        "hidden": group_keys(&flags.hidden_groups()),
        "flags": Value::Object(map),
    })
}

/// Render one resolution as human-friendly text.
pub fn render_text(kind: QuestionType, flags: &VisibilityFlags) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Question type: {} ({})", kind.name(), kind.code()));
    lines.push("Visible field groups:".to_string());
    let visible = flags.visible_groups();
    if visible.is_empty() {
        lines.push("  (none)".to_string());
    }
    for group in visible {
        lines.push(format!("  - {} [{}]", group.key(), group.region_id()));
    }
    let hidden = flags.hidden_groups();
    if !hidden.is_empty() {
        let keys = hidden.iter().map(|group| group.key()).collect::<Vec<_>>();
        lines.push(format!("Hidden: {}", keys.join(", ")));
    }
    lines.join("\n")
}

/// Every type in code order, rendered with `render_json`.
pub fn render_table_json() -> Value {
    Value::Array(
        QuestionType::ALL
            .into_iter()
            .map(|kind| render_json(kind, &resolve(kind)))
            .collect(),
    )
}

/// A fixed-width matrix of type rows against field group columns.
pub fn render_table_text() -> String {
    let name_width = QuestionType::ALL
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0)
        + 5;

    let mut header = format!("{:<width$}", "type", width = name_width);
    for group in FieldGroup::ALL {
        header.push_str(&format!(" {}", group.key()));
    }

    let mut lines = vec![header];
    for kind in QuestionType::ALL {
        let flags = resolve(kind);
        let mut row = format!(
            "{:<width$}",
            format!("{} {}", kind.code(), kind.name()),
            width = name_width
        );
        for (group, visible) in flags.iter() {
            let mark = if visible { "x" } else { "-" };
            row.push_str(&format!(" {:<width$}", mark, width = group.key().len()));
        }
        lines.push(row.trim_end().to_string());
    }
    lines.join("\n")
}

fn group_keys(groups: &[FieldGroup]) -> Value {
    Value::Array(
        groups
            .iter()
            .map(|group| Value::String(group.key().to_string()))
            .collect(),
    )
}
