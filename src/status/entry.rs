//! The capability every status value provides

use serde_json::Value;

use super::errors::StatusResult;
use super::INDENTATION;

/// A value that can be shown through the admin interface
///
/// Implementors refresh their live fields in [`update`](Self::update),
/// encode to JSON and render an indented human-readable form.
/// Containers also override [`child`](Self::child) so paths can be
/// resolved through them.
pub trait StatusEntry: Send {
    /// Refresh computed fields before a read. Static values keep the default.
    fn update(&mut self) -> StatusResult<()> {
        Ok(())
    }

    /// JSON form of the entry
    fn to_json(&self) -> StatusResult<Value>;

    /// Human-readable form; every line a container emits starts with `indent`.
    /// Single-line output carries no trailing newline.
    fn render_human(&self, indent: &str) -> StatusResult<String>;

    /// Look up a nested entry by one path segment
    fn child(&self, _segment: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        Ok(None)
    }
}

/// Render `(key, entry)` pairs as `key: value` lines or `key:` blocks
pub(crate) fn render_blocks<'a, I>(indent: &str, items: I) -> StatusResult<String>
where
    I: IntoIterator<Item = (&'a str, &'a dyn StatusEntry)>,
{
    let nested = format!("{}{}", indent, INDENTATION);
    let mut blocks = Vec::new();

    for (key, entry) in items {
        let text = entry.render_human(&nested)?;
        blocks.push(format_block(indent, key, &text));
    }

    Ok(blocks.join("\n"))
}

/// One block: inline when `text` is a single line, nested otherwise
pub(crate) fn format_block(indent: &str, key: &str, text: &str) -> String {
    if text.contains('\n') {
        format!("{}{}:\n{}", indent, key, text)
    } else {
        format!("{}{}: {}", indent, key, text.trim_start())
    }
}

/// Human form of an arbitrary JSON value
pub(crate) fn render_value(value: &Value, indent: &str) -> String {
    let nested = format!("{}{}", indent, INDENTATION);
    match value {
        Value::Object(map) if !map.is_empty() => map
            .iter()
            .map(|(k, v)| format_block(indent, k, &render_value(v, &nested)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(i, v)| format_block(indent, &i.to_string(), &render_value(v, &nested)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::String(s) => indent_lines(s, indent),
        other => other.to_string(),
    }
}

/// Prefix every line of multi-line text; single lines are returned as-is
pub(crate) fn indent_lines(text: &str, indent: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    text.lines()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}
