//! Human-readable rendering of [`Value`] trees.
use itertools::Itertools;

use crate::value::format::{ObviousFloat, ObviousFloat32};
use crate::value::Value;

/// Renders a value into its display string, or `None` for
/// [`Value::Nothing`] (the "no representation" sentinel).
///
/// Rendering is deterministic and recursive: list elements and record
/// entries go through the same rules as top-level values, to arbitrary
/// depth. Strings are single-quoted, 64-bit integers carry an `L` suffix
/// and single-precision floats an `f` suffix, so values of neighbouring
/// widths never render identically.
pub fn to_string_of(value: &Value) -> Option<String> {
    match value {
        Value::Nothing => None,
        other => Some(render(other)),
    }
}

fn render(value: &Value) -> String {
    match value {
        // A nested absent value has no sentinel to return, so it renders as
        // the literal `null`.
        Value::Nothing => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Long(i) => format!("{}L", i),
        Value::Float(val) => format!("{}f", ObviousFloat32(*val)),
        Value::Double(val) => ObviousFloat(*val).to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Dimension { width, height } => format!("(w={}, h={})", width, height),
        Value::FilePath(path) => path.display().to_string(),
        Value::Type(name) => name.clone(),
        Value::Comparator(name) => render_comparator(name),
        Value::Date(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        Value::List(items) => format!("[{}]", items.iter().map(render).join(", ")),
        Value::Record(record) => format!(
            "{{{}}}",
            record
                .iter()
                .map(|(key, val)| format!("{}={}", render(key), render(val)))
                .join(", ")
        ),
    }
}

/// Closures stand in for anonymous comparator classes; named comparator
/// types render as their simple name, generics stripped.
fn render_comparator(type_name: &str) -> String {
    if type_name.contains("{{closure}}") {
        return "'anonymous comparator class'".to_string();
    }
    let base = type_name.split('<').next().unwrap_or(type_name);
    let simple = base.rsplit("::").next().unwrap_or(base);
    format!("'{}'", simple)
}
