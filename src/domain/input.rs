//! Input document model and field normalization.

use serde_json::{Map, Value};

use super::AppError;

/// Keys read from the input document. Anything else is ignored.
pub const PROMPT_KEY: &str = "prompt";
pub const CLAIMS_KEY: &str = "claims";
pub const ASSUMPTIONS_KEY: &str = "assumptions";
pub const OPEN_QUESTIONS_KEY: &str = "open_questions";

/// Normalized view of an input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceInput {
    pub prompt: String,
    pub claims: Vec<String>,
    pub assumptions: Vec<String>,
    pub open_questions: Vec<String>,
}

impl TraceInput {
    /// Build a normalized input from a parsed JSON document.
    ///
    /// The top level must be an object; every field is optional.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        let Some(map) = value.as_object() else {
            return Err(AppError::InputNotObject);
        };
        Ok(Self::from_map(map))
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let prompt = map
            .get(PROMPT_KEY)
            .and_then(scalar_text)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        Self {
            prompt,
            claims: normalize_field(map.get(CLAIMS_KEY)),
            assumptions: normalize_field(map.get(ASSUMPTIONS_KEY)),
            open_questions: normalize_field(map.get(OPEN_QUESTIONS_KEY)),
        }
    }
}

/// Coerce an optional field into an ordered list of strings.
///
/// Missing or null yields an empty list, an array keeps its non-null
/// elements in order, and any other value becomes a one-element list.
pub fn normalize_field(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
    }
}

/// Text form of a single value; `None` for null.
///
/// Booleans read `True`/`False` and nested structures use the
/// `[1, 'a']` / `{'k': 'v'}` notation of the upstream trace tool.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(literal_text(other)),
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quoted(text),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(literal_text).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(key, item)| format!("{}: {}", quoted(key), literal_text(item)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Single-quoted string literal; double quotes only when the text holds `'` but no `"`.
fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
