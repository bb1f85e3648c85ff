//! Pre-check deciding whether a raw value should be classified at all.

use std::borrow::Cow;

use serde_json::Value;

/// Check whether a string is a JSON-encoded object or array.
///
/// Bare JSON scalars (`"42"`, `"true"`, `"\"quoted\""`) are deliberately not
/// treated as JSON: they are ordinary cell text.
pub fn looks_like_json(text: &str) -> bool {
    parse_json_text(text).is_some()
}

/// Return the structured form of a raw value, if it has one.
///
/// Objects and arrays are borrowed as-is. Strings are parsed only when
/// `sniff_strings` is set and they contain a JSON object or array. Everything
/// else is a scalar and yields `None`.
pub fn as_structured(raw: &Value, sniff_strings: bool) -> Option<Cow<'_, Value>> {
    match raw {
        Value::Object(_) | Value::Array(_) => Some(Cow::Borrowed(raw)),
        Value::String(text) if sniff_strings => parse_json_text(text).map(Cow::Owned),
        _ => None,
    }
}

fn parse_json_text(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let delimited = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !delimited {
        return None;
    }
    serde_json::from_str::<Value>(trimmed)
        .ok()
        .filter(|v| v.is_object() || v.is_array())
}
