//! Shape classification of structured cell content.
//!
//! Key presence decides the variant, checked in a fixed priority order:
//!
//! | input                              | variant        |
//! |------------------------------------|----------------|
//! | array, first element has `url`     | `LinkList`     |
//! | other array                        | error          |
//! | object without `value`, only `text`| `LegacyText`   |
//! | object without `value`             | error          |
//! | object with `value` and `url`      | `Link`         |
//! | object with `value` and `tooltip`  | `Tooltip`      |
//! | object with `value` and `text`     | `LegacyText`   |
//! | object with only `value`           | error          |
//! | scalar                             | error          |

use serde_json::{Map, Value};
use tracing::trace;

use super::variant::{ContentVariant, Link, Tooltip};
use crate::error::{ClassificationError, snippet};

pub(crate) const VALUE: &str = "value";
pub(crate) const URL: &str = "url";
pub(crate) const TOOLTIP: &str = "tooltip";
pub(crate) const TEXT: &str = "text";

const SCALAR: &str = "a string, number or boolean";

/// Classify a structured raw value into exactly one content variant.
///
/// Scalars are rejected with [`ClassificationError::NotStructured`]; deciding
/// whether a scalar should be parsed first is the caller's job (see
/// [`as_structured`](super::as_structured)).
pub fn classify(raw: &Value) -> Result<ContentVariant, ClassificationError> {
    let variant = match raw {
        Value::Array(items) => classify_array(items, raw)?,
        Value::Object(obj) => classify_object(obj, raw)?,
        _ => return Err(ClassificationError::NotStructured(snippet(raw))),
    };
    trace!(kind = variant.kind(), "classified rich content");
    Ok(variant)
}

/// Validate a single link-shaped object, as required of every link list element.
pub fn classify_link(raw: &Value) -> Result<Link, ClassificationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ClassificationError::NotALink(snippet(raw)))?;
    if !obj.contains_key(VALUE) {
        return Err(ClassificationError::MissingValue(snippet(raw)));
    }
    if !obj.contains_key(URL) {
        return Err(ClassificationError::NotALink(snippet(raw)));
    }
    link_from(obj)
}

fn classify_array(items: &[Value], raw: &Value) -> Result<ContentVariant, ClassificationError> {
    // Only the first element decides the list type.
    match items.first() {
        Some(Value::Object(first)) if first.contains_key(URL) => {
            let links = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    classify_link(item).map_err(|e| ClassificationError::InvalidListElement {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ContentVariant::LinkList { links })
        }
        _ => Err(ClassificationError::UnknownArrayType(snippet(raw))),
    }
}

fn classify_object(
    obj: &Map<String, Value>,
    raw: &Value,
) -> Result<ContentVariant, ClassificationError> {
    if !obj.contains_key(VALUE) {
        if obj.contains_key(TEXT) && !obj.contains_key(URL) && !obj.contains_key(TOOLTIP) {
            return Ok(ContentVariant::LegacyText {
                text: field_text(obj, TEXT)?,
            });
        }
        return Err(ClassificationError::MissingValue(snippet(raw)));
    }

    // url before tooltip: links may carry a tooltip of their own
    if obj.contains_key(URL) {
        return link_from(obj).map(ContentVariant::Link);
    }
    if obj.contains_key(TOOLTIP) {
        return Ok(ContentVariant::Tooltip(Tooltip {
            value: field_text(obj, VALUE)?,
            tooltip: field_text(obj, TOOLTIP)?,
        }));
    }
    if obj.contains_key(TEXT) {
        return Ok(ContentVariant::LegacyText {
            text: field_text(obj, VALUE)?,
        });
    }

    Err(ClassificationError::UnknownRendererType(snippet(raw)))
}

fn link_from(obj: &Map<String, Value>) -> Result<Link, ClassificationError> {
    let url = match obj.get(URL) {
        Some(Value::String(url)) => url.clone(),
        other => {
            return Err(ClassificationError::InvalidField {
                field: URL,
                expected: "a string",
                found: other.map(snippet).unwrap_or_default(),
            });
        }
    };
    let tooltip = match obj.get(TOOLTIP) {
        None | Some(Value::Null) => None,
        Some(_) => Some(field_text(obj, TOOLTIP)?),
    };
    Ok(Link {
        value: field_text(obj, VALUE)?,
        url,
        tooltip,
    })
}

fn field_text(obj: &Map<String, Value>, field: &'static str) -> Result<String, ClassificationError> {
    let value = obj.get(field).unwrap_or(&Value::Null);
    scalar_text(value).ok_or_else(|| ClassificationError::InvalidField {
        field,
        expected: SCALAR,
        found: snippet(value),
    })
}

/// Display text of a JSON scalar; `None` for null, objects and arrays.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_wins_over_tooltip() {
        let raw = json!({"value": "docs", "url": "/docs", "tooltip": "read me"});
        assert_eq!(
            classify(&raw).unwrap(),
            ContentVariant::Link(Link::new("docs", "/docs").with_tooltip("read me"))
        );
    }

    #[test]
    fn test_tooltip_object() {
        let raw = json!({"value": "CD", "tooltip": "Crohn's disease"});
        assert_eq!(
            classify(&raw).unwrap(),
            ContentVariant::Tooltip(Tooltip::new("CD", "Crohn's disease"))
        );
    }

    #[test]
    fn test_value_with_text_is_legacy() {
        let raw = json!({"value": "shown", "text": "ignored"});
        assert_eq!(
            classify(&raw).unwrap(),
            ContentVariant::LegacyText {
                text: "shown".to_string()
            }
        );
    }

    #[test]
    fn test_text_only_is_legacy() {
        let raw = json!({"text": "old style"});
        assert_eq!(
            classify(&raw).unwrap(),
            ContentVariant::LegacyText {
                text: "old style".to_string()
            }
        );
    }

    #[test]
    fn test_bare_value_is_unknown_renderer() {
        let err = classify(&json!({"value": "x"})).unwrap_err();
        assert!(matches!(err, ClassificationError::UnknownRendererType(_)));
    }

    #[test]
    fn test_missing_value() {
        let err = classify(&json!({"url": "/x"})).unwrap_err();
        assert!(matches!(err, ClassificationError::MissingValue(_)));

        let err = classify(&json!({"text": "t", "tooltip": "tip"})).unwrap_err();
        assert!(matches!(err, ClassificationError::MissingValue(_)));
    }

    #[test]
    fn test_link_list() {
        let raw = json!([
            {"value": "a", "url": "/a"},
            {"value": "b", "url": "/b", "tooltip": "bee"}
        ]);
        let ContentVariant::LinkList { links } = classify(&raw).unwrap() else {
            panic!("expected link list");
        };
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].tooltip.as_deref(), Some("bee"));
    }

    #[test]
    fn test_link_list_rejects_partial_lists() {
        let raw = json!([
            {"value": "a", "url": "/a"},
            {"value": "b", "tooltip": "no url"}
        ]);
        let err = classify(&raw).unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::InvalidListElement { index: 1, .. }
        ));
    }

    #[test]
    fn test_unknown_arrays() {
        for raw in [json!([]), json!(["a", "b"]), json!([{"value": "a"}])] {
            let err = classify(&raw).unwrap_err();
            assert!(matches!(err, ClassificationError::UnknownArrayType(_)));
        }
    }

    #[test]
    fn test_scalars_are_not_classified() {
        for raw in [json!("text"), json!(3), json!(true), Value::Null] {
            assert!(matches!(
                classify(&raw),
                Err(ClassificationError::NotStructured(_))
            ));
        }
    }

    #[test]
    fn test_numeric_value_is_rendered_as_text() {
        let raw = json!({"value": 42, "tooltip": "answer"});
        assert_eq!(
            classify(&raw).unwrap(),
            ContentVariant::Tooltip(Tooltip::new("42", "answer"))
        );
    }

    #[test]
    fn test_non_string_url_rejected() {
        let err = classify(&json!({"value": "a", "url": 7})).unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::InvalidField { field: "url", .. }
        ));
    }
}
