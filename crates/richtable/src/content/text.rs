//! Text resolution with display-length truncation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classifier::{TEXT, TOOLTIP, URL, VALUE, classify, scalar_text};
use super::detect::as_structured;
use super::variant::{ContentVariant, Tooltip};
use crate::error::{ClassificationError, ConfigError, snippet};

/// Default display length before text becomes a clob.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Suffix appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Text handling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Longest text, in characters, shown without truncation.
    pub max_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl TextConfig {
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Check that truncated output can hold the ellipsis and some text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length <= ELLIPSIS.len() {
            return Err(ConfigError::InvalidMaxLength(self.max_length));
        }
        Ok(())
    }
}

/// Content too long to show in full.
///
/// `variant` holds the shortened display form; `full_text` keeps the original
/// so the presentation layer can expand without classifying again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clob {
    pub variant: ContentVariant,
    pub truncated: bool,
    pub full_text: String,
}

/// Resolved text content: either shown as-is or as a clob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum TextContent {
    Content { variant: ContentVariant },
    Clob(Clob),
}

impl TextContent {
    /// The variant to display, truncated when this is a clob.
    pub fn variant(&self) -> &ContentVariant {
        match self {
            TextContent::Content { variant } => variant,
            TextContent::Clob(clob) => &clob.variant,
        }
    }

    pub fn is_clob(&self) -> bool {
        matches!(self, TextContent::Clob(_))
    }
}

/// Shorten `text` to `max_length` characters, ending in `...`.
///
/// Returns `None` when the text already fits.
pub fn truncate_display(text: &str, max_length: usize) -> Option<String> {
    if text.chars().count() <= max_length {
        return None;
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    Some(shortened)
}

/// Resolve a raw text value into displayable content.
///
/// Structured input is classified, except objects whose only recognized key is
/// `value`, which are plain text. When `sniff_strings` is set, strings holding
/// a JSON object or array are parsed and classified too. Scalars become plain
/// text. Long plain, legacy and tooltip text is turned into a [`Clob`].
pub fn resolve_text(
    raw: &Value,
    config: &TextConfig,
    sniff_strings: bool,
) -> Result<TextContent, ClassificationError> {
    let variant = match as_structured(raw, sniff_strings) {
        Some(structured) => match bare_value_text(&structured) {
            Some(text) => ContentVariant::PlainText { text },
            None => classify(&structured)?,
        },
        None => ContentVariant::PlainText {
            text: scalar_text(raw).ok_or_else(|| ClassificationError::NotStructured(snippet(raw)))?,
        },
    };
    Ok(apply_max_length(variant, config.max_length))
}

/// Wrap over-long text variants in a clob; other variants pass through.
pub fn apply_max_length(variant: ContentVariant, max_length: usize) -> TextContent {
    match variant {
        ContentVariant::PlainText { text } => match truncate_display(&text, max_length) {
            Some(short) => clob(ContentVariant::PlainText { text: short }, text),
            None => TextContent::Content {
                variant: ContentVariant::PlainText { text },
            },
        },
        ContentVariant::LegacyText { text } => match truncate_display(&text, max_length) {
            Some(short) => clob(ContentVariant::LegacyText { text: short }, text),
            None => TextContent::Content {
                variant: ContentVariant::LegacyText { text },
            },
        },
        ContentVariant::Tooltip(Tooltip { value, tooltip }) => {
            match truncate_display(&value, max_length) {
                Some(short) => clob(
                    ContentVariant::Tooltip(Tooltip {
                        value: short,
                        tooltip,
                    }),
                    value,
                ),
                None => TextContent::Content {
                    variant: ContentVariant::Tooltip(Tooltip { value, tooltip }),
                },
            }
        }
        variant => TextContent::Content { variant },
    }
}

fn clob(variant: ContentVariant, full_text: String) -> TextContent {
    TextContent::Clob(Clob {
        variant,
        truncated: true,
        full_text,
    })
}

/// `{"value": ...}` with no other recognized key is plain text, not rich content.
fn bare_value_text(structured: &Value) -> Option<String> {
    let obj = structured.as_object()?;
    if [URL, TOOLTIP, TEXT].iter().any(|k| obj.contains_key(*k)) {
        return None;
    }
    obj.get(VALUE).and_then(scalar_text)
}
