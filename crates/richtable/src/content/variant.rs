//! The closed set of content variants a renderer dispatches on.

use serde::{Deserialize, Serialize};

/// A hyperlink with display text and an optional hover annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub value: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Link {
    /// Create a link without a tooltip.
    pub fn new(value: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            url: url.into(),
            tooltip: None,
        }
    }

    /// Attach a tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Text annotated with a hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub value: String,
    pub tooltip: String,
}

impl Tooltip {
    pub fn new(value: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tooltip: tooltip.into(),
        }
    }
}

/// Classified content.
///
/// Serialized with an internal `type` tag, keeping the source keys of each
/// shape. Fed back in, a serialized variant is never reinterpreted as another
/// one: `link`, `tooltip` and `legacy_text` classify to themselves,
/// `plain_text` (held under `value`) resolves back to plain text, and a
/// serialized `link_list` is rejected as missing `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentVariant {
    /// Unstructured text.
    PlainText {
        #[serde(rename = "value")]
        text: String,
    },
    /// Text supplied under the deprecated `text` key.
    LegacyText { text: String },
    Tooltip(Tooltip),
    Link(Link),
    LinkList { links: Vec<Link> },
}

impl ContentVariant {
    /// Plain text shorthand.
    pub fn plain(text: impl Into<String>) -> Self {
        ContentVariant::PlainText { text: text.into() }
    }

    /// Stable tag name, identical to the serialized `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentVariant::PlainText { .. } => "plain_text",
            ContentVariant::LegacyText { .. } => "legacy_text",
            ContentVariant::Tooltip(_) => "tooltip",
            ContentVariant::Link(_) => "link",
            ContentVariant::LinkList { .. } => "link_list",
        }
    }

    /// The text a reader sees, without annotations or targets.
    pub fn display_text(&self) -> String {
        match self {
            ContentVariant::PlainText { text } | ContentVariant::LegacyText { text } => {
                text.clone()
            }
            ContentVariant::Tooltip(tooltip) => tooltip.value.clone(),
            ContentVariant::Link(link) => link.value.clone(),
            ContentVariant::LinkList { links } => links
                .iter()
                .map(|l| l.value.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<Link> for ContentVariant {
    fn from(link: Link) -> Self {
        ContentVariant::Link(link)
    }
}

impl From<Tooltip> for ContentVariant {
    fn from(tooltip: Tooltip) -> Self {
        ContentVariant::Tooltip(tooltip)
    }
}
