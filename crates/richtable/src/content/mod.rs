//! Rich cell content: classification of structured values into variants.

mod classifier;
mod detect;
mod text;
mod variant;

pub use classifier::{classify, classify_link};
pub use detect::{as_structured, looks_like_json};
pub use text::{
    apply_max_length, resolve_text, truncate_display, Clob, TextConfig, TextContent,
    DEFAULT_MAX_LENGTH, ELLIPSIS,
};
pub use variant::{ContentVariant, Link, Tooltip};
