//! Deterministic identifier derivation from display names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static pattern"));

/// Derive an identifier from a name.
///
/// The name is lower-cased and every run of non-alphanumeric characters is
/// replaced by a single `-`; leading and trailing dashes are dropped, so
/// `"Status"` and `"status "` both become `"status"`.
pub fn derive_id(name: &str) -> Result<String, ConfigError> {
    let lower = name.to_lowercase();
    let dashed = NON_ALPHANUMERIC.replace_all(&lower, "-");
    let id = dashed.trim_matches('-');
    if id.is_empty() {
        return Err(ConfigError::EmptyIdentifier {
            source_text: name.to_string(),
        });
    }
    Ok(id.to_string())
}
