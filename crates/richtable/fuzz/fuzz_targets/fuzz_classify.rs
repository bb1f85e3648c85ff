//! Fuzz target for content classification.
//!
//! Checks that classification and text resolution never panic, and that
//! truncated text never exceeds the configured length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtable::content::{looks_like_json, resolve_text};
use richtable::{classify, TextConfig};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = looks_like_json(input);

    let raw = serde_json::from_str::<Value>(input).unwrap_or_else(|_| Value::String(input.to_string()));
    let _ = classify(&raw);

    let config = TextConfig::with_max_length(16);
    if let Ok(content) = resolve_text(&raw, &config, true) {
        if content.is_clob() {
            assert!(content.variant().display_text().chars().count() <= 16);
        }
    }
});
