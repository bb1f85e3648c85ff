//! Classify command - classify one raw value and print the result as JSON.

use std::io::Read;

use richtable::content::resolve_text;
use richtable::{classify, TextConfig};
use serde_json::Value;

pub fn run(value: String, max_length: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let input = if value == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        value
    };

    let raw = parse_raw(&input);

    let rendered = match max_length {
        Some(max_length) => {
            let config = TextConfig::with_max_length(max_length);
            config.validate()?;
            serde_json::to_string_pretty(&resolve_text(&raw, &config, true)?)?
        }
        None => serde_json::to_string_pretty(&classify(&raw)?)?,
    };
    println!("{}", rendered);

    Ok(())
}

/// Input that is not valid JSON is taken as a literal string.
fn parse_raw(input: &str) -> Value {
    let trimmed = input.trim();
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}
