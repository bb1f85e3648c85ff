//! Fuzz target for table definition resolution.
//!
//! Feeds arbitrary documents through definition parsing and both error
//! policies; resolution may fail but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtable::{ErrorPolicy, ResolverConfig, TableDefinition, TableResolver};

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);
    let Ok(definition) = TableDefinition::from_json(&lossy) else {
        return;
    };

    let _ = TableResolver::new().resolve_definition(&definition);

    let collecting = TableResolver::with_config(
        ResolverConfig::default().with_error_policy(ErrorPolicy::CollectAndReport),
    );
    if let Ok(table) = collecting.resolve_definition(&definition) {
        assert_eq!(table.rows.len() + table.diagnostics.len(), definition.data.len());
    }
});
