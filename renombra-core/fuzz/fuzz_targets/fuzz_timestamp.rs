#![no_main]

use libfuzzer_sys::fuzz_target;
use renombra_core::{normalize_name, plan_name, MonthTable, TimestampParser};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let input = String::from_utf8_lossy(data);
    let name: String = input.chars().take(200).collect();

    let Ok(timestamps) = TimestampParser::new(MonthTable::spanish()) else {
        return;
    };

    if let Some(token) = timestamps.extract(&name) {
        if let Some(formatted) = timestamps.format(token) {
            // Canonical output must parse back to itself
            assert_eq!(timestamps.format(&formatted).as_deref(), Some(formatted.as_str()));
        }
    }

    let normalized = normalize_name(&name);
    assert!(!normalized.contains('_'));
    let _ = plan_name(&normalized, &timestamps).target_name();
});
