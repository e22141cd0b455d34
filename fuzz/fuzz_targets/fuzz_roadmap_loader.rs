#![no_main]

use libfuzzer_sys::fuzz_target;
use qscale::roadmap::{calculate_trends, load_roadmap_from_reader, TrendConfig};

fuzz_target!(|data: &[u8]| {
    // Malformed tables must be rejected or cleaned, never panic
    if let Ok(points) = load_roadmap_from_reader(data) {
        let _ = calculate_trends(&points, &TrendConfig::default());
    }
});
