#![no_main]

use libfuzzer_sys::fuzz_target;
use qscale::extract::MetricExtractor;
use qscale::snapshot::{BackendSnapshot, HardwareGeneration};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Any snapshot that parses must survive a full extraction pass
    if let Ok(snapshot) = BackendSnapshot::from_json(json) {
        let generation = HardwareGeneration::new("Fuzz").with_device(snapshot);
        let _ = MetricExtractor::new().extract(&[generation]);
    }
});
