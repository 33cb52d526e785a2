#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz version parsing and comparison.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (left, right) = s.split_once('\n').unwrap_or((s, s));
        let _ = cpe_tools::compare_versions(left, right);
    }
});
