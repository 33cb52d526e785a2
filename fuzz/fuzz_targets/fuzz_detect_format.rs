#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz prefix detection and each parser on its own, bypassing dispatch.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = cpe_tools::CpeFormat::detect(s);
        for format in cpe_tools::CpeFormat::ALL {
            let _ = cpe_tools::parse_as(s, format);
        }
    }
});
