#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main CPE parsing entry point.
///
/// Anything that parses must survive a trip through the formatted-string
/// binding and come back matching itself.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cpe) = cpe_tools::parse(s) {
            let _ = cpe.to_wfn();
            let _ = cpe.to_uri();
            let reparsed = cpe_tools::parse(&cpe.to_formatted_string());
            assert!(reparsed.is_ok());
        }
    }
});
