#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::{Capture, Flags, Level, Logger};

const DEBUG_TAG: &str = "[\x1B[0;37mDEBUG\x1B[0m]   ";

fuzz_target!(|body: &str| {
    let out = Capture::new();
    let logger = Logger::builder()
        .output(Level::Debug, out.clone())
        .all_flags(Flags::NONE)
        .build();

    logger.debug(&[&body]);

    // Exactly one trailing newline, never doubled
    let expected = if body.ends_with('\n') {
        format!("{DEBUG_TAG}{body}")
    } else {
        format!("{DEBUG_TAG}{body}\n")
    };
    assert_eq!(out.contents(), expected);
});
