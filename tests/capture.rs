//! Tests for the in-memory destination.

use std::io::Write;
use tintlog::{Capture, Flags, Level, Logger};

#[test]
fn take_returns_and_clears_the_buffer() {
    let mut capture = Capture::new();
    assert!(capture.is_empty());

    capture.write_all(b"first\n").unwrap();
    assert!(!capture.is_empty());

    assert_eq!(capture.take(), "first\n");
    assert!(capture.is_empty());
    assert_eq!(capture.contents(), "");
}

#[test]
fn clones_share_one_buffer() {
    let reader = Capture::new();
    let logger = Logger::builder()
        .output(Level::Info, reader.clone())
        .all_flags(Flags::NONE)
        .build();

    logger.info(&[&"one"]);
    assert_eq!(reader.take(), "[\x1B[0;32mINFO\x1B[0m]    one\n");

    logger.info(&[&"two"]);
    assert_eq!(reader.contents(), "[\x1B[0;32mINFO\x1B[0m]    two\n");
}
