//! Tests for logger construction, filtering and output format.

use std::error::Error as _;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tintlog::{Capture, Error, Flags, Level, LineWriter, Logger};

const DEBUG_TAG: &str = "[\x1B[0;37mDEBUG\x1B[0m]   ";
const INFO_TAG: &str = "[\x1B[0;32mINFO\x1B[0m]    ";
const WARN_TAG: &str = "[\x1B[0;33mWARNING\x1B[0m] ";
const FATAL_TAG: &str = "[\x1B[0;31mFATAL\x1B[0m]   ";

/// One capture per level, headers off, exits counted instead of performed.
struct Harness {
    logger: Logger,
    outs: [Capture; 4],
    exits: Arc<AtomicUsize>,
}

impl Harness {
    fn new() -> Self {
        let outs: [Capture; 4] = Default::default();
        let exits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&exits);
        let mut builder = Logger::builder()
            .all_flags(Flags::NONE)
            .exit_hook(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        for level in Level::all() {
            builder = builder.output(level, outs[usize::from(level.rank())].clone());
        }
        Self {
            logger: builder.build(),
            outs,
            exits,
        }
    }

    fn out(&self, level: Level) -> String {
        self.outs[usize::from(level.rank())].contents()
    }
}

struct Broken;

impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "test error"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts every byte but refuses to flush.
struct FlushFails(Capture);

impl Write for FlushFails {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("noflush"))
    }
}

#[test]
fn new_logger_defaults() {
    let logger = Logger::new();
    assert_eq!(logger.level(), Level::Debug);
    assert_eq!(logger.rank(), 0);
    for level in Level::all() {
        let writer = logger.writer(level);
        assert_eq!(writer.level(), level);
        assert_eq!(writer.flags(), Flags::STANDARD);
    }
}

#[test]
fn writer_prefixes() {
    let logger = Logger::new();
    assert_eq!(logger.writer(Level::Debug).prefix(), DEBUG_TAG);
    assert_eq!(logger.writer(Level::Info).prefix(), INFO_TAG);
    assert_eq!(logger.writer(Level::Warn).prefix(), WARN_TAG);
    assert_eq!(logger.writer(Level::Fatal).prefix(), FATAL_TAG);
}

#[test]
fn set_level_round_trips() {
    for level in Level::all() {
        let logger = Logger::new();
        logger.set_level(level);
        assert_eq!(logger.level(), level);
    }
}

#[test]
fn builder_level() {
    let logger = Logger::builder().level(Level::Warn).build();
    assert_eq!(logger.level(), Level::Warn);
}

#[test]
fn print_and_format_per_threshold() {
    let tags = [DEBUG_TAG, INFO_TAG, WARN_TAG, FATAL_TAG];

    for threshold in Level::all() {
        let h = Harness::new();
        h.logger.set_level(threshold);

        h.logger.debug(&[&"test", &2, &"test 👍"]);
        h.logger.info(&[&"test", &2, &"test 👍"]);
        h.logger.warn(&[&"test", &2, &"test 👍"]);
        h.logger.fatal(&[&"test", &2, &"test 👍"]);

        h.logger.debugf(format_args!("{} {} {}", "test", 2, "test 👍"));
        h.logger.infof(format_args!("{} {} {}", "test", 2, "test 👍"));
        h.logger.warnf(format_args!("{} {} {}", "test", 2, "test 👍"));
        h.logger.fatalf(format_args!("{} {} {}", "test", 2, "test 👍"));

        for level in Level::all() {
            let tag = tags[usize::from(level.rank())];
            let expected = if threshold <= level {
                format!("{tag}test2test 👍\n{tag}test 2 test 👍\n")
            } else {
                String::new()
            };
            assert_eq!(h.out(level), expected, "threshold {threshold}, level {level}");
        }
        assert_eq!(h.exits.load(Ordering::SeqCst), 2);
    }
}

#[test]
fn trailing_newline_is_not_doubled() {
    for body in ["test", "test2\n", "test 👍", "", "two\nlines"] {
        let h = Harness::new();
        h.logger.debug(&[&body]);
        let expected = if body.ends_with('\n') {
            format!("{DEBUG_TAG}{body}")
        } else {
            format!("{DEBUG_TAG}{body}\n")
        };
        assert_eq!(h.out(Level::Debug), expected);
    }
}

#[test]
fn warn_threshold_scenario() {
    let h = Harness::new();
    h.logger.set_level(Level::Warn);

    h.logger.debug(&[&"x"]);
    h.logger.info(&[&"y"]);
    h.logger.warn(&[&"z"]);

    assert_eq!(h.out(Level::Debug), "");
    assert_eq!(h.out(Level::Info), "");
    assert_eq!(h.out(Level::Warn), format!("{WARN_TAG}z\n"));
    assert_eq!(h.out(Level::Fatal), "");
}

#[test]
fn threshold_change_only_affects_later_messages() {
    let h = Harness::new();
    h.logger.info(&[&"before"]);
    h.logger.set_level(Level::Fatal);
    h.logger.info(&[&"hidden"]);
    h.logger.set_level(Level::Debug);
    h.logger.info(&[&"after"]);

    assert_eq!(h.out(Level::Info), format!("{INFO_TAG}before\n{INFO_TAG}after\n"));
}

#[test]
fn enabled_matches_filtering() {
    let logger = Logger::builder().level(Level::Info).build();
    assert!(!logger.enabled(Level::Debug));
    assert!(logger.enabled(Level::Info));
    assert!(logger.enabled(Level::Fatal));
}

#[test]
fn runtime_level_dispatch() {
    let h = Harness::new();
    h.logger.log(Level::Warn, &[&"a", &1]);
    h.logger.logf(Level::Info, format_args!("b{}", 2));
    assert_eq!(h.out(Level::Warn), format!("{WARN_TAG}a1\n"));
    assert_eq!(h.out(Level::Info), format!("{INFO_TAG}b2\n"));
}

#[test]
fn write_failure_goes_to_fallback() {
    let fallback = Capture::new();
    let logger = Logger::builder()
        .output(Level::Debug, Broken)
        .all_flags(Flags::NONE)
        .fallback(fallback.clone())
        .build();

    logger.debug(&[&"test"]);

    assert_eq!(
        fallback.contents(),
        "tintlog: failed to write debug message: test error\n"
    );
}

#[test]
fn write_failure_does_not_block_later_messages() {
    let fallback = Capture::new();
    let out = Capture::new();
    let logger = Logger::builder()
        .output(Level::Info, Broken)
        .all_flags(Flags::NONE)
        .fallback(fallback.clone())
        .build();

    logger.info(&[&"lost"]);
    logger.set_output(Level::Info, out.clone());
    logger.info(&[&"kept"]);

    assert_eq!(out.contents(), format!("{INFO_TAG}kept\n"));
    assert_eq!(fallback.contents().lines().count(), 1);
}

#[test]
fn flags_are_per_level() {
    let h = Harness::new();
    h.logger.set_flags(
        Level::Info,
        Flags {
            location: true,
            ..Flags::NONE
        },
    );

    let line = line!() + 1;
    h.logger.info(&[&"here"]);
    h.logger.debug(&[&"plain"]);

    assert_eq!(h.out(Level::Info), format!("{INFO_TAG}logger.rs:{line}: here\n"));
    assert_eq!(h.out(Level::Debug), format!("{DEBUG_TAG}plain\n"));
}

#[test]
fn standard_flags_add_timestamp_and_location() {
    let out = Capture::new();
    let logger = Logger::builder().output(Level::Warn, out.clone()).build();

    let line = line!() + 1;
    logger.warnf(format_args!("disk at {}%", 91));

    let written = out.contents();
    let rest = written.strip_prefix(WARN_TAG).expect("line starts with tag");
    // "YYYY/MM/DD HH:MM:SS "
    assert_eq!(rest.as_bytes()[4], b'/');
    assert_eq!(rest.as_bytes()[13], b':');
    assert!(rest[20..].starts_with(&format!("logger.rs:{line}: disk at 91%\n")));
}

#[test]
fn out_of_range_rank_is_accepted() {
    let h = Harness::new();
    h.logger.set_rank(7);
    assert_eq!(h.logger.rank(), 7);
    assert_eq!(h.logger.level(), Level::Fatal);

    h.logger.warn(&[&"filtered"]);
    h.logger.fatal(&[&"filtered too"]);

    assert_eq!(h.out(Level::Warn), "");
    assert_eq!(h.out(Level::Fatal), "");
    assert_eq!(h.exits.load(Ordering::SeqCst), 0);
}

#[test]
fn concurrent_lines_do_not_interleave() {
    let out = Capture::new();
    let logger = Arc::new(
        Logger::builder()
            .output(Level::Info, out.clone())
            .all_flags(Flags::NONE)
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.infof(format_args!("thread {t} message {i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = out.contents();
    assert_eq!(contents.lines().count(), 400);
    for line in contents.lines() {
        assert!(line.starts_with(INFO_TAG), "{line:?}");
        assert!(line.contains(" message "), "{line:?}");
    }
}

#[test]
fn flush_failure_goes_to_fallback_after_the_line_is_written() {
    let out = Capture::new();
    let fallback = Capture::new();
    let logger = Logger::builder()
        .output(Level::Info, FlushFails(out.clone()))
        .all_flags(Flags::NONE)
        .fallback(fallback.clone())
        .build();

    logger.info(&[&"a"]);

    assert_eq!(out.contents(), format!("{INFO_TAG}a\n"));
    assert_eq!(
        fallback.contents(),
        "tintlog: failed to flush info message: noflush\n"
    );
}

#[test]
fn line_writer_errors_carry_their_level() {
    let writer = LineWriter::new(Level::Warn, Box::new(Broken), Flags::NONE);
    let err = writer.output(Location::caller(), "x").unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
    assert_eq!(err.level(), Level::Warn);
    assert_eq!(err.source().unwrap().to_string(), "test error");

    let out = Capture::new();
    let writer = LineWriter::new(Level::Debug, Box::new(FlushFails(out.clone())), Flags::NONE);
    let err = writer.output(Location::caller(), "y").unwrap_err();
    assert!(matches!(err, Error::Flush { .. }));
    assert_eq!(err.level(), Level::Debug);
    assert_eq!(out.contents(), format!("{DEBUG_TAG}y\n"));
}
