use super::*;
use crate::RecordFormat;
use errlog_record::{Classify, ErrorKind};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::tempdir;

fn record(message: &str) -> ErrorRecord {
    ErrorRecord::new(ErrorKind::IoFailure, 42, "flush", "writer.rs", message).unwrap()
}

fn live() -> ErrorContext {
    let ctx = ErrorContext::new();
    ctx.init().unwrap();
    ctx
}

// Lifecycle

#[test]
fn test_new_context_is_not_initialized() {
    let ctx = ErrorContext::new();
    assert!(!ctx.is_initialized());
    assert_eq!(ctx.set_log_on().kind(), ErrorKind::NotInitialized);
    assert_eq!(ctx.set_log_off().kind(), ErrorKind::NotInitialized);
    assert_eq!(ctx.set_log_file("x.log").kind(), ErrorKind::NotInitialized);
    assert_eq!(ctx.log_error(&record("m")).kind(), ErrorKind::NotInitialized);
    assert_eq!(ctx.buffered_output().kind(), ErrorKind::NotInitialized);
}

#[test]
fn test_init_starts_disabled_and_unset() {
    let ctx = live();
    assert!(ctx.is_initialized());
    assert!(!ctx.is_logging_enabled());
    assert_eq!(ctx.log_file_path(), None);
}

#[test]
fn test_init_twice_is_already_initialized() {
    let ctx = live();
    ctx.set_log_on().unwrap();
    assert_eq!(ctx.init().kind(), ErrorKind::AlreadyInitialized);
    // The running configuration survives the rejected init.
    assert!(ctx.is_logging_enabled());
}

#[test]
fn test_cleanup_twice() {
    let ctx = live();
    assert!(ctx.cleanup().is_ok());
    assert_eq!(ctx.cleanup().kind(), ErrorKind::NotInitialized);
    assert!(!ctx.is_initialized());
}

#[test]
fn test_reinit_after_cleanup_resets_state() {
    let dir = tempdir().unwrap();
    let ctx = live();
    ctx.set_log_on().unwrap();
    ctx.set_log_file(dir.path().join("a.log")).unwrap();
    ctx.cleanup().unwrap();

    ctx.init().unwrap();
    assert!(!ctx.is_logging_enabled());
    assert_eq!(ctx.log_file_path(), None);
}

#[test]
fn test_not_initialized_after_cleanup() {
    let ctx = live();
    ctx.cleanup().unwrap();
    assert_eq!(ctx.set_log_on().kind(), ErrorKind::NotInitialized);
    assert_eq!(ctx.log_error(&record("m")).kind(), ErrorKind::NotInitialized);
}

// Destinations

#[test]
fn test_set_log_file_empty_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keep.log");
    let ctx = live();
    ctx.set_log_file(&path).unwrap();

    assert_eq!(ctx.set_log_file("").kind(), ErrorKind::InvalidPath);
    assert_eq!(ctx.log_file_path(), Some(path));
}

#[test]
fn test_set_log_file_open_failure_keeps_previous() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keep.log");
    let ctx = live();
    ctx.set_log_on().unwrap();
    ctx.set_log_file(&path).unwrap();

    let err = ctx.set_log_file(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert!(matches!(err, ContextError::Io { .. }));

    ctx.log_error(&record("still here")).unwrap();
    assert_eq!(ctx.log_file_path(), Some(path.clone()));
    assert!(std::fs::read_to_string(&path).unwrap().contains("still here"));
}

#[test]
fn test_set_log_file_replaces_previous() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let ctx = live();
    ctx.set_log_on().unwrap();

    ctx.set_log_file(&first).unwrap();
    ctx.log_error(&record("one")).unwrap();
    ctx.set_log_file(&second).unwrap();
    ctx.log_error(&record("two")).unwrap();

    let first_text = std::fs::read_to_string(&first).unwrap();
    let second_text = std::fs::read_to_string(&second).unwrap();
    assert!(first_text.contains("one") && !first_text.contains("two"));
    assert!(second_text.contains("two") && !second_text.contains("one"));
}

#[test]
fn test_buffer_destination() {
    let ctx = live();
    ctx.set_log_on().unwrap();
    ctx.set_log_buffer().unwrap();
    ctx.log_error(&record("captured")).unwrap();
    assert_eq!(
        ctx.buffered_output().unwrap(),
        "[IO_FAILURE] writer.rs:42 in flush: captured\n"
    );
    assert_eq!(ctx.log_file_path(), None);
}

#[test]
fn test_buffered_output_empty_for_file_destination() {
    let dir = tempdir().unwrap();
    let ctx = live();
    ctx.set_log_file(dir.path().join("f.log")).unwrap();
    assert_eq!(ctx.buffered_output().unwrap(), "");
}

// Logging

#[test]
fn test_disabled_logging_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quiet.log");
    std::fs::write(&path, "existing\n").unwrap();
    let before = std::fs::read(&path).unwrap();

    let ctx = live();
    ctx.set_log_file(&path).unwrap();
    ctx.log_error(&record("not written")).unwrap();
    ctx.set_log_on().unwrap();
    ctx.set_log_off().unwrap();
    ctx.log_error(&record("not written either")).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_disabled_logging_without_destination_succeeds() {
    let ctx = live();
    assert!(ctx.log_error(&record("m")).is_ok());
}

#[test]
fn test_enabled_logging_without_destination() {
    let ctx = live();
    ctx.set_log_on().unwrap();
    assert_eq!(
        ctx.log_error(&record("m")).kind(),
        ErrorKind::NoDestinationConfigured
    );
}

#[test]
fn test_same_record_twice_gives_identical_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twice.log");
    let ctx = live();
    ctx.set_log_on().unwrap();
    ctx.set_log_file(&path).unwrap();

    let rec = record("repeat");
    ctx.log_error(&rec).unwrap();
    ctx.log_error(&rec).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_json_config() {
    let ctx = ErrorContext::with_config(ContextConfig::new().with_format(RecordFormat::Json));
    ctx.init().unwrap();
    ctx.set_log_on().unwrap();
    ctx.set_log_buffer().unwrap();
    ctx.log_error(&record("as json")).unwrap();
    assert_eq!(
        ctx.buffered_output().unwrap(),
        "{\"code\":\"IO_FAILURE\",\"file\":\"writer.rs\",\"function\":\"flush\",\"line\":42,\"message\":\"as json\"}\n"
    );
}

#[test]
fn test_durable_config_writes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("durable.log");
    let ctx = ErrorContext::with_config(ContextConfig::durable());
    assert!(ctx.config().sync_each_write);
    ctx.init().unwrap();
    ctx.set_log_on().unwrap();
    ctx.set_log_file(&path).unwrap();
    ctx.log_error(&record("synced")).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().ends_with("synced\n"));
}

#[test]
fn test_config_survives_reinit() {
    let config = ContextConfig::new()
        .with_format(RecordFormat::Json)
        .with_sync_each_write(true);
    let ctx = ErrorContext::with_config(config);
    ctx.init().unwrap();
    ctx.cleanup().unwrap();
    ctx.init().unwrap();
    assert_eq!(ctx.config(), config);
}

// Concurrency

#[test]
fn test_concurrent_logging_never_tears_lines() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.log");
    let b = dir.path().join("b.log");
    let ctx = Arc::new(live());
    ctx.set_log_on().unwrap();
    ctx.set_log_file(&a).unwrap();

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    ctx.log_error(&record(&format!("thread {i}"))).unwrap();
                }
            })
        })
        .collect();
    let switcher = {
        let ctx = Arc::clone(&ctx);
        let (a, b) = (a.clone(), b.clone());
        std::thread::spawn(move || {
            for n in 0..20 {
                ctx.set_log_file(if n % 2 == 0 { &b } else { &a }).unwrap();
            }
        })
    };
    for handle in writers {
        handle.join().unwrap();
    }
    switcher.join().unwrap();

    let mut total = 0;
    for path in [&a, &b] {
        let text = std::fs::read_to_string(path).unwrap_or_default();
        for line in text.lines() {
            assert!(line.starts_with("[IO_FAILURE] writer.rs:42 in flush: thread "));
            total += 1;
        }
    }
    assert_eq!(total, 200);
}

#[test]
fn test_cleanup_racing_log_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("race.log");
    let ctx = Arc::new(live());
    ctx.set_log_file(&path).unwrap();
    ctx.set_log_on().unwrap();

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || {
                let mut ok = 0;
                for _ in 0..100 {
                    match ctx.log_error(&record(&format!("thread {i}"))) {
                        Ok(()) => ok += 1,
                        Err(err) => assert_eq!(err.kind(), ErrorKind::NotInitialized),
                    }
                }
                ok
            })
        })
        .collect();
    let toggler = {
        let ctx = Arc::clone(&ctx);
        let path = path.clone();
        std::thread::spawn(move || {
            for _ in 0..25 {
                ctx.cleanup().unwrap();
                ctx.init().unwrap();
                ctx.set_log_file(&path).unwrap();
                ctx.set_log_on().unwrap();
            }
        })
    };
    let ok: usize = writers.into_iter().map(|h| h.join().unwrap()).sum();
    toggler.join().unwrap();

    // The toggler always leaves the context live and enabled.
    ctx.log_error(&record("thread main")).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert!(text.ends_with('\n'));
    assert!(!lines.is_empty());
    // Ok results while logging was briefly off wrote nothing.
    assert!(lines.len() <= ok + 1);
    for line in lines {
        assert!(
            line.starts_with("[IO_FAILURE] writer.rs:42 in flush: thread "),
            "torn line: {line:?}"
        );
    }
}
