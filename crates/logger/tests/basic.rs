//! Basic tests for the logger

use lattice_logger::*;
use std::sync::Arc;

#[test]
#[cfg(feature = "stdout")]
fn test_stdout_smoke() {
    let mut logger =
        ContextualLogger::new(Arc::new(StdoutSink::new())).with_level(Level::Trace);

    logger.set_service("smoke-test");
    logger.set_request_id("req-1");

    logger.error("This is an error");
    logger.warn("This is a warning");
    logger.info("This is info");
    logger.debug("This is debug");
    logger.trace("This is trace");

    logger.info(LogEntry::new("with details").detail("answer", 42));
    logger.flush();
}

#[test]
#[cfg(feature = "stdout")]
fn test_sink_level_gating() {
    let sink = Arc::new(StdoutSink::new().with_level(Level::Info));

    assert!(!sink.is_enabled(Level::Trace));
    assert!(!sink.is_enabled(Level::Debug));
    assert!(sink.is_enabled(Level::Info));
    assert!(sink.is_enabled(Level::Warn));
    assert!(sink.is_enabled(Level::Error));
}

#[test]
fn test_level_override_reaches_the_sink() {
    let sink = Arc::new(NoOpSink);
    let logger = ContextualLogger::new(sink).with_level(Level::Debug);

    // NoOpSink ignores set_level; level() stays at its fixed value
    assert_eq!(logger.level(), Level::Error);

    #[cfg(feature = "test-support")]
    {
        let sink = Arc::new(test_support::CaptureSink::new());
        let logger = ContextualLogger::new(sink.clone()).with_level(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);

        logger.set_level(Level::Warn);
        assert_eq!(sink.level(), Level::Warn);
    }
}

#[test]
fn test_noop_sink() {
    let logger = ContextualLogger::new(Arc::new(NoOpSink));

    // NoOpSink should never be enabled
    assert!(!NoOpSink.is_enabled(Level::Error));
    assert!(!NoOpSink.is_enabled(Level::Trace));

    // Test that it doesn't panic when used
    logger.error("This goes nowhere");
    logger.flush();
}

#[test]
#[cfg(feature = "stdout")]
fn test_shared_instance_is_distinct_from_new_instances() {
    let mut fresh = ContextualLogger::new(Arc::new(NoOpSink));
    fresh.set_service("mine");

    let shared = shared().lock().unwrap();
    assert!(shared.context().is_empty());
}
