//! Emit gateway: record shaping, severity routing, sink-owned gating

#[cfg(feature = "test-support")]
mod tests {
    use lattice_logger::test_support::CaptureSink;
    use lattice_logger::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

    /// Counts every `log` call it receives, whether or not the record passes
    /// the minimum level.
    #[derive(Default)]
    struct CountingSink {
        calls: AtomicUsize,
        written: AtomicUsize,
        min_level: AtomicU8,
    }

    impl Sink for CountingSink {
        fn log(&self, record: Record<'_>) {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if self.is_enabled(record.level) {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
        }

        fn level(&self) -> Level {
            match self.min_level.load(Ordering::Relaxed) {
                0 => Level::Trace,
                1 => Level::Debug,
                2 => Level::Info,
                3 => Level::Warn,
                _ => Level::Error,
            }
        }

        fn set_level(&self, level: Level) {
            self.min_level.store(level as u8, Ordering::Relaxed);
        }
    }

    #[test]
    fn facade_always_calls_the_sink() {
        let sink = Arc::new(CountingSink::default());
        let logger = ContextualLogger::new(sink.clone()).with_level(Level::Error);

        logger.trace("below threshold");
        logger.debug("below threshold");
        logger.info("below threshold");
        logger.warn("below threshold");
        logger.error("at threshold");

        // Every call reaches the sink; the sink alone decides what to keep
        assert_eq!(sink.calls.load(Ordering::Relaxed), 5);
        assert_eq!(sink.written.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn records_route_with_their_severity() {
        let sink = CaptureSink::new();
        let logger =
            ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Trace);

        logger.trace("t");
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        let levels: Vec<Level> = sink.records().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Trace,
                Level::Debug,
                Level::Info,
                Level::Warn,
                Level::Error
            ]
        );
    }

    #[test]
    fn sink_minimum_level_suppresses_lower_records() {
        let sink = CaptureSink::new();
        let logger = ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Warn);

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept too");

        assert_eq!(sink.messages(), vec!["kept", "kept too"]);
    }

    #[test]
    fn message_is_a_dedicated_field() {
        let sink = CaptureSink::new();
        let mut logger =
            ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Trace);
        logger.set_service("api");

        logger.info(LogEntry::new("user created").detail("plan", "pro"));

        let value = sink.records()[0].to_value();
        assert_eq!(value["message"], json!("user created"));
        assert_eq!(value["level"], json!("INFO"));
        assert_eq!(value["details"], json!({ "plan": "pro" }));
        assert_eq!(value["service"], json!("api"));
        assert_eq!(value["type"], json!("log"));
    }

    #[test]
    fn details_are_not_required() {
        let sink = CaptureSink::new();
        let logger =
            ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Trace);

        logger.warn("bare message");

        let value = sink.records()[0].to_value();
        assert_eq!(value["message"], json!("bare message"));
        assert!(value.as_object().unwrap().get("details").is_none());
    }

    #[test]
    fn every_record_gets_its_own_envelope() {
        let sink = CaptureSink::new();
        let mut logger =
            ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Trace);
        logger.set_request_id("req-1");

        logger.info("first");
        logger.info("second");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        // Snapshots agree on context even though each emit built a fresh one
        assert_eq!(
            records[0].envelope.context.request_id.as_deref(),
            Some("req-1")
        );
        assert_eq!(records[0].envelope.context, records[1].envelope.context);
    }

    #[test]
    fn capture_sink_helpers() {
        let sink = CaptureSink::new();
        let logger =
            ContextualLogger::new(Arc::new(sink.clone())).with_level(Level::Trace);

        assert!(sink.is_empty());
        logger.info("This is captured");
        logger.error("This is also captured");

        assert_eq!(sink.len(), 2);
        assert!(sink.contains("This is captured"));
        assert!(sink.contains("also captured"));

        sink.clear();
        assert!(sink.is_empty());
    }
}
