//! Test support utilities
//!
//! Utilities for capturing records during tests. Only available when the
//! `test-support` feature is enabled.

use crate::{Level, OwnedRecord, Record, Sink};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// A sink that captures all records in memory for testing
#[derive(Clone)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<OwnedRecord>>>,
    min_level: Arc<AtomicU8>,
}

impl CaptureSink {
    /// Create a new capture sink accepting everything
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            min_level: Arc::new(AtomicU8::new(Level::Trace.to_u8())),
        }
    }

    /// Create with a specific minimum level
    pub fn with_level(self, level: Level) -> Self {
        self.set_level(level);
        self
    }

    /// All captured records
    pub fn records(&self) -> Vec<OwnedRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Captured messages, in emit order
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.entry.message.clone())
            .collect()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// True when nothing was captured
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    /// Check whether any captured message contains the given text
    pub fn contains(&self, text: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.entry.message.contains(text))
    }

    /// Clear captured records
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for CaptureSink {
    fn log(&self, record: Record<'_>) {
        if !self.is_enabled(record.level) {
            return;
        }
        if let Ok(mut records) = self.records.lock() {
            records.push(record.to_owned());
        }
    }

    fn flush(&self) {
        // No-op for in-memory sink
    }

    fn level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: Level) {
        self.min_level.store(level.to_u8(), Ordering::Relaxed);
    }
}
