//! The sink collaborator contract

use crate::{Level, Record};

/// A log-writing collaborator.
///
/// The sink owns level gating: `log` drops records below the configured
/// minimum, and the facade never pre-filters. The minimum level is interior-
/// mutable so sinks stay adjustable behind `Arc<dyn Sink>`.
pub trait Sink: Send + Sync + 'static {
    /// Write one record, or drop it if its level is below the minimum
    fn log(&self, record: Record<'_>);

    /// Flush any buffered output
    fn flush(&self) {}

    /// The current minimum active level
    fn level(&self) -> Level;

    /// Change the minimum active level
    fn set_level(&self, level: Level);

    /// Check whether a level passes the minimum
    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    fn log(&self, _record: Record<'_>) {}

    fn level(&self) -> Level {
        Level::Error
    }

    fn set_level(&self, _level: Level) {}

    #[inline]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}
