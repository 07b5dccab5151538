//! Contextual structured logging
//!
//! A logger that maintains a mutable current context (service name, request
//! id, authenticated user, HTTP request metadata) and stamps a snapshot of it
//! onto every record it emits, independent of the sink doing the writing:
//!
//! - Context builds up through setters, derives in bulk from an inbound
//!   request via [`ContextualLogger::set_event`], and resets between units of
//!   work.
//! - Each emit snapshots the context into an immutable [`Envelope`]
//!   (`created_at` + `type: "log"` + context fields) merged with the caller's
//!   [`LogEntry`].
//! - Level gating lives in the [`Sink`], never in the facade.
//!
//! ```
//! use lattice_logger::{ContextualLogger, LogEntry, RequestParts};
//! use std::sync::Arc;
//!
//! let mut logger = ContextualLogger::new(Arc::new(lattice_logger::StdoutSink::new()));
//!
//! let request = RequestParts::new("POST", "/users", "example.com")
//!     .with_header("x-user-id", "user-456");
//! logger.set_event("api-service", &request);
//!
//! logger.info(LogEntry::new("user created").detail("plan", "pro"));
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod context;
mod level;
mod logger;
mod record;
mod request;
mod sink;

#[cfg(feature = "stdout")]
mod stdout;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use context::{Context, HttpInfo, UserInfo};
pub use level::{LOG_LEVEL_ENV, Level, ParseLevelError};
pub use logger::ContextualLogger;
pub use record::{Envelope, LogEntry, OwnedRecord, RECORD_TYPE, Record};
pub use request::{IdentityHeaders, InboundRequest, RequestParts};
pub use sink::{NoOpSink, Sink};

#[cfg(feature = "stdout")]
pub use stdout::StdoutSink;

#[cfg(feature = "stdout")]
use std::sync::{Arc, Mutex, OnceLock};

#[cfg(feature = "stdout")]
static SHARED: OnceLock<Mutex<ContextualLogger>> = OnceLock::new();

/// The process-wide default logger, created lazily over a [`StdoutSink`] with
/// default configuration.
///
/// New [`ContextualLogger`] instances never share mutable context with this
/// one; per-request code should construct its own instance instead of locking
/// the shared logger across a unit of work.
#[cfg(feature = "stdout")]
pub fn shared() -> &'static Mutex<ContextualLogger> {
    SHARED.get_or_init(|| Mutex::new(ContextualLogger::new(Arc::new(StdoutSink::new()))))
}
