//! The contextual logger facade

use crate::{
    Context, Envelope, HttpInfo, IdentityHeaders, InboundRequest, Level, LogEntry, Record, Sink,
    UserInfo,
};
use std::sync::Arc;
use uuid::Uuid;

/// A logger that stamps a mutable current context onto every emitted record.
///
/// Context is ordinary per-instance mutable state with no internal
/// synchronization: concurrent units of work must each own their own
/// instance. Emitting never mutates context; the sink owns level gating.
pub struct ContextualLogger {
    context: Context,
    sink: Arc<dyn Sink>,
    identity_headers: IdentityHeaders,
}

impl ContextualLogger {
    /// Create a logger over the given sink, applying the minimum level from
    /// the `LOG_LEVEL` environment variable (INFO when unset or unrecognized).
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        sink.set_level(Level::from_env());
        Self {
            context: Context::new(),
            sink,
            identity_headers: IdentityHeaders::default(),
        }
    }

    /// Builder-style method for an explicit minimum level override
    pub fn with_level(self, level: Level) -> Self {
        self.sink.set_level(level);
        self
    }

    /// Builder-style method for custom identity header names
    pub fn with_identity_headers(mut self, headers: IdentityHeaders) -> Self {
        self.identity_headers = headers;
        self
    }

    /// Change the sink's minimum active level
    pub fn set_level(&self, level: Level) {
        self.sink.set_level(level);
    }

    /// The sink's current minimum active level
    pub fn level(&self) -> Level {
        self.sink.level()
    }

    /// The current context fields
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Set the logical component name
    pub fn set_service(&mut self, service: impl Into<String>) {
        self.context.service = Some(service.into());
    }

    /// Set the request id correlating this unit of work's records
    pub fn set_request_id(&mut self, request_id: impl Into<String>) {
        self.context.request_id = Some(request_id.into());
    }

    /// Set the acting principal
    pub fn set_user(&mut self, user: UserInfo) {
        self.context.user = Some(user);
    }

    /// Set the request-line pair and the target host. Host stays a top-level
    /// field beside `http`, not nested under it.
    pub fn set_http(
        &mut self,
        method: impl Into<String>,
        url: impl Into<String>,
        host: impl Into<String>,
    ) {
        self.context.http = Some(HttpInfo {
            method: method.into(),
            url: url.into(),
        });
        self.context.host = Some(host.into());
    }

    /// Return the context to the empty state
    pub fn reset(&mut self) {
        self.context.clear();
    }

    /// Reinitialize the context from an inbound request: reset, then set the
    /// service name, a freshly generated request id, the principal from the
    /// identity headers, and the http/host fields. Absent headers leave the
    /// matching user subfield unset.
    pub fn set_event<R: InboundRequest + ?Sized>(
        &mut self,
        service: impl Into<String>,
        request: &R,
    ) {
        self.reset();
        self.set_service(service);
        self.set_request_id(Uuid::new_v4().to_string());

        self.set_user(UserInfo {
            email: request
                .header(self.identity_headers.email.as_ref())
                .map(str::to_owned),
            id: request
                .header(self.identity_headers.id.as_ref())
                .map(str::to_owned),
        });

        self.set_http(request.method(), request.url(), request.hostname());
    }

    /// Snapshot the current context into a fresh envelope. Pure read: calling
    /// twice with no mutation in between differs only in `created_at`.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.context.clone())
    }

    fn emit(&self, level: Level, entry: LogEntry) {
        // Gating belongs to the sink; always forward.
        let envelope = self.envelope();
        self.sink.log(Record::new(level, envelope, &entry));
    }

    /// Emit at TRACE
    pub fn trace(&self, entry: impl Into<LogEntry>) {
        self.emit(Level::Trace, entry.into());
    }

    /// Emit at DEBUG
    pub fn debug(&self, entry: impl Into<LogEntry>) {
        self.emit(Level::Debug, entry.into());
    }

    /// Emit at INFO
    pub fn info(&self, entry: impl Into<LogEntry>) {
        self.emit(Level::Info, entry.into());
    }

    /// Emit at WARN
    pub fn warn(&self, entry: impl Into<LogEntry>) {
        self.emit(Level::Warn, entry.into());
    }

    /// Emit at ERROR
    pub fn error(&self, entry: impl Into<LogEntry>) {
        self.emit(Level::Error, entry.into());
    }

    /// Flush the underlying sink
    pub fn flush(&self) {
        self.sink.flush();
    }
}

impl std::fmt::Debug for ContextualLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextualLogger")
            .field("context", &self.context)
            .field("level", &self.sink.level())
            .finish_non_exhaustive()
    }
}
