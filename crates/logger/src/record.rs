//! Log entries, envelopes, and the records handed to sinks

use crate::{Context, Level};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record type stamped onto every envelope.
pub const RECORD_TYPE: &str = "log";

/// A caller-supplied log entry. Not retained by the logger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The log message
    pub message: String,
    /// Optional structured details attached alongside the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl LogEntry {
    /// Create an entry with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Builder-style method for attaching a full details mapping
    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = Some(details);
        self
    }

    /// Builder-style method for attaching one detail key
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

impl From<&str> for LogEntry {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LogEntry {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Immutable snapshot of the context plus a creation timestamp and the fixed
/// record type. Built once per emit call, used once, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// When the envelope was built
    pub created_at: DateTime<Utc>,
    /// Always [`RECORD_TYPE`]
    #[serde(rename = "type")]
    pub record_type: &'static str,
    /// The context fields at snapshot time
    #[serde(flatten)]
    pub context: Context,
}

impl Envelope {
    /// Snapshot the given context, stamping `created_at` with the current time
    pub fn new(context: Context) -> Self {
        Self {
            created_at: Utc::now(),
            record_type: RECORD_TYPE,
            context,
        }
    }

    /// The envelope as a JSON object
    pub fn to_value(&self) -> Value {
        // Serialization of the envelope cannot fail; guard anyway
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// A log record as handed to a sink: severity, envelope, and the borrowed
/// caller entry.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// Context snapshot for this record
    pub envelope: Envelope,
    /// The caller's message and details
    pub entry: &'a LogEntry,
}

impl<'a> Record<'a> {
    /// Create a record from its parts
    #[inline]
    pub fn new(level: Level, envelope: Envelope, entry: &'a LogEntry) -> Self {
        Self {
            level,
            envelope,
            entry,
        }
    }

    /// The fully merged record as one JSON object: envelope fields plus a
    /// dedicated `level`, a dedicated `message`, and `details` when present.
    pub fn to_value(&self) -> Value {
        let mut map = match self.envelope.to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert("level".into(), Value::String(self.level.as_str().into()));
        map.insert("message".into(), Value::String(self.entry.message.clone()));
        if let Some(details) = &self.entry.details {
            map.insert("details".into(), Value::Object(details.clone()));
        }
        Value::Object(map)
    }

    /// Convert to an owned record (for capture or queueing)
    pub fn to_owned(&self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            envelope: self.envelope.clone(),
            entry: self.entry.clone(),
        }
    }
}

/// Owned version of [`Record`]
#[derive(Debug, Clone)]
pub struct OwnedRecord {
    /// Log level
    pub level: Level,
    /// Context snapshot for this record
    pub envelope: Envelope,
    /// The caller's message and details
    pub entry: LogEntry,
}

impl OwnedRecord {
    /// The merged record as one JSON object
    pub fn to_value(&self) -> Value {
        Record {
            level: self.level,
            envelope: self.envelope.clone(),
            entry: &self.entry,
        }
        .to_value()
    }
}
