//! The mutable context attached to emitted records

use serde::{Deserialize, Serialize};

/// Acting principal, extracted from inbound request headers.
///
/// Both fields are independently optional; partial identity is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Principal id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Principal email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request-line info of the inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpInfo {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
}

/// The set of optional fields stamped onto every emitted record.
///
/// All fields unset on construction; absence means "not yet set". The target
/// host is a top-level sibling of `http`, not nested under it — consumers
/// depend on the flat shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Logical component name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Correlates one unit of work's records
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Acting principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    /// Request-line pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpInfo>,
    /// Target host of the inbound request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the context to the empty state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
