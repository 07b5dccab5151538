//! The inbound-request capability used by `set_event`

use std::borrow::Cow;
use std::collections::HashMap;

/// Anything that looks like an inbound HTTP request.
///
/// Framework request types implement this at the integration boundary; header
/// lookup must return `None` for absent headers rather than failing.
pub trait InboundRequest {
    /// HTTP method
    fn method(&self) -> &str;
    /// Request URL
    fn url(&self) -> &str;
    /// Target hostname
    fn hostname(&self) -> &str;
    /// Look up a header value by name
    fn header(&self, name: &str) -> Option<&str>;
}

/// The pair of header names identity is extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    /// Header carrying the principal's email
    pub email: Cow<'static, str>,
    /// Header carrying the principal's id
    pub id: Cow<'static, str>,
}

impl IdentityHeaders {
    /// Create a pair from custom header names
    pub fn new(email: impl Into<Cow<'static, str>>, id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
        }
    }
}

impl Default for IdentityHeaders {
    fn default() -> Self {
        Self {
            email: Cow::Borrowed("x-user-email"),
            id: Cow::Borrowed("x-user-id"),
        }
    }
}

/// A plain-value [`InboundRequest`] for callers without a framework request
/// type (and for tests).
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Target hostname
    pub hostname: String,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl RequestParts {
    /// Create request parts with no headers
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            hostname: hostname.into(),
            headers: HashMap::new(),
        }
    }

    /// Builder-style method for adding a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl InboundRequest for RequestParts {
    fn method(&self) -> &str {
        &self.method
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn header(&self, name: &str) -> Option<&str> {
        // Header names are case-insensitive
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
