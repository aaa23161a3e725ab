//! Short link entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping from a short code to its original URL.
///
/// Records are immutable once created: the conditional write that creates
/// them guarantees at most one record per code, and no update or delete
/// path exists. Lifecycle is bounded only by the durable store's retention
/// policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortLink {
    /// Unique short code, the record's key.
    pub code: String,
    /// The original long URL, stored in normalized form.
    pub original_url: String,
    /// Creation time. `None` when the record was served from the cache,
    /// which holds only the code-to-URL projection.
    pub created_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Builds a record stamped with the current time.
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            created_at: Some(Utc::now()),
        }
    }

    /// Builds the cache projection of a record: code and URL only.
    pub fn cached(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            created_at: None,
        }
    }
}
