//! Tab descriptor
//!
//! The immutable input record the grouping engine consumes. The browser
//! shell collects these from open windows; the engine never talks to the
//! browser itself.

use serde::{Deserialize, Serialize};
use url::Url;

/// Tab identifier, unique within a single grouping invocation.
pub type TabId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Unique identifier within the invocation
    pub id: TabId,
    /// Page title as reported by the browser
    pub title: String,
    /// Current URL
    pub url: String,
    /// When the tab was opened, epoch milliseconds (0 if unknown)
    #[serde(default)]
    pub open_time_ms: i64,
}

impl TabDescriptor {
    pub fn new(
        id: TabId,
        title: impl Into<String>,
        url: impl Into<String>,
        open_time_ms: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            open_time_ms,
        }
    }

    /// Hostname of the tab's URL, if it parses
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}
