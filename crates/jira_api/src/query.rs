//! JQL and endpoint URL construction.
//!
//! The query strings here are assembled literally: the `+` separators are
//! part of the wire format the server expects and must not be re-encoded.

use crate::config::JiraConfig;

pub const SEARCH_FIELDS: &str = "id,status,key,assignee,summary";
pub const MAX_SEARCH_RESULTS: u32 = 100;
pub const MAX_FEED_RESULTS: u32 = 50;

/// Filter parameters for an issue search: tickets of `project` sitting in
/// `status` since at least `days_past` days.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub project: String,
    pub status: String,
    pub days_past: u32,
}

impl SearchQuery {
    pub fn new(
        project: impl Into<String>,
        status: impl Into<String>,
        days_past: u32,
    ) -> Self {
        Self {
            project: project.into(),
            status: status.into(),
            days_past,
        }
    }

    /// JQL filter expression for this query.
    pub fn jql(&self) -> String {
        format!(
            "project={}+and+status={}+and+status+changed+to+{}+before+-{}d",
            self.project, self.status, self.status, self.days_past
        )
    }

    /// Full search endpoint URL.
    pub fn url(&self, config: &JiraConfig) -> String {
        format!(
            "{}search?jql={}&fields={}&maxresults={}",
            config.api_root(),
            self.jql(),
            SEARCH_FIELDS,
            MAX_SEARCH_RESULTS
        )
    }
}

/// Activity-stream endpoint URL for a user's issue events.
pub fn activity_url(config: &JiraConfig, user: &str) -> String {
    format!(
        "{}/activity?maxResults={}&streams=user+IS+{}&providers=issues",
        config.base_url.trim_end_matches('/'),
        MAX_FEED_RESULTS,
        user
    )
}
