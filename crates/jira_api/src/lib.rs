//! Typed JIRA API client crate used by the popup shell.

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod query;
pub mod render;

pub use client::JiraClient;
pub use config::JiraConfig;
pub use error::{JiraError, Result};
pub use models::{ActivityFeed, Assignee, FeedEntry, Issue, IssueFields, Project, QueryOutcome};
pub use query::SearchQuery;
pub use render::{render_activity_feed, render_query_results, to_plain_text, FeedFragment};
