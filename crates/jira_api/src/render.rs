//! Pure HTML-fragment renderers for search results and the activity stream.
//!
//! Both renderers are plain-data-in, string-out: they never touch the network
//! or any display surface, and identical input always yields identical
//! output. Remote-supplied text is escaped before it reaches a fragment; the
//! fragments themselves are always well-formed (no partially open tags).

use chrono::DateTime;
use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};

use crate::config::JiraConfig;
use crate::models::{ActivityFeed, QueryOutcome};

pub const QUERY_FAILED_FRAGMENT: &str = "<p>There was a problem with the query response.</p>";
pub const NO_RESULTS_FRAGMENT: &str = "<p>There are no results.</p>";

/// Renders a classified search response as an HTML fragment.
///
/// A populated outcome becomes a count line followed by an unordered list,
/// one item per issue in the order received. Each item links to the issue's
/// browse URL with `{key} - {summary}` as the visible text, plus an
/// "assigned to" profile link when the issue has an assignee.
pub fn render_query_results(config: &JiraConfig, outcome: &QueryOutcome) -> String {
    let issues = match outcome {
        QueryOutcome::Missing => return QUERY_FAILED_FRAGMENT.to_string(),
        QueryOutcome::Malformed => return NO_RESULTS_FRAGMENT.to_string(),
        QueryOutcome::Issues(issues) => issues,
    };

    let mut fragment = format!("There are {} issues. <ul>", issues.len());
    for issue in issues {
        let summary = issue.fields.summary.as_deref().unwrap_or("");
        let label = format!("{} - {}", issue.key, summary);
        fragment.push_str(&format!(
            "<li><a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&config.browse_url(&issue.key)),
            encode_text(&label)
        ));
        if let Some(assignee) = &issue.fields.assignee {
            fragment.push_str(&format!(
                " assigned to <a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&config.profile_url(&assignee.name)),
                encode_text(&assignee.display_name)
            ));
        }
        fragment.push_str("</li>");
    }
    fragment.push_str("</ul>");
    fragment
}

/// Rendered form of an activity feed. An empty feed is a distinct outcome
/// rather than an empty list, so callers can show a status message instead
/// of a blank container.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedFragment {
    /// The feed held no entries at all.
    Empty,
    /// An unordered list of `{date} - {title}` items.
    List(String),
}

/// Renders an activity feed as a list of formatted date/title lines.
pub fn render_activity_feed(feed: &ActivityFeed) -> FeedFragment {
    if feed.is_empty() {
        return FeedFragment::Empty;
    }

    let mut fragment = String::from("<ul>");
    for entry in &feed.entries {
        fragment.push_str(&format!(
            "<li>{} - {}</li>",
            encode_text(&format_updated(&entry.updated)),
            encode_text(&to_plain_text(&entry.title))
        ));
    }
    fragment.push_str("</ul>");
    FeedFragment::List(fragment)
}

/// Formats an RFC-3339 timestamp for display, falling back to the raw
/// string when it does not parse.
fn format_updated(updated: &str) -> String {
    DateTime::parse_from_rfc3339(updated)
        .map(|moment| moment.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| updated.to_string())
}

/// Reduces a markup fragment to its text content.
///
/// Tags are dropped and entities decoded, so titles carrying embedded HTML
/// render as plain text. Extraction is best-effort: a `<` that does not open
/// a plausible tag (letter, `/`, `!` or `?` next) is kept as literal text,
/// and malformed input never panics.
pub fn to_plain_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut chars = fragment.chars().peekable();
    let mut in_tag = false;

    while let Some(ch) = chars.next() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
            continue;
        }
        if ch == '<' {
            match chars.peek() {
                Some(next) if next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?') => {
                    in_tag = true;
                }
                _ => text.push(ch),
            }
        } else {
            text.push(ch);
        }
    }

    decode_html_entities(&text).into_owned()
}
