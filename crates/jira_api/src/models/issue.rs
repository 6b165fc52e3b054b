//! Search response models returned by the JIRA search endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Represents a single issue from a search response. Every field is lenient:
/// a payload missing `key` or `fields` still deserializes.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Issue {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Assignee {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
}

/// Classified shape of a search response. Makes the loose "absent response"
/// and "issues is not an array" conditions explicit branches instead of
/// duck-typed checks, so render code matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// No response body was available at all.
    Missing,
    /// A body arrived but `issues` is absent or not an array.
    Malformed,
    /// A well-shaped issue list, in the order received.
    Issues(Vec<Issue>),
}

impl QueryOutcome {
    /// Classifies a raw search payload. Individual issues that fail to
    /// deserialize degrade to defaults rather than discarding the response.
    pub fn classify(response: Option<&Value>) -> QueryOutcome {
        let Some(body) = response else {
            return QueryOutcome::Missing;
        };
        let Some(issues) = body.get("issues").and_then(Value::as_array) else {
            return QueryOutcome::Malformed;
        };
        let parsed = issues
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect();
        QueryOutcome::Issues(parsed)
    }
}
