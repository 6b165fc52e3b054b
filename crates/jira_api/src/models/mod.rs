mod feed;
mod issue;
mod project;

pub use feed::{ActivityFeed, FeedEntry};
pub use issue::{Assignee, Issue, IssueFields, QueryOutcome};
pub use project::Project;
