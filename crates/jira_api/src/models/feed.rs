/// Represents one entry of the activity stream. `title` carries the raw
/// markup-bearing text from the feed; `updated` is the RFC-3339 timestamp
/// string as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub updated: String,
}

/// Parsed activity stream in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFeed {
    pub entries: Vec<FeedEntry>,
}

impl ActivityFeed {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
