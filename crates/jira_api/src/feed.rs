//! Atom activity-stream parsing.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::models::{ActivityFeed, FeedEntry};

enum EntryField {
    Title,
    Updated,
}

/// Parses an Atom document into an [`ActivityFeed`], keeping document order.
///
/// Only the `title` and `updated` children of each `entry` are extracted;
/// element names are matched by local name so namespace prefixes do not
/// matter. Titles in the activity stream are `type="html"`, so the
/// entity-unescaped text is a markup fragment and is stored as such.
pub fn parse_feed(xml: &str) -> Result<ActivityFeed> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut current: Option<FeedEntry> = None;
    let mut field: Option<EntryField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => match start.local_name().as_ref() {
                b"entry" => {
                    current = Some(FeedEntry::default());
                    field = None;
                }
                b"title" if current.is_some() => field = Some(EntryField::Title),
                b"updated" if current.is_some() => field = Some(EntryField::Updated),
                _ => {}
            },
            Event::Text(text) => {
                if let (Some(entry), Some(field)) = (current.as_mut(), field.as_ref()) {
                    let value = text.unescape()?;
                    match field {
                        EntryField::Title => entry.title.push_str(&value),
                        EntryField::Updated => entry.updated.push_str(&value),
                    }
                }
            }
            Event::CData(cdata) => {
                if let (Some(entry), Some(field)) = (current.as_mut(), field.as_ref()) {
                    let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    match field {
                        EntryField::Title => entry.title.push_str(&value),
                        EntryField::Updated => entry.updated.push_str(&value),
                    }
                }
            }
            Event::End(end) => match end.local_name().as_ref() {
                b"entry" => {
                    if let Some(mut entry) = current.take() {
                        entry.title = entry.title.trim().to_string();
                        entry.updated = entry.updated.trim().to_string();
                        entries.push(entry);
                    }
                    field = None;
                }
                b"title" | b"updated" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ActivityFeed { entries })
}

#[cfg(test)]
mod tests {
    use super::parse_feed;
    use crate::error::JiraError;

    const SAMPLE_FEED: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Activity Streams</title>
  <entry>
    <title type="html">&lt;a href="#"&gt;Nyx Linden&lt;/a&gt; commented on SUN-42</title>
    <updated>2017-03-22T17:40:00.000Z</updated>
  </entry>
  <entry>
    <title type="html">Nyx Linden updated SUN-7</title>
    <updated>2017-03-21T09:05:12.000Z</updated>
  </entry>
</feed>"##;

    #[test]
    fn extracts_entries_in_document_order() {
        let feed = parse_feed(SAMPLE_FEED).expect("feed parses");
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(
            feed.entries[0].title,
            r##"<a href="#">Nyx Linden</a> commented on SUN-42"##
        );
        assert_eq!(feed.entries[0].updated, "2017-03-22T17:40:00.000Z");
        assert_eq!(feed.entries[1].title, "Nyx Linden updated SUN-7");
    }

    #[test]
    fn feed_level_title_is_not_an_entry_field() {
        let feed = parse_feed(SAMPLE_FEED).expect("feed parses");
        assert!(feed
            .entries
            .iter()
            .all(|entry| entry.title != "Activity Streams"));
    }

    #[test]
    fn empty_feed_yields_zero_entries() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Activity Streams</title></feed>"#;
        let feed = parse_feed(xml).expect("feed parses");
        assert!(feed.is_empty());
    }

    #[test]
    fn entry_missing_updated_defaults_to_empty() {
        let xml = "<feed><entry><title>orphan</title></entry></feed>";
        let feed = parse_feed(xml).expect("feed parses");
        assert_eq!(feed.entries[0].title, "orphan");
        assert_eq!(feed.entries[0].updated, "");
    }

    #[test]
    fn mismatched_end_tag_reports_malformed() {
        let xml = "<feed><entry><title>cut off</updated></entry></feed>";
        match parse_feed(xml) {
            Err(JiraError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn namespace_prefixed_elements_match_by_local_name() {
        let xml = r#"<atom:feed xmlns:atom="http://www.w3.org/2005/Atom">
            <atom:entry>
              <atom:title>prefixed</atom:title>
              <atom:updated>2017-01-01T00:00:00.000Z</atom:updated>
            </atom:entry>
        </atom:feed>"#;
        let feed = parse_feed(xml).expect("feed parses");
        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].title, "prefixed");
    }
}
