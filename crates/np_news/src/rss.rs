//! RSS 2.0 parsing for search feeds.
//!
//! Only the `<rss><channel><item>` skeleton is read; anything else in the
//! document is ignored.

use np_core::{Article, Error, Result, UpstreamFailure, DESCRIPTION_PLACEHOLDER};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: Option<Channel>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default, rename = "item")]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

impl Item {
    fn into_article(self) -> Option<Article> {
        let title = non_empty(self.title)?;
        let link = non_empty(self.link)?;
        Some(Article {
            title,
            link,
            pub_date: self.pub_date.map(|d| d.trim().to_string()).unwrap_or_default(),
            description: non_empty(self.description)
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an RSS document and returns the first `limit` usable items.
///
/// Malformed XML is an [`Error::UpstreamParse`]; a document without a
/// channel or without items is an [`Error::NotFound`]. Items missing a
/// title or link are skipped.
pub fn parse_feed(xml: &str, limit: usize) -> Result<Vec<Article>> {
    let document: RssDocument = quick_xml::de::from_str(xml)
        .map_err(|e| Error::UpstreamParse(UpstreamFailure::new(format!("Invalid RSS: {}", e))))?;

    let channel = document
        .channel
        .ok_or_else(|| Error::NotFound("No news found for this keyword".to_string()))?;

    let articles: Vec<Article> = channel
        .items
        .into_iter()
        .filter_map(Item::into_article)
        .take(limit)
        .collect();

    if articles.is_empty() {
        return Err(Error::NotFound("No news found for this keyword".to_string()));
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>"bitcoin" - Google News</title>
    <link>https://news.google.com/search?q=bitcoin</link>
    {}
  </channel>
</rss>"#,
            items
        )
    }

    fn item(n: usize) -> String {
        format!(
            r#"<item>
      <title>Story {n}</title>
      <link>https://example.com/{n}</link>
      <guid isPermaLink="false">guid-{n}</guid>
      <pubDate>Mon, 06 May 2024 1{n}:00:00 GMT</pubDate>
      <description><![CDATA[<a href="https://example.com/{n}">Story {n}</a>]]></description>
      <source url="https://example.com">Example</source>
    </item>"#
        )
    }

    #[test]
    fn test_parse_feed_keeps_order_and_limit() {
        let items: String = (1..=7).map(item).collect();
        let articles = parse_feed(&feed(&items), 5).unwrap();
        assert_eq!(articles.len(), 5);
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Story 1", "Story 2", "Story 3", "Story 4", "Story 5"]);
        assert_eq!(articles[0].link, "https://example.com/1");
        assert_eq!(articles[0].pub_date, "Mon, 06 May 2024 11:00:00 GMT");
        assert!(articles[0].description.contains("Story 1"));
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let xml = feed(
            "<item><title>No body</title><link>https://example.com/x</link></item>",
        );
        let articles = parse_feed(&xml, 5).unwrap();
        assert_eq!(articles[0].description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(articles[0].pub_date, "");
    }

    #[test]
    fn test_items_without_title_or_link_are_skipped() {
        let xml = feed(&format!(
            "<item><title>Orphan</title></item><item><link>https://example.com/y</link></item>{}",
            item(3)
        ));
        let articles = parse_feed(&xml, 5).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Story 3");
    }

    #[test]
    fn test_missing_channel_is_not_found() {
        let result = parse_feed(r#"<rss version="2.0"></rss>"#, 5);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_channel_without_items_is_not_found() {
        let result = parse_feed(&feed(""), 5);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let result = parse_feed("<rss><channel><item><title>Broken", 5);
        assert!(matches!(result, Err(Error::UpstreamParse(_))));
    }
}
