//! Whole-page scanning: every chat renderer in an HTML document
//!
//! Entries sit inside container renderers (item list, ticker, header), so the
//! walk descends through everything and stops only at a recognized entry.
//! Entries nest helper renderers of their own (author badges, chips) which
//! are never visited.

use crate::element::{ChatElement, HtmlElement};
use crate::image::ImageResolver;
use crate::message::{Message, MessageKind};
use crate::parser::parse;
use crate::Error;
use scraper::{ElementRef, Html};
use serde::Serialize;
use std::collections::BTreeMap;

const RENDERER_PREFIX: &str = "yt-live-chat-";
const RENDERER_SUFFIX: &str = "-renderer";

/// Outcome of scanning one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    /// Parsed entries in document order
    pub messages: Vec<Message>,
    /// Unrecognized renderer tags and how often each was seen
    pub skipped: BTreeMap<String, usize>,
}

impl FeedReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.values().sum()
    }

    /// One JSON object per line
    pub fn to_json_lines(&self) -> Result<String, Error> {
        let lines = self
            .messages
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Messages as a pretty-printed JSON array
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}

/// Parse every chat entry in `html`
pub async fn parse_feed<R>(html: &str, images: &R) -> FeedReport
where
    R: for<'a> ImageResolver<HtmlElement<'a>> + ?Sized,
{
    let document = Html::parse_document(html);
    let mut report = FeedReport::default();

    for entry in chat_entries(document.root_element()) {
        let el = HtmlElement::new(entry);
        match parse(&el, images).await {
            Some(message) => report.messages.push(message),
            None => {
                tracing::debug!(tag = el.kind_tag(), "skipping unrecognized chat entry");
                *report.skipped.entry(el.kind_tag().to_string()).or_default() += 1;
            }
        }
    }

    tracing::debug!(
        parsed = report.messages.len(),
        skipped = report.skipped_count(),
        "feed parsed"
    );
    report
}

fn is_chat_renderer(tag: &str) -> bool {
    tag.len() > RENDERER_PREFIX.len() + RENDERER_SUFFIX.len()
        && tag.starts_with(RENDERER_PREFIX)
        && tag.ends_with(RENDERER_SUFFIX)
}

/// Chat entries below `root`, in document order
///
/// Recognized entries are collected as they are reached. An unrecognized
/// renderer is collected only when nothing recognized lives below it, and
/// then in place of any unrecognized renderers nested inside it.
fn chat_entries(root: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut entries = Vec::new();
    collect_entries(root, &mut entries);
    entries
}

/// Returns whether a recognized entry was found at or below `el`
fn collect_entries<'a>(el: ElementRef<'a>, entries: &mut Vec<ElementRef<'a>>) -> bool {
    let tag = el.value().name();
    if MessageKind::from_tag(tag).is_some() {
        entries.push(el);
        return true;
    }

    let start = entries.len();
    let mut found = false;
    for child in el.children().filter_map(ElementRef::wrap) {
        found |= collect_entries(child, entries);
    }

    if !found && is_chat_renderer(tag) {
        entries.truncate(start);
        entries.push(el);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::SrcAttributeResolver;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div id="items">
  <yt-live-chat-text-message-renderer author-type="owner">
    <span id="author-name">Ada<yt-live-chat-author-badge-renderer></yt-live-chat-author-badge-renderer></span>
    <span id="message">first</span>
  </yt-live-chat-text-message-renderer>
  <yt-live-chat-viewer-engagement-message-renderer>
    <span id="message">Welcome to live chat!</span>
  </yt-live-chat-viewer-engagement-message-renderer>
  <yt-live-chat-paid-sticker-renderer>
    <span id="author-name">Cy</span>
  </yt-live-chat-paid-sticker-renderer>
  <yt-live-chat-text-message-renderer>
    <span id="author-name">Bo</span>
    <span id="message">second</span>
  </yt-live-chat-text-message-renderer>
</div>
</body></html>"#;

    #[test]
    fn test_is_chat_renderer() {
        assert!(is_chat_renderer("yt-live-chat-text-message-renderer"));
        assert!(!is_chat_renderer("yt-live-chat-renderer"));
        assert!(!is_chat_renderer("yt-img-shadow"));
        assert!(!is_chat_renderer("div"));
    }

    #[tokio::test]
    async fn test_parse_feed_in_document_order() {
        let report = parse_feed(PAGE, &SrcAttributeResolver::default()).await;

        let kinds: Vec<_> = report.messages.iter().map(Message::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::TextMessage,
                MessageKind::PaidSticker,
                MessageKind::TextMessage,
            ]
        );
        let authors: Vec<_> = report.messages.iter().map(Message::author).collect();
        assert_eq!(authors, vec![Some("Ada"), Some("Cy"), Some("Bo")]);
    }

    #[tokio::test]
    async fn test_parse_feed_counts_skipped_entries_only() {
        let report = parse_feed(PAGE, &SrcAttributeResolver::default()).await;

        // nested badge renderers are not entries of their own
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(
            report
                .skipped
                .get("yt-live-chat-viewer-engagement-message-renderer"),
            Some(&1)
        );
    }

    #[tokio::test]
    async fn test_json_lines_output() {
        let report = parse_feed(PAGE, &SrcAttributeResolver::default()).await;
        let out = report.to_json_lines().unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["messageType"], "text-message");
        assert_eq!(first["authorType"], "owner");
        assert_eq!(first["message"], "first");
    }

    const CHAT_APP: &str = r#"<!DOCTYPE html>
<html><body>
<yt-live-chat-app>
  <yt-live-chat-renderer>
    <yt-live-chat-header-renderer><span id="title">Top chat</span></yt-live-chat-header-renderer>
    <yt-live-chat-ticker-renderer>
      <yt-live-chat-ticker-paid-message-item-renderer></yt-live-chat-ticker-paid-message-item-renderer>
    </yt-live-chat-ticker-renderer>
    <yt-live-chat-item-list-renderer>
      <div id="items">
        <yt-live-chat-text-message-renderer>
          <span id="author-name">Ada</span>
          <span id="message">hello</span>
        </yt-live-chat-text-message-renderer>
        <yt-live-chat-paid-message-renderer>
          <div id="card">
            <div id="header" style="background-color: rgba(230,33,23,1)">
              <div id="author-name">Bob</div>
              <div id="purchase-amount">$5.00</div>
            </div>
          </div>
        </yt-live-chat-paid-message-renderer>
      </div>
    </yt-live-chat-item-list-renderer>
  </yt-live-chat-renderer>
</yt-live-chat-app>
</body></html>"#;

    #[tokio::test]
    async fn test_parse_feed_descends_into_containers() {
        let report = parse_feed(CHAT_APP, &SrcAttributeResolver::default()).await;

        assert_eq!(report.messages.len(), 2);
        let kinds: Vec<_> = report.messages.iter().map(Message::kind).collect();
        assert_eq!(kinds, vec![MessageKind::TextMessage, MessageKind::PaidMessage]);
        assert_eq!(
            report.messages[1].background_color(),
            Some("rgba(230,33,23,1)")
        );
    }

    #[tokio::test]
    async fn test_parse_feed_counts_outermost_unrecognized_renderers() {
        let report = parse_feed(CHAT_APP, &SrcAttributeResolver::default()).await;

        // containers holding entries are not skipped; leaf containers are,
        // without their own nested renderers
        assert_eq!(report.skipped_count(), 2);
        assert_eq!(report.skipped.get("yt-live-chat-header-renderer"), Some(&1));
        assert_eq!(report.skipped.get("yt-live-chat-ticker-renderer"), Some(&1));
        assert!(!report.skipped.contains_key("yt-live-chat-item-list-renderer"));
        assert!(!report.skipped.contains_key("yt-live-chat-renderer"));
    }

    #[tokio::test]
    async fn test_empty_document() {
        let report = parse_feed("", &SrcAttributeResolver::default()).await;
        assert!(report.messages.is_empty());
        assert_eq!(report.skipped_count(), 0);
        assert_eq!(report.to_json_lines().unwrap(), "");
        assert_eq!(report.to_json_pretty().unwrap(), "[]");
    }
}
