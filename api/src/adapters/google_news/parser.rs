//! RSS parsing for search results

use reqwest::Url;
use roxmltree::{Document, Node, ParsingOptions};

use crate::domain::entities::Headline;
use crate::error::ParseError;

/// Extract up to `limit` headlines from an RSS document, in document order.
///
/// Items without a non-empty `<title>` or without an absolute `<link>` URL
/// are skipped.
pub fn parse_headlines(xml: &str, limit: usize) -> Result<Vec<Headline>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let headlines = doc
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .filter_map(headline_from_item)
        .take(limit)
        .collect();

    Ok(headlines)
}

fn headline_from_item(item: Node<'_, '_>) -> Option<Headline> {
    let title = child_text(item, "title")?;
    let link = child_text(item, "link")?;

    if title.is_empty() || Url::parse(&link).is_err() {
        return None;
    }

    Some(Headline::new(title, link))
}

fn child_text(parent: Node<'_, '_>, name: &str) -> Option<String> {
    let child = parent.children().find(|node| node.has_tag_name(name))?;
    let text: String = child
        .descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect();
    Some(text.trim().to_string())
}
