//! Headline domain entity
//!
//! A single news item extracted from a search feed.

use serde::Serialize;

/// A (title, link) pair taken from a feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

impl Headline {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}
