//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod chat;
pub mod news_feed;

pub use chat::{ChatClient, ChatMessage, ChatResponse};
pub use news_feed::NewsFeed;
