//! Google News adapter
//!
//! Keyword search over the Google News RSS endpoint.

pub mod client;
pub mod parser;

pub use client::GoogleNewsClient;
