//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod headline_service;
pub mod summary_service;

pub use headline_service::{HeadlineService, DEFAULT_HEADLINE_LIMIT};
pub use summary_service::SummaryService;
