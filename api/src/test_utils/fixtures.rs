//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Headline;

/// Create a test headline with a predictable title and link
pub fn test_headline(n: usize) -> Headline {
    Headline {
        title: format!("Headline {}", n),
        link: format!("https://news.example/articles/{}", n),
    }
}

/// Create `count` numbered test headlines
pub fn test_headlines(count: usize) -> Vec<Headline> {
    (1..=count).map(test_headline).collect()
}
