//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod headline;

pub use headline::Headline;
