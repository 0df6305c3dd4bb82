// src/error.rs
use thiserror::Error;

/// Everything that can go wrong while fetching and reading a stats page.
///
/// None of these are fatal to a run: a failure on the main page yields an
/// empty roster, and a failure on a player's page skips that player only.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure reaching a page.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// An expected table/row/cell/element is absent or has the wrong shape.
    #[error("unexpected page layout: {context}")]
    PageLayout { context: &'static str },

    /// A field expected to be numeric holds something else.
    #[error("non-numeric value in {field}: {text:?}")]
    NonNumeric { field: &'static str, text: String },
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Fetch(e.to_string())
    }
}
