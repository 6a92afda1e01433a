// src/error.rs
use thiserror::Error;

/// Failures that abort a run before a record is produced.
/// Missing page fields never end up here; each extractor degrades
/// to its documented default instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("not a D&D Beyond character sheet: {0}")]
    WrongPage(String),

    #[error("no character id in page url: {0}")]
    MissingCharacterId(String),

    #[error("no page url given and none found in the document (use --url)")]
    NoPageUrl,

    #[error("invalid page url: {0}")]
    BadUrl(#[from] url::ParseError),
}
