// File: src/error.rs
use thiserror::Error;

/// Everything that can go wrong between raw input and rendered output.
///
/// `Unrecognized` ends a conjugation request. `FormNotFound` is only ever
/// logged by the paradigm assembler, which leaves the cell empty and moves on.
#[derive(Debug, Error)]
pub enum ConjugatorError {
    #[error("verb not recognized: {0}")]
    Unrecognized(String),

    #[error("could not find forms in dictionary for key {0}")]
    FormNotFound(String),

    #[error("unterminated escape sequence opened at character {position}")]
    MalformedEscape { position: usize },

    #[error("input exceeds {limit} characters")]
    InputTooLong { limit: usize },

    #[error("unknown orthography: {0}")]
    UnknownOrthography(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("locale {language}: {field} has {found} entries, expected {expected}")]
    InvalidLocale {
        language: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConjugatorError>;
