//! Shared error types for the services crate.

use thiserror::Error;

use boarder_core::model::{CatalogError, LanguageError};

/// Errors emitted by `TutorialService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorialError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Language(#[from] LanguageError),
}
