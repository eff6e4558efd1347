use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::quiz::QuizError;
use crate::storage::StoreError;

/// Any error the crate can return, for callers that do not care which
/// component raised it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
