//! Top-level error type for command dispatch.

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::matcher::NotFound;
use crate::render::RenderError;

/// Any failure that ends an invocation with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Usage: emojiterm [-l] [-a] [searchword]")]
    Usage,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
