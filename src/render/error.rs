//! Error types for the rendering pipeline.

use std::path::PathBuf;

/// Errors that can occur while turning an image reference into terminal cells.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to fetch image '{url}': {message}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Transport error or HTTP status description
        message: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("Image not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("matte color : {value} is not a hex-color")]
    ColorParse { value: String },

    #[error("not a terminal")]
    NotATerminal,

    #[error("Failed to write to terminal: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to start render workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
