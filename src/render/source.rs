//! Loading image bytes from a URL or a local path.

use std::path::{Path, PathBuf};

use super::RenderError;

/// Where an image reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
}

impl ImageSource {
    /// Classify an image reference: `http://` and `https://` are URLs,
    /// everything else is a filesystem path.
    pub fn parse(image_ref: &str) -> Self {
        if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
            ImageSource::Url(image_ref.to_string())
        } else {
            ImageSource::File(PathBuf::from(image_ref))
        }
    }

    /// Read the raw bytes.
    pub async fn read(&self, http: &reqwest::Client) -> Result<Vec<u8>, RenderError> {
        match self {
            ImageSource::Url(url) => fetch_url(http, url).await,
            ImageSource::File(path) => read_file(path).await,
        }
    }
}

async fn fetch_url(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, RenderError> {
    log::debug!("Fetching image from: {}", url);
    let fetch_err = |message: String| RenderError::Fetch {
        url: url.to_string(),
        message,
    };

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_err(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err(format!("HTTP status {}", status)));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_err(e.to_string()))?;
    Ok(bytes.to_vec())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, RenderError> {
    log::debug!("Reading image from: {}", path.display());
    tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RenderError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            RenderError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
