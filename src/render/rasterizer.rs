//! Image reference → cell grid.

use std::time::Duration;

use image::DynamicImage;

use super::dither::floyd_steinberg;
use super::quantize::quantize;
use super::scale::scale_to_frame;
use super::source::ImageSource;
use super::{CellGrid, RenderConfig, RenderError, TerminalGeometry};

/// Default timeout for image downloads (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches, decodes and rasterizes images.
pub struct Rasterizer {
    http_client: reqwest::Client,
}

impl Rasterizer {
    pub fn new() -> Result<Self, RenderError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(RenderError::HttpClient)?;
        Ok(Self::with_client(http_client))
    }

    /// Use an existing HTTP client (shares its connection pool).
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Load the image behind `image_ref` and rasterize it.
    ///
    /// # Errors
    ///
    /// `RenderError::Fetch` when a URL cannot be downloaded,
    /// `RenderError::NotFound` when a local path does not exist,
    /// `RenderError::Decode` when the bytes are not a supported image.
    pub async fn rasterize(
        &self,
        image_ref: &str,
        geometry: TerminalGeometry,
        config: &RenderConfig,
    ) -> Result<CellGrid, RenderError> {
        let bytes = ImageSource::parse(image_ref)
            .read(&self.http_client)
            .await?;
        let image = decode(&bytes)?;
        rasterize_image(&image, geometry, config)
    }
}

/// Decode raw image bytes (format is sniffed from the content).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, RenderError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Rasterize an already decoded image.
///
/// Deterministic: the same image, geometry and config always produce the
/// same grid regardless of `config.workers`.
pub fn rasterize_image(
    image: &DynamicImage,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<CellGrid, RenderError> {
    let (target_rows, target_cols) = config.target_pixels(geometry);
    log::debug!(
        "Rasterizing into {}x{} cells ({}x{} pixels, dither {:?}, {} workers)",
        geometry.columns,
        geometry.rows,
        target_cols,
        target_rows,
        config.dither,
        config.workers
    );

    let frame = scale_to_frame(image, target_cols, target_rows, config.scale, config.matte);
    let frame = if config.dither.is_dithered() {
        floyd_steinberg(&frame)
    } else {
        frame
    };
    quantize(&frame, geometry, config)
}
