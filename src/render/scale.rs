//! Scaling decoded images onto the target pixel frame and flattening alpha.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use super::{Rgb, ScaleMode};

const FILTER: FilterType = FilterType::Lanczos3;

/// Opaque, scaled pixel buffer (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl PixelFrame {
    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Composite `image` over `matte`, then scale it to exactly
/// `width × height` pixels.
///
/// Alpha is flattened before resampling so the hidden color of transparent
/// pixels never bleeds into visible ones.
pub fn scale_to_frame(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mode: ScaleMode,
    matte: Rgb,
) -> PixelFrame {
    if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
        return PixelFrame::filled(width, height, matte);
    }

    let flat = flatten(image, matte);
    let scaled = match mode {
        ScaleMode::Resize => flat.resize_exact(width, height, FILTER),
        ScaleMode::Fill => flat.resize_to_fill(width, height, FILTER),
        ScaleMode::Fit => flat.resize(width, height, FILTER),
    }
    .to_rgb8();

    log::debug!(
        "Scaled {}x{} -> {}x{} ({:?}) into {}x{} frame",
        image.width(),
        image.height(),
        scaled.width(),
        scaled.height(),
        mode,
        width,
        height
    );

    // Fit leaves the scaled image smaller than the frame on one axis; center it.
    let off_x = width.saturating_sub(scaled.width()) / 2;
    let off_y = height.saturating_sub(scaled.height()) / 2;

    let mut frame = PixelFrame::filled(width, height, matte);
    for (x, y, px) in scaled.enumerate_pixels() {
        let (fx, fy) = (x + off_x, y + off_y);
        if fx < width && fy < height {
            let [r, g, b] = px.0;
            frame.pixels[fy as usize * width as usize + fx as usize] = Rgb::new(r, g, b);
        }
    }
    frame
}

/// Opaque copy of `image` with every pixel composited over `matte`.
fn flatten(image: &DynamicImage, matte: Rgb) -> DynamicImage {
    let rgba = image.to_rgba8();
    let flat = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let c = matte.under(rgba.get_pixel(x, y).0);
        image::Rgb([c.r, c.g, c.b])
    });
    DynamicImage::ImageRgb8(flat)
}
