//! Terminal image rasterization.
//!
//! Turns an image reference (URL or path) into a grid of colored cells:
//!
//! 1. **Load** - download or read the bytes and decode them
//! 2. **Scale** - resize onto the target pixel frame (resize, fill or fit)
//! 3. **Matte** - composite every pixel over an opaque matte color
//! 4. **Dither** - optional Floyd-Steinberg error diffusion
//! 5. **Quantize** - reduce each pixel block to one two-tone cell
//!
//! A cell covers 2x1 pixels without dithering and 8x4 pixels with it.

mod color;
mod config;
mod dither;
mod error;
mod grid;
mod quantize;
mod rasterizer;
mod scale;
mod source;

pub use color::Rgb;
pub use config::{
    default_workers, DitherMode, RenderConfig, ScaleMode, TerminalGeometry, DEFAULT_COLUMNS,
    DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS,
};
pub use dither::{floyd_steinberg, DITHER_LEVELS};
pub use error::RenderError;
pub use grid::{Cell, CellGrid};
pub use quantize::{quantize, DENSITY_CHARS, FULL_BLOCK, QUADRANTS, UPPER_HALF};
pub use rasterizer::{decode, rasterize_image, Rasterizer};
pub use scale::{scale_to_frame, PixelFrame};
pub use source::ImageSource;
