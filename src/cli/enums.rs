//! CLI enum types for dithering and scaling options.

use clap::ValueEnum;

use crate::render::{DitherMode, ScaleMode};

/// Dithering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dither {
    /// Half blocks, no error diffusion
    #[default]
    None,
    /// Error diffusion with quadrant block glyphs
    Blocks,
    /// Error diffusion with density characters
    Chars,
}

impl From<Dither> for DitherMode {
    fn from(d: Dither) -> Self {
        match d {
            Dither::None => DitherMode::None,
            Dither::Blocks => DitherMode::Blocks,
            Dither::Chars => DitherMode::Chars,
        }
    }
}

/// Scale mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scale {
    /// Stretch to the exact size
    #[default]
    Resize,
    /// Keep aspect ratio and crop to fill
    Fill,
    /// Keep aspect ratio and pad with the matte color
    Fit,
}

impl From<Scale> for ScaleMode {
    fn from(s: Scale) -> Self {
        match s {
            Scale::Resize => ScaleMode::Resize,
            Scale::Fill => ScaleMode::Fill,
            Scale::Fit => ScaleMode::Fit,
        }
    }
}
