//! Render configuration: target geometry, scaling, dithering and matte color.

use super::{RenderError, Rgb};

/// Default number of cell columns used for an emoji.
pub const DEFAULT_COLUMNS: u16 = 32;

/// Default number of cell rows used for an emoji.
pub const DEFAULT_ROWS: u16 = 16;

/// Largest accepted column count; a dithered frame is then at most 7680 pixels wide.
pub const MAX_COLUMNS: u16 = 1920;

/// Largest accepted row count; a dithered frame is then at most 4320 pixels tall.
pub const MAX_ROWS: u16 = 540;

/// Fallback size when the terminal cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Size of the cell grid to render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl TerminalGeometry {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Query the attached terminal, leaving one row free for the prompt.
    pub fn detect() -> Self {
        let (columns, rows) = crossterm::terminal::size().unwrap_or_else(|e| {
            log::debug!("Could not query terminal size ({}), using {:?}", e, FALLBACK_SIZE);
            FALLBACK_SIZE
        });
        Self {
            columns: columns.clamp(1, MAX_COLUMNS),
            rows: rows.saturating_sub(1).clamp(1, MAX_ROWS),
        }
    }

    /// Cursor offset (lines up, columns right) that places overlay text to
    /// the right of a grid of this size, measured from the line below it.
    pub fn overlay_offset(&self) -> (u16, u16) {
        (self.rows / 2 + 2, self.columns.saturating_add(5))
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// How pixels are reduced to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Half blocks, one pixel per half cell, no error diffusion.
    #[default]
    None,
    /// Error diffusion, quadrant block glyphs.
    Blocks,
    /// Error diffusion, density-ramp characters.
    Chars,
}

impl DitherMode {
    /// Source pixels covered by one cell as `(rows, columns)`.
    pub fn block_size(self) -> (u32, u32) {
        match self {
            DitherMode::None => (2, 1),
            DitherMode::Blocks | DitherMode::Chars => (8, 4),
        }
    }

    pub fn is_dithered(self) -> bool {
        self != DitherMode::None
    }
}

/// How the source aspect ratio maps onto the target pixel frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Stretch to the exact target size.
    #[default]
    Resize,
    /// Keep aspect, cover the frame and crop the overflow.
    Fill,
    /// Keep aspect, fit inside the frame and pad with the matte color.
    Fit,
}

/// Fully resolved rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub dither: DitherMode,
    pub scale: ScaleMode,
    pub matte: Rgb,
    pub no_background: bool,
    /// Upper bound on threads used for block quantization.
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dither: DitherMode::default(),
            scale: ScaleMode::default(),
            matte: Rgb::BLACK,
            no_background: false,
            workers: default_workers(),
        }
    }
}

impl RenderConfig {
    /// Build a config from a hex matte color, validating it up front.
    pub fn with_matte_hex(mut self, matte: &str) -> Result<Self, RenderError> {
        self.matte = Rgb::from_hex(matte)?;
        Ok(self)
    }

    /// Target pixel dimensions `(rows, columns)` for a geometry.
    pub fn target_pixels(&self, geometry: TerminalGeometry) -> (u32, u32) {
        let (block_rows, block_cols) = self.dither.block_size();
        (
            block_rows * geometry.rows as u32,
            block_cols * geometry.columns as u32,
        )
    }
}

/// Available hardware parallelism, or 1 if unknown.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
