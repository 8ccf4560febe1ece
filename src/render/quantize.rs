//! Block quantization: reducing pixel blocks to two-tone terminal cells.
//!
//! Without dithering every cell covers a 2x1 block and renders as an upper
//! half block (top pixel as foreground, bottom pixel as background). With
//! dithering every cell covers an 8x4 block that is split by luminance into a
//! bright and a dark group; the glyph approximates where the bright pixels
//! are (quadrant blocks) or how many there are (density characters).

use rayon::prelude::*;

use super::scale::PixelFrame;
use super::{Cell, CellGrid, DitherMode, RenderConfig, RenderError, Rgb, TerminalGeometry};

/// Upper half block: top half drawn in the foreground color.
pub const UPPER_HALF: char = '▀';

/// Full block: the whole cell drawn in the foreground color.
pub const FULL_BLOCK: char = '█';

/// Quadrant glyphs indexed by bitmask TL=1, TR=2, BL=4, BR=8.
#[rustfmt::skip]
pub const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀',
    '▖', '▌', '▞', '▛',
    '▗', '▚', '▐', '▜',
    '▄', '▙', '▟', '█',
];

/// Density ramp for character mode, sparsest first.
pub const DENSITY_CHARS: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Reduce a scaled frame to a `geometry`-sized cell grid.
///
/// `frame` must be exactly `config.target_pixels(geometry)` in size.
pub fn quantize(
    frame: &PixelFrame,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<CellGrid, RenderError> {
    let (block_rows, block_cols) = config.dither.block_size();
    debug_assert_eq!(
        (frame.height, frame.width),
        config.target_pixels(geometry),
        "frame does not match target geometry"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.max(1))
        .build()?;

    let columns = geometry.columns as u32;
    let cells: Vec<Cell> = pool.install(|| {
        (0..geometry.rows as u32)
            .into_par_iter()
            .flat_map_iter(|cy| {
                (0..columns).map(move |cx| {
                    let block = Block {
                        frame,
                        x0: cx * block_cols,
                        y0: cy * block_rows,
                        width: block_cols,
                        height: block_rows,
                    };
                    reduce_block(&block, config)
                })
            })
            .collect()
    });

    Ok(CellGrid::from_parts(cells, geometry.columns, geometry.rows))
}

/// A rectangular window into a frame.
struct Block<'a> {
    frame: &'a PixelFrame,
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
}

impl Block<'_> {
    fn pixel(&self, dx: u32, dy: u32) -> Rgb {
        self.frame.get(self.x0 + dx, self.y0 + dy)
    }

    fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        (0..self.height)
            .flat_map(move |dy| (0..self.width).map(move |dx| (dx, dy, self.pixel(dx, dy))))
    }
}

fn reduce_block(block: &Block<'_>, config: &RenderConfig) -> Cell {
    let cell = match config.dither {
        DitherMode::None => half_block(block.pixel(0, 0), block.pixel(0, 1), config.no_background),
        DitherMode::Blocks => quadrant_cell(block),
        DitherMode::Chars => density_cell(block),
    };
    if config.no_background {
        Cell { bg: None, ..cell }
    } else {
        cell
    }
}

fn half_block(top: Rgb, bottom: Rgb, no_background: bool) -> Cell {
    if no_background {
        // Without a background color only one color survives per cell
        let fg = Rgb::mean([top, bottom]).unwrap_or(top);
        return Cell {
            glyph: FULL_BLOCK,
            fg,
            bg: None,
        };
    }
    Cell {
        glyph: UPPER_HALF,
        fg: top,
        bg: Some(bottom),
    }
}

/// Single-color cell for blocks with no luminance split.
fn solid_cell(block: &Block<'_>) -> Cell {
    let color = Rgb::mean(block.pixels().map(|(_, _, p)| p)).unwrap_or_default();
    Cell {
        glyph: FULL_BLOCK,
        fg: color,
        bg: Some(color),
    }
}

/// Luminance threshold splitting a block into bright and dark pixels.
fn mean_luminance(block: &Block<'_>) -> u32 {
    let (sum, n) = block
        .pixels()
        .fold((0u32, 0u32), |(s, n), (_, _, p)| (s + p.luminance() as u32, n + 1));
    if n == 0 {
        0
    } else {
        sum / n
    }
}

fn quadrant_cell(block: &Block<'_>) -> Cell {
    let threshold = mean_luminance(block);
    let half_w = (block.width / 2).max(1);
    let half_h = (block.height / 2).max(1);
    let quadrant = |dx: u32, dy: u32| {
        let col = (dx >= half_w) as usize;
        let row = (dy >= half_h) as usize;
        row * 2 + col
    };

    let mut bright = [0u32; 4];
    let mut total = [0u32; 4];
    for (dx, dy, p) in block.pixels() {
        let q = quadrant(dx, dy);
        total[q] += 1;
        if p.luminance() as u32 > threshold {
            bright[q] += 1;
        }
    }

    let mask = (0..4).fold(0usize, |mask, q| {
        if total[q] > 0 && bright[q] * 2 >= total[q] {
            mask | (1 << q)
        } else {
            mask
        }
    });
    if mask == 0 || mask == 0b1111 {
        return solid_cell(block);
    }

    let lit = |dx, dy| mask & (1 << quadrant(dx, dy)) != 0;
    let fg = Rgb::mean(block.pixels().filter(|&(dx, dy, _)| lit(dx, dy)).map(|(_, _, p)| p));
    let bg = Rgb::mean(block.pixels().filter(|&(dx, dy, _)| !lit(dx, dy)).map(|(_, _, p)| p));
    match (fg, bg) {
        (Some(fg), Some(bg)) => Cell {
            glyph: QUADRANTS[mask],
            fg,
            bg: Some(bg),
        },
        _ => solid_cell(block),
    }
}

fn density_cell(block: &Block<'_>) -> Cell {
    let threshold = mean_luminance(block);
    let is_bright = |p: Rgb| p.luminance() as u32 > threshold;

    let total = (block.width * block.height) as usize;
    let bright_count = block.pixels().filter(|&(_, _, p)| is_bright(p)).count();
    if bright_count == 0 || total == 0 {
        return solid_cell(block);
    }

    let fg = Rgb::mean(block.pixels().map(|(_, _, p)| p).filter(|&p| is_bright(p)));
    let bg = Rgb::mean(block.pixels().map(|(_, _, p)| p).filter(|&p| !is_bright(p)));
    let idx = (bright_count * (DENSITY_CHARS.len() - 1) + total / 2) / total;
    match (fg, bg) {
        (Some(fg), Some(bg)) => Cell {
            glyph: DENSITY_CHARS[idx.max(1)],
            fg,
            bg: Some(bg),
        },
        _ => solid_cell(block),
    }
}
