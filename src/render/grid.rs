//! Cell grid types produced by the rasterizer.

use super::Rgb;

/// One terminal character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    /// `None` when the terminal's own background should show through.
    pub bg: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Rgb::BLACK,
            bg: Some(Rgb::BLACK),
        }
    }
}

/// Rasterized image ready for the terminal.
///
/// Cells are stored in row-major order; `cells.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Cell>,
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl CellGrid {
    /// Create a grid filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Create a grid from rows of cells.
    ///
    /// Returns `None` if any row's length differs from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            cells: rows.into_iter().flatten().collect(),
            width: u16::try_from(width).ok()?,
            height: u16::try_from(height).ok()?,
        })
    }

    /// Assemble a grid from row-major cells the caller has already sized.
    pub(super) fn from_parts(cells: Vec<Cell>, width: u16, height: u16) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.cells.chunks(self.width.max(1) as usize)
    }
}
