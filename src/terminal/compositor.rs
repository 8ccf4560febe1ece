//! Drawing cell grids to the terminal with overlay text beside them.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveRight, MoveTo, MoveUp, RestorePosition, SavePosition};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;

use crate::render::{CellGrid, RenderError, Rgb, TerminalGeometry};

/// Writes cell grids as colored glyphs.
///
/// Overlay text is positioned relative to the cursor with save/restore, so
/// output that follows a draw continues below the image.
pub struct Compositor<W: Write> {
    out: W,
    interactive: bool,
    clear: bool,
}

impl Compositor<Stdout> {
    /// Compositor over stdout; interactivity is detected from the tty.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_tty();
        log::debug!("stdout is {}a terminal", if interactive { "" } else { "not " });
        Self::new(out, interactive)
    }
}

impl<W: Write> Compositor<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            clear: true,
        }
    }

    /// Whether to clear the screen before each draw (interactive only).
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Access the underlying writer.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw `grid`, then place `overlay` to the right of it.
    ///
    /// # Errors
    ///
    /// On a non-interactive stream the grid is still written, then
    /// `RenderError::NotATerminal` is returned because cursor positioning
    /// has no meaning there.
    pub fn draw(
        &mut self,
        grid: &CellGrid,
        overlay: &str,
        geometry: TerminalGeometry,
    ) -> Result<(), RenderError> {
        if self.interactive && self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        self.write_grid(grid)?;

        if !self.interactive {
            self.out.flush()?;
            return Err(RenderError::NotATerminal);
        }

        let (lines_up, cols_right) = geometry.overlay_offset();
        queue!(
            self.out,
            Print("\n"),
            SavePosition,
            MoveUp(lines_up),
            MoveRight(cols_right),
            Print(overlay),
            RestorePosition
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Emit every row, setting colors only when they change within a row.
    fn write_grid(&mut self, grid: &CellGrid) -> io::Result<()> {
        for row in grid.rows() {
            let mut fg: Option<Rgb> = None;
            // Outer None: nothing emitted yet in this row
            let mut bg: Option<Option<Rgb>> = None;

            for cell in row {
                if fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(cell.fg.into()))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    let color = cell.bg.map_or(Color::Reset, Color::from);
                    // Nothing to reset at the start of a row
                    if bg.is_some() || cell.bg.is_some() {
                        queue!(self.out, SetBackgroundColor(color))?;
                    }
                    bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.glyph))?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }
        Ok(())
    }
}
