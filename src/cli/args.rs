//! CLI argument parsing with clap.

use clap::Parser;

use super::enums::{Dither, Scale};
use crate::render::{
    RenderConfig, RenderError, TerminalGeometry, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS,
    MAX_ROWS,
};

/// List and display GitHub emojis directly on the terminal
#[derive(Parser, Debug)]
#[command(name = "emojiterm")]
#[command(
    version,
    about = "list and display GitHub emojis directly on the terminal",
    long_about = None
)]
#[command(after_help = "EXAMPLES:
    emojiterm smile              # render the best match for \"smile\"
    emojiterm -l                 # list every emoji name
    emojiterm -l cat             # list names containing \"cat\"
    emojiterm -a heart           # render every match, one per Enter

Set GITHUB_TOKEN to authenticate catalog requests.")]
pub struct Args {
    /// Emoji name (or part of one) to search for
    pub search: Option<String>,

    /// List emoji names instead of rendering
    #[arg(short, long)]
    pub long: bool,

    /// Render every matching emoji, waiting for Enter between each
    #[arg(short, long)]
    pub all: bool,

    /// Width of the rendered image in terminal columns (max 1920)
    #[arg(
        long,
        default_value_t = DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u16).range(1..=MAX_COLUMNS as i64)
    )]
    pub width: u16,

    /// Height of the rendered image in terminal rows (max 540)
    #[arg(
        long,
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u16).range(1..=MAX_ROWS as i64)
    )]
    pub height: u16,

    /// Use the full terminal size instead of --width/--height
    #[arg(long)]
    pub fullscreen: bool,

    /// Dithering mode
    #[arg(long, default_value = "none")]
    pub dither: Dither,

    /// How the image aspect ratio maps to the cell grid
    #[arg(long, default_value = "resize")]
    pub scale: Scale,

    /// Background color for transparent regions (hex)
    #[arg(long, default_value = "#000000")]
    pub matte: String,

    /// Do not set background colors
    #[arg(long)]
    pub no_bg: bool,

    /// Do not clear the screen before rendering
    #[arg(long)]
    pub no_clear: bool,

    /// Render worker threads (default: available parallelism)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,
}

impl Args {
    /// Resolve the rendering options, validating the matte color.
    pub fn render_config(&self) -> Result<RenderConfig, RenderError> {
        let config = RenderConfig {
            dither: self.dither.into(),
            scale: self.scale.into(),
            no_background: self.no_bg,
            workers: self
                .workers
                .map(usize::from)
                .unwrap_or_else(crate::render::default_workers),
            ..RenderConfig::default()
        };
        config.with_matte_hex(&self.matte)
    }

    /// Resolve the target geometry, querying the terminal for --fullscreen.
    pub fn geometry(&self) -> TerminalGeometry {
        if self.fullscreen {
            TerminalGeometry::detect()
        } else {
            TerminalGeometry::new(self.width, self.height)
        }
    }

    /// Search term, empty when none was given.
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}
