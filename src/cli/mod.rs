//! Command-line interface definitions and handlers.
//!
//! This module contains argument parsing, option enums, and the list/render
//! command handlers.

mod args;
mod commands;
mod enums;

pub use args::Args;
pub use commands::{list_names, progress_label, render_all, render_one, run};
pub use enums::{Dither, Scale};
