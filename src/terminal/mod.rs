//! Terminal output: the compositor and keypress pacing between renders.

mod compositor;

use std::io::{self, BufRead};

pub use compositor::Compositor;

/// Block until a line (Enter) is read from `input`.
///
/// Returns `Ok(false)` when input is exhausted.
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    Ok(input.read_line(&mut line)? > 0)
}
