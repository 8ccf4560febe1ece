//! emojiterm library crate.
//!
//! Fetches the GitHub emoji catalog, resolves names against it and renders
//! emoji images in the terminal as colored block characters.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod render;
pub mod terminal;

pub use error::Error;
