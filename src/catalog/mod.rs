//! Emoji catalog: the name → image reference mapping and the client that
//! fetches it.

mod client;

pub use client::{CatalogClient, CatalogError, EmojiCatalog, DEFAULT_CATALOG_URL, GITHUB_TOKEN_ENV};
