//! Resolving search terms against the emoji catalog.
//!
//! Single-match resolution tries, in order: an exact name, the first name
//! starting with the term, the first name containing the term. "First" is
//! lexicographic because the catalog iterates in name order.

use crossterm::style::Stylize;

use crate::catalog::EmojiCatalog;

/// A resolved search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub name: String,
    pub image_ref: String,
}

impl Match {
    fn new(name: &str, image_ref: &str) -> Self {
        Self {
            name: name.to_string(),
            image_ref: image_ref.to_string(),
        }
    }

    /// Label shown next to a rendered emoji, e.g. `:smile:`.
    pub fn label(&self) -> String {
        format!(":{}:", self.name)
    }
}

/// How a search term is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// One result: exact, else first prefix, else first substring match.
    ExactThenPrefixThenSubstring,
    /// Every name containing the term, sorted. An empty term matches all.
    AllSubstringMatches,
}

/// No catalog entry matched the search term.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Not found: {term}")]
pub struct NotFound {
    pub term: String,
}

impl NotFound {
    fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
        }
    }
}

/// Resolve `term` under `mode`.
///
/// Always returns at least one match on success.
pub fn resolve_with(
    catalog: &EmojiCatalog,
    term: &str,
    mode: MatchMode,
) -> Result<Vec<Match>, NotFound> {
    match mode {
        MatchMode::ExactThenPrefixThenSubstring => resolve(catalog, term).map(|m| vec![m]),
        MatchMode::AllSubstringMatches => {
            let names = matching_names(catalog, term)?;
            Ok(names
                .into_iter()
                .filter_map(|name| catalog.get(name).map(|r| Match::new(name, r)))
                .collect())
        }
    }
}

/// Resolve `term` to a single emoji by exact, prefix, then substring match.
///
/// An empty term names nothing and is never resolved.
pub fn resolve(catalog: &EmojiCatalog, term: &str) -> Result<Match, NotFound> {
    if term.is_empty() {
        return Err(NotFound::new(term));
    }

    if let Some(image_ref) = catalog.get(term) {
        log::debug!("Exact match for '{}'", term);
        return Ok(Match::new(term, image_ref));
    }

    let found = catalog
        .iter()
        .find(|(name, _)| name.starts_with(term))
        .or_else(|| catalog.iter().find(|(name, _)| name.contains(term)));

    match found {
        Some((name, image_ref)) => {
            log::debug!("'{}' resolved to '{}'", term, name);
            Ok(Match::new(name, image_ref))
        }
        None => Err(NotFound::new(term)),
    }
}

/// Every name containing `term`, sorted lexicographically.
///
/// An empty term selects every name. An empty result is an error, except
/// for an empty term on an empty catalog.
pub fn matching_names<'a>(
    catalog: &'a EmojiCatalog,
    term: &str,
) -> Result<Vec<&'a str>, NotFound> {
    let names: Vec<&str> = catalog.names().filter(|name| name.contains(term)).collect();
    if names.is_empty() && !term.is_empty() {
        return Err(NotFound::new(term));
    }
    Ok(names)
}

/// Mark every occurrence of `term` in `name` in red.
///
/// With `color` off, or an empty term, the name is returned unchanged.
pub fn highlight(name: &str, term: &str, color: bool) -> String {
    if !color || term.is_empty() {
        return name.to_string();
    }
    name.split(term)
        .collect::<Vec<_>>()
        .join(&term.red().to_string())
}
