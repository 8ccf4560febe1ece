//! Command handlers for listing and rendering emojis.

use std::io::{BufRead, Write};

use super::args::Args;
use crate::catalog::{CatalogClient, EmojiCatalog};
use crate::config::Settings;
use crate::error::Error;
use crate::matcher::{self, Match, MatchMode};
use crate::render::{Rasterizer, RenderConfig, TerminalGeometry};
use crate::terminal::{self, Compositor};

/// Run one invocation: fetch the catalog, then list or render.
pub async fn run(args: &Args, settings: &Settings) -> Result<(), Error> {
    // Listing needs no rendering options; rendering needs them resolved
    // before anything is fetched. A single render needs a non-empty term.
    if !args.long && !args.all && args.search_term().is_empty() {
        return Err(Error::Usage);
    }
    let render = if args.long {
        None
    } else {
        Some((args.render_config()?, args.geometry()))
    };

    let client =
        CatalogClient::with_base_url(settings.catalog_url.clone(), settings.token.clone())?;
    let catalog = client.fetch_catalog().await?;

    let Some((config, geometry)) = render else {
        let stdout = std::io::stdout();
        let color = crossterm::tty::IsTty::is_tty(&stdout);
        return list_names(&catalog, args.search_term(), color, &mut stdout.lock());
    };

    let rasterizer = Rasterizer::with_client(client.http_client().clone());
    let mut compositor = Compositor::stdout().with_clear(!args.no_clear);

    if args.all {
        let matches = matcher::resolve_with(
            &catalog,
            args.search_term(),
            MatchMode::AllSubstringMatches,
        )?;
        let stdin = std::io::stdin();
        render_all(
            &rasterizer,
            &mut compositor,
            &matches,
            geometry,
            &config,
            &mut stdin.lock(),
        )
        .await
    } else {
        let found = matcher::resolve(&catalog, args.search_term())?;
        render_one(&rasterizer, &mut compositor, &found, geometry, &config).await
    }
}

/// Print names containing `term` (all names for an empty term), sorted.
pub fn list_names<W: Write>(
    catalog: &EmojiCatalog,
    term: &str,
    color: bool,
    out: &mut W,
) -> Result<(), Error> {
    for name in matcher::matching_names(catalog, term)? {
        writeln!(out, "{}", matcher::highlight(name, term, color))?;
    }
    out.flush()?;
    Ok(())
}

/// Rasterize one match and draw it with its label.
pub async fn render_one<W: Write>(
    rasterizer: &Rasterizer,
    compositor: &mut Compositor<W>,
    found: &Match,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<(), Error> {
    log::info!("Rendering {} from {}", found.name, found.image_ref);
    let grid = rasterizer.rasterize(&found.image_ref, geometry, config).await?;
    compositor.draw(&grid, &found.label(), geometry)?;
    Ok(())
}

/// Render every match in order, waiting for Enter after each one.
pub async fn render_all<W: Write, R: BufRead>(
    rasterizer: &Rasterizer,
    compositor: &mut Compositor<W>,
    matches: &[Match],
    geometry: TerminalGeometry,
    config: &RenderConfig,
    input: &mut R,
) -> Result<(), Error> {
    let total = matches.len();
    for (i, found) in matches.iter().enumerate() {
        render_one(rasterizer, compositor, found, geometry, config).await?;
        writeln!(compositor.writer(), "{}", progress_label(i + 1, total))?;
        compositor.writer().flush()?;
        if !terminal::wait_for_enter(input)? {
            log::debug!("Input closed after {} of {}", i + 1, total);
            break;
        }
    }
    Ok(())
}

/// `[ 3 of 12] Press Enter...`, padded to the width of `total`.
pub fn progress_label(counter: usize, total: usize) -> String {
    let digits = total.max(1).to_string().len();
    format!(
        "[{:>w$} of {:>w$}] Press Enter...",
        counter,
        total,
        w = digits
    )
}
