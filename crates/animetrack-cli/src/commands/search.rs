use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::io::IsTerminal;
use std::time::Duration;
use watchlist_catalog::{CatalogSource, SearchCoordinator, SearchOutcome};
use watchlist_core::search_catalog;
use crate::context::AppContext;
use crate::output::Output;
use crate::render::candidates_table;

/// Spinner shown while a catalog lookup is in flight (hidden when not a terminal)
fn search_spinner(query: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message(format!("Searching for \"{}\"...", query));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run one search with the loading spinner
pub async fn search_with_spinner<S: CatalogSource>(
    coordinator: &SearchCoordinator<S>,
    query: &str,
) -> Result<SearchOutcome> {
    let spinner = search_spinner(query);
    let outcome = search_catalog(coordinator, query).await;
    spinner.finish_and_clear();
    Ok(outcome?)
}

pub async fn run_search(ctx: &AppContext, query: String, output: &Output) -> Result<()> {
    // Searching is part of the dashboard, so it needs a session too
    ctx.dashboard()?.require_session()?;

    let coordinator = ctx.catalog();
    let outcome = search_with_spinner(&coordinator, &query).await?;

    match &outcome {
        SearchOutcome::Skipped => output.warn("Enter a search term"),
        SearchOutcome::Stale => output.warn("Search was superseded by a newer one"),
        SearchOutcome::Completed(results) if results.is_empty() => {
            output.info(format!("No anime found for \"{}\"", query));
        }
        SearchOutcome::Completed(results) => output.block(candidates_table(results)),
    }
    output.json(&json!({ "type": "candidates", "query": query, "candidates": outcome.candidates() }));
    Ok(())
}
