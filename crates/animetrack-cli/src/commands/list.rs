use color_eyre::eyre::Result;
use serde_json::json;
use watchlist_models::{SortKey, StatusFilter};
use crate::context::AppContext;
use crate::output::Output;
use crate::render::entries_table;

pub fn run_list(
    ctx: &AppContext,
    query: Option<String>,
    status: Option<StatusFilter>,
    sort: Option<SortKey>,
    output: &Output,
) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    let view = dashboard.view_mut();
    if let Some(query) = query {
        view.set_query(query);
    }
    if let Some(status) = status {
        view.set_status_filter(status);
    }
    if let Some(sort) = sort {
        view.set_sort_key(sort);
    }

    let entries = dashboard.visible_entries()?;
    tracing::debug!(operation = "list", visible = entries.len(), "Rendering list");

    if entries.is_empty() {
        output.info("No anime found matching your criteria.");
    } else {
        output.block(entries_table(&entries));
    }
    output.json(&json!({ "type": "entries", "entries": entries }));
    Ok(())
}
