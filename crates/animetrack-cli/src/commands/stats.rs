use color_eyre::eyre::Result;
use serde_json::json;
use crate::context::AppContext;
use crate::output::Output;
use crate::render::stats_table;

pub fn run_stats(ctx: &AppContext, output: &Output) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let stats = dashboard.stats()?;
    output.block(stats_table(&stats));
    output.json(&json!({ "type": "stats", "stats": stats }));
    Ok(())
}
