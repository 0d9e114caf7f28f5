use color_eyre::eyre::{eyre, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{modifiers, Attribute, Cell, Table};
use serde_json::json;
use watchlist_config::Config;
use crate::commands::prompts::prompt_yes_no;
use crate::context::AppContext;
use crate::output::Output;

pub fn run_config(ctx: &AppContext, cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(ctx, output),
        crate::ConfigCommands::Init { force } => init_config(ctx, force, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();

    if output.is_human() {
        let mut paths_table = Table::new();
        paths_table
            .load_preset(UTF8_FULL)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .set_header(vec![Cell::new("Location").add_attribute(Attribute::Bold), Cell::new("Path")]);
        let status = if config_file.exists() { "" } else { " (not created, using defaults)" };
        paths_table.add_row(vec![
            Cell::new("Config File"),
            Cell::new(format!("{}{}", config_file.display(), status)),
        ]);
        paths_table.add_row(vec![
            Cell::new("Session File"),
            Cell::new(ctx.paths.session_file().display()),
        ]);
        paths_table.add_row(vec![Cell::new("Log File"), Cell::new(ctx.paths.log_file().display())]);
        output.block(paths_table);

        let rendered = toml::to_string_pretty(&ctx.config)
            .map_err(|e| eyre!("Failed to render configuration: {}", e))?;
        output.block(rendered);
    }

    output.json(&json!({
        "type": "config",
        "config_file": config_file,
        "session_file": ctx.paths.session_file(),
        "config": ctx.config,
    }));
    Ok(())
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();

    if config_file.exists() && !force {
        let overwrite = output.is_human()
            && prompt_yes_no(
                &format!("{} already exists. Overwrite with defaults?", config_file.display()),
                false,
            )?;
        if !overwrite {
            output.info("Keeping existing configuration");
            return Ok(());
        }
    }

    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("{:#}", e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
