use clap::{ArgAction, Parser, Subcommand};
use commands::{account, config, list, search, shell, stats};
use watchlist_models::{SortKey, StatusFilter};

mod commands;
mod context;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "animetrack")]
#[command(about = "Anime Tracker - keep your watch list, progress and ratings in one place")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show the watch list
    #[command(long_about = "Show the watch list, optionally filtered by a case-insensitive text query over titles, restricted to one status, and sorted by title, rating, year or progress.")]
    List {
        /// Text matched against titles
        #[arg(long, short = 's')]
        query: Option<String>,

        /// all, watching, completed, on-hold, dropped or plan-to-watch
        #[arg(long)]
        status: Option<StatusFilter>,

        /// title, rating, year or progress
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Search the anime catalog
    Search {
        query: String,
    },
    /// Profile statistics for the watch list
    Stats,
    /// Interactive dashboard (default)
    Shell,
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration and file locations
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let ctx = context::AppContext::load()?;

    logging::init_logging(cli.verbose, cli.quiet, &ctx.config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Login { email, password } => account::run_login(&ctx, email, password, &output),
        Commands::Register { username, email } => account::run_register(&ctx, username, email, &output),
        Commands::Logout => account::run_logout(&ctx, &output),
        Commands::Whoami => account::run_whoami(&ctx, &output),
        Commands::List { query, status, sort } => list::run_list(&ctx, query, status, sort, &output),
        Commands::Search { query } => search::run_search(&ctx, query, &output).await,
        Commands::Stats => stats::run_stats(&ctx, &output),
        Commands::Shell => shell::run_shell(&ctx, &output).await,
        Commands::Config { cmd } => config::run_config(&ctx, cmd, &output),
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Command failed");
        if let Some(core_err) = err.downcast_ref::<watchlist_core::Error>() {
            output.error(core_err.to_string());
            std::process::exit(core_err.exit_code());
        }
    }
    result
}
