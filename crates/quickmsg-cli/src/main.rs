use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod app;
mod commands;
mod logging;
mod terminal_sink;

#[derive(Parser)]
#[command(name = "quick-message")]
#[command(about = "Store, recall and remove named text templates", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Name of the acting user (defaults to $USER)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Room the command is invoked in
    #[arg(long, global = true, default_value = "general")]
    room: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single /quick-message invocation, e.g. `exec create hi '"Hello!"'`
    Exec {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Start an interactive prompt
    Repl,
    /// Check that both storage indexes agree
    Verify {
        /// Delete global index entries whose message is gone
        #[arg(long)]
        repair: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = app::load_config(cli.config.as_deref())?;
    logging::init(&config.logging.level);

    let app = app::App::bootstrap(config, cli.user, cli.room)?;

    match cli.command {
        Commands::Exec { tokens } => commands::exec::run(&app, &tokens).await?,
        Commands::Repl => commands::repl::run(&app).await?,
        Commands::Verify { repair } => commands::verify::run(&app, repair).await?,
    }

    Ok(())
}
