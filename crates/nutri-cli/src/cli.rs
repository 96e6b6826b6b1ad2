use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "nutri")]
#[command(about = "NutriChef nutrition assistant CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and NUTRI_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
