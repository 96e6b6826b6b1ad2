//! nutri - NutriChef nutrition assistant CLI
//!
//! Each invocation restores the saved session, performs one action against
//! the backend and prints the resulting state as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! nutri login --username ada --password secret
//!
//! # Edit the profile and push it to the backend
//! nutri profile set --weight 62 --goal "Lose Weight" --sync
//!
//! # Ask for a recipe
//! nutri recipe --ingredients "eggs, spinach" --pretty
//! ```

use nutri_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(outcome) => {
            let output = if pretty {
                serde_json::to_string_pretty(&outcome.value)
            } else {
                serde_json::to_string(&outcome.value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    if outcome.failed {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
