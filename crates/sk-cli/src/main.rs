//! songkoffi - Sống KOFFI client CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo administrator and open the dashboard
//! songkoffi demo-login admin
//! songkoffi admin --pretty
//!
//! # Switch to English and browse cold brews
//! songkoffi lang set en
//! songkoffi menu --category coldbrew
//! ```

use sk_cli::{App, Cli, CliResult, logger};
use sk_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
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

async fn run(cli: Cli) -> CliResult<Value> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(|file| config_dir.join(file)),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config, &config_dir)?;
    app.start();
    app.run(cli.command).await
}
