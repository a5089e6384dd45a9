// dynamojo - DynamoDB table dump tool
// Copyright (c) 2025 dynamojo Contributors
// Licensed under the MIT License

use clap::Parser;
use dynamojo::adapters::dynamodb::DynamoDbStore;
use dynamojo::adapters::prompt::TerminalPrompter;
use dynamojo::cli::commands::interactive::run_menu;
use dynamojo::cli::{prepare_exporter, Cli, Commands};
use dynamojo::config::{load_config, load_config_or_default, DynamojoConfig, DEFAULT_CONFIG_PATH};
use dynamojo::domain::DumpError;
use dynamojo::log_error_with_context;
use dynamojo::logging::init_logging;
use std::io;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = run(&cli).await;

    process::exit(exit_code);
}

/// Runs the tool and returns the process exit code
///
/// The logging guard lives in this frame so file logs are flushed before
/// `process::exit`.
async fn run(cli: &Cli) -> i32 {
    let config = match &cli.config {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.operator_message());
            return 1;
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(config.application.log_level.as_str());
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return 1;
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dynamojo starting");

    match execute_command(cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            let message = match e.downcast_ref::<DumpError>() {
                Some(err) => {
                    log_error_with_context!(err, "Command execution failed");
                    err.operator_message()
                }
                None => {
                    tracing::error!(error = %e, "Command execution failed");
                    format!("Error: {e:#}")
                }
            };
            eprintln!("{message}");
            1
        }
    }
}

/// Execute the CLI command, or the interactive menu when none is given
async fn execute_command(cli: &Cli, config: &DynamojoConfig) -> anyhow::Result<i32> {
    // Credentials are checked before any prompt is shown
    let exporter = prepare_exporter(
        |name| std::env::var(name).ok(),
        config.export.default_location.clone(),
        |settings| async move { DynamoDbStore::connect(&settings).await },
    )
    .await?;

    match &cli.command {
        Some(Commands::ScanAndDump(args)) => {
            Ok(args.execute(&exporter, &mut io::stdout()).await?)
        }
        None => {
            let mut prompter = TerminalPrompter::stdio()?;
            let outcome = run_menu(&mut prompter, &exporter, &mut io::stdout()).await?;
            Ok(outcome.exit_code())
        }
    }
}
