use clap::{CommandFactory, Parser};
use std::path::Path;

use knock::cli::{Cli, Commands, cli_to_config, print_completions};
use knock::config::{Config, ProbeConfig};
use knock::error::Result;
use knock::prober::HttpProber;
use knock::{EXIT_USAGE, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_knock_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("\nFor more information, try '--help'.");
            std::process::exit(EXIT_USAGE);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main probing logic extracted from main() for testing
async fn run_knock_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration (CLI takes precedence)
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    // All validation happens here, before any target is probed
    let probe_config = ProbeConfig::from_config(&config)?;
    logging::log_config_info(&probe_config);

    let targets = knock::targets::resolve(
        cli.file.as_deref().map(Path::new),
        cli.target.as_deref(),
    )?;

    let prober = HttpProber::new(&probe_config)?;
    let report = knock::run_batch(&prober, &targets, probe_config.only).await;

    for line in &report.lines {
        println!("{line}");
    }

    Ok(report.exit_code)
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &knock::config::CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        // Logger is not initialized yet; main() reports this on stderr
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    Ok(config)
}
