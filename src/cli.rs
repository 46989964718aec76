// Command-line interface definitions and parsing for knock

use clap::{Command, Parser, Subcommand};
use clap_complete::{Generator, generate};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Target URL to knock
    pub target: Option<String>,

    // Core Options
    /// Read targets from a file, one per line
    #[arg(short = 'f', long, value_name = "PATH", help_heading = "Core Options")]
    pub file: Option<String>,

    /// Request timeout, e.g. 750ms or 5s (default: 5s)
    #[arg(
        short = 't',
        long,
        value_name = "DURATION",
        help_heading = "Core Options"
    )]
    pub timeout: Option<String>,

    /// HTTP method to probe with: HEAD or GET (default: HEAD)
    #[arg(long, value_name = "METHOD", help_heading = "Core Options")]
    pub method: Option<String>,

    // Output & Verbosity
    /// Only print outcomes of this kind: alive|unhealthy|unreachable (al|uh|ur)
    #[arg(
        short = 'o',
        long,
        value_name = "KIND",
        help_heading = "Output & Verbosity"
    )]
    pub only: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Suppress logging entirely
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Print completions for the given shell to stdout
pub fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

/// Convert the derive-based CLI into a CliConfig for merging
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout.clone(),
        method: cli.method.clone(),
        only: cli.only.clone(),
        user_agent: cli.user_agent.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_target_and_flags() {
        let cli = Cli::parse_from([
            "knock",
            "http://example.com",
            "--timeout",
            "2s",
            "--method",
            "get",
            "-o",
            "uh",
        ]);

        assert_eq!(cli.target, Some("http://example.com".to_string()));
        assert_eq!(cli.timeout, Some("2s".to_string()));
        assert_eq!(cli.method, Some("get".to_string()));
        assert_eq!(cli.only, Some("uh".to_string()));
    }

    #[test]
    fn test_cli_parses_file_mode() {
        let cli = Cli::parse_from(["knock", "-f", "targets.txt"]);

        assert_eq!(cli.target, None);
        assert_eq!(cli.file, Some("targets.txt".to_string()));
    }

    #[test]
    fn test_cli_to_config() {
        let cli = Cli::parse_from(["knock", "http://example.com", "-v", "--no-config"]);
        let cli_config = cli_to_config(&cli);

        assert!(cli_config.verbose);
        assert!(cli_config.no_config);
        assert!(!cli_config.quiet);
        assert_eq!(cli_config.timeout, None);
    }

    #[test]
    fn test_cli_rejects_extra_positional_arguments() {
        let result = Cli::try_parse_from(["knock", "http://a", "http://b"]);
        assert!(result.is_err());
    }
}
