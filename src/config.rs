use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::classify::Classification;
use crate::error::{KnockError, Result};

/// Default request timeout when neither CLI nor config file set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP method used for probing. Anything else is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Head,
    Get,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HEAD" => Ok(Method::Head),
            "GET" => Ok(Method::Get),
            other => Err(format!("invalid method '{other}' (expected HEAD or GET)")),
        }
    }
}

/// Raw configuration as read from a `.knock.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Request timeout, e.g. "5s", "750ms" or bare seconds
    pub timeout: Option<String>,

    /// HTTP method to probe with (HEAD or GET)
    pub method: Option<String>,

    /// Only print outcomes of this kind
    pub only: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: None,
            method: None,
            only: None,
            user_agent: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, surfacing IO and TOML errors.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .knock.toml in current directory
        if let Ok(config) = Self::load_from_file(".knock.toml") {
            return config;
        }

        // Check for .knock.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.knock.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref timeout) = cli_config.timeout {
            self.timeout = Some(timeout.clone());
        }
        if let Some(ref method) = cli_config.method {
            self.method = Some(method.clone());
        }
        if let Some(ref only) = cli_config.only {
            self.only = Some(only.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<String>,
    pub method: Option<String>,
    pub only: Option<String>,
    pub user_agent: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

/// Immutable per-run probe configuration.
///
/// Built exactly once, before any target is probed; every validation failure
/// here is a configuration error and aborts the run with exit code 2.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub method: Method,
    pub timeout: Duration,
    pub only: Option<Classification>,
    pub user_agent: Option<String>,
}

impl ProbeConfig {
    /// Validate and freeze a merged `Config` into a `ProbeConfig`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let method = match config.method {
            Some(ref raw) => raw.parse::<Method>().map_err(KnockError::Config)?,
            None => Method::default(),
        };

        let timeout = match config.timeout {
            Some(ref raw) => parse_duration(raw).map_err(KnockError::Config)?,
            None => DEFAULT_TIMEOUT,
        };

        let only = match config.only {
            Some(ref raw) => Some(raw.parse::<Classification>().map_err(KnockError::Config)?),
            None => None,
        };

        Ok(Self {
            method,
            timeout,
            only,
            user_agent: config.user_agent.clone(),
        })
    }
}

/// Parse a duration string: `750ms`, `5s`, `2m`, or a bare integer (seconds).
/// Zero durations are rejected.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();

    let (value, unit): (&str, &str) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(stripped) = s.strip_suffix('s') {
        (stripped, "s")
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, "m")
    } else {
        (s, "s")
    };

    let number: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration '{s}' (expected e.g. 750ms, 5s or 2m)"))?;

    if number == 0 {
        return Err(format!("invalid duration '{s}' (must be positive)"));
    }

    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "m" => Duration::from_secs(number * 60),
        _ => Duration::from_secs(number),
    };

    Ok(duration)
}
