use log::{debug, info};

use crate::classify::Classification;
use crate::config::ProbeConfig;
use crate::prober::ProbeOutcome;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log probe configuration information
pub fn log_config_info(config: &ProbeConfig) {
    info!(
        "Configuration: method={:?}, timeout={:?}, filter={:?}",
        config.method, config.timeout, config.only
    );
}

/// Log batch start
pub fn log_batch_start(target_count: usize) {
    info!("Knocking {target_count} target(s)");
}

/// Log an individual probe result for debugging
pub fn log_probe_result(target: &str, outcome: &ProbeOutcome, classification: Classification) {
    match (outcome.status_code, outcome.error.as_deref()) {
        (Some(status), None) => debug!("{target} -> {status} ({classification})"),
        (_, Some(desc)) => debug!("{target} -> {classification}: {desc}"),
        (None, None) => debug!("{target} -> {classification}"),
    }
}
