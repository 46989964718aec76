//! knock — probe one or more URLs and report their liveness.
//!
//! The pipeline is: target acquisition → probe (bounded by a timeout) →
//! classification → filter-gated reporting → exit-code aggregation. Targets
//! are probed sequentially, one network attempt each, in input order.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prober;
pub mod targets;

use std::path::Path;

use crate::classify::Classification;
use crate::error::Result;
use crate::prober::Probe;

/// Exit code for usage and configuration errors, distinct from every
/// outcome-derived severity.
pub const EXIT_USAGE: i32 = 2;

/// Rendered output plus the aggregated exit code for one batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub lines: Vec<String>,
    pub exit_code: i32,
}

/// Resolve targets and run the batch. Fails before any probe is performed
/// when the input modes conflict or the target list is unusable.
pub async fn execute<P: Probe>(
    prober: &P,
    file: Option<&Path>,
    target: Option<&str>,
    only: Option<Classification>,
) -> Result<BatchReport> {
    let targets = targets::resolve(file, target)?;
    Ok(run_batch(prober, &targets, only).await)
}

/// Probe every target in order and fold the outcomes into a report.
///
/// The exit code is the maximum severity across all targets, updated for
/// every outcome regardless of the filter; the filter only gates which lines
/// are rendered.
pub async fn run_batch<P: Probe>(
    prober: &P,
    targets: &[String],
    only: Option<Classification>,
) -> BatchReport {
    logging::log_batch_start(targets.len());

    let mut lines = Vec::with_capacity(targets.len() + 2);
    if targets.len() > 1 {
        lines.push(output::render_summary(targets.len()));
        lines.push(String::new());
    }

    let mut exit_code = Classification::Alive.severity();
    for target in targets {
        let outcome = prober.probe(target).await;
        let classification = classify::classify(&outcome);
        logging::log_probe_result(target, &outcome, classification);

        if classify::should_print(classification, only) {
            lines.push(output::render_outcome(target, &outcome, classification));
        }
        exit_code = exit_code.max(classification.severity());
    }

    BatchReport { lines, exit_code }
}
