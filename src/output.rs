//! Rendering of per-target result lines.

use std::time::Duration;

use crate::classify::Classification;
use crate::prober::ProbeOutcome;

const GLYPH_OK: &str = "✔";
const GLYPH_FAIL: &str = "✖";

/// Summary line printed before a batch of more than one target.
pub fn render_summary(target_count: usize) -> String {
    format!("knocking {target_count} targets")
}

/// Render one result line for a probed target.
pub fn render_outcome(
    target: &str,
    outcome: &ProbeOutcome,
    classification: Classification,
) -> String {
    match classification {
        Classification::Alive => format!(
            "{GLYPH_OK} {target} ({}, {})",
            outcome.status_code.unwrap_or(0),
            format_latency(outcome.latency.unwrap_or_default())
        ),
        Classification::Unhealthy => format!(
            "{GLYPH_FAIL} {target} ({}, {})",
            outcome.status_code.unwrap_or(0),
            format_latency(outcome.latency.unwrap_or_default())
        ),
        Classification::Unreachable => format!("{GLYPH_FAIL} {target} (unreachable)"),
    }
}

/// Format a latency: sub-second as integer milliseconds, otherwise seconds
/// with one decimal place.
pub fn format_latency(latency: Duration) -> String {
    if latency < Duration::from_secs(1) {
        format!("{}ms", latency.as_millis())
    } else {
        format!("{:.1}s", latency.as_secs_f64())
    }
}
