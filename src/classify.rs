use std::fmt;
use std::str::FromStr;

use crate::prober::ProbeOutcome;

/// Three-way outcome bucket for a probed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    /// Transport succeeded with a 2xx status
    Alive,
    /// Transport succeeded with a non-2xx status
    Unhealthy,
    /// Transport-level failure (timeout, refused, DNS, ...)
    Unreachable,
}

impl Classification {
    /// Exit severity for this classification.
    ///
    /// Severity 2 is reserved for usage errors and is never produced here;
    /// the 0/1/3 mapping is a stability contract for scripts consuming the
    /// exit code.
    pub fn severity(self) -> i32 {
        match self {
            Classification::Alive => 0,
            Classification::Unhealthy => 1,
            Classification::Unreachable => 3,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Alive => write!(f, "alive"),
            Classification::Unhealthy => write!(f, "unhealthy"),
            Classification::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl FromStr for Classification {
    type Err = String;

    /// Parse a filter selector, accepting the long and short spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "al" | "alive" => Ok(Classification::Alive),
            "uh" | "unhealthy" => Ok(Classification::Unhealthy),
            "ur" | "unreachable" => Ok(Classification::Unreachable),
            other => Err(format!(
                "invalid filter '{other}' (expected alive|unhealthy|unreachable or al|uh|ur)"
            )),
        }
    }
}

/// Map a probe outcome to its classification.
///
/// A transport error wins unconditionally; the status code is not inspected
/// even if populated.
pub fn classify(outcome: &ProbeOutcome) -> Classification {
    if outcome.error.is_some() {
        return Classification::Unreachable;
    }
    match outcome.status_code {
        Some(status) if (200..300).contains(&status) => Classification::Alive,
        _ => Classification::Unhealthy,
    }
}

/// Filter gate for the reporter. Output-only; never feeds the exit code.
pub fn should_print(classification: Classification, selector: Option<Classification>) -> bool {
    match selector {
        None => true,
        Some(only) => classification == only,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::time::Duration;

    fn outcome_with_status(status: u16) -> ProbeOutcome {
        ProbeOutcome {
            status_code: Some(status),
            latency: Some(Duration::from_millis(10)),
            error: None,
        }
    }

    fn outcome_with_error(description: &str) -> ProbeOutcome {
        ProbeOutcome {
            status_code: None,
            latency: None,
            error: Some(description.to_string()),
        }
    }

    #[test]
    fn test_classify__2xx_is_alive() {
        for status in [200, 204, 226, 299] {
            assert_eq!(
                classify(&outcome_with_status(status)),
                Classification::Alive,
                "status {status} should be alive"
            );
        }
    }

    #[test]
    fn test_classify__non_2xx_is_unhealthy() {
        for status in [100, 199, 300, 301, 404, 500, 503] {
            assert_eq!(
                classify(&outcome_with_status(status)),
                Classification::Unhealthy,
                "status {status} should be unhealthy"
            );
        }
    }

    #[test]
    fn test_classify__transport_error_is_unreachable() {
        assert_eq!(
            classify(&outcome_with_error("connection refused")),
            Classification::Unreachable
        );
    }

    #[test]
    fn test_classify__transport_error_wins_over_status() {
        let outcome = ProbeOutcome {
            status_code: Some(200),
            latency: None,
            error: Some("operation timed out".to_string()),
        };
        assert_eq!(classify(&outcome), Classification::Unreachable);
    }

    #[test]
    fn test_severity_mapping_preserves_gap() {
        assert_eq!(Classification::Alive.severity(), 0);
        assert_eq!(Classification::Unhealthy.severity(), 1);
        // 2 is the usage-error exit code, never an outcome severity
        assert_eq!(Classification::Unreachable.severity(), 3);
    }

    #[test]
    fn test_severity_is_monotonic() {
        assert!(Classification::Alive.severity() < Classification::Unhealthy.severity());
        assert!(Classification::Unhealthy.severity() < Classification::Unreachable.severity());
    }

    #[test]
    fn test_should_print__no_selector_prints_everything() {
        for classification in [
            Classification::Alive,
            Classification::Unhealthy,
            Classification::Unreachable,
        ] {
            assert!(should_print(classification, None));
        }
    }

    #[test]
    fn test_should_print__selector_matches_exactly() {
        assert!(should_print(
            Classification::Alive,
            Some(Classification::Alive)
        ));
        assert!(!should_print(
            Classification::Unhealthy,
            Some(Classification::Alive)
        ));
        assert!(!should_print(
            Classification::Unreachable,
            Some(Classification::Alive)
        ));
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!("alive".parse(), Ok(Classification::Alive));
        assert_eq!("al".parse(), Ok(Classification::Alive));
        assert_eq!("UNHEALTHY".parse(), Ok(Classification::Unhealthy));
        assert_eq!("uh".parse(), Ok(Classification::Unhealthy));
        assert_eq!("unreachable".parse(), Ok(Classification::Unreachable));
        assert_eq!("Ur".parse(), Ok(Classification::Unreachable));
        assert!("dead".parse::<Classification>().is_err());
        assert!("".parse::<Classification>().is_err());
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Alive.to_string(), "alive");
        assert_eq!(Classification::Unhealthy.to_string(), "unhealthy");
        assert_eq!(Classification::Unreachable.to_string(), "unreachable");
    }
}
