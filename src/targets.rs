//! Target acquisition: a single positional URL or a line-oriented file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{KnockError, Result};

/// Resolve the target list from the two mutually exclusive input modes.
///
/// Guarantees a non-empty list on success; every failure here happens before
/// any network call is made.
pub fn resolve(file: Option<&Path>, target: Option<&str>) -> Result<Vec<String>> {
    match (file, target) {
        (Some(_), Some(_)) => Err(KnockError::ConflictingInput),
        (Some(path), None) => read_targets(path),
        (None, Some(url)) => Ok(vec![url.to_string()]),
        (None, None) => Err(KnockError::Config(
            "no target given (pass a url or --file <path>)".to_string(),
        )),
    }
}

/// Read targets from a file, one per line, skipping blank lines.
///
/// Kept lines are not trimmed; line order is preserved.
pub fn read_targets(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        targets.push(line);
    }

    if targets.is_empty() {
        return Err(KnockError::NoTargetsFound(path.display().to_string()));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_read_targets__skips_blank_lines_keeps_order() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"\nhttp://a\n\nhttp://b\n")?;

        let targets = read_targets(file.path())?;

        assert_eq!(targets, vec!["http://a".to_string(), "http://b".to_string()]);
        Ok(())
    }

    #[test]
    fn test_read_targets__only_blank_lines_is_no_targets_found() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"\n\n   \n")?;

        let result = read_targets(file.path());

        assert!(matches!(result, Err(KnockError::NoTargetsFound(_))));
        Ok(())
    }

    #[test]
    fn test_read_targets__missing_file_is_io_error() {
        let result = read_targets(Path::new("no-such-file.txt"));
        assert!(matches!(result, Err(KnockError::Io(_))));
    }

    #[test]
    fn test_resolve__direct_target() {
        let targets = resolve(None, Some("http://a")).unwrap();
        assert_eq!(targets, vec!["http://a".to_string()]);
    }

    #[test]
    fn test_resolve__file_and_target_is_conflicting_input() {
        let result = resolve(Some(Path::new("targets.txt")), Some("http://a"));
        assert!(matches!(result, Err(KnockError::ConflictingInput)));
    }

    #[test]
    fn test_resolve__neither_is_config_error() {
        let result = resolve(None, None);
        assert!(matches!(result, Err(KnockError::Config(_))));
    }

    #[test]
    fn test_resolve__never_returns_empty_list() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"http://a\n")?;

        let targets = resolve(Some(file.path()), None)?;

        assert!(!targets.is_empty());
        Ok(())
    }
}
