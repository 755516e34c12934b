//! Gemfile.lock version extraction
//!
//! Bundler records resolved versions in a `specs:` section. Only lines
//! between that marker and the first blank line are scanned; a pin looks
//! like `fastlane (2.220.0)`.

use std::fs;
use std::path::Path;

use crate::error::{MatchsyncError, Result};

/// Read a Gemfile.lock and extract the pinned version of `gem`
pub fn version_from_lockfile(gem: &str, path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| MatchsyncError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(version_from_content(gem, &content))
}

/// Extract the pinned version of `gem` from lockfile text
pub fn version_from_content(gem: &str, content: &str) -> Option<String> {
    let mut in_specs = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }

        if trimmed == "specs:" {
            in_specs = true;
            continue;
        }

        if in_specs {
            if let Some(version) = pinned_version(trimmed, gem) {
                return Some(version.to_string());
            }
        }
    }

    None
}

/// Match a `"<gem> (<version>)"` spec line, anchored at the line start
fn pinned_version<'a>(line: &'a str, gem: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(gem)?.strip_prefix(" (")?;
    let end = rest.rfind(')')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCK_WITH_PIN: &str = "GEM
  remote: https://rubygems.org/
  specs:
    CFPropertyList (3.0.6)
    fastlane (2.220.0)
    fastlane-plugin-firebase_app_distribution (0.7.4)

PLATFORMS
  ruby
";

    #[test]
    fn test_pin_found_in_specs_section() {
        assert_eq!(
            version_from_content("fastlane", LOCK_WITH_PIN),
            Some("2.220.0".to_string())
        );
    }

    #[test]
    fn test_prefix_gems_do_not_match() {
        // fastlane-plugin-* lines must not satisfy a "fastlane" lookup
        let content = "  specs:\n    fastlane-plugin-foo (1.0.0)\n";
        assert_eq!(version_from_content("fastlane", content), None);
    }

    #[test]
    fn test_no_pin_for_gem() {
        let content = "GEM\n  specs:\n    cocoapods (1.15.2)\n";
        assert_eq!(version_from_content("fastlane", content), None);
    }

    #[test]
    fn test_no_specs_marker() {
        let content = "GEM\n    fastlane (2.220.0)\n";
        assert_eq!(version_from_content("fastlane", content), None);
    }

    #[test]
    fn test_scan_stops_at_first_blank_line() {
        let content = "GEM
  specs:
    cocoapods (1.15.2)

    fastlane (2.220.0)
";
        assert_eq!(version_from_content("fastlane", content), None);
    }

    #[test]
    fn test_first_match_wins() {
        let content = "  specs:\n    fastlane (2.1.0)\n    fastlane (2.2.0)\n";
        assert_eq!(
            version_from_content("fastlane", content),
            Some("2.1.0".to_string())
        );
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(version_from_content("fastlane", ""), None);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err =
            version_from_lockfile("fastlane", Path::new("/nonexistent/Gemfile.lock")).unwrap_err();
        assert!(matches!(err, MatchsyncError::FileReadFailed { .. }));
    }

    #[test]
    fn test_read_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let lock = temp.path().join("Gemfile.lock");
        std::fs::write(&lock, LOCK_WITH_PIN).unwrap();
        assert_eq!(
            version_from_lockfile("fastlane", &lock).unwrap(),
            Some("2.220.0".to_string())
        );
    }
}
