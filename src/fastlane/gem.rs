//! Install commands backed by the system Ruby toolchain
//!
//! Both commands inherit stdio so RubyGems and bundler can prompt (e.g. for
//! sudo or credentials) and their output lands in the step log.

use std::path::Path;

use crate::error::{MatchsyncError, Result};
use crate::fastlane::ToolInstaller;
use crate::runner;

/// Real [`ToolInstaller`] shelling out to `gem` and `bundle`
pub struct RubyTools;

impl ToolInstaller for RubyTools {
    fn install_gem(&mut self, gem: &str, version: Option<&str>) -> Result<()> {
        let mut command: Vec<String> = vec![
            "gem".to_string(),
            "install".to_string(),
            gem.to_string(),
            "--no-document".to_string(),
        ];
        if let Some(version) = version {
            command.push("--version".to_string());
            command.push(version.to_string());
        }

        println!("$ {}", runner::printable(&command));
        runner::run(&command, None, &[]).map_err(|e| MatchsyncError::GemInstallFailed {
            gem: gem.to_string(),
            reason: e.to_string(),
        })
    }

    fn bundle_install(&mut self, dir: &Path) -> Result<()> {
        let command: Vec<String> = vec!["bundle".to_string(), "install".to_string()];

        println!("$ {}", runner::printable(&command));
        runner::run(&command, Some(dir), &[]).map_err(|e| MatchsyncError::BundleInstallFailed {
            dir: dir.display().to_string(),
            reason: e.to_string(),
        })
    }
}
