//! Step configuration assembled from CLI/environment inputs
//!
//! The configuration is built once at startup from the parsed CLI and then
//! passed by reference; no other component reads the ambient environment.
//! The decrypt password is held in a [`SecretString`] and only exposed at
//! the single point where it is written into the child process environment.

use console::Style;
use secrecy::{ExposeSecret, SecretString};

use crate::cli::Cli;
use crate::error::{MatchsyncError, Result};

/// Profile types accepted by `fastlane match`
pub const PROFILE_TYPES: [&str; 4] = ["adhoc", "appstore", "development", "enterprise"];

/// Immutable step configuration
#[derive(Debug)]
pub struct Config {
    pub git_url: String,
    pub git_branch: String,
    pub app_id: String,
    decrypt_password: SecretString,
    pub profile_type: String,
    pub team_id: String,
    pub options: String,
    pub gemfile_path: String,
    pub fastlane_version: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            git_url: cli.git_url,
            git_branch: cli.git_branch,
            app_id: cli.app_id,
            decrypt_password: SecretString::from(cli.decrypt_password),
            profile_type: cli.profile_type,
            team_id: cli.team_id,
            options: cli.options,
            gemfile_path: cli.gemfile_path,
            fastlane_version: cli.fastlane_version,
        }
    }
}

impl Config {
    /// Expose the decrypt password for injection into the child environment
    pub fn decrypt_password(&self) -> &str {
        self.decrypt_password.expose_secret()
    }

    /// Print every input with the password masked
    pub fn print(&self) {
        println!("{}", Style::new().bold().apply_to("Configs:"));
        println!("- git_url: {}", self.git_url);
        println!("- git_branch: {}", self.git_branch);
        println!("- app_id: {}", self.app_id);
        println!(
            "- decrypt_password: {}",
            mask_secret(self.decrypt_password.expose_secret())
        );
        println!("- type: {}", self.profile_type);
        println!("- team_id: {}", self.team_id);
        println!("- options: {}", self.options);
        println!("- gemfile_path: {}", self.gemfile_path);
        println!("- fastlane_version: {}", self.fastlane_version);
    }

    /// Check required inputs and the profile type enumeration
    pub fn validate(&self) -> Result<()> {
        if self.git_url.is_empty() {
            return Err(MatchsyncError::MissingRequiredField { field: "git_url" });
        }

        if self.app_id.is_empty() {
            return Err(MatchsyncError::MissingRequiredField { field: "app_id" });
        }

        if self.decrypt_password.expose_secret().is_empty() {
            return Err(MatchsyncError::MissingRequiredField {
                field: "decrypt_password",
            });
        }

        if !PROFILE_TYPES.contains(&self.profile_type.as_str()) {
            return Err(MatchsyncError::InvalidProfileType {
                value: self.profile_type.clone(),
            });
        }

        Ok(())
    }
}

/// Mask a secret for display; empty stays empty so missing inputs are visible
fn mask_secret(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "***" }
}
