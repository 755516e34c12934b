//! CLI definitions using clap derive API
//!
//! Every input can be given either as a flag or through the step environment
//! (lowercase variable names, as CI runners export them). All inputs default
//! to the empty string: required-ness and enum membership are checked by the
//! configuration validator so that violations surface as matchsync errors
//! instead of clap usage errors.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// matchsync - fetch code-signing credentials with fastlane match
#[derive(Parser, Debug)]
#[command(
    name = "matchsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch iOS code-signing certificates and provisioning profiles with fastlane match (readonly)",
    long_about = "matchsync provisions fastlane (installing a requested version, or deferring \
                  to a project Gemfile) and runs 'fastlane match' in read-only mode against a \
                  git-backed certificate repository. Designed to run as a CI step: every input \
                  is read from the environment when the matching flag is not given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  matchsync --git-url https://github.com/acme/certificates.git \\\n        \
                  --app-id com.acme.app --type development\n    \
                  matchsync --gemfile-path ./Gemfile --type appstore ...\n    \
                  matchsync --fastlane-version 2.220.0 --type adhoc ..."
)]
pub struct Cli {
    /// URL of the git repository that stores the certificates and profiles
    #[arg(long, env = "git_url", default_value = "")]
    pub git_url: String,

    /// Branch of the certificate repository to use
    #[arg(long, env = "git_branch", default_value = "")]
    pub git_branch: String,

    /// Bundle identifier of the app to fetch credentials for
    #[arg(long, env = "app_id", default_value = "")]
    pub app_id: String,

    /// Passphrase used to decrypt the certificate repository
    #[arg(long, env = "decrypt_password", default_value = "", hide_env_values = true)]
    pub decrypt_password: String,

    /// Provisioning profile type (adhoc, appstore, development, enterprise)
    #[arg(long = "type", env = "type", default_value = "", value_name = "TYPE")]
    pub profile_type: String,

    /// Developer portal team ID
    #[arg(long, env = "team_id", default_value = "")]
    pub team_id: String,

    /// Additional options passed to match verbatim (shell-quoted string)
    #[arg(long, env = "options", default_value = "", allow_hyphen_values = true)]
    pub options: String,

    /// Path to the project Gemfile
    #[arg(long, env = "gemfile_path", default_value = "")]
    pub gemfile_path: String,

    /// fastlane version to install ("latest" for the newest available)
    #[arg(long, env = "fastlane_version", default_value = "")]
    pub fastlane_version: String,
}
