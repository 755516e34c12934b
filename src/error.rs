//! Error types and handling for matchsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every layer below `main()` returns these; only `main()` terminates the
//! process.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for matchsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum MatchsyncError {
    // Configuration errors
    #[error("Required input '{field}' is missing")]
    #[diagnostic(
        code(matchsync::config::missing_required_field),
        help("Set the '{field}' step input to a non-empty value")
    )]
    MissingRequiredField { field: &'static str },

    #[error("Invalid profile type: '{value}'")]
    #[diagnostic(
        code(matchsync::config::invalid_profile_type),
        help("Valid profile types: adhoc, appstore, development, enterprise")
    )]
    InvalidProfileType { value: String },

    #[error("Failed to parse options ({options})")]
    #[diagnostic(
        code(matchsync::config::options_parse_failed),
        help("The 'options' input is split with shell word rules; check its quoting")
    )]
    OptionsParseFailed { options: String },

    // Gem installation errors
    #[error("Failed to install gem '{gem}': {reason}")]
    #[diagnostic(code(matchsync::gem::install_failed))]
    GemInstallFailed { gem: String, reason: String },

    // Bundler errors
    #[error("'bundle install' failed in '{dir}': {reason}")]
    #[diagnostic(code(matchsync::bundler::install_failed))]
    BundleInstallFailed { dir: String, reason: String },

    #[error("Gemfile.lock does not exist at '{path}', even though 'bundle install' was called")]
    #[diagnostic(
        code(matchsync::bundler::lockfile_missing),
        help("Check that the Gemfile's directory is writable and bundler completed cleanly")
    )]
    LockfileMissingAfterInstall { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(matchsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(matchsync::fs::io_error))]
    IoError { message: String },

    // Subprocess errors
    #[error("Command failed: {command}: {reason}")]
    #[diagnostic(code(matchsync::command::failed))]
    CommandFailed { command: String, reason: String },
}

impl From<std::io::Error> for MatchsyncError {
    fn from(err: std::io::Error) -> Self {
        MatchsyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MatchsyncError>;
