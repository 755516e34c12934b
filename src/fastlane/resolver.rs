//! fastlane resolution
//!
//! Decides how fastlane will be invoked, in this priority order:
//!
//! 1. A requested version is gem-installed (with retry) and invoked
//!    directly, through a version-pinned binstub unless "latest" was asked.
//! 2. Without a version or Gemfile path, the system fastlane is used.
//! 3. A Gemfile path pointing nowhere also falls back to the system
//!    fastlane.
//! 4. With an existing Gemfile, the pinned version is read from
//!    Gemfile.lock (running `bundle install` to create it if needed) and
//!    fastlane is invoked through `bundle exec` from the Gemfile's
//!    directory.
//!
//! Install side effects sit behind [`ToolInstaller`] so the decision tree
//! is unit-testable without real subprocesses.

use std::path::{Path, PathBuf};

use crate::error::{MatchsyncError, Result};
use crate::retry;

/// Gem name of the tool being provisioned
pub const FASTLANE_GEM: &str = "fastlane";

/// Version request meaning "no specific version constraint"
pub const LATEST: &str = "latest";

/// Companion lockfile name, by bundler convention next to the Gemfile
const LOCKFILE_NAME: &str = "Gemfile.lock";

/// Total gem install attempts before giving up
const INSTALL_ATTEMPTS: u32 = 2;

/// Install side effects the resolver depends on
///
/// Implemented by [`crate::fastlane::RubyTools`] for real runs and by fakes
/// in tests.
pub trait ToolInstaller {
    /// Install a gem, optionally pinned to an exact version
    fn install_gem(&mut self, gem: &str, version: Option<&str>) -> Result<()>;

    /// Run `bundle install` in the Gemfile's directory
    fn bundle_install(&mut self, dir: &Path) -> Result<()>;
}

/// How the resolved fastlane is to be invoked
///
/// The command is non-empty by construction and its first token is a
/// directly executable program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    command: Vec<String>,
    work_dir: Option<PathBuf>,
}

impl ResolvedInvocation {
    fn system() -> Self {
        Self {
            command: vec![FASTLANE_GEM.to_string()],
            work_dir: None,
        }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }
}

/// Resolve how fastlane will be invoked, installing it if needed
pub fn resolve(
    installer: &mut dyn ToolInstaller,
    version_request: &str,
    gemfile_path: &str,
) -> Result<ResolvedInvocation> {
    if !version_request.is_empty() {
        return install_requested_version(installer, version_request);
    }

    if gemfile_path.is_empty() {
        println!("no fastlane version nor Gemfile path defined, using system installed fastlane...");
        return Ok(ResolvedInvocation::system());
    }

    let gemfile = Path::new(gemfile_path);
    if !path_exists(gemfile)? {
        println!(
            "Gemfile not found at {gemfile_path} and no fastlane version defined, using system installed fastlane..."
        );
        return Ok(ResolvedInvocation::system());
    }

    resolve_from_gemfile(installer, gemfile)
}

/// Case 1: a version was requested, gem-install it (retried)
fn install_requested_version(
    installer: &mut dyn ToolInstaller,
    version_request: &str,
) -> Result<ResolvedInvocation> {
    println!("fastlane version requested: {version_request}, installing...");

    // The "latest" sentinel means no version constraint for the installer
    let pinned = (version_request != LATEST).then_some(version_request);

    retry::with_attempts(INSTALL_ATTEMPTS, |_| {
        installer.install_gem(FASTLANE_GEM, pinned)
    })?;

    let mut command = vec![FASTLANE_GEM.to_string()];
    if let Some(version) = pinned {
        // RubyGems version-pinned binstub form: fastlane _2.220.0_ ...
        command.push(format!("_{version}_"));
    }

    Ok(ResolvedInvocation {
        command,
        work_dir: None,
    })
}

/// Case 4: an existing Gemfile decides the version through its lockfile
fn resolve_from_gemfile(
    installer: &mut dyn ToolInstaller,
    gemfile: &Path,
) -> Result<ResolvedInvocation> {
    println!("Gemfile found, checking fastlane version from {LOCKFILE_NAME}");

    let gemfile_dir = parent_dir(gemfile);
    let lockfile = gemfile_dir.join(LOCKFILE_NAME);

    let mut bundle_install_ran = false;
    if !path_exists(&lockfile)? {
        println!(
            "{LOCKFILE_NAME} not found at {}, running 'bundle install'...",
            lockfile.display()
        );

        installer.bundle_install(gemfile_dir)?;
        bundle_install_ran = true;

        if !path_exists(&lockfile)? {
            return Err(MatchsyncError::LockfileMissingAfterInstall {
                path: lockfile.display().to_string(),
            });
        }
    }

    match super::lockfile::version_from_lockfile(FASTLANE_GEM, &lockfile)? {
        Some(version) => {
            println!(
                "fastlane version pinned in {LOCKFILE_NAME}: {version}, using bundler to call fastlane..."
            );

            if !bundle_install_ran {
                installer.bundle_install(gemfile_dir)?;
            }

            Ok(ResolvedInvocation {
                command: vec![
                    "bundle".to_string(),
                    "exec".to_string(),
                    FASTLANE_GEM.to_string(),
                ],
                work_dir: Some(gemfile_dir.to_path_buf()),
            })
        }
        None => {
            println!(
                "fastlane version not found in {LOCKFILE_NAME}, using system installed fastlane..."
            );
            Ok(ResolvedInvocation::system())
        }
    }
}

/// Existence check that surfaces stat failures instead of swallowing them
fn path_exists(path: &Path) -> Result<bool> {
    Ok(path.try_exists()?)
}

/// Directory containing `path`; a bare filename resolves to "."
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
