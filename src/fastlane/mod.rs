//! fastlane provisioning
//!
//! This module handles:
//! - Deciding how fastlane will be invoked (forced gem install, the system
//!   installation, or bundler against a project Gemfile)
//! - Extracting the pinned fastlane version from a Gemfile.lock
//! - Running gem/bundler install commands

pub mod gem;
pub mod lockfile;
pub mod resolver;

pub use gem::RubyTools;
pub use resolver::{ResolvedInvocation, ToolInstaller, resolve};
