//! matchsync - fetch iOS code-signing credentials with fastlane match
//!
//! A CI step that provisions fastlane (installing a requested version, or
//! deferring to a project Gemfile) and runs `fastlane match` in read-only
//! mode against a git-backed certificate repository. Inputs come from the
//! step environment; the run either fully validates, resolves and executes,
//! or exits non-zero.

use std::time::Instant;

use clap::Parser;
use console::Style;

mod cli;
mod config;
mod error;
mod fastlane;
mod retry;
mod runner;

use cli::Cli;
use config::Config;
use error::Result;

/// Environment variable match reads the decryption passphrase from
const MATCH_PASSWORD_ENV: &str = "MATCH_PASSWORD";

fn main() {
    let config = Config::from(Cli::parse());

    println!();
    config.print();

    if let Err(e) = config.validate() {
        eprintln!("Error: issue with input: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    section("Setup");

    let start = Instant::now();

    let mut tools = fastlane::RubyTools;
    let resolved = fastlane::resolve(&mut tools, &config.fastlane_version, &config.gemfile_path)?;

    // Resolution succeeding is not enough; an unusable fastlane is fatal too
    let mut version_check: Vec<String> = resolved.command().to_vec();
    version_check.push("-v".to_string());
    println!("$ {}", runner::printable(&version_check));
    runner::run(&version_check, None, &[])?;

    println!(
        "Setup took {:.2} seconds to complete",
        start.elapsed().as_secs_f64()
    );

    section("Running match");

    let options = runner::split_options(&config.options)?;

    let mut command: Vec<String> = resolved.command().to_vec();
    command.extend(match_args(config, &options));

    println!(
        "{} {}",
        Style::new().green().apply_to("$"),
        runner::printable(&command)
    );
    println!();

    runner::run(
        &command,
        resolved.work_dir(),
        &[(MATCH_PASSWORD_ENV, config.decrypt_password())],
    )?;

    println!("{}", Style::new().green().bold().apply_to("Success"));
    Ok(())
}

/// Arguments appended to the resolved fastlane command prefix
///
/// Optional inputs are omitted when empty; the free-form options come last
/// so the caller can override any flag.
fn match_args(config: &Config, options: &[String]) -> Vec<String> {
    let mut args = vec![
        "match".to_string(),
        config.profile_type.clone(),
        "--readonly".to_string(),
        "--git_url".to_string(),
        config.git_url.clone(),
        "--app_identifier".to_string(),
        config.app_id.clone(),
    ];

    if !config.git_branch.is_empty() {
        args.push("--git_branch".to_string());
        args.push(config.git_branch.clone());
    }

    if !config.team_id.is_empty() {
        args.push("--team_id".to_string());
        args.push(config.team_id.clone());
    }

    args.extend(options.iter().cloned());
    args
}

fn section(title: &str) {
    println!();
    println!("{}", Style::new().cyan().bold().apply_to(title));
}
