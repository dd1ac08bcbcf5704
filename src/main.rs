//! devchains — development-chain and confirmation settings CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::{IsTerminal, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, FinalityArgs, NetworkArgs, PlanArgs};
use devchains::chains::ChainSettings;
use devchains::config::Config;
use devchains::constants;
use devchains::env::Env;
use devchains::logging;
use devchains::models::{ChainsReport, CheckReport, FinalityReport};
use devchains::output::OutputRenderer;
use devchains::plan::DeployPlan;

/// Exit status for a negative answer (live network, not yet final).
const EXIT_NEGATIVE: i32 = 1;

/// Exit status for usage and configuration errors.
const EXIT_ERROR: i32 = 2;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            EXIT_ERROR
        }
    };
    let _ = std::io::stdout().flush();
    process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let env = Env::real();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Command::Version = cli.command {
        return run_version();
    }

    let config = Config::load(Some(cli.path.as_path()), cli.config.as_deref(), &env)
        .context("failed to load configuration")?;

    logging::init(&logging::filter_directive(
        &env,
        cli.verbose,
        cli.quiet,
        config.log_level(),
    ));
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }
    tracing::debug!(?config, "effective configuration");

    // `config` prints the merged layers even when they fail validation.
    let settings = config.settings().context("invalid configuration");
    let renderer = cli.format.renderer();

    match cli.command {
        Command::Chains => {
            print!("{}", renderer.chains(&ChainsReport::from(&settings?)));
            Ok(0)
        }
        Command::Confirmations => {
            print!("{}", renderer.confirmations(settings?.required_confirmations()));
            Ok(0)
        }
        Command::Check(args) => run_check(args, &settings?, &env, renderer),
        Command::Plan(args) => run_plan(args, &settings?, &config, &env, renderer),
        Command::Finality(args) => run_finality(args, &settings?, &env, renderer),
        Command::Config => {
            print!("{}", renderer.config(&config.resolved()));
            settings.map(|_| 0)
        }
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<i32> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(0)
}

/// Classify a network as development or live.
fn run_check(
    args: NetworkArgs,
    settings: &ChainSettings,
    env: &Env,
    renderer: &dyn OutputRenderer,
) -> Result<i32> {
    let network = cli::resolve_network(args.network.as_deref(), env)?;
    let report = CheckReport::new(settings, &network);
    print!("{}", renderer.check(&report));

    Ok(if report.kind.is_development() { 0 } else { EXIT_NEGATIVE })
}

/// Print the deploy plan for a network.
fn run_plan(
    args: PlanArgs,
    settings: &ChainSettings,
    config: &Config,
    env: &Env,
    renderer: &dyn OutputRenderer,
) -> Result<i32> {
    let network = cli::resolve_network(args.network.network.as_deref(), env)?;
    let settings = match args.confirmations {
        Some(n) => settings.with_required_confirmations(n),
        None => settings.clone(),
    };

    let plan = DeployPlan::resolve(&settings, &network, &config.verification);
    print!("{}", renderer.plan(&plan));
    Ok(0)
}

/// Report whether a transaction has enough confirmations.
fn run_finality(
    args: FinalityArgs,
    settings: &ChainSettings,
    env: &Env,
    renderer: &dyn OutputRenderer,
) -> Result<i32> {
    let network = cli::resolve_network(args.network.network.as_deref(), env)?;
    let settings = match args.confirmations {
        Some(n) => settings.with_required_confirmations(n),
        None => settings.clone(),
    };

    if args.head < args.included_at {
        tracing::warn!(
            included_at = args.included_at,
            head = args.head,
            "chain head is behind the inclusion block"
        );
    }

    let report = FinalityReport::new(&settings, &network, args.included_at, args.head);
    print!("{}", renderer.finality(&report));
    Ok(if report.is_final { 0 } else { EXIT_NEGATIVE })
}
