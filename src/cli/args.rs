//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use devchains::output::OutputRenderer;
use devchains::output::json::JsonRenderer;
use devchains::output::terminal::TerminalRenderer;

/// Development-chain and confirmation settings for deployment scripts.
#[derive(Parser, Debug)]
#[command(name = "devchains", version = devchains::constants::VERSION)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "terminal")]
    pub format: OutputFormat,

    /// Additional config file, applied on top of global and project config.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project directory to look for `.devchains.toml` in.
    #[arg(long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Only log errors.
    #[arg(long, short = 'q', global = true, default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the development chain names.
    Chains,

    /// Print the confirmation threshold for live networks.
    Confirmations,

    /// Classify a network; exits 0 for development, 1 for live.
    Check(NetworkArgs),

    /// Show how a deployment to a network should be handled.
    Plan(PlanArgs),

    /// Check whether a transaction is final; exits 0 when final, 1 otherwise.
    Finality(FinalityArgs),

    /// Print the effective configuration.
    Config,

    /// Print version and build information.
    Version,
}

/// Network selection shared by several commands.
#[derive(Parser, Debug)]
pub struct NetworkArgs {
    /// Network name (default: $DEVCHAINS_NETWORK, then $HARDHAT_NETWORK).
    pub network: Option<String>,
}

/// Arguments for the `plan` subcommand.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Override the confirmation threshold for this invocation.
    #[arg(long)]
    pub confirmations: Option<u64>,
}

/// Arguments for the `finality` subcommand.
#[derive(Parser, Debug)]
pub struct FinalityArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Block number the transaction was included in.
    #[arg(long)]
    pub included_at: u64,

    /// Current chain head block number.
    #[arg(long)]
    pub head: u64,

    /// Override the confirmation threshold for this invocation.
    #[arg(long)]
    pub confirmations: Option<u64>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> &'static dyn OutputRenderer {
        match self {
            OutputFormat::Terminal => &TerminalRenderer,
            OutputFormat::Json => &JsonRenderer,
        }
    }
}
