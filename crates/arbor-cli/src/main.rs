// crates/arbor-cli/src/main.rs
//
// CLI entrypoint for the Arbor TREE token.
//
// Each invocation loads the token snapshot from disk, applies one operation
// as the `--caller` account at height `--block`, and writes the snapshot
// back. Token rule violations exit non-zero with their numeric code.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arbor_core::{Amount, ArborError};
use arbor_store::JsonFileStore;
use commands::admin::AdminCmd;
use commands::stake::StakeCmd;
use commands::Session;
use config::ArborConfig;
use output::OutputFormat;

/// Arbor CLI: operate a TREE token ledger stored as a local JSON snapshot.
#[derive(Parser, Debug)]
#[command(
    name = "arbor",
    version = "0.1.0",
    about = "Arbor CLI for the TREE token: deploy, mint, transfer, stake, administer"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.arbor/config.toml")]
    config: String,

    /// Override the state snapshot path from the configuration.
    #[arg(long, global = true)]
    state: Option<String>,

    /// Acting account: hex address or label.
    #[arg(long, global = true)]
    caller: Option<String>,

    /// Current block height.
    #[arg(long, global = true, default_value_t = 0)]
    block: u64,

    /// Emit JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Deploy a fresh token with the configured parameters.
    Init {
        /// Initial admin, governance and minter (defaults to --caller).
        #[arg(long)]
        deployer: Option<String>,
        /// Replace an existing snapshot.
        #[arg(long)]
        force: bool,
    },

    /// Mint new TREE to an account (minters only).
    Mint {
        /// Recipient address or label.
        to: String,
        /// Amount in base units.
        amount: Amount,
    },

    /// Burn TREE from the caller's balance.
    Burn {
        /// Amount in base units.
        amount: Amount,
    },

    /// Recompute the decaying mint cap at --block.
    UpdateCap,

    /// Send TREE from the caller to another account.
    Transfer {
        /// Recipient address or label.
        to: String,
        /// Amount in base units.
        amount: Amount,
    },

    /// Send TREE to several accounts in order. Stops at the first failure.
    BatchTransfer {
        /// Entries as <to>:<amount>. Repeatable.
        #[arg(long = "entry", required = true)]
        entries: Vec<String>,
    },

    /// Set the allowance of a spender over the caller's balance.
    Approve {
        /// Spender address or label.
        spender: String,
        /// Allowance in base units.
        amount: Amount,
    },

    /// Move TREE out of an owner's balance using the caller's allowance.
    TransferFrom {
        /// Owner address or label.
        from: String,
        /// Recipient address or label.
        to: String,
        /// Amount in base units.
        amount: Amount,
    },

    /// Staking management: stake, unstake, info.
    #[command(subcommand)]
    Stake(StakeCmd),

    /// Role and pause management.
    #[command(subcommand)]
    Admin(AdminCmd),

    /// Show an account's balance and stake.
    Balance {
        /// Account address or label.
        account: String,
        /// Also show the allowance granted to this spender.
        #[arg(long)]
        spender: Option<String>,
    },

    /// Display token-wide state and all known accounts.
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = ArborConfig::load_optional(&cli.config);
    let log_level = match &loaded {
        Ok(Some(c)) => c.log_level.clone(),
        _ => ArborConfig::default().log_level,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(Some(c)) => {
            tracing::debug!(path = %cli.config, "Configuration loaded");
            c
        }
        Ok(None) => {
            tracing::debug!(path = %cli.config, "No configuration file, using defaults");
            ArborConfig::default()
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: ArborConfig) -> Result<(), ArborError> {
    let state_path = cli.state.as_deref().unwrap_or(&config.state_path);
    let session = Session {
        store: JsonFileStore::new(config::expand_tilde(state_path)),
        caller: cli.caller.clone(),
        block: cli.block,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        },
        params: config.token_params()?,
    };

    match &cli.command {
        Commands::Init { deployer, force } => {
            commands::init::run(&session, deployer.as_deref(), *force).await?
        }
        Commands::Mint { to, amount } => commands::supply::mint(&session, to, *amount).await?,
        Commands::Burn { amount } => commands::supply::burn(&session, *amount).await?,
        Commands::UpdateCap => commands::supply::update_cap(&session).await?,
        Commands::Transfer { to, amount } => {
            commands::transfer::transfer(&session, to, *amount).await?
        }
        Commands::BatchTransfer { entries } => {
            commands::transfer::batch_transfer(&session, entries).await?
        }
        Commands::Approve { spender, amount } => {
            commands::transfer::approve(&session, spender, *amount).await?
        }
        Commands::TransferFrom { from, to, amount } => {
            commands::transfer::transfer_from(&session, from, to, *amount).await?
        }
        Commands::Stake(cmd) => commands::stake::run(&session, cmd).await?,
        Commands::Admin(cmd) => commands::admin::run(&session, cmd).await?,
        Commands::Balance { account, spender } => {
            commands::status::balance(&session, account, spender.as_deref()).await?
        }
        Commands::Status => commands::status::run(&session).await?,
    }

    Ok(())
}
