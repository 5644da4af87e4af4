// crates/arbor-cli/src/commands/stake.rs
//
// `arbor stake {stake, unstake, info}`: staking management commands.

use arbor_core::{Amount, ArborError};
use clap::Subcommand;

use super::{parse_address, Session};
use crate::output::{self, AccountRow, OutputFormat};

/// Staking subcommands.
#[derive(Debug, Subcommand)]
pub enum StakeCmd {
    /// Move TREE from the caller's balance into stake.
    Stake {
        /// Amount of TREE to stake, in base units.
        #[arg(long)]
        amount: Amount,
    },
    /// Return staked TREE to the caller's balance.
    Unstake {
        /// Amount of TREE to unstake, in base units.
        #[arg(long)]
        amount: Amount,
    },
    /// Show balance and stake for an account (defaults to the caller).
    Info {
        /// Account address or label.
        #[arg(long)]
        account: Option<String>,
    },
}

/// Run the stake subcommand.
pub async fn run(session: &Session, cmd: &StakeCmd) -> Result<(), ArborError> {
    match cmd {
        StakeCmd::Stake { amount } => {
            let caller = session.caller()?;
            let amount = *amount;
            let staked = session
                .execute(|token| {
                    token.stake(&caller, amount)?;
                    Ok(token.staked_of(&caller))
                })
                .await?;
            output::print_op(session.format, "stake", Some(format!("staked={}", staked)));
        }
        StakeCmd::Unstake { amount } => {
            let caller = session.caller()?;
            let amount = *amount;
            let staked = session
                .execute(|token| {
                    token.unstake(&caller, amount)?;
                    Ok(token.staked_of(&caller))
                })
                .await?;
            output::print_op(session.format, "unstake", Some(format!("staked={}", staked)));
        }
        StakeCmd::Info { account } => {
            let who = match account {
                Some(raw) => parse_address(raw),
                None => session.caller()?,
            };
            let token = session.load_token().await?;
            let rows = vec![AccountRow {
                address: who.to_string(),
                balance: token.balance_of(&who),
                staked: token.staked_of(&who),
                minter: token.is_minter(&who),
            }];
            match session.format {
                OutputFormat::Json => println!("{}", output::format_json(&rows[0])),
                OutputFormat::Table => {
                    println!("Staking Information");
                    println!("{}", output::format_table(&rows));
                    println!("Total staked: {}", token.staking().total_staked());
                }
            }
        }
    }

    Ok(())
}
