// crates/arbor-cli/src/commands/admin.rs
//
// `arbor admin {pause, unpause, set-minter, transfer-admin, set-governance}`:
// role and pause management.

use arbor_core::ArborError;
use clap::Subcommand;

use super::{parse_address, Session};
use crate::output;

/// Administrative subcommands. Every one requires the caller to be the admin.
#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// Halt transfers, burns, approvals and staking.
    Pause,
    /// Resume normal operation.
    Unpause,
    /// Grant or revoke minting rights.
    SetMinter {
        /// Account address or label.
        target: String,
        /// Revoke instead of grant.
        #[arg(long)]
        revoke: bool,
    },
    /// Hand the admin role to another account.
    TransferAdmin {
        /// New admin address or label.
        new_admin: String,
    },
    /// Replace the governance account.
    SetGovernance {
        /// New governance address or label.
        new_governance: String,
    },
}

/// Run the admin subcommand.
pub async fn run(session: &Session, cmd: &AdminCmd) -> Result<(), ArborError> {
    let caller = session.caller()?;
    match cmd {
        AdminCmd::Pause | AdminCmd::Unpause => {
            let pause = matches!(cmd, AdminCmd::Pause);
            let paused = session
                .execute(|token| token.set_paused(&caller, pause))
                .await?;
            let name = if pause { "pause" } else { "unpause" };
            output::print_op(session.format, name, Some(format!("paused={}", paused)));
        }
        AdminCmd::SetMinter { target, revoke } => {
            let target = parse_address(target);
            let can_mint = !*revoke;
            session
                .execute(|token| token.set_minter(&caller, target, can_mint))
                .await?;
            output::print_op(
                session.format,
                "set-minter",
                Some(format!("{} can_mint={}", target.short(), can_mint)),
            );
        }
        AdminCmd::TransferAdmin { new_admin } => {
            let new_admin = parse_address(new_admin);
            session
                .execute(|token| token.transfer_admin(&caller, new_admin))
                .await?;
            output::print_op(session.format, "transfer-admin", Some(new_admin.to_string()));
        }
        AdminCmd::SetGovernance { new_governance } => {
            let new_governance = parse_address(new_governance);
            session
                .execute(|token| token.set_governance(&caller, new_governance))
                .await?;
            output::print_op(session.format, "set-governance", Some(new_governance.to_string()));
        }
    }
    Ok(())
}
