// crates/arbor-token/src/access.rs
//
// Access control: the administrator, the governance identity, and the
// per-address role map.
//
// Only `can_mint` is consulted by authorization today. `can_govern` is
// stored and preserved across `set_minter` calls but grants nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use arbor_core::{Address, TokenError};

/// Per-address role record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// May call `mint`.
    pub can_mint: bool,
    /// Reserved for governance actions; not consumed by any check.
    pub can_govern: bool,
}

/// Privileged identities and role assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    admin: Address,
    governance: Address,
    #[serde(default)]
    roles: BTreeMap<Address, Role>,
}

impl AccessControl {
    /// Deploy-time access control: the deployer is both admin and governance.
    pub fn new(deployer: Address) -> Self {
        Self {
            admin: deployer,
            governance: deployer,
            roles: BTreeMap::new(),
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn governance(&self) -> Address {
        self.governance
    }

    /// Role record for an address. Absent entries read as no roles.
    pub fn role_of(&self, who: &Address) -> Role {
        self.roles.get(who).copied().unwrap_or_default()
    }

    /// All explicit role records, ordered by address.
    pub fn roles(&self) -> impl Iterator<Item = (&Address, &Role)> {
        self.roles.iter()
    }

    pub fn is_admin(&self, caller: &Address) -> bool {
        *caller == self.admin
    }

    /// Admin also counts as governance.
    pub fn is_governance(&self, caller: &Address) -> bool {
        self.is_admin(caller) || *caller == self.governance
    }

    pub fn is_minter(&self, caller: &Address) -> bool {
        self.is_admin(caller) || self.role_of(caller).can_mint
    }

    /// Fail with `Unauthorized` unless `caller` is the admin.
    pub fn ensure_admin(&self, caller: &Address) -> Result<(), TokenError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            tracing::debug!(caller = %caller.short(), "Rejected: caller is not admin");
            Err(TokenError::Unauthorized)
        }
    }

    /// Replace the administrator.
    ///
    /// # Errors
    /// `Unauthorized` if `caller` is not admin, `InvalidAddress` if
    /// `new_admin` is the null address.
    pub fn transfer_admin(&mut self, caller: &Address, new_admin: Address) -> Result<(), TokenError> {
        self.ensure_admin(caller)?;
        if new_admin.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        tracing::info!(from = %self.admin.short(), to = %new_admin.short(), "Admin transferred");
        self.admin = new_admin;
        Ok(())
    }

    /// Replace the governance identity. Same checks as `transfer_admin`.
    pub fn set_governance(
        &mut self,
        caller: &Address,
        new_governance: Address,
    ) -> Result<(), TokenError> {
        self.ensure_admin(caller)?;
        if new_governance.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        tracing::info!(governance = %new_governance.short(), "Governance updated");
        self.governance = new_governance;
        Ok(())
    }

    /// Grant or revoke the minter role, preserving the target's `can_govern`.
    pub fn set_minter(
        &mut self,
        caller: &Address,
        target: Address,
        can_mint: bool,
    ) -> Result<(), TokenError> {
        self.ensure_admin(caller)?;
        if target.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        let role = self.roles.entry(target).or_default();
        role.can_mint = can_mint;
        tracing::info!(target = %target.short(), can_mint, "Minter role updated");
        Ok(())
    }
}
