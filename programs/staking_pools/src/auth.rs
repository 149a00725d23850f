//! Role-based authorization.
//!
//! Admin handlers never inspect role fields directly; they go through the
//! [`Authorizer`] capability, which the global `Config` account implements.

use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Roles recognised by the program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Owns the config: grants roles, sets the treasury, runs migrations.
    Authority,
    /// Creates pools and updates their emission parameters.
    PoolManager,
    /// Pauses staking and triggers emergency exits.
    Guardian,
}

/// Authorization and pause capability consumed by admin handlers.
pub trait Authorizer {
    fn has_role(&self, caller: &Pubkey, role: Role) -> bool;

    fn is_paused(&self) -> bool;

    fn require_role(&self, caller: &Pubkey, role: Role) -> Result<()> {
        require!(self.has_role(caller, role), StakingError::Unauthorized);
        Ok(())
    }

    fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused(), StakingError::Paused);
        Ok(())
    }
}
