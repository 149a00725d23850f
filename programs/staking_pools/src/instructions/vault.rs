//! Token movements out of a pool's vaults.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::POOL_SEED;
use crate::error::StakingError;
use crate::state::Pool;

/// Fails with `InsufficientRewardFunds` when the reward vault holds less than
/// `owed`. The whole instruction then reverts, principal transfers included.
pub fn require_reward_funds(vault_balance: u64, owed: u64) -> Result<()> {
    require!(vault_balance >= owed, StakingError::InsufficientRewardFunds);
    Ok(())
}

/// Transfer `amount` out of one of `pool`'s vaults, signing with the pool PDA.
///
/// A zero amount issues no CPI.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    pool: &Account<'info, Pool>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let pool_id = pool.id.to_le_bytes();
    let seeds = &[POOL_SEED, pool_id.as_ref(), &[pool.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: destination.to_account_info(),
        authority: pool.to_account_info(),
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_funds_cover_owed_amount() {
        assert!(require_reward_funds(10, 10).is_ok());
        assert!(require_reward_funds(0, 0).is_ok());
        assert_eq!(
            require_reward_funds(9, 10).unwrap_err(),
            StakingError::InsufficientRewardFunds.into()
        );
    }
}
