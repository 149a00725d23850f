//! Emergency exit instruction handler.
//!
//! Guardian-triggered return of a staker's full principal. Reward settlement
//! is skipped and pending reward is forfeited. Available while paused.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::auth::{Authorizer, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::EmergencyExited;
use crate::instructions::vault::transfer_from_vault;
use crate::state::{Config, Pool, StakePosition};

/// Accounts required for an emergency exit.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct EmergencyExit<'info> {
    /// Holder of the guardian role.
    pub guardian: Signer<'info>,

    /// Global config.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The pool.
    #[account(
        mut,
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool,
        has_one = staking_vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// The staker whose position is closed out.
    /// CHECK: Only used as a PDA seed and token account owner check.
    pub staker: UncheckedAccount<'info>,

    /// Staker's position.
    #[account(
        mut,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump = position.bump,
        constraint = position.pool == pool.key() @ StakingError::InvalidPool
    )]
    pub position: Account<'info, StakePosition>,

    /// Staker's token account receiving principal.
    #[account(
        mut,
        constraint = staker_token_account.mint == pool.staking_mint @ StakingError::MintMismatch,
        constraint = staker_token_account.owner == staker.key() @ StakingError::InvalidTokenOwner
    )]
    pub staker_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Return a staker's principal, bypassing reward settlement.
///
/// # Arguments
/// * `ctx` - EmergencyExit accounts context
/// * `pool_id` - Id of the pool
///
/// # Returns
/// Result indicating success or error
pub fn handler(mut ctx: Context<EmergencyExit>, pool_id: u64) -> Result<()> {
    ctx.accounts
        .config
        .require_role(&ctx.accounts.guardian.key(), Role::Guardian)?;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let principal = accounts.position.emergency_exit(&mut accounts.pool, now)?;

    transfer_from_vault(
        &accounts.token_program,
        &accounts.staking_vault,
        &accounts.staker_token_account,
        &accounts.pool,
        principal,
    )?;

    msg!(
        "Emergency exit: returned {} tokens to {} from pool {}",
        principal,
        accounts.staker.key(),
        pool_id
    );
    msg!("Guardian: {}", accounts.guardian.key());

    emit!(EmergencyExited {
        pool_id,
        staker: accounts.staker.key(),
        amount: principal,
        guardian: accounts.guardian.key(),
        timestamp: now,
    });

    Ok(())
}
