//! Read-only views, returned to clients through Anchor return data.
//!
//! Views project the accumulator to the current clock without writing it, so
//! a view followed by a settling instruction in the same slot agrees exactly.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{Pool, StakePosition};

/// Accounts for pool-level views.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool
    )]
    pub pool: Account<'info, Pool>,
}

/// Accounts for position-level views.
#[derive(Accounts)]
#[instruction(pool_id: u64, staker: Pubkey)]
pub struct ViewPosition<'info> {
    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.as_ref()],
        bump = position.bump
    )]
    pub position: Account<'info, StakePosition>,
}

pub fn pending_reward_handler(ctx: Context<ViewPosition>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .position
        .projected_reward(&ctx.accounts.pool, now)
}

pub fn total_value_locked_handler(ctx: Context<ViewPool>) -> Result<u64> {
    Ok(ctx.accounts.pool.total_staked)
}

pub fn unlock_time_of_handler(ctx: Context<ViewPosition>) -> Result<i64> {
    Ok(ctx.accounts.position.unlock_time)
}
