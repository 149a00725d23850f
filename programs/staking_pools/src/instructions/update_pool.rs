//! Update pool instruction handler.
//!
//! Changes a pool's emission rate, minimum stake, penalty rate or end time.
//! The accumulator is brought up to date under the old rate before any
//! parameter is overwritten.

use anchor_lang::prelude::*;

use crate::auth::{Authorizer, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolUpdated;
use crate::state::{Config, Pool, PoolParams};

/// Accounts required for updating a pool.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct UpdatePool<'info> {
    /// Holder of the pool manager role.
    pub pool_manager: Signer<'info>,

    /// Global config.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The pool to modify.
    #[account(
        mut,
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool
    )]
    pub pool: Account<'info, Pool>,
}

/// Update a pool's parameters.
///
/// # Arguments
/// * `ctx` - UpdatePool accounts context
/// * `pool_id` - Id of the pool to update
/// * `params` - New parameters; all four fields are replaced
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<UpdatePool>, pool_id: u64, params: PoolParams) -> Result<()> {
    ctx.accounts
        .config
        .require_role(&ctx.accounts.pool_manager.key(), Role::PoolManager)?;

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    msg!(
        "Updating pool {} - Old: reward/s={}, min stake={}, penalty={}bp, end={}",
        pool_id,
        pool.reward_per_second,
        pool.min_stake,
        pool.penalty_bps,
        pool.end_time
    );

    pool.apply_update(&params, clock.unix_timestamp)?;

    msg!(
        "New: reward/s={}, min stake={}, penalty={}bp, end={}",
        pool.reward_per_second,
        pool.min_stake,
        pool.penalty_bps,
        pool.end_time
    );

    emit!(PoolUpdated {
        pool_id,
        reward_per_second: pool.reward_per_second,
        min_stake: pool.min_stake,
        penalty_bps: pool.penalty_bps,
        end_time: pool.end_time,
        acc_reward_per_share: pool.acc_reward_per_share,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
