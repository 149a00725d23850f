//! Claim rewards instruction handler.
//!
//! Handles claiming accumulated rewards without unstaking. Claiming is the
//! same settlement a top-up stake performs, so it carries no penalty and
//! stays available while the program is paused.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::instructions::vault::{require_reward_funds, transfer_from_vault};
use crate::state::{Pool, StakePosition};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
    pub staker: Signer<'info>,

    /// The pool.
    #[account(
        mut,
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// Staker's position.
    #[account(
        mut,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == staker.key() @ StakingError::Unauthorized,
        constraint = position.pool == pool.key() @ StakingError::InvalidPool
    )]
    pub position: Account<'info, StakePosition>,

    /// Staker's token account receiving rewards.
    #[account(
        mut,
        constraint = staker_reward_account.mint == pool.reward_mint @ StakingError::MintMismatch,
        constraint = staker_reward_account.owner == staker.key() @ StakingError::InvalidTokenOwner
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
/// * `pool_id` - Id of the pool to claim from
///
/// # Returns
/// The amount of reward paid
pub fn handler(mut ctx: Context<ClaimRewards>, pool_id: u64) -> Result<u64> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let reward = accounts.position.claim(&mut accounts.pool, now)?;

    require_reward_funds(accounts.reward_vault.amount, reward)?;

    transfer_from_vault(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.staker_reward_account,
        &accounts.pool,
        reward,
    )?;

    msg!("Claimed {} reward tokens from pool {}", reward, pool_id);
    msg!(
        "Total rewards claimed by user: {}",
        accounts.position.total_rewards_claimed
    );
    msg!("Total paid from pool: {}", accounts.pool.total_rewards_paid);

    if reward > 0 {
        emit!(RewardClaimed {
            pool_id,
            staker: accounts.staker.key(),
            amount: reward,
            timestamp: now,
        });
    }

    Ok(reward)
}
