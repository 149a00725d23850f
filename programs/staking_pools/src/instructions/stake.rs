//! Stake instruction handler.
//!
//! Handles locking staking tokens into a pool. A top-up on an existing
//! position auto-claims the reward earned so far.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::auth::Authorizer;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::{RewardClaimed, Staked};
use crate::instructions::vault::{require_reward_funds, transfer_from_vault};
use crate::state::{Config, Pool, StakePosition};

/// Accounts required for staking.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub staker: Signer<'info>,

    /// Global config; staking is blocked while paused.
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
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// Staker's position (created on first stake).
    #[account(
        init_if_needed,
        payer = staker,
        space = StakePosition::LEN,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub position: Account<'info, StakePosition>,

    /// Staker's token account for the staking mint.
    #[account(
        mut,
        constraint = staker_token_account.mint == pool.staking_mint @ StakingError::MintMismatch,
        constraint = staker_token_account.owner == staker.key() @ StakingError::InvalidTokenOwner
    )]
    pub staker_token_account: Account<'info, TokenAccount>,

    /// Staker's token account receiving auto-claimed rewards.
    #[account(
        mut,
        constraint = staker_reward_account.mint == pool.reward_mint @ StakingError::MintMismatch,
        constraint = staker_reward_account.owner == staker.key() @ StakingError::InvalidTokenOwner
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into a pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `pool_id` - Id of the pool to stake into
/// * `amount` - Amount of tokens to stake (at least the pool minimum)
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, pool_id: u64, amount: u64) -> Result<()> {
    ctx.accounts.config.require_not_paused()?;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    ctx.accounts.pool.accrue(now)?;
    let claimed = ctx
        .accounts
        .position
        .begin_stake(&ctx.accounts.pool, amount)?;
    require_reward_funds(ctx.accounts.reward_vault.amount, claimed)?;

    // Pull principal before the position is credited
    let cpi_accounts = Transfer {
        from: ctx.accounts.staker_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.staker.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let staker = ctx.accounts.staker.key();
    let pool_key = ctx.accounts.pool.key();
    let position = &mut ctx.accounts.position;

    if position.owner == Pubkey::default() {
        position.owner = staker;
        position.pool = pool_key;
        position.bump = ctx.bumps.position;
    }
    position.commit_stake(&mut ctx.accounts.pool, amount, claimed)?;

    let staked_total = position.amount;
    let unlock_time = position.unlock_time;

    // State is final; pay out the auto-claimed reward
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_vault,
        &ctx.accounts.staker_reward_account,
        &ctx.accounts.pool,
        claimed,
    )?;

    msg!("Staked {} tokens in pool {}", amount, pool_id);
    msg!("Total staked by user: {}", staked_total);
    msg!("Pool total staked: {}", ctx.accounts.pool.total_staked);

    emit!(Staked {
        pool_id,
        staker,
        amount,
        staked_total,
        unlock_time,
        timestamp: now,
    });

    if claimed > 0 {
        msg!("Auto-claimed {} reward tokens", claimed);
        emit!(RewardClaimed {
            pool_id,
            staker,
            amount: claimed,
            timestamp: now,
        });
    }

    Ok(())
}
