//! Create pool instruction handler.
//!
//! Registers a new pool with its own vaults and emission parameters.
//!
//! ## Security Guarantees
//! - Only the pool manager role can create pools
//! - Vaults are PDAs with the pool PDA as token authority
//! - Pool ids are sequential and never reused

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::auth::{Authorizer, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolCreated;
use crate::state::{Config, Pool, PoolParams};

/// Accounts required for pool creation.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// Holder of the pool manager role; pays for the new accounts.
    #[account(mut)]
    pub pool_manager: Signer<'info>,

    /// Global config; supplies the next pool id.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The pool account to be created.
    /// SECURITY: PDA derived from the sequential pool id.
    #[account(
        init,
        payer = pool_manager,
        space = Pool::LEN,
        seeds = [POOL_SEED, &config.pool_count.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Mint of the asset stakers lock.
    pub staking_mint: Account<'info, Mint>,

    /// Mint of the asset paid as reward.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding staked principal.
    #[account(
        init,
        payer = pool_manager,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Vault holding reward tokens.
    #[account(
        init,
        payer = pool_manager,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Create a new pool.
///
/// # Arguments
/// * `ctx` - CreatePool accounts context
/// * `params` - Emission rate, minimum stake, penalty rate and end time
///
/// # Returns
/// The id assigned to the new pool
pub fn handler(ctx: Context<CreatePool>, params: PoolParams) -> Result<u64> {
    ctx.accounts
        .config
        .require_role(&ctx.accounts.pool_manager.key(), Role::PoolManager)?;

    require!(
        ctx.accounts.staking_mint.key() != ctx.accounts.reward_mint.key(),
        StakingError::IdenticalMints
    );

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool_id = ctx.accounts.config.next_pool_id()?;

    let pool = &mut ctx.accounts.pool;
    pool.open(&params, clock.unix_timestamp)?;

    pool.id = pool_id;
    pool.staking_mint = ctx.accounts.staking_mint.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.staking_vault = ctx.accounts.staking_vault.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.bump = ctx.bumps.pool;
    pool.staking_vault_bump = ctx.bumps.staking_vault;
    pool.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("Pool {} created", pool_id);
    msg!("Staking mint: {}", pool.staking_mint);
    msg!("Reward mint: {}", pool.reward_mint);
    msg!(
        "Reward/s: {}, min stake: {}, penalty: {}bp, window: {}..{}",
        pool.reward_per_second,
        pool.min_stake,
        pool.penalty_bps,
        pool.start_time,
        pool.end_time
    );

    emit!(PoolCreated {
        pool_id,
        pool: pool_key,
        staking_mint: pool.staking_mint,
        reward_mint: pool.reward_mint,
        reward_per_second: pool.reward_per_second,
        min_stake: pool.min_stake,
        penalty_bps: pool.penalty_bps,
        start_time: pool.start_time,
        end_time: pool.end_time,
    });

    Ok(pool_id)
}
