//! Withdraw instruction handler.
//!
//! Handles withdrawing staked tokens from a pool.
//!
//! Before the position's unlock time a withdrawal is early: a time-decaying
//! penalty is taken from the principal and sent to the treasury, and pending
//! reward is forfeited. Pending means accrued since the position last
//! settled; reward already taken through `claim_rewards` or a top-up stake is
//! not clawed back. From the unlock time on, principal and reward are paid in
//! full. Withdrawals stay available while the program is paused.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Withdrawn;
use crate::instructions::vault::{require_reward_funds, transfer_from_vault};
use crate::state::{Config, Pool, StakePosition};

/// Accounts required for withdrawing.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Withdraw<'info> {
    /// The user withdrawing tokens.
    pub staker: Signer<'info>,

    /// Global config; supplies the treasury wallet.
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

    /// Staker's position.
    #[account(
        mut,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == staker.key() @ StakingError::Unauthorized,
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

    /// Staker's token account receiving rewards.
    #[account(
        mut,
        constraint = staker_reward_account.mint == pool.reward_mint @ StakingError::MintMismatch,
        constraint = staker_reward_account.owner == staker.key() @ StakingError::InvalidTokenOwner
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    /// Treasury's token account for the staking mint; receives penalties.
    #[account(
        mut,
        constraint = treasury_token_account.mint == pool.staking_mint @ StakingError::MintMismatch,
        constraint = treasury_token_account.owner == config.treasury @ StakingError::TreasuryMismatch
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw tokens from a pool.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `pool_id` - Id of the pool to withdraw from
/// * `amount` - Amount of tokens to withdraw; zero settles reward only
///
/// # Errors
/// A matured withdrawal pays principal and reward together, so it fails with
/// `InsufficientRewardFunds` while the reward vault cannot cover the reward.
/// The principal then stays put until the vault is funded or the guardian
/// runs `emergency_exit`.
pub fn handler(mut ctx: Context<Withdraw>, pool_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let payout = accounts.position.withdraw(&mut accounts.pool, amount, now)?;

    require_reward_funds(accounts.reward_vault.amount, payout.reward)?;

    // Position and pool are final; move tokens
    transfer_from_vault(
        &accounts.token_program,
        &accounts.staking_vault,
        &accounts.staker_token_account,
        &accounts.pool,
        payout.principal,
    )?;
    transfer_from_vault(
        &accounts.token_program,
        &accounts.staking_vault,
        &accounts.treasury_token_account,
        &accounts.pool,
        payout.penalty,
    )?;
    transfer_from_vault(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.staker_reward_account,
        &accounts.pool,
        payout.reward,
    )?;

    msg!("Withdrew {} tokens from pool {}", amount, pool_id);
    if payout.early {
        msg!(
            "Early withdrawal: penalty {}, reward forfeited (unlocks at {})",
            payout.penalty,
            accounts.position.unlock_time
        );
    } else {
        msg!("Reward paid: {}", payout.reward);
    }
    msg!("Remaining staked: {}", accounts.position.amount);

    emit!(Withdrawn {
        pool_id,
        staker: accounts.staker.key(),
        amount,
        penalty: payout.penalty,
        reward: payout.reward,
        early: payout.early,
        timestamp: now,
    });

    Ok(())
}
