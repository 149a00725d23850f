//! Fund rewards instruction handler.
//!
//! Handles depositing reward tokens into a pool's reward vault.
//!
//! ## Security Guarantees
//! - Reward vault must match the pool's stored vault
//! - Mint validation prevents wrong token deposits
//! - Anyone can fund (no admin restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::auth::Authorizer;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::state::{Config, Pool};

/// Accounts required for funding a pool's rewards.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct FundRewards<'info> {
    /// The funder (anyone can fund - no admin restriction).
    pub funder: Signer<'info>,

    /// Global config; funding is blocked while paused.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The pool being funded.
    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == pool.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::InvalidTokenOwner
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund a pool's reward vault.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `pool_id` - Id of the pool to fund
/// * `amount` - Amount of reward tokens to deposit
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<FundRewards>, pool_id: u64, amount: u64) -> Result<()> {
    ctx.accounts.config.require_not_paused()?;
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Reload vault to get updated balance
    ctx.accounts.reward_vault.reload()?;
    let vault_balance = ctx.accounts.reward_vault.amount;

    msg!("Pool {} reward vault funded with {} tokens", pool_id, amount);
    msg!("New reward vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(RewardsFunded {
        pool_id,
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
