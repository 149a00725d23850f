//! Initialize instruction handler.
//!
//! Creates the global config that holds roles, treasury and the pause flag.
//!
//! ## Security Guarantees
//! - Config is a singleton PDA; a second initialize fails at account creation
//! - Every role starts with the deployer and can be reassigned later

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::ConfigInitialized;
use crate::state::Config;

/// Accounts required for config initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The deployer; receives every role.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The config account to be created.
    #[account(
        init,
        payer = authority,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the program config.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `treasury` - Wallet owning the token accounts that receive penalties
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
    require!(treasury != Pubkey::default(), StakingError::InvalidAuthority);

    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.authority = authority;
    config.pool_manager = authority;
    config.guardian = authority;
    config.treasury = treasury;
    config.paused = false;
    config.pool_count = 0;
    config.schema_version = CURRENT_SCHEMA_VERSION;
    config.bump = ctx.bumps.config;

    msg!("Staking pools config initialized");
    msg!("Authority: {}", authority);
    msg!("Treasury: {}", treasury);

    emit!(ConfigInitialized {
        authority,
        treasury,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
