//! Admin instruction handlers.
//!
//! Handles config-level operations: pause, role assignment, treasury and
//! schema migration of the config and of individual pools.
//!
//! ## Security Guarantees
//! - Every handler checks the caller's role before touching state
//! - Pause only gates staking and funding; exits stay open
//! - Roles and treasury cannot be set to the default pubkey

use anchor_lang::prelude::*;

use crate::auth::{Authorizer, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::{Migrated, PauseToggled, PoolMigrated, RoleGranted, TreasuryUpdated};
use crate::state::{Config, Pool};

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The caller; must hold the role the handler requires.
    pub admin: Signer<'info>,

    /// The config to modify.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

/// Accounts required for migrating a pool.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct MigratePool<'info> {
    /// Holder of the authority role.
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPool
    )]
    pub pool: Account<'info, Pool>,
}

/// Set the paused state.
///
/// # Security
/// - Only the guardian can call this
/// - When paused, new stakes and reward funding are blocked
/// - Withdraw, claim and emergency exit remain available
pub fn set_paused_handler(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    config.require_role(&admin, Role::Guardian)?;

    let clock = Clock::get()?;
    let previous_state = config.paused;
    config.paused = paused;

    msg!(
        "Staking {} (was {})",
        if paused { "PAUSED" } else { "RESUMED" },
        if previous_state { "paused" } else { "active" }
    );
    msg!("Guardian: {}", admin);

    emit!(PauseToggled {
        paused,
        guardian: admin,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Assign `role` to `member`, replacing the previous holder.
///
/// # Security
/// - Only the authority can call this
/// - Reassigning `Role::Authority` hands over the config
pub fn set_role_handler(ctx: Context<AdminControl>, role: Role, member: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    config.require_role(&admin, Role::Authority)?;

    let previous = config.role_member(role);
    config.set_role_member(role, member)?;

    msg!("Role {:?}: {} -> {}", role, previous, member);

    emit!(RoleGranted {
        role,
        member,
        granted_by: admin,
    });

    Ok(())
}

/// Point penalty payouts at a new treasury wallet.
pub fn set_treasury_handler(ctx: Context<AdminControl>, treasury: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    config.require_role(&admin, Role::Authority)?;

    require!(treasury != Pubkey::default(), StakingError::InvalidAuthority);

    let old_treasury = config.treasury;
    config.treasury = treasury;

    msg!("Treasury updated: {} -> {}", old_treasury, treasury);

    emit!(TreasuryUpdated {
        old_treasury,
        new_treasury: treasury,
    });

    Ok(())
}

/// Advance the config's data schema to the version this build writes.
pub fn migrate_handler(ctx: Context<AdminControl>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    config.require_role(&admin, Role::Authority)?;

    let from_version = config.migrate()?;

    msg!("Schema migrated: v{} -> v{}", from_version, CURRENT_SCHEMA_VERSION);

    emit!(Migrated {
        from_version,
        to_version: CURRENT_SCHEMA_VERSION,
    });

    Ok(())
}

/// Advance one pool's data schema. Pools are migrated one instruction at a
/// time so no single transaction has to touch every pool.
pub fn migrate_pool_handler(ctx: Context<MigratePool>, pool_id: u64) -> Result<()> {
    ctx.accounts
        .config
        .require_role(&ctx.accounts.admin.key(), Role::Authority)?;

    let from_version = ctx.accounts.pool.migrate()?;

    msg!(
        "Pool {} schema migrated: v{} -> v{}",
        pool_id,
        from_version,
        CURRENT_SCHEMA_VERSION
    );

    emit!(PoolMigrated {
        pool_id,
        from_version,
        to_version: CURRENT_SCHEMA_VERSION,
    });

    Ok(())
}
