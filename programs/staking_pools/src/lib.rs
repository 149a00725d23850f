//! # Staking Pools Program
//!
//! A multi-pool staking program. Each pool locks one token and streams a
//! second token to its stakers at an admin-set rate per second, split in
//! proportion to each staker's share of the pool.
//!
//! ## Features
//! - Lazy per-share reward accrual (constant cost per instruction)
//! - Auto-claim of earned reward on stake top-up
//! - Time-decaying early-exit penalty routed to a treasury
//! - Guardian pause and emergency exit; exits stay open while paused
//! - Role-based admin (authority, pool manager, guardian)
//! - Checked fixed-point math with overflow protection

use anchor_lang::prelude::*;

declare_id!("Gg2X5sUzGZMWsKx7syKRiv3Sf5Cbyjy58QqUHHkhDmPr");

pub mod auth;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod penalty;
pub mod state;

use auth::Role;
use instructions::*;
use state::PoolParams;

#[program]
pub mod staking_pools {
    use super::*;

    /// Creates the global config. The deployer receives every role.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `treasury` - Wallet owning the token accounts that receive penalties
    pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, treasury)
    }

    /// Creates a pool and its vaults. Returns the new pool id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the pool manager
    /// - Penalty exceeds 10000 bp or reward rate exceeds the safe bound
    /// - End time is not after the current time, or the window is too long
    pub fn create_pool(ctx: Context<CreatePool>, params: PoolParams) -> Result<u64> {
        instructions::create_pool::handler(ctx, params)
    }

    /// Replaces a pool's parameters after settling accrual at the old rate.
    ///
    /// # Errors
    /// Returns an error if the caller is not the pool manager or the
    /// parameters are invalid.
    pub fn update_pool(ctx: Context<UpdatePool>, pool_id: u64, params: PoolParams) -> Result<()> {
        instructions::update_pool::handler(ctx, pool_id, params)
    }

    /// Deposits reward tokens into a pool's reward vault.
    pub fn fund_rewards(ctx: Context<FundRewards>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, pool_id, amount)
    }

    /// Stakes tokens into a pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `pool_id` - Pool to stake into
    /// * `amount` - Amount of tokens to stake
    ///
    /// # Errors
    /// Returns an error if:
    /// - Staking is paused
    /// - Amount is below the pool minimum
    /// - Reward vault cannot cover the auto-claimed reward
    pub fn stake(ctx: Context<Stake>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, pool_id, amount)
    }

    /// Withdraws staked tokens, applying the early-exit penalty before unlock.
    ///
    /// # Errors
    /// Returns an error if the amount exceeds the staked balance.
    pub fn withdraw(ctx: Context<Withdraw>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, pool_id, amount)
    }

    /// Claims accumulated rewards without unstaking.
    pub fn claim_rewards(ctx: Context<ClaimRewards>, pool_id: u64) -> Result<u64> {
        instructions::claim_rewards::handler(ctx, pool_id)
    }

    /// Guardian-only: returns a staker's full principal and forfeits reward.
    ///
    /// # Errors
    /// Returns an error if the caller is not the guardian or the position is empty.
    pub fn emergency_exit(ctx: Context<EmergencyExit>, pool_id: u64) -> Result<()> {
        instructions::emergency_exit::handler(ctx, pool_id)
    }

    /// Guardian-only: pauses or resumes staking.
    pub fn set_paused(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, paused)
    }

    /// Authority-only: assigns a role to a new holder.
    pub fn set_role(ctx: Context<AdminControl>, role: Role, member: Pubkey) -> Result<()> {
        instructions::admin::set_role_handler(ctx, role, member)
    }

    /// Authority-only: changes the treasury wallet.
    pub fn set_treasury(ctx: Context<AdminControl>, treasury: Pubkey) -> Result<()> {
        instructions::admin::set_treasury_handler(ctx, treasury)
    }

    /// Authority-only: advances the config schema version.
    pub fn migrate(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::migrate_handler(ctx)
    }

    /// Authority-only: advances one pool's schema version.
    pub fn migrate_pool(ctx: Context<MigratePool>, pool_id: u64) -> Result<()> {
        instructions::admin::migrate_pool_handler(ctx, pool_id)
    }

    /// Reward a staker would receive if their position settled now.
    pub fn pending_reward(ctx: Context<ViewPosition>, _pool_id: u64, _staker: Pubkey) -> Result<u64> {
        instructions::views::pending_reward_handler(ctx)
    }

    /// Total principal currently staked in a pool.
    pub fn total_value_locked(ctx: Context<ViewPool>, _pool_id: u64) -> Result<u64> {
        instructions::views::total_value_locked_handler(ctx)
    }

    /// Unlock time of a staker's position.
    pub fn unlock_time_of(ctx: Context<ViewPosition>, _pool_id: u64, _staker: Pubkey) -> Result<i64> {
        instructions::views::unlock_time_of_handler(ctx)
    }
}
