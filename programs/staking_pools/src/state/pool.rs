use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::math;

/// Admin-supplied emission and penalty parameters for a pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolParams {
    pub reward_per_second: u64,
    pub min_stake: u64,
    pub penalty_bps: u16,
    pub end_time: i64,
}

impl PoolParams {
    /// Rejects parameters that could overflow accrual or break the penalty window.
    pub fn validate(&self, start_time: i64) -> Result<()> {
        require!(
            self.penalty_bps <= MAX_PENALTY_BPS,
            StakingError::InvalidPenaltyRate
        );
        require!(
            self.reward_per_second <= MAX_REWARD_PER_SECOND,
            StakingError::RewardRateTooHigh
        );
        require!(self.end_time > start_time, StakingError::InvalidPool);

        let window = self
            .end_time
            .checked_sub(start_time)
            .ok_or(StakingError::MathOverflow)?;
        require!(
            window <= MAX_POOL_DURATION,
            StakingError::PoolDurationTooLong
        );

        // Emission over the whole window must fit a token supply. That caps
        // `acc_reward_per_share` at `u64::MAX * SCALE` even with a single
        // unit staked, so `amount * acc / SCALE` always fits in u128.
        (window as u64)
            .checked_mul(self.reward_per_second)
            .ok_or(StakingError::RewardRateTooHigh)?;

        Ok(())
    }
}

#[account]
pub struct Pool {
    pub id: u64,

    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,

    pub reward_per_second: u64,
    pub min_stake: u64,
    pub penalty_bps: u16,

    pub start_time: i64,
    pub end_time: i64,

    pub total_staked: u64,
    /// Cumulative reward per staked unit, scaled by `SCALE`.
    pub acc_reward_per_share: u128,
    pub last_accrual_time: i64,

    pub total_rewards_paid: u64,
    pub total_penalties: u64,
    pub staker_count: u64,

    pub schema_version: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 8
        + 8
        + (32 * 4)
        + (8 * 2)
        + 2
        + (8 * 2)
        + 8
        + 16
        + 8
        + (8 * 3)
        + 4;

    /// Seeds the accounting fields of a freshly created pool.
    pub fn open(&mut self, params: &PoolParams, now: i64) -> Result<()> {
        params.validate(now)?;

        self.reward_per_second = params.reward_per_second;
        self.min_stake = params.min_stake;
        self.penalty_bps = params.penalty_bps;
        self.start_time = now;
        self.end_time = params.end_time;

        self.total_staked = 0;
        self.acc_reward_per_share = 0;
        self.last_accrual_time = now;

        self.total_rewards_paid = 0;
        self.total_penalties = 0;
        self.staker_count = 0;
        self.schema_version = CURRENT_SCHEMA_VERSION;

        Ok(())
    }

    /// Replaces the pool's parameters.
    ///
    /// Accrual runs under the old rate first, so the change only applies
    /// from `now` onward.
    pub fn apply_update(&mut self, params: &PoolParams, now: i64) -> Result<()> {
        params.validate(self.start_time)?;
        self.accrue(now)?;

        self.reward_per_second = params.reward_per_second;
        self.min_stake = params.min_stake;
        self.penalty_bps = params.penalty_bps;
        self.end_time = params.end_time;

        Ok(())
    }

    /// Accumulator value as if `accrue(now)` ran, without mutating the pool.
    pub fn projected_acc_reward_per_share(&self, now: i64) -> Result<u128> {
        if now <= self.last_accrual_time || self.total_staked == 0 {
            return Ok(self.acc_reward_per_share);
        }

        let elapsed = now
            .checked_sub(self.last_accrual_time)
            .ok_or(StakingError::MathOverflow)? as u64;
        let delta =
            math::reward_per_share_delta(elapsed, self.reward_per_second, self.total_staked)?;

        self.acc_reward_per_share
            .checked_add(delta)
            .ok_or(StakingError::MathOverflow.into())
    }

    /// Advances the accumulator to `now`.
    ///
    /// Time that passes while nothing is staked is skipped: the clock moves
    /// but the accumulator does not, so that emission is owed to nobody.
    pub fn accrue(&mut self, now: i64) -> Result<()> {
        if now <= self.last_accrual_time {
            return Ok(());
        }
        self.acc_reward_per_share = self.projected_acc_reward_per_share(now)?;
        self.last_accrual_time = now;
        Ok(())
    }

    /// Advances the pool's schema to the current version, returning the
    /// previous one.
    pub fn migrate(&mut self) -> Result<u8> {
        require!(
            self.schema_version < CURRENT_SCHEMA_VERSION,
            StakingError::SchemaUpToDate
        );
        let previous = self.schema_version;
        self.schema_version = CURRENT_SCHEMA_VERSION;
        Ok(previous)
    }

    /// Length of the penalty decay window.
    pub fn lock_window(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::AccountingFault)?;
        Ok(())
    }

    pub fn record_reward_paid(&mut self, reward: u64) -> Result<()> {
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_penalty(&mut self, penalty: u64) -> Result<()> {
        self.total_penalties = self
            .total_penalties
            .checked_add(penalty)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn empty_pool() -> Pool {
        Pool {
            id: 0,
            staking_mint: Pubkey::default(),
            reward_mint: Pubkey::default(),
            staking_vault: Pubkey::default(),
            reward_vault: Pubkey::default(),
            reward_per_second: 0,
            min_stake: 0,
            penalty_bps: 0,
            start_time: 0,
            end_time: 0,
            total_staked: 0,
            acc_reward_per_share: 0,
            last_accrual_time: 0,
            total_rewards_paid: 0,
            total_penalties: 0,
            staker_count: 0,
            schema_version: 0,
            staking_vault_bump: 0,
            reward_vault_bump: 0,
            bump: 0,
        }
    }

    pub(crate) fn open_pool(params: PoolParams, now: i64) -> Pool {
        let mut pool = empty_pool();
        pool.open(&params, now).unwrap();
        pool
    }

    fn params(reward_per_second: u64) -> PoolParams {
        PoolParams {
            reward_per_second,
            min_stake: 10,
            penalty_bps: 1_000,
            end_time: 1_000,
        }
    }

    #[test]
    fn open_seeds_clock_and_empty_totals() {
        let pool = open_pool(params(1), 0);
        assert_eq!(pool.last_accrual_time, 0);
        assert_eq!(pool.start_time, 0);
        assert_eq!(pool.total_staked, 0);
        assert_eq!(pool.acc_reward_per_share, 0);
        assert_eq!(pool.lock_window(), 1_000);
        assert_eq!(pool.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn params_validation() {
        let mut bad = params(1);
        bad.penalty_bps = 10_001;
        assert_eq!(bad.validate(0).unwrap_err(), StakingError::InvalidPenaltyRate.into());

        let mut bad = params(MAX_REWARD_PER_SECOND + 1);
        assert_eq!(bad.validate(0).unwrap_err(), StakingError::RewardRateTooHigh.into());

        bad = params(1);
        bad.end_time = 0;
        assert_eq!(bad.validate(0).unwrap_err(), StakingError::InvalidPool.into());

        bad.end_time = MAX_POOL_DURATION + 1;
        assert_eq!(bad.validate(0).unwrap_err(), StakingError::PoolDurationTooLong.into());

        // 10^15/s for ten years is more than a u64 supply can emit
        bad = params(MAX_REWARD_PER_SECOND);
        bad.end_time = MAX_POOL_DURATION;
        assert_eq!(bad.validate(0).unwrap_err(), StakingError::RewardRateTooHigh.into());

        let mut full = params(MAX_REWARD_PER_SECOND);
        full.penalty_bps = MAX_PENALTY_BPS;
        assert!(full.validate(0).is_ok());
    }

    #[test]
    fn empty_pool_only_advances_clock() {
        let mut pool = open_pool(params(5), 0);
        pool.accrue(1_000).unwrap();
        assert_eq!(pool.acc_reward_per_share, 0);
        assert_eq!(pool.last_accrual_time, 1_000);
    }

    #[test]
    fn accrue_is_idempotent_at_same_instant() {
        let mut pool = open_pool(params(3), 0);
        pool.add_stake(100).unwrap();
        pool.accrue(50).unwrap();
        let snapshot = (pool.acc_reward_per_share, pool.last_accrual_time);
        pool.accrue(50).unwrap();
        assert_eq!((pool.acc_reward_per_share, pool.last_accrual_time), snapshot);
    }

    #[test]
    fn accrue_ignores_earlier_timestamps() {
        let mut pool = open_pool(params(3), 0);
        pool.add_stake(100).unwrap();
        pool.accrue(50).unwrap();
        let acc = pool.acc_reward_per_share;
        pool.accrue(20).unwrap();
        assert_eq!(pool.last_accrual_time, 50);
        assert_eq!(pool.acc_reward_per_share, acc);
    }

    #[test]
    fn projection_matches_accrual() {
        let mut pool = open_pool(params(7), 0);
        pool.add_stake(33).unwrap();
        let projected = pool.projected_acc_reward_per_share(123).unwrap();
        pool.accrue(123).unwrap();
        assert_eq!(pool.acc_reward_per_share, projected);
    }

    #[test]
    fn update_settles_old_rate_first() {
        let mut pool = open_pool(params(1), 0);
        pool.add_stake(100).unwrap();

        pool.apply_update(&params(10), 100).unwrap();
        // 100s at the old rate of 1/s over 100 staked
        assert_eq!(pool.acc_reward_per_share, SCALE);
        assert_eq!(pool.reward_per_second, 10);

        pool.accrue(200).unwrap();
        // plus 100s at 10/s
        assert_eq!(pool.acc_reward_per_share, 11 * SCALE);
    }

    #[test]
    fn rejected_update_leaves_pool_untouched() {
        let mut pool = open_pool(params(1), 0);
        pool.add_stake(100).unwrap();
        let mut bad = params(1);
        bad.penalty_bps = 20_000;

        assert!(pool.apply_update(&bad, 100).is_err());
        assert_eq!(pool.last_accrual_time, 0);
        assert_eq!(pool.acc_reward_per_share, 0);
        assert_eq!(pool.penalty_bps, 1_000);
    }

    #[test]
    fn migrate_leaves_accounting_alone() {
        let mut pool = open_pool(params(1), 0);
        pool.add_stake(100).unwrap();
        pool.accrue(10).unwrap();
        pool.schema_version = 0;

        assert_eq!(pool.migrate().unwrap(), 0);
        assert_eq!(pool.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(pool.acc_reward_per_share, SCALE / 10);
        assert_eq!(pool.total_staked, 100);
        assert_eq!(
            pool.migrate().unwrap_err(),
            StakingError::SchemaUpToDate.into()
        );
    }

    #[test]
    fn remove_more_than_staked_is_an_accounting_fault() {
        let mut pool = open_pool(params(1), 0);
        pool.add_stake(5).unwrap();
        assert_eq!(
            pool.remove_stake(6).unwrap_err(),
            StakingError::AccountingFault.into()
        );
    }
}
