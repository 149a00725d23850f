use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math;
use crate::penalty::{self, Payout};
use crate::state::Pool;

/// One staker's position in one pool.
#[account]
pub struct StakePosition {
    pub owner: Pubkey,
    pub pool: Pubkey,

    pub amount: u64,
    /// `amount * acc_reward_per_share / SCALE` at the last settlement.
    pub settlement_debt: u128,
    pub unlock_time: i64,

    pub total_rewards_claimed: u64,
    pub bump: u8,
}

impl StakePosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 16 + 8 + 8 + 1;

    /// Reward earned since the last settlement at accumulator value `acc`.
    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        math::pending_reward(self.amount, acc_reward_per_share, self.settlement_debt)
    }

    /// Reward a settlement at `now` would pay, without touching any state.
    pub fn projected_reward(&self, pool: &Pool, now: i64) -> Result<u64> {
        let acc = pool.projected_acc_reward_per_share(now)?;
        self.pending_reward(acc)
    }

    fn resettle(&mut self, acc_reward_per_share: u128) -> Result<()> {
        self.settlement_debt = math::accrued_for(self.amount, acc_reward_per_share)?;
        Ok(())
    }

    fn record_claim(&mut self, pool: &mut Pool, reward: u64) -> Result<()> {
        if reward == 0 {
            return Ok(());
        }
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        pool.record_reward_paid(reward)
    }

    /// Checks a stake of `amount` against an already accrued pool and returns
    /// the reward the top-up will auto-claim. Nothing is mutated.
    pub fn begin_stake(&self, pool: &Pool, amount: u64) -> Result<u64> {
        require!(amount > 0, StakingError::ZeroAmount);
        require!(amount >= pool.min_stake, StakingError::BelowMinimumStake);

        if self.amount == 0 {
            return Ok(0);
        }
        self.pending_reward(pool.acc_reward_per_share)
    }

    /// Credits a funded stake. `claimed` is the value `begin_stake` returned
    /// against the same accumulator.
    pub fn commit_stake(&mut self, pool: &mut Pool, amount: u64, claimed: u64) -> Result<()> {
        if self.amount == 0 {
            pool.staker_count = pool.staker_count.saturating_add(1);
        }

        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.unlock_time = pool.end_time;
        self.resettle(pool.acc_reward_per_share)?;
        pool.add_stake(amount)?;

        self.record_claim(pool, claimed)
    }

    /// Withdraws `amount` at `now`, returning the token movements to perform.
    ///
    /// All position and pool fields hold their final values on return.
    pub fn withdraw(&mut self, pool: &mut Pool, amount: u64, now: i64) -> Result<Payout> {
        require!(self.amount >= amount, StakingError::InsufficientStake);

        pool.accrue(now)?;
        let pending = self.pending_reward(pool.acc_reward_per_share)?;
        let payout = penalty::withdrawal_payout(
            amount,
            pending,
            pool.penalty_bps,
            self.unlock_time,
            now,
            pool.lock_window(),
        )?;

        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(StakingError::InsufficientStake)?;
        self.resettle(pool.acc_reward_per_share)?;
        pool.remove_stake(amount)?;
        if amount > 0 && self.amount == 0 {
            pool.staker_count = pool.staker_count.saturating_sub(1);
        }

        pool.record_penalty(payout.penalty)?;
        self.record_claim(pool, payout.reward)?;

        Ok(payout)
    }

    /// Settles pending reward without moving principal.
    pub fn claim(&mut self, pool: &mut Pool, now: i64) -> Result<u64> {
        pool.accrue(now)?;
        let pending = self.pending_reward(pool.acc_reward_per_share)?;
        self.resettle(pool.acc_reward_per_share)?;
        self.record_claim(pool, pending)?;
        Ok(pending)
    }

    /// Returns the whole principal and forfeits any pending reward.
    ///
    /// The pool is still accrued first so the time before the exit is spread
    /// over the stake that was actually present.
    pub fn emergency_exit(&mut self, pool: &mut Pool, now: i64) -> Result<u64> {
        require!(self.amount > 0, StakingError::NothingStaked);

        pool.accrue(now)?;
        let principal = self.amount;
        self.amount = 0;
        self.settlement_debt = 0;
        pool.remove_stake(principal)?;
        pool.staker_count = pool.staker_count.saturating_sub(1);

        Ok(principal)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn empty_position() -> StakePosition {
        StakePosition {
            owner: Pubkey::default(),
            pool: Pubkey::default(),
            amount: 0,
            settlement_debt: 0,
            unlock_time: 0,
            total_rewards_claimed: 0,
            bump: 0,
        }
    }

    #[test]
    fn fresh_position_has_nothing_pending() {
        let position = empty_position();
        assert_eq!(position.pending_reward(123_456).unwrap(), 0);
    }

    #[test]
    fn corrupted_debt_is_detected() {
        let mut position = empty_position();
        position.amount = 10;
        position.settlement_debt = 11;
        assert_eq!(
            position.pending_reward(crate::constants::SCALE).unwrap_err(),
            StakingError::AccountingFault.into()
        );
    }
}
