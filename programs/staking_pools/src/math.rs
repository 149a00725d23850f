//! Fixed-point helpers for the reward-per-share accumulator.
//!
//! All accumulator values are scaled by [`SCALE`]. Every helper rounds down,
//! so the program never owes more reward than the vault was emitting.
//!
//! Products are formed in 256 bits and narrowed back once divided, so a
//! large accumulator built up by a dust stake cannot overflow a later
//! `amount * acc`.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::SCALE;
use crate::error::StakingError;

/// Reward credited to `amount` at accumulator value `acc`: `amount * acc / SCALE`.
pub fn accrued_for(amount: u64, acc_reward_per_share: u128) -> Result<u128> {
    let product = U256::from(amount)
        .checked_mul(U256::from(acc_reward_per_share))
        .ok_or(StakingError::MathOverflow)?;
    narrow(product / U256::from(SCALE))
}

/// Accumulator growth for `elapsed` seconds: `elapsed * rate * SCALE / total_staked`.
pub fn reward_per_share_delta(
    elapsed: u64,
    reward_per_second: u64,
    total_staked: u64,
) -> Result<u128> {
    if total_staked == 0 {
        return Err(StakingError::DivisionByZero.into());
    }
    let emitted = U256::from(elapsed)
        .checked_mul(U256::from(reward_per_second))
        .and_then(|v| v.checked_mul(U256::from(SCALE)))
        .ok_or(StakingError::MathOverflow)?;
    narrow(emitted / U256::from(total_staked))
}

fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(StakingError::MathOverflow.into());
    }
    Ok(value.as_u128())
}

/// Reward earned since the last settlement.
///
/// Fails with `AccountingFault` when `settlement_debt` exceeds what the
/// position has accrued; that can only happen if accrual was skipped or the
/// position was corrupted, so the value is never clamped to zero.
pub fn pending_reward(amount: u64, acc_reward_per_share: u128, settlement_debt: u128) -> Result<u64> {
    let accrued = accrued_for(amount, acc_reward_per_share)?;
    let pending = accrued
        .checked_sub(settlement_debt)
        .ok_or(StakingError::AccountingFault)?;
    u64::try_from(pending).map_err(|_| StakingError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrued_for_scales_down() {
        assert_eq!(accrued_for(100, SCALE).unwrap(), 100);
        assert_eq!(accrued_for(100, SCALE / 2).unwrap(), 50);
        assert_eq!(accrued_for(0, 7 * SCALE).unwrap(), 0);
    }

    #[test]
    fn accrued_for_rounds_down() {
        // 3 * (SCALE / 3) / SCALE = 0.999.. -> 0
        assert_eq!(accrued_for(3, SCALE / 3).unwrap(), 0);
    }

    #[test]
    fn accrued_for_survives_wide_products() {
        // 1e13 * 8.64e25 exceeds u128 before the division by SCALE
        let acc = 86_400 * 1_000_000_000 * SCALE;
        assert_eq!(
            accrued_for(10_000_000_000_000, acc).unwrap(),
            864_000_000_000_000_000_000_000_000
        );
        assert_eq!(
            accrued_for(u64::MAX, u64::MAX as u128 * SCALE).unwrap(),
            u64::MAX as u128 * u64::MAX as u128
        );
    }

    #[test]
    fn accrued_for_reports_unrepresentable_result() {
        assert_eq!(
            accrued_for(u64::MAX, u128::MAX).unwrap_err(),
            StakingError::MathOverflow.into()
        );
    }

    #[test]
    fn delta_splits_emission_across_stake() {
        // 100s at 1/s over 100 staked -> 1 reward per unit
        assert_eq!(reward_per_share_delta(100, 1, 100).unwrap(), SCALE);
        // 100s at 4/s over 400 staked -> 1 reward per unit
        assert_eq!(reward_per_share_delta(100, 4, 400).unwrap(), SCALE);
    }

    #[test]
    fn delta_keeps_sub_unit_precision() {
        // 1s at 1/s over 3 staked -> one third per unit, kept to 12 decimals
        assert_eq!(reward_per_share_delta(1, 1, 3).unwrap(), 333_333_333_333);
    }

    #[test]
    fn delta_rejects_empty_pool() {
        assert_eq!(
            reward_per_share_delta(10, 1, 0).unwrap_err(),
            StakingError::DivisionByZero.into()
        );
    }

    #[test]
    fn delta_overflow_is_reported() {
        assert_eq!(
            reward_per_share_delta(u64::MAX, u64::MAX, 1).unwrap_err(),
            StakingError::MathOverflow.into()
        );
    }

    #[test]
    fn pending_reward_subtracts_debt() {
        assert_eq!(pending_reward(100, 3 * SCALE, 120).unwrap(), 180);
        assert_eq!(pending_reward(100, 3 * SCALE, 300).unwrap(), 0);
    }

    #[test]
    fn pending_reward_underflow_is_an_accounting_fault() {
        assert_eq!(
            pending_reward(100, SCALE, 101).unwrap_err(),
            StakingError::AccountingFault.into()
        );
    }
}
