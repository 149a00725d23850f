//! Early-exit penalty and withdrawal payout calculation.
//!
//! The penalty rate decays linearly over the pool's lock window:
//!
//! ```text
//! remaining = min(unlock_time - now, window)
//! penalty   = amount * penalty_bps * remaining / (10_000 * window)
//! ```
//!
//! A withdrawal at the very start of the window pays the full `penalty_bps`;
//! at or after `unlock_time` it pays nothing.

use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS_DENOMINATOR;
use crate::error::StakingError;

/// Token movements produced by a withdrawal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payout {
    /// Staking asset returned to the staker.
    pub principal: u64,
    /// Staking asset routed to the treasury.
    pub penalty: u64,
    /// Reward asset paid to the staker.
    pub reward: u64,
    /// Whether the withdrawal happened before the position's unlock time.
    pub early: bool,
}

impl Payout {
    /// Gross amount of staking asset leaving the vault.
    pub fn withdrawn(&self) -> u64 {
        self.principal.saturating_add(self.penalty)
    }
}

/// A withdrawal is early while `now` is strictly before `unlock_time`.
pub fn is_early(now: i64, unlock_time: i64) -> bool {
    now < unlock_time
}

/// Penalty charged on `amount` withdrawn at `now`.
///
/// `window` is the pool's lock window (`end_time - start_time`). Time left
/// until unlock is clamped to the window, so extending a pool's end time
/// never pushes the rate above `penalty_bps`.
pub fn calculate_penalty(
    amount: u64,
    penalty_bps: u16,
    unlock_time: i64,
    now: i64,
    window: i64,
) -> Result<u64> {
    if !is_early(now, unlock_time) || penalty_bps == 0 || amount == 0 || window <= 0 {
        return Ok(0);
    }

    let remaining = unlock_time
        .checked_sub(now)
        .ok_or(StakingError::MathOverflow)?
        .min(window);

    let numerator = (amount as u128)
        .checked_mul(penalty_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(remaining as u128)
        .ok_or(StakingError::MathOverflow)?;
    let denominator = (BASIS_POINTS_DENOMINATOR as u128)
        .checked_mul(window as u128)
        .ok_or(StakingError::MathOverflow)?;

    let penalty = numerator
        .checked_div(denominator)
        .ok_or(StakingError::DivisionByZero)?;

    // penalty_bps <= 10_000 and remaining <= window, so penalty <= amount
    u64::try_from(penalty).map_err(|_| StakingError::MathOverflow.into())
}

/// Build the payout for withdrawing `amount` with `pending` reward settled.
///
/// Early withdrawals pay the time-decayed penalty and forfeit `pending`.
pub fn withdrawal_payout(
    amount: u64,
    pending: u64,
    penalty_bps: u16,
    unlock_time: i64,
    now: i64,
    window: i64,
) -> Result<Payout> {
    let early = is_early(now, unlock_time);
    let penalty = calculate_penalty(amount, penalty_bps, unlock_time, now, window)?;
    let principal = amount
        .checked_sub(penalty)
        .ok_or(StakingError::MathOverflow)?;

    Ok(Payout {
        principal,
        penalty,
        reward: if early { 0 } else { pending },
        early,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rate_at_window_start() {
        // 10% of 1000 withdrawn at t=0 of a 0..1000 window
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 0, 1_000).unwrap(), 100);
    }

    #[test]
    fn rate_decays_linearly() {
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 250, 1_000).unwrap(), 75);
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 500, 1_000).unwrap(), 50);
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 999, 1_000).unwrap(), 0);
        assert_eq!(calculate_penalty(10_000, 1_000, 1_000, 999, 1_000).unwrap(), 1);
    }

    #[test]
    fn no_penalty_at_or_after_unlock() {
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 1_000, 1_000).unwrap(), 0);
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 5_000, 1_000).unwrap(), 0);
    }

    #[test]
    fn remaining_time_is_clamped_to_window() {
        // unlock 2000s away but the window is only 1000s: full rate, not double
        assert_eq!(calculate_penalty(1_000, 10_000, 2_000, 0, 1_000).unwrap(), 1_000);
    }

    #[test]
    fn zero_rate_or_window_charges_nothing() {
        assert_eq!(calculate_penalty(1_000, 0, 1_000, 0, 1_000).unwrap(), 0);
        assert_eq!(calculate_penalty(1_000, 1_000, 1_000, 0, 0).unwrap(), 0);
    }

    #[test]
    fn early_payout_forfeits_reward() {
        let payout = withdrawal_payout(50, 40, 1_000, 1_000, 500, 1_000).unwrap();
        assert_eq!(
            payout,
            Payout {
                principal: 48,
                penalty: 2,
                reward: 0,
                early: true
            }
        );
        assert_eq!(payout.withdrawn(), 50);
    }

    #[test]
    fn mature_payout_keeps_reward() {
        let payout = withdrawal_payout(50, 40, 1_000, 1_000, 1_000, 1_000).unwrap();
        assert_eq!(
            payout,
            Payout {
                principal: 50,
                penalty: 0,
                reward: 40,
                early: false
            }
        );
    }
}
