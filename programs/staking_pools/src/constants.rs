//! Program constants for the Staking Pools program.
//!
//! This module defines all constant values used throughout the program,
//! including PDA seeds, fixed-point precision, and admin input bounds.

/// Seed for deriving the global config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for deriving pool PDAs (followed by the pool id in little-endian)
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving stake position PDAs
pub const STAKE_SEED: &[u8] = b"stake";

/// Seed for deriving a pool's staking vault PDA
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed for deriving a pool's reward vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of seconds in a year (365 days)
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Longest lock window a pool may be configured with (10 years)
pub const MAX_POOL_DURATION: i64 = 10 * SECONDS_PER_YEAR;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Maximum early-exit penalty (100% = 10000 basis points)
pub const MAX_PENALTY_BPS: u16 = 10_000;

/// Fixed-point scale of `acc_reward_per_share`
pub const SCALE: u128 = 1_000_000_000_000; // 10^12

/// Upper bound on a pool's emission rate.
///
/// `PoolParams::validate` separately bounds `reward_per_second * window`
/// by `u64::MAX`.
pub const MAX_REWARD_PER_SECOND: u64 = 1_000_000_000_000_000; // 10^15

/// Data-schema version written by this build of the program
pub const CURRENT_SCHEMA_VERSION: u8 = 1;
