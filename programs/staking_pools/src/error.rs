//! Error types for the Staking Pools program.
//!
//! This module defines all custom error codes that can be returned by the program.
//! Each error has a unique code and descriptive message.

use anchor_lang::prelude::*;

/// Custom error codes for the Staking Pools program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Pool/Stake State Errors ==========

    /// Pool id does not match the registry, or its time window is inconsistent.
    #[msg("Invalid pool: unknown id or inconsistent end time")]
    InvalidPool,

    /// Stake amount is below the pool's minimum.
    #[msg("Stake amount is below the pool minimum")]
    BelowMinimumStake,

    /// Withdraw amount exceeds the staked balance.
    #[msg("Insufficient staked balance for this operation")]
    InsufficientStake,

    /// Emergency exit on an empty position.
    #[msg("Nothing staked in this position")]
    NothingStaked,

    /// Mutating call while the program is paused.
    #[msg("Staking is currently paused")]
    Paused,

    /// Settlement would underflow: accumulated reward is below the recorded debt.
    #[msg("Accounting fault: settlement debt exceeds accumulated reward")]
    AccountingFault,

    /// Config already carries the current schema version.
    #[msg("Schema is already at the current version")]
    SchemaUpToDate,

    // ========== Input Validation Errors ==========

    /// Cannot stake or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Penalty rate exceeds 10000 basis points.
    #[msg("Penalty exceeds maximum of 10000 basis points")]
    InvalidPenaltyRate,

    /// Reward rate exceeds the overflow-safe bound.
    #[msg("Reward per second exceeds the maximum allowed rate")]
    RewardRateTooHigh,

    /// Pool lock window exceeds the maximum duration.
    #[msg("Pool duration exceeds the maximum allowed window")]
    PoolDurationTooLong,

    /// Staking and reward mints must differ.
    #[msg("Staking mint and reward mint must differ")]
    IdenticalMints,

    /// Role member or treasury cannot be the default pubkey.
    #[msg("Authority cannot be the default pubkey")]
    InvalidAuthority,

    // ========== Balance Errors ==========

    /// The reward vault cannot cover the payout.
    #[msg("Insufficient reward vault funds for payout")]
    InsufficientRewardFunds,

    // ========== Math/Overflow Errors ==========

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// Division by zero attempted.
    #[msg("Division by zero attempted")]
    DivisionByZero,

    // ========== Authorization Errors ==========

    /// Caller does not hold the required role.
    #[msg("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    /// Token account is not owned by the expected wallet.
    #[msg("Unauthorized: token account owner mismatch")]
    InvalidTokenOwner,

    // ========== Account Validation Errors ==========

    /// Token account mint does not match the pool's mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// Vault does not match the pool's stored vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// Penalty sink is not owned by the configured treasury.
    #[msg("Treasury account mismatch")]
    TreasuryMismatch,
}
