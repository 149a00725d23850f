//! Events emitted by the Staking Pools program.

use anchor_lang::prelude::*;

use crate::auth::Role;

// Admin events
#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleGranted {
    pub role: Role,
    pub member: Pubkey,
    pub granted_by: Pubkey,
}

#[event]
pub struct TreasuryUpdated {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
    pub guardian: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Migrated {
    pub from_version: u8,
    pub to_version: u8,
}

#[event]
pub struct PoolMigrated {
    pub pool_id: u64,
    pub from_version: u8,
    pub to_version: u8,
}

// Pool events
#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub pool: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_per_second: u64,
    pub min_stake: u64,
    pub penalty_bps: u16,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct PoolUpdated {
    pub pool_id: u64,
    pub reward_per_second: u64,
    pub min_stake: u64,
    pub penalty_bps: u16,
    pub end_time: i64,
    pub acc_reward_per_share: u128,
    pub timestamp: i64,
}

#[event]
pub struct RewardsFunded {
    pub pool_id: u64,
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

// Staker events
#[event]
pub struct Staked {
    pub pool_id: u64,
    pub staker: Pubkey,
    pub amount: u64,
    pub staked_total: u64,
    pub unlock_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct RewardClaimed {
    pub pool_id: u64,
    pub staker: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub pool_id: u64,
    pub staker: Pubkey,
    pub amount: u64,
    pub penalty: u64,
    pub reward: u64,
    pub early: bool,
    pub timestamp: i64,
}

#[event]
pub struct EmergencyExited {
    pub pool_id: u64,
    pub staker: Pubkey,
    pub amount: u64,
    pub guardian: Pubkey,
    pub timestamp: i64,
}
