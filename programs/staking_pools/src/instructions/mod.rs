//! Instruction handlers for the Staking Pools program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim_rewards;
pub mod create_pool;
pub mod emergency_exit;
pub mod fund_rewards;
pub mod initialize;
pub mod stake;
pub mod update_pool;
pub mod vault;
pub mod views;
pub mod withdraw;

pub use admin::*;
pub use claim_rewards::*;
pub use create_pool::*;
pub use emergency_exit::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use stake::*;
pub use update_pool::*;
pub use views::*;
pub use withdraw::*;
