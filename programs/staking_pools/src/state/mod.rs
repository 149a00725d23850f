//! State structures for the Staking Pools program.
//!
//! This module defines all account structures used to store program state.

pub mod config;
pub mod pool;
pub mod stake_position;

pub use config::*;
pub use pool::*;
pub use stake_position::*;
