//! State structures for the Mining Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod stake_pool;
pub mod tier_table;
pub mod user_stake;

pub use stake_pool::*;
pub use tier_table::*;
pub use user_stake::*;
