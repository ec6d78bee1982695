//! Instruction handlers for the Mining Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod checkpoint;
pub mod claim_rewards;
pub mod fund_treasury;
pub mod initialize;
pub mod stake;
pub mod views;
pub mod withdraw;

pub use admin::*;
pub use checkpoint::*;
pub use claim_rewards::*;
pub use fund_treasury::*;
pub use initialize::*;
pub use stake::*;
pub use views::*;
pub use withdraw::*;
