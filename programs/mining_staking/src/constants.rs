//! Program constants for the Mining Staking program.
//!
//! This module defines all constant values used throughout the staking program,
//! including PDA seeds, time units, fixed-point scale and lock limits.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the pool vault PDA
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving the treasury vault PDA
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Number of seconds in a year (365 days)
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Fixed-point scale shared by multipliers and the reward accumulator (1.0 = 10^18)
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Longest lock commitment accepted by `stake_with_lock`
pub const MAX_LOCK_DURATION: u64 = SECONDS_PER_YEAR;

/// Extra boost granted by a full-length lock (2.0x on top of the 1.0x base)
pub const MAX_LOCK_BOOST: u128 = 2 * SCALE;

/// Maximum number of stake-size tiers a pool can hold (bounds account space)
pub const MAX_TIERS: usize = 16;

/// Largest reward payout a single claim makes (one SPL transfer); the rest stays accrued
pub const MAX_PAYOUT_PER_CLAIM: u128 = u64::MAX as u128;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

/// Default tolerance for emission-rate automation (5% = 500 basis points)
pub const DEFAULT_RATE_TOLERANCE_BPS: u16 = 500;
