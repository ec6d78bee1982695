//! Emission schedule helpers.
//!
//! Converts human-scale emission targets (a total spread over days, or a
//! per-day target) into the per-second rate the accumulator consumes, and
//! decides whether an automated rate update is warranted.

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::constants::{BASIS_POINTS_DENOMINATOR, SECONDS_PER_DAY};
use crate::error::StakingError;

/// How the initial emission rate is expressed at pool creation.
#[derive(
    anchor_lang::AnchorSerialize,
    anchor_lang::AnchorDeserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum EmissionConfig {
    /// Raw token units emitted per second.
    RatePerSecond(u128),
    /// A total number of raw units spread evenly over `days` days.
    Total { units: u128, days: u64 },
}

impl EmissionConfig {
    pub fn rate_per_second(&self) -> Result<u128> {
        match *self {
            EmissionConfig::RatePerSecond(rate) => Ok(rate),
            EmissionConfig::Total { units, days } => rate_for_emissions(units, days),
        }
    }
}

/// Per-second rate that emits `total_units` over `days` days (rounded down).
pub fn rate_for_emissions(total_units: u128, days: u64) -> Result<u128> {
    require!(days > 0, StakingError::InvalidEmissionSchedule);
    let seconds = (days as u128)
        .checked_mul(SECONDS_PER_DAY as u128)
        .ok_or(StakingError::ArithmeticOverflow)?;
    Ok(total_units / seconds)
}

/// Per-second rate equivalent to a per-day emission target (rounded down).
pub fn rate_for_daily_target(target_per_day: u128) -> u128 {
    target_per_day / SECONDS_PER_DAY as u128
}

/// True when `current` is within `tolerance_bps` of `target`.
///
/// A zero current rate only matches a zero target.
pub fn within_tolerance(current: u128, target: u128, tolerance_bps: u16) -> Result<bool> {
    let diff = current.abs_diff(target);
    if current == 0 {
        return Ok(diff == 0);
    }
    let deviation_bps = diff
        .checked_mul(BASIS_POINTS_DENOMINATOR)
        .ok_or(StakingError::ArithmeticOverflow)?
        / current;
    Ok(deviation_bps <= tolerance_bps as u128)
}

/// Seconds of emission a treasury `balance` covers at `rate` per second.
///
/// `None` when nothing is being emitted.
pub fn runway_seconds(balance: u128, rate: u128) -> Option<u128> {
    balance.checked_div(rate)
}
