//! Time-lock boost multipliers.
//!
//! A voluntary lock commitment of `d` seconds boosts a staker's weight
//! linearly from 1.0x (no lock) to 3.0x (a full 365-day lock).

use anchor_lang::prelude::*;

use crate::constants::{MAX_LOCK_BOOST, MAX_LOCK_DURATION, SCALE};
use crate::error::StakingError;
use crate::math::fixed_point::mul_div;

/// Boost multiplier for a lock of `duration` seconds, clamped to 365 days.
pub fn lock_multiplier(duration: u64) -> Result<u128> {
    let clamped = duration.min(MAX_LOCK_DURATION);
    let boost = mul_div(MAX_LOCK_BOOST, clamped as u128, MAX_LOCK_DURATION as u128)?;
    Ok(SCALE
        .checked_add(boost)
        .ok_or(StakingError::ArithmeticOverflow)?)
}

/// Reject lock commitments longer than the maximum.
pub fn validate_lock_duration(duration: u64) -> Result<()> {
    require!(
        duration <= MAX_LOCK_DURATION,
        StakingError::InvalidLockDuration
    );
    Ok(())
}

/// Lock end timestamp for a commitment starting at `now`.
pub fn lock_end(now: i64, duration: u64) -> Result<i64> {
    validate_lock_duration(duration)?;
    let duration = i64::try_from(duration).map_err(|_| StakingError::ConversionOverflow)?;
    Ok(now
        .checked_add(duration)
        .ok_or(StakingError::ArithmeticOverflow)?)
}
