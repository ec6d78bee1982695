//! Global reward accumulator.
//!
//! `acc_reward_per_weighted_stake` is the reward earned by one unit of
//! weighted stake since genesis, scaled by `SCALE`. It only moves forward,
//! and only inside [`update`].
//!
//! Whatever an update emits but cannot express in the accumulator's
//! resolution is kept in `reward_dust` and paid into the next update, so
//! frequent settlement never loses emission.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math::{div, emission, mul_ceil};
use crate::state::StakePool;

/// Accumulator and undistributed dust as of `now`, without writing them back.
pub fn accrual_at(pool: &StakePool, now: i64) -> Result<(u128, u128)> {
    require!(now >= pool.last_update_time, StakingError::InvalidTimestamp);

    if pool.total_weighted_stake == 0 {
        return Ok((pool.acc_reward_per_weighted_stake, pool.reward_dust));
    }

    let elapsed = now.saturating_sub(pool.last_update_time) as u128;
    let emitted = pool
        .reward_rate_per_second
        .checked_mul(elapsed)
        .and_then(|amount| amount.checked_add(pool.reward_dust))
        .ok_or(StakingError::ArithmeticOverflow)?;
    let increment = div(emitted, pool.total_weighted_stake)?;
    // Rounded up so stakers together can never claim more than was emitted
    let distributed = mul_ceil(increment, pool.total_weighted_stake)?;

    let acc = pool
        .acc_reward_per_weighted_stake
        .checked_add(increment)
        .ok_or(StakingError::ArithmeticOverflow)?;
    let dust = emitted
        .checked_sub(distributed)
        .ok_or(StakingError::ArithmeticOverflow)?;
    Ok((acc, dust))
}

/// Accumulator value as of `now`, without writing it back.
pub fn accumulator_at(pool: &StakePool, now: i64) -> Result<u128> {
    Ok(accrual_at(pool, now)?.0)
}

/// Advance the accumulator to `now`.
///
/// The clock is moved even when nothing is staked, so the first staker
/// after an idle period does not collect emissions for it.
///
/// Fails with `ArithmeticOverflow` once `rate * elapsed` no longer fits in
/// a `u128`. Every mutating operation, `set_reward_rate` included, starts
/// here, so such a pool cannot be recovered by lowering the rate.
pub fn update(pool: &mut StakePool, now: i64) -> Result<()> {
    let (acc, dust) = accrual_at(pool, now)?;
    pool.acc_reward_per_weighted_stake = acc;
    pool.reward_dust = dust;
    pool.last_update_time = now;
    Ok(())
}

/// Change the emission rate, settling elapsed time at the old rate first.
///
/// Keep the rate low enough that `rate * elapsed` cannot overflow between
/// settlements; see [`update`].
pub fn set_reward_rate(
    pool: &mut StakePool,
    caller: &Pubkey,
    new_rate: u128,
    now: i64,
) -> Result<()> {
    require_keys_eq!(*caller, pool.authority, StakingError::Unauthorized);

    let mut next = pool.clone();
    update(&mut next, now)?;

    let old_rate = next.reward_rate_per_second;
    next.reward_rate_per_second = new_rate;
    *pool = next;

    msg!("Reward rate updated: {} -> {} per second", old_rate, new_rate);
    Ok(())
}

/// Steer the rate toward a per-day emission target.
///
/// The rate is only touched when it has drifted more than `tolerance_bps`
/// from the target. Returns whether it changed.
pub fn sync_emission_target(
    pool: &mut StakePool,
    caller: &Pubkey,
    target_per_day: u128,
    tolerance_bps: u16,
    now: i64,
) -> Result<bool> {
    require_keys_eq!(*caller, pool.authority, StakingError::Unauthorized);

    let target = emission::rate_for_daily_target(target_per_day);
    let current = pool.reward_rate_per_second;
    if emission::within_tolerance(current, target, tolerance_bps)? {
        msg!("Reward rate {} within {}bp of target {}", current, tolerance_bps, target);
        return Ok(false);
    }

    set_reward_rate(pool, caller, target, now)?;
    Ok(true)
}
