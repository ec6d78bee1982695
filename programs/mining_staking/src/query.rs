//! Read-only views over pool and user state.
//!
//! Everything here is computed "as of now" from stored state and never
//! writes anything back.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::ledger::pending_rewards;
use crate::math::{lock_multiplier, mul};
use crate::rewards::accumulator_at;
use crate::state::{StakePool, UserStake};

#[derive(
    anchor_lang::AnchorSerialize,
    anchor_lang::AnchorDeserialize,
    Clone,
    Debug,
    PartialEq,
    Eq,
)]
pub struct PoolTotals {
    pub reward_rate_per_second: u128,
    pub total_weighted_stake: u128,
}

/// A user's stored position plus rewards earned up to the query time.
#[derive(
    anchor_lang::AnchorSerialize,
    anchor_lang::AnchorDeserialize,
    Clone,
    Debug,
    PartialEq,
    Eq,
)]
pub struct StakerPosition {
    pub staked: u128,
    pub weighted_stake: u128,
    pub rewards_accrued: u128,
    pub reward_per_weighted_stake_paid: u128,
    pub lock_end: i64,
    pub earned: u128,
}

/// Rewards the user could claim at `now`; matches what a checkpoint at `now` would store.
pub fn earned(pool: &StakePool, user: &UserStake, now: i64) -> Result<u128> {
    let acc = accumulator_at(pool, now)?;
    let pending = pending_rewards(user, acc)?;
    Ok(user
        .rewards_accrued
        .checked_add(pending)
        .ok_or(StakingError::ArithmeticOverflow)?)
}

/// Combined tier and lock multiplier behind the user's current weight.
pub fn current_user_multiplier(pool: &StakePool, user: &UserStake) -> Result<u128> {
    mul(
        pool.tiers.lookup(user.staked),
        lock_multiplier(user.lock_duration)?,
    )
}

pub fn totals(pool: &StakePool) -> PoolTotals {
    PoolTotals {
        reward_rate_per_second: pool.reward_rate_per_second,
        total_weighted_stake: pool.total_weighted_stake,
    }
}

pub fn user_position(pool: &StakePool, user: &UserStake, now: i64) -> Result<StakerPosition> {
    Ok(StakerPosition {
        staked: user.staked,
        weighted_stake: user.weighted_stake,
        rewards_accrued: user.rewards_accrued,
        reward_per_weighted_stake_paid: user.reward_per_weighted_stake_paid,
        lock_end: user.lock_end,
        earned: earned(pool, user, now)?,
    })
}
