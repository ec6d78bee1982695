//! Stake ledger: settlement and the mutating staking operations.
//!
//! Every operation follows the same shape:
//! 1. advance the global accumulator and settle the user (`settle`),
//! 2. apply the operation's own change,
//! 3. refresh the user's weighted stake and the pool total,
//! 4. move tokens, if any.
//!
//! All of it runs on copies of the pool and user state, which are written
//! back only after every step has succeeded. A failed token transfer or a
//! checked-math error therefore leaves both accounts exactly as they were.

use anchor_lang::prelude::*;

use crate::constants::MAX_PAYOUT_PER_CLAIM;
use crate::error::StakingError;
use crate::math::{lock_multiplier, lock_schedule, mul, weigh};
use crate::rewards;
use crate::state::{StakePool, TierTable, UserStake};
use crate::token::TokenLedger;

/// Rewards earned since the user's last checkpoint at accumulator `acc`.
pub(crate) fn pending_rewards(user: &UserStake, acc: u128) -> Result<u128> {
    let delta = acc
        .checked_sub(user.reward_per_weighted_stake_paid)
        .ok_or(StakingError::ArithmeticOverflow)?;
    mul(user.weighted_stake, delta)
}

/// Fold the user's pending rewards into `rewards_accrued` as of `now`.
///
/// Calling it twice at the same `now` only changes state the first time.
pub(crate) fn settle(pool: &mut StakePool, user: &mut UserStake, now: i64) -> Result<()> {
    rewards::update(pool, now)?;

    let acc = pool.acc_reward_per_weighted_stake;
    let pending = pending_rewards(user, acc)?;
    user.rewards_accrued = user
        .rewards_accrued
        .checked_add(pending)
        .ok_or(StakingError::ArithmeticOverflow)?;
    user.reward_per_weighted_stake_paid = acc;
    Ok(())
}

/// Weighted stake for `staked` tokens under the pool's tiers and a lock of `lock_duration`.
pub fn weighted_stake(tiers: &TierTable, staked: u128, lock_duration: u64) -> Result<u128> {
    weigh(staked, tiers.lookup(staked), lock_multiplier(lock_duration)?)
}

/// Recompute the user's weighted stake and move the pool total by the delta.
///
/// An expired lock is dropped here, so its boost lasts until the user's
/// next weight-refreshing operation rather than ending exactly at `lock_end`.
fn refresh_weight(pool: &mut StakePool, user: &mut UserStake, now: i64) -> Result<()> {
    if user.lock_expired(now) {
        user.lock_end = 0;
        user.lock_duration = 0;
    }

    let weight = weighted_stake(&pool.tiers, user.staked, user.lock_duration)?;
    pool.total_weighted_stake = pool
        .total_weighted_stake
        .checked_sub(user.weighted_stake)
        .ok_or(StakingError::ArithmeticOverflow)?
        .checked_add(weight)
        .ok_or(StakingError::ArithmeticOverflow)?;
    user.weighted_stake = weight;
    Ok(())
}

/// Settle the user without changing their position.
pub fn checkpoint(pool: &mut StakePool, user: &mut UserStake, now: i64) -> Result<u128> {
    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    settle(&mut next_pool, &mut next_user, now)?;

    *pool = next_pool;
    *user = next_user;
    Ok(user.rewards_accrued)
}

/// Deposit `amount` tokens, optionally committing to a new lock of `lock` seconds.
///
/// Without a lock, an existing lock keeps its end time and boost.
pub fn stake<T: TokenLedger>(
    pool: &mut StakePool,
    user: &mut UserStake,
    tokens: &mut T,
    amount: u128,
    lock: Option<u64>,
    now: i64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    require!(user.is_initialized, StakingError::StakeNotInitialized);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    settle(&mut next_pool, &mut next_user, now)?;

    next_user.staked = next_user
        .staked
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    if user.staked == 0 {
        next_pool.staker_count = next_pool.staker_count.saturating_add(1);
    }

    if let Some(duration) = lock {
        next_user.lock_end = lock_schedule::lock_end(now, duration)?;
        next_user.lock_duration = duration;
    }
    refresh_weight(&mut next_pool, &mut next_user, now)?;

    tokens.debit(&user.owner, amount)?;

    *pool = next_pool;
    *user = next_user;

    msg!("Staked {} tokens", amount);
    if let Some(duration) = lock {
        msg!("Locked for {}s until {}", duration, user.lock_end);
    }
    msg!("Weighted stake: {} (pool total {})", user.weighted_stake, pool.total_weighted_stake);
    Ok(())
}

/// Withdraw `amount` staked tokens once any lock has ended.
pub fn withdraw<T: TokenLedger>(
    pool: &mut StakePool,
    user: &mut UserStake,
    tokens: &mut T,
    amount: u128,
    now: i64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    require!(amount <= user.staked, StakingError::InsufficientStake);
    require!(!user.is_locked(now), StakingError::LockActive);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    settle(&mut next_pool, &mut next_user, now)?;

    next_user.staked -= amount;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    if next_user.staked == 0 {
        next_pool.staker_count = next_pool.staker_count.saturating_sub(1);
    }
    refresh_weight(&mut next_pool, &mut next_user, now)?;

    tokens.credit(&user.owner, amount)?;

    *pool = next_pool;
    *user = next_user;

    msg!("Withdrew {} tokens", amount);
    msg!("Remaining staked: {}", user.staked);
    msg!("Rewards accrued: {}", user.rewards_accrued);
    Ok(())
}

/// Pay out what the user has accrued and return the amount paid.
///
/// One claim pays at most `MAX_PAYOUT_PER_CLAIM`; anything above that stays
/// accrued for the next claim. If the payout cannot be made the whole claim
/// fails with `PayoutUnavailable` and the accrued balance is kept for a
/// later retry.
pub fn claim<T: TokenLedger>(
    pool: &mut StakePool,
    user: &mut UserStake,
    tokens: &mut T,
    now: i64,
) -> Result<u128> {
    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    settle(&mut next_pool, &mut next_user, now)?;
    refresh_weight(&mut next_pool, &mut next_user, now)?;

    let payout = next_user.rewards_accrued.min(MAX_PAYOUT_PER_CLAIM);
    if payout > 0 {
        next_user.rewards_accrued -= payout;
        next_user.total_rewards_claimed = next_user
            .total_rewards_claimed
            .checked_add(payout)
            .ok_or(StakingError::ArithmeticOverflow)?;
        next_pool.total_claimed = next_pool
            .total_claimed
            .checked_add(payout)
            .ok_or(StakingError::ArithmeticOverflow)?;

        if let Err(err) = tokens.credit(&user.owner, payout) {
            msg!("Reward payout of {} failed: {}", payout, err);
            return err!(StakingError::PayoutUnavailable);
        }
    }

    *pool = next_pool;
    *user = next_user;

    msg!("Claimed {} reward tokens", payout);
    msg!("Total rewards claimed by user: {}", user.total_rewards_claimed);
    msg!("Total claimed from pool: {}", pool.total_claimed);
    Ok(payout)
}

/// Move `amount` reward tokens from `funder` into the treasury.
///
/// Funding never touches reward accounting; it only makes claims payable.
pub fn fund_treasury<T: TokenLedger>(
    pool: &mut StakePool,
    funder: &Pubkey,
    treasury: &mut T,
    amount: u128,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    let total_funded = pool
        .total_funded
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    treasury.debit(funder, amount)?;
    pool.total_funded = total_funded;

    msg!("Treasury funded with {} reward tokens", amount);
    msg!("Funded to date: {} (claimed {})", pool.total_funded, pool.total_claimed);
    Ok(())
}

/// Replace the tier table after settling all accrual under the old one.
///
/// Users' cached weights move to the new table on their next
/// weight-refreshing operation.
pub fn set_tiers(
    pool: &mut StakePool,
    caller: &Pubkey,
    thresholds: Vec<u128>,
    multipliers: Vec<u128>,
    now: i64,
) -> Result<()> {
    require_keys_eq!(*caller, pool.authority, StakingError::Unauthorized);
    let tiers = TierTable::new(thresholds, multipliers)?;

    let mut next_pool = pool.clone();
    rewards::update(&mut next_pool, now)?;
    next_pool.tiers = tiers;
    *pool = next_pool;

    msg!("Tier table replaced ({} tiers)", pool.tiers.len());
    Ok(())
}
