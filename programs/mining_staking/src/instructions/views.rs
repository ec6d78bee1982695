//! Read-only view instructions.
//!
//! Each returns its value through Anchor return data and takes only
//! read-only accounts, so views never contend with staking writes.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::query::{self, PoolTotals, StakerPosition};
use crate::state::{StakePool, TierTable, UserStake};

/// Pool-level views.
#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Views over one staker's position.
#[derive(Accounts)]
pub struct UserView<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user_stake.owner.as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,
}

pub fn user_position_handler(ctx: Context<UserView>) -> Result<StakerPosition> {
    let clock = Clock::get()?;
    query::user_position(
        &ctx.accounts.stake_pool,
        &ctx.accounts.user_stake,
        clock.unix_timestamp,
    )
}

pub fn earned_handler(ctx: Context<UserView>) -> Result<u128> {
    let clock = Clock::get()?;
    query::earned(
        &ctx.accounts.stake_pool,
        &ctx.accounts.user_stake,
        clock.unix_timestamp,
    )
}

pub fn current_user_multiplier_handler(ctx: Context<UserView>) -> Result<u128> {
    query::current_user_multiplier(&ctx.accounts.stake_pool, &ctx.accounts.user_stake)
}

pub fn totals_handler(ctx: Context<PoolView>) -> Result<PoolTotals> {
    Ok(query::totals(&ctx.accounts.stake_pool))
}

pub fn tiers_handler(ctx: Context<PoolView>) -> Result<TierTable> {
    Ok(ctx.accounts.stake_pool.tiers.clone())
}
