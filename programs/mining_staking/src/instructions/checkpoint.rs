//! Checkpoint instruction handler.
//!
//! Settles a user's pending rewards into their accrued balance without
//! moving tokens or changing their stake.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::state::{StakePool, UserStake};

/// Accounts required for a checkpoint.
#[derive(Accounts)]
pub struct Checkpoint<'info> {
    /// Anyone may checkpoint any staker; settlement cannot move funds.
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user_stake.owner.as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,
}

/// Settle the user's rewards up to now.
///
/// # Returns
/// The user's accrued, unclaimed rewards after settlement
pub fn handler(ctx: Context<Checkpoint>) -> Result<u128> {
    let clock = Clock::get()?;
    let user_stake = &mut ctx.accounts.user_stake;
    let stake_pool = &mut ctx.accounts.stake_pool;

    let accrued = ledger::checkpoint(stake_pool, user_stake, clock.unix_timestamp)?;

    msg!("Checkpoint for {}: {} accrued", user_stake.owner, accrued);

    Ok(accrued)
}
