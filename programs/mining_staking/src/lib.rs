//! # Mining Staking Program
//!
//! A continuous-emission staking pool where rewards stream to stakers in
//! proportion to their *weighted* stake:
//!
//! - **Tier multiplier**: a step bonus keyed to the absolute stake size
//! - **Lock multiplier**: a linear bonus from 1.0x (no lock) up to 3.0x for a
//!   365-day lock commitment
//!
//! ## Features
//! - Global reward-per-weighted-stake accumulator with lazy per-user checkpoints
//! - Admin-set emission rate, settled at the old rate before every change
//! - Claim rewards without withdrawing; failed payouts keep accrued rewards
//! - Treasury-funded rewards
//! - Checked 256-bit fixed-point math, no floating point
//!
//! ## Lock expiry
//! A lock boost stays in force after `lock_end` until the staker's next
//! stake, withdraw or claim recomputes their weight.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod query;
pub mod rewards;
pub mod state;
pub mod token;

use instructions::*;
use math::emission::EmissionConfig;
use query::{PoolTotals, StakerPosition};
use state::TierTable;

#[program]
pub mod mining_staking {
    use super::*;

    /// Initializes the mining pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `emission` - Initial emission rate, per second or as a total over days
    /// * `tier_thresholds` - Strictly ascending stake thresholds
    /// * `tier_multipliers` - Multiplier for each threshold (1.0 = 10^18)
    ///
    /// # Errors
    /// Returns an error if the tier table or emission schedule is invalid.
    pub fn initialize(
        ctx: Context<Initialize>,
        emission: EmissionConfig,
        tier_thresholds: Vec<u128>,
        tier_multipliers: Vec<u128>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, emission, tier_thresholds, tier_multipliers)
    }

    /// Stakes tokens, keeping any existing lock.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Insufficient token balance
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount, None)
    }

    /// Stakes tokens and commits to a lock of `duration` seconds from now.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Duration exceeds 365 days
    /// - Insufficient token balance
    pub fn stake_with_lock(ctx: Context<Stake>, amount: u64, duration: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount, Some(duration))
    }

    /// Withdraws staked tokens.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lock has not ended
    /// - Amount exceeds staked balance
    /// - Amount is zero
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claims accrued rewards without withdrawing; returns the amount paid.
    ///
    /// Pays at most `u64::MAX` per call; anything above stays accrued.
    ///
    /// # Errors
    /// Returns `PayoutUnavailable` if the treasury cannot cover the payout.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<u128> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Settles a staker's pending rewards; returns their accrued balance.
    pub fn checkpoint(ctx: Context<Checkpoint>) -> Result<u128> {
        instructions::checkpoint::handler(ctx)
    }

    /// Funds the reward treasury with tokens of the pool's reward mint.
    ///
    /// # Errors
    /// Returns an error if amount is zero or insufficient balance.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::handler(ctx, amount)
    }

    /// Admin function to set the per-second emission rate.
    pub fn set_reward_rate(ctx: Context<AdminControl>, new_rate: u128) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, new_rate)
    }

    /// Admin function to steer the emission rate toward a per-day target.
    pub fn sync_emission_target(
        ctx: Context<AdminControl>,
        target_per_day: u128,
        tolerance_bps: Option<u16>,
    ) -> Result<bool> {
        instructions::admin::sync_emission_target_handler(ctx, target_per_day, tolerance_bps)
    }

    /// Admin function to replace the tier table.
    pub fn set_tiers(
        ctx: Context<AdminControl>,
        thresholds: Vec<u128>,
        multipliers: Vec<u128>,
    ) -> Result<()> {
        instructions::admin::set_tiers_handler(ctx, thresholds, multipliers)
    }

    /// Admin function to transfer authority to a new address.
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Stored position and live earnings of a staker.
    pub fn user_position(ctx: Context<UserView>) -> Result<StakerPosition> {
        instructions::views::user_position_handler(ctx)
    }

    /// Rewards a staker could claim right now.
    pub fn earned(ctx: Context<UserView>) -> Result<u128> {
        instructions::views::earned_handler(ctx)
    }

    /// Tier x lock multiplier behind a staker's weight.
    pub fn current_user_multiplier(ctx: Context<UserView>) -> Result<u128> {
        instructions::views::current_user_multiplier_handler(ctx)
    }

    /// Emission rate and total weighted stake.
    pub fn totals(ctx: Context<PoolView>) -> Result<PoolTotals> {
        instructions::views::totals_handler(ctx)
    }

    /// The pool's tier table.
    pub fn tiers(ctx: Context<PoolView>) -> Result<TierTable> {
        instructions::views::tiers_handler(ctx)
    }
}

#[cfg(test)]
mod tests;
