//! Claim rewards instruction handler.
//!
//! Handles paying out accrued rewards without touching the stake.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token::SplVault;

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = treasury_vault,
        has_one = reward_mint
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_token_account.mint == reward_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's treasury vault holding rewards.
    #[account(
        mut,
        constraint = treasury_vault.key() == stake_pool.treasury_vault @ StakingError::TreasuryMismatch,
        constraint = treasury_vault.mint == reward_mint.key() @ StakingError::InvalidTokenAccountMint
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards.
///
/// Rewards are paid from the treasury vault. If the treasury cannot cover
/// the payout the instruction fails and nothing is lost; the user can
/// retry once the treasury is funded.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
///
/// # Returns
/// The amount paid out
pub fn handler(ctx: Context<ClaimRewards>) -> Result<u128> {
    let clock = Clock::get()?;

    let mut treasury = SplVault {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.treasury_vault.to_account_info(),
        vault_balance: ctx.accounts.treasury_vault.amount,
        holder: ctx.accounts.user.key(),
        holder_token_account: ctx.accounts.user_token_account.to_account_info(),
        holder_authority: ctx.accounts.user.to_account_info(),
        pool: ctx.accounts.stake_pool.to_account_info(),
        staking_mint: ctx.accounts.stake_pool.staking_mint,
        pool_bump: ctx.accounts.stake_pool.bump,
    };

    let user_stake = &mut ctx.accounts.user_stake;
    let stake_pool = &mut ctx.accounts.stake_pool;

    ledger::claim(stake_pool, user_stake, &mut treasury, clock.unix_timestamp)
}
