//! Withdraw instruction handler.
//!
//! Handles returning staked tokens once any lock commitment has ended.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token::SplVault;

/// Accounts required for withdrawing.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The user withdrawing tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_vault,
        has_one = staking_mint
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

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// User's token account for receiving withdrawn tokens.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(
        mut,
        constraint = staking_vault.key() == stake_pool.staking_vault @ StakingError::VaultMismatch
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw staked tokens from the pool.
///
/// Fails while the user's lock is active.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `amount` - Amount of tokens to withdraw
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let mut vault = SplVault {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.staking_vault.to_account_info(),
        vault_balance: ctx.accounts.staking_vault.amount,
        holder: ctx.accounts.user.key(),
        holder_token_account: ctx.accounts.user_token_account.to_account_info(),
        holder_authority: ctx.accounts.user.to_account_info(),
        pool: ctx.accounts.stake_pool.to_account_info(),
        staking_mint: ctx.accounts.stake_pool.staking_mint,
        pool_bump: ctx.accounts.stake_pool.bump,
    };

    let user_stake = &mut ctx.accounts.user_stake;
    let stake_pool = &mut ctx.accounts.stake_pool;

    ledger::withdraw(
        stake_pool,
        user_stake,
        &mut vault,
        amount as u128,
        clock.unix_timestamp,
    )?;

    Ok(())
}
