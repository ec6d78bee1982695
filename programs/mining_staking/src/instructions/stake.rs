//! Stake instruction handlers.
//!
//! Handles depositing tokens into the pool, with or without a lock commitment.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token::SplVault;

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
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

    /// User's stake account (created if first time staking).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// User's token account for the staking token.
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

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
/// * `lock_duration` - New lock commitment in seconds, or `None` to keep the current lock
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, amount: u64, lock_duration: Option<u64>) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.stake_pool.key();

    let mut vault = SplVault {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.staking_vault.to_account_info(),
        vault_balance: ctx.accounts.staking_vault.amount,
        holder: user_key,
        holder_token_account: ctx.accounts.user_token_account.to_account_info(),
        holder_authority: ctx.accounts.user.to_account_info(),
        pool: ctx.accounts.stake_pool.to_account_info(),
        staking_mint: ctx.accounts.stake_pool.staking_mint,
        pool_bump: ctx.accounts.stake_pool.bump,
    };

    let user_stake = &mut ctx.accounts.user_stake;
    let stake_pool = &mut ctx.accounts.stake_pool;

    // First stake creates the account; it is never closed afterwards
    if !user_stake.is_initialized {
        user_stake.open(user_key, pool_key, ctx.bumps.user_stake);
    }
    require_keys_eq!(user_stake.owner, user_key, StakingError::InvalidStakeOwner);

    ledger::stake(
        stake_pool,
        user_stake,
        &mut vault,
        amount as u128,
        lock_duration,
        clock.unix_timestamp,
    )?;

    msg!("Total staked by user: {}", user_stake.staked);

    Ok(())
}
