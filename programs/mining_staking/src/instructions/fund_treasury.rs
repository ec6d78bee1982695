//! Treasury funding.
//!
//! Anyone may top up the reward treasury. Funding changes no reward
//! accounting, it only decides whether claims can be paid.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::math::emission;
use crate::state::StakePool;
use crate::token::SplVault;

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = treasury_vault @ StakingError::TreasuryMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Funder's account in the reward mint.
    #[account(
        mut,
        constraint = funder_token_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::InvalidStakeOwner
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury_vault.owner == stake_pool.key() @ StakingError::InvalidTreasuryOwner,
        constraint = treasury_vault.mint == stake_pool.reward_mint @ StakingError::InvalidTokenAccountMint
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Deposit `amount` reward tokens into the treasury.
pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    let mut treasury = SplVault {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.treasury_vault.to_account_info(),
        vault_balance: ctx.accounts.treasury_vault.amount,
        holder: ctx.accounts.funder.key(),
        holder_token_account: ctx.accounts.funder_token_account.to_account_info(),
        holder_authority: ctx.accounts.funder.to_account_info(),
        pool: ctx.accounts.stake_pool.to_account_info(),
        staking_mint: ctx.accounts.stake_pool.staking_mint,
        pool_bump: ctx.accounts.stake_pool.bump,
    };
    let funder = ctx.accounts.funder.key();
    let stake_pool = &mut ctx.accounts.stake_pool;

    ledger::fund_treasury(stake_pool, &funder, &mut treasury, amount as u128)?;

    let balance = treasury.vault_balance as u128;
    match emission::runway_seconds(balance, stake_pool.reward_rate_per_second) {
        Some(seconds) => msg!(
            "Treasury balance {} covers {} days of emission",
            balance,
            seconds / SECONDS_PER_DAY as u128
        ),
        None => msg!("Treasury balance {} (no active emission)", balance),
    }

    Ok(())
}
