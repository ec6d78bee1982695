/// Initialize instruction handler.
///
/// Creates and configures a new mining pool with security validations.
///
/// ## Security Guarantees
/// - Vault and treasury are PDAs owned by the stake pool
/// - Staking and reward mints are locked to pool state permanently
/// - Emission rate and tier table validated before storage

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::math::emission::EmissionConfig;
use crate::state::{StakePool, TierTable};

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `staking_vault` and `treasury_vault` are PDAs with `stake_pool` as authority
/// - Seeds ensure these accounts cannot be swapped or replaced
/// - Mint is validated and locked to pool state
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin authority that will control emissions and tiers.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The stake pool account to be created.
    /// SECURITY: PDA derived from STAKE_POOL_SEED + mint ensures uniqueness per token.
    #[account(
        init,
        payer = authority,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The mint for the token that is staked.
    pub staking_mint: Account<'info, Mint>,

    /// The mint rewards are paid in. Pass `staking_mint` again to pay
    /// rewards in the staked token.
    pub reward_mint: Account<'info, Mint>,

    /// The vault that will hold staked tokens.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// The treasury vault that will hold reward tokens.
    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = stake_pool
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new mining pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `emission` - Initial emission rate, per second or as a total over days
/// * `tier_thresholds` - Strictly ascending stake thresholds (raw units)
/// * `tier_multipliers` - Multiplier for each threshold (1.0 = 10^18)
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Initialize>,
    emission: EmissionConfig,
    tier_thresholds: Vec<u128>,
    tier_multipliers: Vec<u128>,
) -> Result<()> {
    // === INPUT VALIDATION ===

    let reward_rate_per_second = emission.rate_per_second()?;
    let tiers = TierTable::new(tier_thresholds, tier_multipliers)?;

    // === SECURITY VERIFICATION ===

    require!(
        ctx.accounts.staking_vault.owner == ctx.accounts.stake_pool.key(),
        StakingError::InvalidVaultOwner
    );
    require!(
        ctx.accounts.treasury_vault.owner == ctx.accounts.stake_pool.key(),
        StakingError::InvalidTreasuryOwner
    );
    require!(
        ctx.accounts.staking_vault.mint == ctx.accounts.staking_mint.key(),
        StakingError::InvalidTokenAccountMint
    );
    require!(
        ctx.accounts.treasury_vault.mint == ctx.accounts.reward_mint.key(),
        StakingError::InvalidTokenAccountMint
    );

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    // === STATE INITIALIZATION ===

    stake_pool.authority = ctx.accounts.authority.key();
    stake_pool.staking_mint = ctx.accounts.staking_mint.key();
    stake_pool.reward_mint = ctx.accounts.reward_mint.key();
    stake_pool.staking_vault = ctx.accounts.staking_vault.key();
    stake_pool.treasury_vault = ctx.accounts.treasury_vault.key();
    stake_pool.reward_rate_per_second = reward_rate_per_second;
    stake_pool.acc_reward_per_weighted_stake = 0;
    stake_pool.reward_dust = 0;
    stake_pool.last_update_time = clock.unix_timestamp;
    stake_pool.total_weighted_stake = 0;
    stake_pool.tiers = tiers;
    stake_pool.total_staked = 0;
    stake_pool.total_claimed = 0;
    stake_pool.total_funded = 0;
    stake_pool.staker_count = 0;
    stake_pool.created_at = clock.unix_timestamp;

    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.vault_bump = ctx.bumps.staking_vault;
    stake_pool.treasury_bump = ctx.bumps.treasury_vault;

    msg!("Mining pool initialized");
    msg!("Admin: {}", ctx.accounts.authority.key());
    msg!("Mint: {}", ctx.accounts.staking_mint.key());
    msg!("Reward mint: {}", ctx.accounts.reward_mint.key());
    msg!("Reward rate: {} per second", reward_rate_per_second);
    msg!("Tiers: {}", stake_pool.tiers.len());

    Ok(())
}
