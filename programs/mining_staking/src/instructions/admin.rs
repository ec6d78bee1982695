/// Admin instruction handlers.
///
/// Handles admin-only operations for the mining pool.
///
/// ## Security Guarantees
/// - All admin functions require signer == pool.authority
/// - PDA validation ensures correct pool
/// - Emission and tier changes settle the accumulator before taking effect

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::rewards;
use crate::state::StakePool;

/// Accounts required for admin operations.
///
/// ## Security Notes
/// - Authority must be signer
/// - Authority must match stake_pool.authority (has_one constraint)
/// - Pool PDA validated via seeds
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The admin authority.
    /// SECURITY: Must be signer AND match pool.authority.
    #[account(
        mut,
        constraint = authority.key() == stake_pool.authority @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Set the per-second emission rate.
///
/// # Security
/// - Only pool.authority can call this
/// - Time elapsed before this call is settled at the old rate
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_rate` - Raw reward units emitted per second
pub fn set_reward_rate_handler(ctx: Context<AdminControl>, new_rate: u128) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let stake_pool = &mut ctx.accounts.stake_pool;

    rewards::set_reward_rate(stake_pool, &authority, new_rate, clock.unix_timestamp)?;

    msg!("Admin: {}", authority);

    Ok(())
}

/// Move the emission rate toward a per-day target when it drifts too far.
///
/// Meant for an off-chain automation signer holding the admin key.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `target_per_day` - Desired raw units emitted per day
/// * `tolerance_bps` - Allowed deviation before the rate is changed
///   (defaults to `DEFAULT_RATE_TOLERANCE_BPS`)
///
/// # Returns
/// Whether the rate was changed
pub fn sync_emission_target_handler(
    ctx: Context<AdminControl>,
    target_per_day: u128,
    tolerance_bps: Option<u16>,
) -> Result<bool> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let stake_pool = &mut ctx.accounts.stake_pool;

    rewards::sync_emission_target(
        stake_pool,
        &authority,
        target_per_day,
        tolerance_bps.unwrap_or(DEFAULT_RATE_TOLERANCE_BPS),
        clock.unix_timestamp,
    )
}

/// Replace the stake-size tier table.
///
/// # Security
/// - Only pool.authority can call this
/// - Accrual under the old table is settled first
/// - Table validated (matching lengths, ascending thresholds, MAX_TIERS)
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `thresholds` - Strictly ascending stake thresholds
/// * `multipliers` - Multiplier per threshold (1.0 = 10^18)
pub fn set_tiers_handler(
    ctx: Context<AdminControl>,
    thresholds: Vec<u128>,
    multipliers: Vec<u128>,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let stake_pool = &mut ctx.accounts.stake_pool;

    ledger::set_tiers(
        stake_pool,
        &authority,
        thresholds,
        multipliers,
        clock.unix_timestamp,
    )?;

    msg!("Admin: {}", authority);

    Ok(())
}

/// Transfer admin authority to a new address.
///
/// # Security
/// - Only current authority can call this
/// - New authority must be a valid pubkey (non-zero)
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_authority` - New admin pubkey
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;

    require!(
        new_authority != Pubkey::default(),
        StakingError::Unauthorized
    );

    let old_authority = stake_pool.authority;
    stake_pool.authority = new_authority;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
