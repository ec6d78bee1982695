use anchor_lang::prelude::*;

use crate::state::TierTable;

#[account]
#[derive(Default, Debug)]
pub struct StakePool {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    /// Mint rewards are paid in; the staking mint unless set otherwise at creation.
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub treasury_vault: Pubkey,

    pub reward_rate_per_second: u128,
    pub acc_reward_per_weighted_stake: u128,
    /// Emission not yet expressible in the accumulator, carried to the next update.
    pub reward_dust: u128,
    pub last_update_time: i64,
    pub total_weighted_stake: u128,
    pub tiers: TierTable,

    pub total_staked: u128,
    pub total_claimed: u128,
    pub total_funded: u128,
    pub staker_count: u64,

    pub created_at: i64,

    pub vault_bump: u8,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 5)
        + 16 + 16 + 16 + 8 + 16
        + TierTable::LEN
        + 16 + 16 + 16 + 8
        + 8
        + 3;
}
