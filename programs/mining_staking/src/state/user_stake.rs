use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    pub staked: u128,
    pub weighted_stake: u128,
    pub reward_per_weighted_stake_paid: u128,
    pub rewards_accrued: u128,
    pub total_rewards_claimed: u128,

    /// Unix timestamp the lock ends at; 0 when unlocked.
    pub lock_end: i64,
    /// Committed lock length whose boost is currently applied.
    pub lock_duration: u64,

    pub is_initialized: bool,
    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + (16 * 5) + 8 + 8 + 1 + 1;

    /// Bind a freshly created account to its owner and pool.
    pub fn open(&mut self, owner: Pubkey, stake_pool: Pubkey, bump: u8) {
        self.owner = owner;
        self.stake_pool = stake_pool;
        self.bump = bump;
        self.is_initialized = true;
    }

    pub fn is_locked(&self, now: i64) -> bool {
        now < self.lock_end
    }

    /// True once a lock has ended but its boost is still applied.
    pub fn lock_expired(&self, now: i64) -> bool {
        self.lock_end != 0 && !self.is_locked(now)
    }
}
