//! Off-chain tests for the staking engine.
//!
//! The ledger is driven directly with an in-memory [`MockVault`] standing in
//! for SPL transfers, so no validator is needed.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::SCALE;
use crate::error::StakingError;
use crate::ledger;
use crate::query;
use crate::state::{StakePool, TierTable, UserStake};
use crate::token::TokenLedger;

mod properties;

pub(crate) const E18: u128 = SCALE;

// ── Mock token ledger ─────────────────────────────────────────────────────────

/// One pool vault plus the wallets it moves tokens to and from.
pub(crate) struct MockVault<'a> {
    balance: &'a mut u128,
    wallets: &'a mut BTreeMap<Pubkey, u128>,
    broken: bool,
}

impl<'a> TokenLedger for MockVault<'a> {
    fn debit(&mut self, from: &Pubkey, amount: u128) -> Result<()> {
        require!(!self.broken, StakingError::TransferFailed);
        let wallet = self.wallets.entry(*from).or_default();
        require!(*wallet >= amount, StakingError::InsufficientFunds);
        *wallet -= amount;
        *self.balance += amount;
        Ok(())
    }

    fn credit(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        require!(!self.broken, StakingError::TransferFailed);
        require!(*self.balance >= amount, StakingError::InsufficientFunds);
        *self.balance -= amount;
        *self.wallets.entry(*to).or_default() += amount;
        Ok(())
    }
}

// ── Harness ───────────────────────────────────────────────────────────────────

/// A pool with its stakers, their wallets and the two pool vaults.
pub(crate) struct Harness {
    pub pool: StakePool,
    pub users: BTreeMap<Pubkey, UserStake>,
    pub wallets: BTreeMap<Pubkey, u128>,
    /// Staked principal held by the pool.
    pub custody: u128,
    /// Reward tokens available for claims.
    pub treasury: u128,
    pub transfers_broken: bool,
}

impl Harness {
    pub fn new(rate: u128, thresholds: Vec<u128>, multipliers: Vec<u128>) -> Self {
        let pool = StakePool {
            authority: Pubkey::new_unique(),
            staking_mint: Pubkey::new_unique(),
            reward_rate_per_second: rate,
            tiers: TierTable::new(thresholds, multipliers).unwrap(),
            ..StakePool::default()
        };
        Self {
            pool,
            users: BTreeMap::new(),
            wallets: BTreeMap::new(),
            custody: 0,
            treasury: 0,
            transfers_broken: false,
        }
    }

    /// Launch tiers (1.0x / 1.2x from 50k / 1.5x from 250k) at 7_200 units per second.
    pub fn launch() -> Self {
        Self::new(
            7_200,
            vec![0, 50_000 * E18, 250_000 * E18],
            vec![E18, 1_200_000_000_000_000_000, 1_500_000_000_000_000_000],
        )
    }

    pub fn admin(&self) -> Pubkey {
        self.pool.authority
    }

    /// Open a stake account for a new user holding `balance` tokens.
    pub fn join(&mut self, balance: u128) -> Pubkey {
        let owner = Pubkey::new_unique();
        let mut account = UserStake::default();
        account.open(owner, Pubkey::new_unique(), 255);
        self.users.insert(owner, account);
        self.wallets.insert(owner, balance);
        owner
    }

    pub fn account(&self, who: &Pubkey) -> &UserStake {
        &self.users[who]
    }

    pub fn wallet(&self, who: &Pubkey) -> u128 {
        self.wallets.get(who).copied().unwrap_or_default()
    }

    pub fn stake(&mut self, who: &Pubkey, amount: u128, lock: Option<u64>, now: i64) -> Result<()> {
        let user = self.users.get_mut(who).expect("unknown user");
        let mut vault = MockVault {
            balance: &mut self.custody,
            wallets: &mut self.wallets,
            broken: self.transfers_broken,
        };
        ledger::stake(&mut self.pool, user, &mut vault, amount, lock, now)
    }

    pub fn withdraw(&mut self, who: &Pubkey, amount: u128, now: i64) -> Result<()> {
        let user = self.users.get_mut(who).expect("unknown user");
        let mut vault = MockVault {
            balance: &mut self.custody,
            wallets: &mut self.wallets,
            broken: self.transfers_broken,
        };
        ledger::withdraw(&mut self.pool, user, &mut vault, amount, now)
    }

    pub fn claim(&mut self, who: &Pubkey, now: i64) -> Result<u128> {
        let user = self.users.get_mut(who).expect("unknown user");
        let mut treasury = MockVault {
            balance: &mut self.treasury,
            wallets: &mut self.wallets,
            broken: self.transfers_broken,
        };
        ledger::claim(&mut self.pool, user, &mut treasury, now)
    }

    pub fn fund(&mut self, who: &Pubkey, amount: u128) -> Result<()> {
        let mut treasury = MockVault {
            balance: &mut self.treasury,
            wallets: &mut self.wallets,
            broken: self.transfers_broken,
        };
        ledger::fund_treasury(&mut self.pool, who, &mut treasury, amount)
    }

    pub fn checkpoint(&mut self, who: &Pubkey, now: i64) -> Result<u128> {
        let user = self.users.get_mut(who).expect("unknown user");
        ledger::checkpoint(&mut self.pool, user, now)
    }

    pub fn earned(&self, who: &Pubkey, now: i64) -> u128 {
        query::earned(&self.pool, &self.users[who], now).unwrap()
    }

    pub fn sum_of_weights(&self) -> u128 {
        self.users.values().map(|user| user.weighted_stake).sum()
    }
}
