//! Property-based tests over random operation sequences.
//!
//! Invariants checked after every step:
//! - the accumulator never decreases
//! - the pool's total weighted stake equals the sum of user weights
//! - claimed and claimable rewards plus the pool's dust never exceed what was emitted
//! - a failed operation leaves the pool untouched

use proptest::prelude::*;

use super::*;
use crate::constants::SECONDS_PER_DAY;
use crate::rewards;

#[derive(Clone, Debug)]
enum Op {
    Stake { user: usize, tokens: u128, lock_days: Option<u64> },
    Withdraw { user: usize, percent: u128 },
    Claim { user: usize },
    Checkpoint { user: usize },
    Advance { seconds: i64 },
    SetRate { rate: u128 },
    SetTiers { boosted: bool },
}

const USERS: usize = 3;

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..USERS, 1u128..=100_000, prop::option::of(0u64..=365))
            .prop_map(|(user, tokens, lock_days)| Op::Stake { user, tokens, lock_days }),
        2 => (0..USERS, 1u128..=100).prop_map(|(user, percent)| Op::Withdraw { user, percent }),
        2 => (0..USERS).prop_map(|user| Op::Claim { user }),
        2 => (0..USERS).prop_map(|user| Op::Checkpoint { user }),
        4 => prop_oneof![0i64..=10_000, 0i64..=40 * SECONDS_PER_DAY as i64]
            .prop_map(|seconds| Op::Advance { seconds }),
        1 => (0u128..=1_000 * E18).prop_map(|rate| Op::SetRate { rate }),
        1 => any::<bool>().prop_map(|boosted| Op::SetTiers { boosted }),
    ]
}

fn tiers(boosted: bool) -> (Vec<u128>, Vec<u128>) {
    if boosted {
        (vec![0, 10_000 * E18], vec![2 * E18, 4 * E18])
    } else {
        (
            vec![0, 50_000 * E18, 250_000 * E18],
            vec![E18, 1_200_000_000_000_000_000, 1_500_000_000_000_000_000],
        )
    }
}

fn funded_harness(rate: u128) -> (Harness, Vec<Pubkey>) {
    let (thresholds, multipliers) = tiers(false);
    let mut h = Harness::new(rate, thresholds, multipliers);
    let users = (0..USERS).map(|_| h.join(10_000_000 * E18)).collect();
    h.treasury = u128::MAX / 2;
    (h, users)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_random_operations_preserve_invariants(
        rate in 0u128..=1_000 * E18,
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let (mut h, users) = funded_harness(rate);
        let admin = h.admin();
        let mut now: i64 = 0;
        let mut emitted: u128 = 0;

        for op in ops {
            let acc_before = h.pool.acc_reward_per_weighted_stake;
            let last_update_before = h.pool.last_update_time;
            let total_before = h.pool.total_weighted_stake;

            let result = match op {
                Op::Stake { user, tokens, lock_days } => h
                    .stake(
                        &users[user],
                        tokens * E18,
                        lock_days.map(|days| days * SECONDS_PER_DAY),
                        now,
                    )
                    .map(|_| ()),
                Op::Withdraw { user, percent } => {
                    let amount = h.account(&users[user]).staked * percent / 100;
                    h.withdraw(&users[user], amount, now)
                }
                Op::Claim { user } => h.claim(&users[user], now).map(|_| ()),
                Op::Checkpoint { user } => h.checkpoint(&users[user], now).map(|_| ()),
                Op::Advance { seconds } => {
                    if h.pool.total_weighted_stake > 0 {
                        emitted += h.pool.reward_rate_per_second * seconds as u128;
                    }
                    now += seconds;
                    Ok(())
                }
                Op::SetRate { rate } => rewards::set_reward_rate(&mut h.pool, &admin, rate, now),
                Op::SetTiers { boosted } => {
                    let (thresholds, multipliers) = tiers(boosted);
                    ledger::set_tiers(&mut h.pool, &admin, thresholds, multipliers, now)
                }
            };

            if result.is_err() {
                prop_assert_eq!(h.pool.acc_reward_per_weighted_stake, acc_before);
                prop_assert_eq!(h.pool.last_update_time, last_update_before);
                prop_assert_eq!(h.pool.total_weighted_stake, total_before);
            }

            prop_assert!(h.pool.acc_reward_per_weighted_stake >= acc_before);
            prop_assert_eq!(h.pool.total_weighted_stake, h.sum_of_weights());

            let claimable: u128 = users.iter().map(|user| h.earned(user, now)).sum();
            let dust = rewards::accrual_at(&h.pool, now).unwrap().1;
            prop_assert!(h.pool.total_claimed + claimable + dust <= emitted);
        }
    }

    /// Over a window with fixed rate and tiers, earnings plus the change in
    /// dust match the emission to within one unit per user.
    #[test]
    fn prop_window_earnings_match_emission(
        rate in 1u128..=1_000 * E18,
        stakes in prop::collection::vec((1u128..=1_000_000, prop::option::of(1u64..=365)), 1..=USERS),
        start in 0i64..=100_000,
        window in 1i64..=10 * SECONDS_PER_DAY as i64,
    ) {
        let (mut h, users) = funded_harness(rate);
        for (user, (tokens, lock_days)) in users.iter().zip(&stakes) {
            h.stake(user, tokens * E18, lock_days.map(|days| days * SECONDS_PER_DAY), 0)
                .unwrap();
        }
        for user in &users {
            h.checkpoint(user, start).unwrap();
        }

        let before: u128 = users.iter().map(|user| h.account(user).rewards_accrued).sum();
        let dust_start = h.pool.reward_dust;
        let end = start + window;
        let after: u128 = users.iter().map(|user| h.earned(user, end)).sum();
        let dust_end = rewards::accrual_at(&h.pool, end).unwrap().1;
        let gained = after - before;

        let emission = rate * window as u128 + dust_start;
        prop_assert!(gained + dust_end <= emission);
        prop_assert!(gained + dust_end + stakes.len() as u128 >= emission);
    }

    #[test]
    fn prop_checkpoint_is_idempotent(
        tokens in 1u128..=1_000_000,
        lock_days in prop::option::of(0u64..=365),
        at in 0i64..=400 * SECONDS_PER_DAY as i64,
    ) {
        let (mut h, users) = funded_harness(7_200 * E18);
        let alice = users[0];
        h.stake(&alice, tokens * E18, lock_days.map(|days| days * SECONDS_PER_DAY), 0).unwrap();

        let first = h.checkpoint(&alice, at).unwrap();
        let paid = h.account(&alice).reward_per_weighted_stake_paid;
        let second = h.checkpoint(&alice, at).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(h.account(&alice).reward_per_weighted_stake_paid, paid);
    }

    #[test]
    fn prop_withdraw_follows_lock(
        lock_days in 1u64..=365,
        at in 0i64..=400 * SECONDS_PER_DAY as i64,
    ) {
        let (mut h, users) = funded_harness(7_200);
        let alice = users[0];
        h.stake(&alice, 1_000 * E18, Some(lock_days * SECONDS_PER_DAY), 0).unwrap();
        let lock_end = h.account(&alice).lock_end;

        let result = h.withdraw(&alice, 1_000 * E18, at);
        if at < lock_end {
            let expected: anchor_lang::error::Error = StakingError::LockActive.into();
            prop_assert_eq!(result.unwrap_err(), expected);
            prop_assert_eq!(h.account(&alice).staked, 1_000 * E18);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(h.account(&alice).staked, 0);
        }
    }
}
