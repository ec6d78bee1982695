use anchor_lang::prelude::*;

use crate::constants::{MAX_TIERS, SCALE};
use crate::error::StakingError;

/// Stake-size tiers: `multipliers[i]` applies from `thresholds[i]` upward.
#[derive(
    anchor_lang::AnchorSerialize,
    anchor_lang::AnchorDeserialize,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
pub struct TierTable {
    pub thresholds: Vec<u128>,
    pub multipliers: Vec<u128>,
}

impl TierTable {
    pub const LEN: usize = (4 + 16 * MAX_TIERS) * 2;

    pub fn new(thresholds: Vec<u128>, multipliers: Vec<u128>) -> Result<Self> {
        require!(
            thresholds.len() == multipliers.len(),
            StakingError::InvalidTierConfig
        );
        require!(thresholds.len() <= MAX_TIERS, StakingError::InvalidTierConfig);
        require!(
            thresholds.windows(2).all(|pair| pair[0] < pair[1]),
            StakingError::InvalidTierConfig
        );

        Ok(Self {
            thresholds,
            multipliers,
        })
    }

    /// Multiplier of the greatest threshold <= `amount`, or 1.0x below the first tier.
    pub fn lookup(&self, amount: u128) -> u128 {
        self.thresholds
            .iter()
            .rposition(|threshold| *threshold <= amount)
            .map_or(SCALE, |index| self.multipliers[index])
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = SCALE;

    fn launch_tiers() -> TierTable {
        TierTable::new(
            vec![0, 50_000 * E18, 250_000 * E18],
            vec![E18, 1_200_000_000_000_000_000, 1_500_000_000_000_000_000],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_picks_greatest_threshold_below_amount() {
        let tiers = launch_tiers();
        assert_eq!(tiers.lookup(10_000 * E18), E18);
        assert_eq!(tiers.lookup(60_000 * E18), 1_200_000_000_000_000_000);
        assert_eq!(tiers.lookup(300_000 * E18), 1_500_000_000_000_000_000);
    }

    #[test]
    fn test_lookup_at_exact_threshold() {
        let tiers = launch_tiers();
        assert_eq!(tiers.lookup(50_000 * E18), 1_200_000_000_000_000_000);
        assert_eq!(tiers.lookup(50_000 * E18 - 1), E18);
    }

    #[test]
    fn test_below_first_threshold_is_one_x() {
        let tiers = TierTable::new(vec![1_000], vec![2 * E18]).unwrap();
        assert_eq!(tiers.lookup(999), E18);
        assert_eq!(tiers.lookup(1_000), 2 * E18);
    }

    #[test]
    fn test_empty_table_is_one_x() {
        let tiers = TierTable::default();
        assert!(tiers.is_empty());
        assert_eq!(tiers.lookup(u128::MAX), E18);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = TierTable::new(vec![0, 10], vec![E18]).unwrap_err();
        assert_eq!(err, StakingError::InvalidTierConfig.into());
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let err = TierTable::new(vec![0, 10, 10], vec![E18, E18, E18]).unwrap_err();
        assert_eq!(err, StakingError::InvalidTierConfig.into());
        let err = TierTable::new(vec![10, 0], vec![E18, E18]).unwrap_err();
        assert_eq!(err, StakingError::InvalidTierConfig.into());
    }

    #[test]
    fn test_rejects_too_many_tiers() {
        let thresholds: Vec<u128> = (0..=MAX_TIERS as u128).collect();
        let multipliers = vec![E18; MAX_TIERS + 1];
        let err = TierTable::new(thresholds, multipliers).unwrap_err();
        assert_eq!(err, StakingError::InvalidTierConfig.into());
    }
}
