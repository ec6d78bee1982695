//! Error types for the Mining Staking program.
//!
//! This module defines all custom error codes that can be returned by the program.
//! Codes are assigned in declaration order starting at Anchor's custom offset
//! (6000); the bracketed number on each variant is its code.

use anchor_lang::prelude::*;

/// Custom error codes for the Mining Staking program.
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Cannot stake, withdraw or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6001] Lock duration exceeds the 365-day maximum.
    #[msg("Lock duration exceeds the maximum of 365 days")]
    InvalidLockDuration,

    /// [6002] Tier thresholds and multipliers are mismatched, unordered or too many.
    #[msg("Invalid tier configuration: thresholds must be strictly ascending and match multipliers")]
    InvalidTierConfig,

    /// [6003] An emission schedule must span at least one day.
    #[msg("Emission schedule must span at least one day")]
    InvalidEmissionSchedule,

    // ========== State/Balance Errors ==========

    /// [6004] User does not have enough staked tokens for the operation.
    #[msg("Insufficient staked balance for this operation")]
    InsufficientStake,

    /// [6005] The reward payout could not be made; accrued rewards are kept.
    #[msg("Reward payout unavailable - treasury cannot cover the claim")]
    PayoutUnavailable,

    /// [6006] The source account cannot cover a token transfer.
    #[msg("Insufficient funds for token transfer")]
    InsufficientFunds,

    /// [6007] The token ledger rejected a transfer.
    #[msg("Token transfer failed")]
    TransferFailed,

    /// [6008] User stake account is not initialized.
    #[msg("User stake account not initialized")]
    StakeNotInitialized,

    // ========== Time/Lock Errors ==========

    /// [6009] The lock commitment has not yet ended.
    #[msg("Lock is still active - cannot withdraw yet")]
    LockActive,

    /// [6010] Clock moved backwards relative to the last accumulator update.
    #[msg("Invalid timestamp detected")]
    InvalidTimestamp,

    // ========== Math/Overflow Errors ==========

    /// [6011] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    ArithmeticOverflow,

    /// [6012] Division by zero attempted.
    #[msg("Division by zero attempted")]
    DivisionByZero,

    /// [6013] Integer conversion failed (value out of range).
    #[msg("Integer conversion failed - value out of range")]
    ConversionOverflow,

    // ========== Authorization Errors ==========

    /// [6014] Unauthorized - caller is not the admin.
    #[msg("Unauthorized: caller is not the pool admin")]
    Unauthorized,

    /// [6015] Unauthorized - signer does not match stake owner.
    #[msg("Unauthorized: signer does not match stake owner")]
    InvalidStakeOwner,

    // ========== Account Validation Errors ==========

    /// [6016] The provided mint does not match the pool's staking token.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6017] The provided vault does not match the pool's staking vault.
    #[msg("Staking vault address mismatch")]
    VaultMismatch,

    /// [6018] The provided treasury does not match the pool's treasury vault.
    #[msg("Treasury vault address mismatch")]
    TreasuryMismatch,

    /// [6019] User stake account does not belong to this pool.
    #[msg("User stake account does not belong to this pool")]
    StakePoolMismatch,

    /// [6020] Vault owner is not the stake pool PDA.
    #[msg("Vault owner must be the stake pool PDA")]
    InvalidVaultOwner,

    /// [6021] Treasury owner is not the stake pool PDA.
    #[msg("Treasury owner must be the stake pool PDA")]
    InvalidTreasuryOwner,

    /// [6022] Token account mint does not match expected mint.
    #[msg("Token account mint does not match pool staking mint")]
    InvalidTokenAccountMint,
}
