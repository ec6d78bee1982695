//! Fixed-point arithmetic on `u128` values scaled by [`SCALE`].
//!
//! Multipliers and the reward accumulator are stored as integers where
//! `SCALE` (10^18) represents 1.0. Every product is formed in a 256-bit
//! intermediate so the true product never overflows before it is scaled
//! back down. Results are rounded toward zero unless the name says otherwise.

use anchor_lang::prelude::*;

use crate::constants::SCALE;
use crate::error::StakingError;

pub use wide::U256;

// Kept out of the anchor prelude's scope: the macro expects core's `Result`.
mod wide {
    uint::construct_uint! {
        /// 256-bit unsigned integer used for intermediate products.
        pub struct U256(4);
    }
}

/// Narrow a 256-bit result back to `u128`.
fn narrow(value: U256) -> Result<u128> {
    require!(
        value <= U256::from(u128::MAX),
        StakingError::ArithmeticOverflow
    );
    Ok(value.as_u128())
}

/// Compute `floor(a * b / denominator)`.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, StakingError::DivisionByZero);
    let product = U256::from(a) * U256::from(b);
    narrow(product / U256::from(denominator))
}

/// Multiply two scaled values: `a * b / SCALE`.
pub fn mul(a: u128, b: u128) -> Result<u128> {
    mul_div(a, b, SCALE)
}

/// Multiply two scaled values, rounding up: `ceil(a * b / SCALE)`.
pub fn mul_ceil(a: u128, b: u128) -> Result<u128> {
    let product = U256::from(a) * U256::from(b);
    let scale = U256::from(SCALE);
    narrow((product + scale - U256::one()) / scale)
}

/// Divide two scaled values: `a * SCALE / b`.
pub fn div(a: u128, b: u128) -> Result<u128> {
    mul_div(a, SCALE, b)
}

/// Apply two scaled multipliers to a raw amount with a single rounding:
/// `floor(amount * first * second / SCALE²)`.
pub fn weigh(amount: u128, first: u128, second: u128) -> Result<u128> {
    let product = (U256::from(amount) * U256::from(first))
        .checked_mul(U256::from(second))
        .ok_or(StakingError::ArithmeticOverflow)?;
    narrow(product / (U256::from(SCALE) * U256::from(SCALE)))
}
