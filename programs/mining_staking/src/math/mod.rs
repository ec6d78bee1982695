//! Pure arithmetic used by the reward engine.

pub mod emission;
pub mod fixed_point;
pub mod lock_schedule;

pub use fixed_point::{div, mul, mul_ceil, mul_div, weigh};
pub use lock_schedule::lock_multiplier;
