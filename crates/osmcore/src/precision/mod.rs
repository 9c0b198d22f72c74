//! Rounding coordinates to the server precision.
//!
//! Purpose
//! - Snap latitude/longitude doubles to the nearest multiple of a decimal step
//!   (1e-7 degrees by default) without the double rounding of
//!   `round(value / step) * step`.
//!
//! Guarantees
//! - Idempotent: rounding an already rounded value returns it bit for bit.
//! - Correctly rounded: the step count is the exact nearest integer to
//!   `value / step`, ties away from zero; the result is the double nearest to
//!   `count · step`.
//! - Cheap: no allocation, one `u128` multiply and one division per value.
//!
//! Code cross-refs: `Quantizer`, `PrecisionCfg`, `naive_round`, `LatLon`

mod latlon;
mod quantize;
mod types;

pub use latlon::LatLon;
pub use quantize::{naive_round, Quantizer, SAMPLE_VALUES};
pub use types::{
    InvalidInputError, PrecisionCfg, PrecisionCfgError, MAX_DIGITS, SERVER_PRECISION,
};

#[cfg(test)]
mod tests;
