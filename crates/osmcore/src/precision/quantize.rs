//! Exact rounding of coordinates to a decimal step.
//!
//! Model
//! - A finite double is exactly `m · 2^e`. Multiplying `m` by `10^digits` in
//!   `u128` and shifting right by `-e` gives the exact step count, which is
//!   rounded half away from zero in the integer domain.
//! - The count is turned back into a coordinate with a single IEEE division
//!   by `10^digits`, so the result is the double nearest to `count · step`.
//!
//! The naive `round(value / step) * step` rounds twice (after the division and
//! after the multiplication) and can land on the wrong step near half-step
//! boundaries, e.g. `5e-8` is stored slightly below 5e-8 yet rounds up to 1e-7.

use super::types::{InvalidInputError, PrecisionCfg};

const FRACTION_BITS: u32 = 52;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
/// Exponent bias plus fraction width: `value = mantissa · 2^(biased - 1075)`.
const EXPONENT_OFFSET: i32 = 1075;

/// Rounds coordinates to a fixed decimal precision.
///
/// Invariants:
/// - `quantize(quantize(x)) == quantize(x)` for every finite `x`.
/// - `|x| · 10^digits >= 2^51` is returned unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Quantizer {
    cfg: PrecisionCfg,
    scale: u64,
    scale_f64: f64,
    limit: f64,
}

impl Quantizer {
    pub fn new(cfg: PrecisionCfg) -> Self {
        let scale = cfg.scale();
        let scale_f64 = scale as f64;
        Self {
            cfg,
            scale,
            scale_f64,
            limit: (1u64 << 51) as f64 / scale_f64,
        }
    }

    #[inline]
    pub fn cfg(&self) -> PrecisionCfg {
        self.cfg
    }

    /// Round `value` to the nearest multiple of the step.
    ///
    /// Fails only for NaN and infinities; range checks belong to the caller.
    #[inline]
    pub fn quantize(&self, value: f64) -> Result<f64, InvalidInputError> {
        if !value.is_finite() {
            return Err(InvalidInputError { value });
        }
        Ok(self.quantize_unchecked(value))
    }

    /// Same as [`Quantizer::quantize`] without the finiteness check.
    /// Non-finite inputs come back unchanged.
    #[inline]
    pub fn quantize_unchecked(&self, value: f64) -> f64 {
        let abs = value.abs();
        // NaN fails this comparison as well.
        if !(abs < self.limit) {
            return value;
        }
        let count = self.step_count(abs);
        let magnitude = count as f64 / self.scale_f64;
        if value.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Exact `round_half_away(abs · 10^digits)` for `0 <= abs < 2^51 / scale`.
    #[inline]
    fn step_count(&self, abs: f64) -> u64 {
        let bits = abs.to_bits();
        let biased = (bits >> FRACTION_BITS) as i32;
        let fraction = bits & FRACTION_MASK;
        let (mantissa, exponent) = if biased == 0 {
            (fraction, 1 - EXPONENT_OFFSET)
        } else {
            (fraction | (1 << FRACTION_BITS), biased - EXPONENT_OFFSET)
        };
        // abs < 2^51, so the exponent is always negative here.
        let shift = exponent.unsigned_abs();
        if shift >= 128 {
            return 0;
        }
        let product = mantissa as u128 * self.scale as u128;
        let quotient = product >> shift;
        let remainder = product & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        let count = if remainder >= half {
            quotient + 1
        } else {
            quotient
        };
        count as u64
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(PrecisionCfg::default())
    }
}

/// Baseline `round(value / step) * step` (half away from zero).
///
/// Fast but subject to double rounding; kept for comparison only.
#[inline]
pub fn naive_round(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Representative coordinates for comparing `quantize` against the naive
/// baseline at 7 digits.
///
/// - range endpoints and typical latitude/longitude values;
/// - small magnitudes around one step;
/// - values a hair off a half-step boundary; the naive result lands on the
///   wrong step for `5e-8`, `12.34567895` and `-179.99999995`;
/// - an exact binary tie (`1/256 = 0.00390625`).
pub const SAMPLE_VALUES: &[f64] = &[
    -180.0,
    -179.99999995,
    -179.9,
    -135.5,
    -90.0,
    -45.123456789,
    -12.34567895,
    -1.0,
    -0.1,
    -5e-8,
    -0.0,
    0.0,
    4.99999e-8,
    5e-8,
    1e-7,
    1.15e-7,
    0.00390625,
    0.1,
    1.0,
    12.34567895,
    13.3888888,
    45.0,
    51.12345675,
    52.1234567,
    89.9999999,
    90.0,
    135.5,
    179.9999999,
    180.0,
];
