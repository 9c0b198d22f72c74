//! Precision configuration and the errors surfaced by rounding.
//!
//! - `PrecisionCfg`: decimal step `10^-digits` accepted by the server.
//! - `InvalidInputError`: NaN/infinite coordinate handed to `quantize`.
//! - `PrecisionCfgError`: unsupported digit count.

use std::fmt;

/// Largest supported digit count. `10^15 · 2^53` still fits the `u128`
/// product used by the quantizer with room to spare.
pub const MAX_DIGITS: u32 = 15;

/// Server precision: 7 decimal digits (1e-7 degrees).
pub const SERVER_PRECISION: PrecisionCfg = PrecisionCfg { digits: 7 };

/// Decimal rounding precision.
///
/// Immutable once built; pass it explicitly to whatever needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrecisionCfg {
    digits: u32,
}

impl PrecisionCfg {
    pub fn new(digits: u32) -> Result<Self, PrecisionCfgError> {
        if digits > MAX_DIGITS {
            return Err(PrecisionCfgError::UnsupportedDigits { digits });
        }
        Ok(Self { digits })
    }

    #[inline]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// `10^digits`, the number of steps per unit.
    #[inline]
    pub fn scale(&self) -> u64 {
        10u64.pow(self.digits)
    }

    /// Step size `10^-digits` as the nearest double.
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.scale() as f64
    }
}

impl Default for PrecisionCfg {
    fn default() -> Self {
        SERVER_PRECISION
    }
}

/// Coordinate handed to the quantizer was NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidInputError {
    pub value: f64,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate must be finite, got {}", self.value)
    }
}

impl std::error::Error for InvalidInputError {}

/// Invalid precision configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrecisionCfgError {
    UnsupportedDigits { digits: u32 },
}

impl fmt::Display for PrecisionCfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDigits { digits } => write!(
                f,
                "unsupported precision: {digits} digits (max {MAX_DIGITS})"
            ),
        }
    }
}

impl std::error::Error for PrecisionCfgError {}
