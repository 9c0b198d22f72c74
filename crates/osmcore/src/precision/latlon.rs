//! Latitude/longitude pairs rounded axis by axis.

use super::quantize::Quantizer;
use super::types::{InvalidInputError, PrecisionCfg};

/// A coordinate in degrees. Not range-checked on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_within_world(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Both axes rounded to the quantizer's precision. Out-of-world values are
    /// rounded as well; only non-finite axes fail.
    pub fn rounded(&self, q: &Quantizer) -> Result<LatLon, InvalidInputError> {
        Ok(LatLon {
            lat: q.quantize(self.lat)?,
            lon: q.quantize(self.lon)?,
        })
    }

    /// True when both axes differ by at most half a step.
    pub fn equals_at_precision(&self, other: &LatLon, cfg: &PrecisionCfg) -> bool {
        let tol = cfg.step() / 2.0;
        (self.lat - other.lat).abs() <= tol && (self.lon - other.lon).abs() <= tol
    }
}
