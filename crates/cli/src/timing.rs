//! Wall-clock comparison of exact rounding against the naive baseline.

use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

use osmcore::api::{naive_round, Quantizer, SAMPLE_VALUES};

/// Ratio above which exact rounding counts as too slow.
pub const MAX_RATIO: f64 = 10.0;

/// Baselines shorter than this are below timer resolution; the ratio is
/// taken against this floor instead.
pub const MIN_BASELINE: Duration = Duration::from_micros(200);

#[derive(Debug, Serialize)]
pub struct RoundingTiming {
    pub calls: usize,
    pub naive_ms: f64,
    pub exact_ms: f64,
    pub ratio: f64,
}

impl RoundingTiming {
    pub fn within_bound(&self) -> bool {
        self.ratio <= MAX_RATIO
    }
}

fn time<F: FnMut() -> f64>(mut run: F) -> Duration {
    let start = Instant::now();
    black_box(run());
    start.elapsed()
}

/// Round every sample value `iterations` times with each method.
pub fn time_rounding(q: &Quantizer, iterations: usize) -> RoundingTiming {
    let step = q.cfg().step();
    let naive = time(|| {
        let mut acc = 0.0;
        for _ in 0..iterations {
            for &v in SAMPLE_VALUES {
                acc += naive_round(black_box(v), step);
            }
        }
        acc
    });
    let exact = time(|| {
        let mut acc = 0.0;
        for _ in 0..iterations {
            for &v in SAMPLE_VALUES {
                acc += q.quantize(black_box(v)).unwrap_or(f64::NAN);
            }
        }
        acc
    });
    RoundingTiming {
        calls: iterations * SAMPLE_VALUES.len(),
        naive_ms: naive.as_secs_f64() * 1e3,
        exact_ms: exact.as_secs_f64() * 1e3,
        ratio: ratio(exact, naive),
    }
}

fn ratio(exact: Duration, naive: Duration) -> f64 {
    exact.as_secs_f64() / naive.max(MIN_BASELINE).as_secs_f64()
}
