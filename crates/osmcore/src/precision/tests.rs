use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn server() -> Quantizer {
    Quantizer::new(SERVER_PRECISION)
}

/// Step count of a rounded value at 7 digits.
fn steps(x: f64) -> i64 {
    (x * 1e7).round() as i64
}

#[test]
fn half_step_boundary_rounds_consistently() {
    let q = server();
    let below = q.quantize(0.0000000499999).unwrap();
    let at = q.quantize(0.00000005).unwrap();
    assert_eq!(below, at);
    assert_eq!(at, 0.0);
    // The naive method rounds the stored 5e-8 (which is below 5e-8) up.
    assert_eq!(naive_round(0.00000005, 1e-7), 1e-7);
}

#[test]
fn naive_method_lands_on_wrong_step_near_boundaries() {
    let q = server();
    for &(x, expected) in &[
        (5e-8, 0.0),
        (12.34567895, 12.3456789),
        (-179.99999995, -179.9999999),
    ] {
        assert_eq!(q.quantize(x).unwrap(), expected, "x = {x}");
        assert_ne!(steps(naive_round(x, 1e-7)), steps(expected), "x = {x}");
    }
}

#[test]
fn exact_tie_rounds_away_from_zero() {
    let q = server();
    assert_eq!(q.quantize(0.00390625).unwrap(), 0.0039063);
    assert_eq!(q.quantize(-0.00390625).unwrap(), -0.0039063);

    let units = Quantizer::new(PrecisionCfg::new(0).unwrap());
    assert_eq!(units.quantize(2.5).unwrap(), 3.0);
    assert_eq!(units.quantize(-2.5).unwrap(), -3.0);
    assert_eq!(units.quantize(3.4999999).unwrap(), 3.0);
}

#[test]
fn results_are_nearest_double_to_step_multiple() {
    let q = server();
    // The naive product 1000000 * 1e-7 is one ulp below 0.1.
    assert_eq!(q.quantize(0.1).unwrap(), 0.1);
    assert_eq!(q.quantize(89.9999999).unwrap(), 89.9999999);
    assert_eq!(q.quantize(-45.123456789).unwrap(), -45.1234568);
}

#[test]
fn sign_of_zero_is_preserved() {
    let q = server();
    let neg = q.quantize(-1e-9).unwrap();
    assert_eq!(neg, 0.0);
    assert!(neg.is_sign_negative());
    assert!(q.quantize(0.0).unwrap().is_sign_positive());
}

#[test]
fn non_finite_inputs_are_rejected() {
    let q = server();
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = q.quantize(v).unwrap_err();
        assert!(err.value.is_nan() || err.value == v);
        assert!(err.to_string().contains("finite"));
    }
    assert!(q.quantize_unchecked(f64::NAN).is_nan());
    assert_eq!(q.quantize_unchecked(f64::INFINITY), f64::INFINITY);
}

#[test]
fn extreme_magnitudes_pass_through() {
    let q = server();
    for v in [1e300, -1e300, f64::MAX, 2.5e8 + 0.123] {
        assert_eq!(q.quantize(v).unwrap(), v);
    }
    assert_eq!(q.quantize(f64::MIN_POSITIVE).unwrap(), 0.0);
    assert_eq!(q.quantize(5e-324).unwrap(), 0.0);
}

#[test]
fn sample_values_agree_with_naive_step_count_away_from_boundaries() {
    let q = server();
    for &x in SAMPLE_VALUES {
        let frac = (x.abs() * 1e7).fract();
        if (frac - 0.5).abs() < 1e-6 {
            continue;
        }
        let ours = q.quantize(x).unwrap();
        let naive = naive_round(x, 1e-7);
        assert_eq!(steps(ours), steps(naive), "x = {x}");
        assert!((ours - naive).abs() <= 1e-15 * x.abs().max(1.0), "x = {x}");
    }
}

#[test]
fn random_coordinates_agree_with_naive_step_count() {
    let q = server();
    let mut rng = StdRng::seed_from_u64(9632);
    let mut compared = 0;
    for _ in 0..50_000 {
        let raw: f64 = rng.gen_range(-180.0..180.0);
        // nine decimals, like coordinates from a GPS trace or an import
        let x = (raw * 1e9).round() / 1e9;
        let frac = (x.abs() * 1e7).fract();
        if (frac - 0.5).abs() < 1e-6 {
            continue;
        }
        compared += 1;
        let ours = q.quantize(x).unwrap();
        assert_eq!(steps(ours), steps(naive_round(x, 1e-7)), "x = {x}");
        assert!((ours - x).abs() <= 0.5e-7 + 1e-13, "x = {x}");
    }
    assert!(compared > 45_000);
}

#[test]
fn cfg_rejects_too_many_digits() {
    assert_eq!(
        PrecisionCfg::new(MAX_DIGITS + 1),
        Err(PrecisionCfgError::UnsupportedDigits {
            digits: MAX_DIGITS + 1
        })
    );
    let cfg = PrecisionCfg::new(3).unwrap();
    assert_eq!(cfg.scale(), 1000);
    assert_eq!(cfg.step(), 1e-3);
    assert_eq!(PrecisionCfg::default(), SERVER_PRECISION);
    assert_eq!(Quantizer::default().cfg().digits(), 7);
}

#[test]
fn other_precisions_round_to_their_step() {
    let q3 = Quantizer::new(PrecisionCfg::new(3).unwrap());
    assert_eq!(q3.quantize(12.3456).unwrap(), 12.346);
    assert_eq!(q3.quantize(-0.0004).unwrap(), -0.0);
    let q15 = Quantizer::new(PrecisionCfg::new(MAX_DIGITS).unwrap());
    assert_eq!(q15.quantize(0.1).unwrap(), 0.1);
}

#[test]
fn latlon_rounds_both_axes() {
    let q = server();
    let p = LatLon::new(52.12345675, -179.99999995);
    let r = p.rounded(&q).unwrap();
    assert_eq!(r, LatLon::new(52.1234568, -179.9999999));
    assert!(r.is_within_world());
    assert!(p.equals_at_precision(&r, &SERVER_PRECISION));
    assert!(!LatLon::new(0.0, 0.0).equals_at_precision(&LatLon::new(0.0, 1e-7), &SERVER_PRECISION));
    assert!(LatLon::new(f64::NAN, 0.0).rounded(&q).is_err());
    // Out-of-world values are still rounded.
    let far = LatLon::new(91.00000004, 200.0).rounded(&q).unwrap();
    assert_eq!(far, LatLon::new(91.0, 200.0));
    assert!(!far.is_within_world());
}

proptest! {
    #[test]
    fn quantize_is_idempotent(x in -1.0e12f64..1.0e12) {
        let q = server();
        let once = q.quantize(x).unwrap();
        let twice = q.quantize(once).unwrap();
        prop_assert_eq!(once.to_bits(), twice.to_bits());
    }

    #[test]
    fn quantize_is_idempotent_on_any_finite_double(bits in any::<u64>()) {
        let x = f64::from_bits(bits);
        prop_assume!(x.is_finite());
        let q = server();
        let once = q.quantize(x).unwrap();
        prop_assert_eq!(once.to_bits(), q.quantize(once).unwrap().to_bits());
    }

    #[test]
    fn quantize_stays_within_half_a_step(x in -180.0f64..180.0) {
        let q = server();
        let r = q.quantize(x).unwrap();
        prop_assert!((r - x).abs() <= 0.5e-7 + 1e-13);
    }

    #[test]
    fn quantize_is_odd(x in -180.0f64..180.0) {
        let q = server();
        prop_assert_eq!(q.quantize(-x).unwrap(), -q.quantize(x).unwrap());
    }

    #[test]
    fn quantize_is_monotone(a in -180.0f64..180.0, b in -180.0f64..180.0) {
        let q = server();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(q.quantize(lo).unwrap() <= q.quantize(hi).unwrap());
    }
}
