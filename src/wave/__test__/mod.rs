use crate::ops::{diffs, domain};
use crate::wave::{evaluate, sign, WaveFunction};
use approx::assert_relative_eq;
use ndarray::arr1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

const EPSILON: f64 = 1e-12;

#[test]
fn test_menu_has_thirteen_unique_keys() {
    assert_eq!(WaveFunction::ALL.len(), 13);
    for (i, f) in WaveFunction::ALL.iter().enumerate() {
        assert_eq!(usize::from(f.key()), i + 1, "{} is out of menu order", f.name());
        assert_eq!(WaveFunction::from_key(&f.key().to_string()), Some(*f));
    }
}

#[test]
fn test_resolve_falls_back_to_sine() {
    assert_eq!(WaveFunction::resolve("1"), WaveFunction::SineWave);
    assert_eq!(WaveFunction::resolve("unknown-key"), WaveFunction::SineWave);
    assert_eq!(WaveFunction::resolve("unknown-key"), WaveFunction::DEFAULT);
    assert_eq!(WaveFunction::resolve(""), WaveFunction::DEFAULT);
    assert_eq!(WaveFunction::resolve("14"), WaveFunction::DEFAULT);
    assert_eq!(WaveFunction::resolve("0"), WaveFunction::DEFAULT);
    // lookup is exact, trimming belongs to the input boundary
    assert_eq!(WaveFunction::resolve(" 2"), WaveFunction::DEFAULT);
    assert_eq!(WaveFunction::resolve("02"), WaveFunction::DEFAULT);
    assert_eq!(WaveFunction::resolve("13"), WaveFunction::PiecewiseFunction);
}

#[test]
fn test_names_and_display() {
    assert_eq!(WaveFunction::HybridSinExp.name(), "Hybrid Sin-Exp");
    assert_eq!(WaveFunction::TangentWave.to_string(), "5: Tangent Wave");
    assert_eq!(WaveFunction::default(), WaveFunction::SineWave);
}

#[test]
fn test_closed_forms() {
    let x = 0.125;
    assert_relative_eq!(evaluate(WaveFunction::SineWave, x), (PI / 4.0).sin(), epsilon = EPSILON);
    assert_relative_eq!(evaluate(WaveFunction::Parabola, -3.0), 9.0);
    assert_relative_eq!(evaluate(WaveFunction::Cubic, -2.0), -8.0);
    assert_relative_eq!(evaluate(WaveFunction::CosineWave, 0.5), -1.0, epsilon = EPSILON);
    assert_relative_eq!(evaluate(WaveFunction::TangentWave, x), 0.1, epsilon = EPSILON);
    assert_relative_eq!(evaluate(WaveFunction::Exponential, 1.0), std::f64::consts::E);
    assert_relative_eq!(evaluate(WaveFunction::Logarithmic, -0.1), 0.0, epsilon = EPSILON);
    assert_relative_eq!(evaluate(WaveFunction::Quartic, 2.0), 12.0);
    assert_relative_eq!(evaluate(WaveFunction::HybridSinExp, 0.25), (-0.25f64).exp(), epsilon = EPSILON);
}

#[test]
fn test_square_and_sawtooth() {
    assert_eq!(evaluate(WaveFunction::SquareWave, 0.25), 1.0);
    assert_eq!(evaluate(WaveFunction::SquareWave, -0.25), -1.0);
    assert_eq!(evaluate(WaveFunction::SquareWave, 0.0), 0.0);

    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-3.0), -1.0);
    assert!(sign(f64::NAN).is_nan());

    assert_relative_eq!(evaluate(WaveFunction::SawtoothWave, 0.0), 0.0);
    assert_relative_eq!(evaluate(WaveFunction::SawtoothWave, 0.25), 0.5);
    assert_relative_eq!(evaluate(WaveFunction::SawtoothWave, 0.5), -1.0);
    assert_relative_eq!(evaluate(WaveFunction::SawtoothWave, -0.75), 0.5);
}

#[test]
fn test_piecewise_switches_at_zero() {
    assert_relative_eq!(evaluate(WaveFunction::PiecewiseFunction, -0.5), 0.25);
    assert_relative_eq!(evaluate(WaveFunction::PiecewiseFunction, 0.0), 0.0);
    assert_relative_eq!(evaluate(WaveFunction::PiecewiseFunction, 0.25), 1.0, epsilon = EPSILON);
}

#[test]
fn test_non_finite_outputs_are_not_suppressed() {
    assert_eq!(evaluate(WaveFunction::Logarithmic, -1.1), f64::NEG_INFINITY);
    assert!(evaluate(WaveFunction::Logarithmic, -2.0).is_nan());
    assert!(evaluate(WaveFunction::Exponential, 1000.0).is_infinite());
}

#[test]
fn test_deterministic_apply_ignores_rng() {
    let xs = domain(7, -1.0, 1.0).unwrap();
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    for f in WaveFunction::ALL.iter().filter(|f| !f.is_stochastic()) {
        assert_eq!(f.apply(xs.view(), &mut a), f.apply(xs.view(), &mut b), "{}", f);
    }
}

#[test]
fn test_noisy_sine_is_seeded() {
    let xs = domain(64, -1.0, 1.0).unwrap();
    let f = WaveFunction::NoisySineWave;
    assert!(f.is_stochastic());

    let first = f.apply(xs.view(), &mut StdRng::seed_from_u64(42));
    let again = f.apply(xs.view(), &mut StdRng::seed_from_u64(42));
    let other = f.apply(xs.view(), &mut StdRng::seed_from_u64(43));
    assert_eq!(first, again);
    assert_ne!(first, other);

    // noise stays around the clean sine
    let clean = WaveFunction::SineWave.apply(xs.view(), &mut StdRng::seed_from_u64(0));
    let residual = &first - &clean;
    let mean = residual.sum() / residual.len() as f64;
    assert!(mean.abs() < 0.2, "mean residual {}", mean);
    assert!(residual.iter().all(|r| r.abs() < 2.0));
}

#[test]
fn test_cubic_changes() {
    let xs = domain(3, -1.0, 1.0).unwrap();
    let wave = WaveFunction::Cubic.apply(xs.view(), &mut StdRng::seed_from_u64(0));
    assert_eq!(diffs(&wave.view()), arr1(&[0.0, 1.0, 1.0]));
}

#[test]
fn test_noise_spread_matches_amplitude() {
    let xs = domain(4096, -1.0, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let noisy = WaveFunction::NoisySineWave.apply(xs.view(), &mut rng);
    let clean = WaveFunction::SineWave.apply(xs.view(), &mut rng);

    let residual = &noisy - &clean;
    assert_eq!(residual.len(), xs.len());
    let mean = residual.sum() / residual.len() as f64;
    let var = residual.mapv(|r| (r - mean).powi(2)).sum() / residual.len() as f64;
    // 0.2 * N(0, 1) has variance 0.04
    assert!((0.03..0.05).contains(&var), "variance {}", var);
    assert!(mean.abs() < 0.02, "mean {}", mean);
}
