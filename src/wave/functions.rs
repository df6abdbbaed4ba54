//! 메뉴 함수들의 닫힌 형태 (closed forms of the menu functions)
//!
//! Each entry works on one abscissa at a time. Noise for the stochastic entry
//! is added by the caller, see [`NOISE_AMPLITUDE`].

use std::f64::consts::PI;

use super::WaveFunction;

/// Standard deviation of the Gaussian noise added to the noisy sine wave.
pub const NOISE_AMPLITUDE: f64 = 0.2;

/// Shift applied inside the logarithm so `x = -1` is still defined.
pub const LOG_SHIFT: f64 = 1.1;

/// Sign with `sign(0) = 0` and NaN preserved; `f64::signum` maps zero to one.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

#[inline]
fn sin_2pi(x: f64) -> f64 {
    (2.0 * PI * x).sin()
}

/// Deterministic part of `function` at `x`.
///
/// Inputs outside a function's domain (the tangent's poles, the logarithm
/// below `-LOG_SHIFT`) return infinities or NaN.
#[inline]
pub fn evaluate(function: WaveFunction, x: f64) -> f64 {
    use WaveFunction::*;

    match function {
        SineWave | NoisySineWave => sin_2pi(x),
        Parabola => x * x,
        Cubic => x * x * x,
        CosineWave => (2.0 * PI * x).cos(),
        TangentWave => (2.0 * PI * x).tan() / 10.0,
        Exponential => x.exp(),
        Logarithmic => (x + LOG_SHIFT).ln(),
        SquareWave => sign(sin_2pi(x)),
        SawtoothWave => 2.0 * (x - (x + 0.5).floor()),
        Quartic => x.powi(4) - x * x,
        HybridSinExp => sin_2pi(x) * (-x).exp(),
        PiecewiseFunction => {
            if x < 0.0 {
                x * x
            } else {
                sin_2pi(x)
            }
        }
    }
}
