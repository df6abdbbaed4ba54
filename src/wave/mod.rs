//! # 함수 레지스트리
//!
//! The fixed menu of unary functions a user can sample. Keys are the strings
//! `"1"` through `"13"`; any other key resolves to [`WaveFunction::DEFAULT`]
//! instead of failing.

pub mod functions;

use std::fmt;

use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::{Distribution, StandardNormal};
use rand::Rng;

pub use functions::{evaluate, sign, LOG_SHIFT, NOISE_AMPLITUDE};

/// Menu entries, numbered by their menu key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WaveFunction {
    SineWave = 1,
    Parabola = 2,
    Cubic = 3,
    CosineWave = 4,
    TangentWave = 5,
    Exponential = 6,
    Logarithmic = 7,
    SquareWave = 8,
    SawtoothWave = 9,
    Quartic = 10,
    NoisySineWave = 11,
    HybridSinExp = 12,
    PiecewiseFunction = 13,
}

impl WaveFunction {
    /// All entries in menu order.
    pub const ALL: [WaveFunction; 13] = [
        WaveFunction::SineWave,
        WaveFunction::Parabola,
        WaveFunction::Cubic,
        WaveFunction::CosineWave,
        WaveFunction::TangentWave,
        WaveFunction::Exponential,
        WaveFunction::Logarithmic,
        WaveFunction::SquareWave,
        WaveFunction::SawtoothWave,
        WaveFunction::Quartic,
        WaveFunction::NoisySineWave,
        WaveFunction::HybridSinExp,
        WaveFunction::PiecewiseFunction,
    ];

    /// Entry substituted for any key that is not on the menu.
    pub const DEFAULT: WaveFunction = WaveFunction::SineWave;

    /// Numeric menu key.
    pub fn key(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveFunction::SineWave => "Sine Wave",
            WaveFunction::Parabola => "Parabola",
            WaveFunction::Cubic => "Cubic",
            WaveFunction::CosineWave => "Cosine Wave",
            WaveFunction::TangentWave => "Tangent Wave",
            WaveFunction::Exponential => "Exponential",
            WaveFunction::Logarithmic => "Logarithmic",
            WaveFunction::SquareWave => "Square Wave",
            WaveFunction::SawtoothWave => "Sawtooth Wave",
            WaveFunction::Quartic => "Quartic",
            WaveFunction::NoisySineWave => "Noisy Sine Wave",
            WaveFunction::HybridSinExp => "Hybrid Sin-Exp",
            WaveFunction::PiecewiseFunction => "Piecewise Function",
        }
    }

    /// Exact lookup. `" 1"`, `"01"` and `"sine"` are all misses.
    pub fn from_key(key: &str) -> Option<Self> {
        let code: u8 = match key {
            "1" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => 5,
            "6" => 6,
            "7" => 7,
            "8" => 8,
            "9" => 9,
            "10" => 10,
            "11" => 11,
            "12" => 12,
            "13" => 13,
            _ => return None,
        };
        Self::ALL.get(usize::from(code) - 1).copied()
    }

    /// Lookup that never fails: misses fall back to [`Self::DEFAULT`].
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = Self::DEFAULT.name(), "unknown menu key");
            Self::DEFAULT
        })
    }

    /// Whether two evaluations over the same domain may differ.
    pub fn is_stochastic(self) -> bool {
        matches!(self, WaveFunction::NoisySineWave)
    }

    /// Evaluates the function over every point of `xs`.
    ///
    /// `rng` is only drawn from by stochastic entries, one standard normal
    /// sample per point.
    pub fn apply<R: Rng + ?Sized>(self, xs: ArrayView1<f64>, rng: &mut R) -> Array1<f64> {
        let mut ys = xs.mapv(|x| evaluate(self, x));
        if self.is_stochastic() {
            let noise =
                Array1::<f64>::from_shape_simple_fn(ys.len(), || StandardNormal.sample(rng));
            ys.scaled_add(NOISE_AMPLITUDE, &noise);
        }
        ys
    }
}

impl Default for WaveFunction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WaveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.name())
    }
}

#[cfg(test)]
mod __test__;
