use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SamplingConfig;
use crate::error::Result;
use crate::ops::{count_non_finite, diffs, domain, finite_range, sample_with};
use crate::wave::WaveFunction;

/// One sampling run: the domain, the function's values over it and their
/// first difference. All three have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct EventSeries {
    function: WaveFunction,
    domain: Array1<f64>,
    wave: Array1<f64>,
    deltas: Array1<f64>,
}

/// Headline numbers for a series, finite values only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSummary {
    pub samples: usize,
    pub wave_range: Option<(f64, f64)>,
    pub delta_range: Option<(f64, f64)>,
    pub non_finite: usize,
    pub events: usize,
}

impl EventSeries {
    /// Samples `function` as described by `config`.
    pub fn generate(function: WaveFunction, config: &SamplingConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let xs = domain(config.samples, config.lower, config.upper)?;
        let wave = sample_with(
            |points| function.apply(points, &mut rng),
            config.samples,
            config.lower,
            config.upper,
        )?;
        Ok(Self::from_parts(function, xs, wave))
    }

    pub(crate) fn from_parts(function: WaveFunction, domain: Array1<f64>, wave: Array1<f64>) -> Self {
        debug_assert_eq!(domain.len(), wave.len(), "domain and wave length differ");
        let deltas = diffs(&wave.view());

        let bad = count_non_finite(&wave.view());
        if bad > 0 {
            tracing::warn!(
                function = function.name(),
                non_finite = bad,
                samples = wave.len(),
                "wave contains values outside the function's domain"
            );
        }
        tracing::debug!(function = function.name(), samples = wave.len(), "sampled wave");

        Self {
            function,
            domain,
            wave,
            deltas,
        }
    }

    pub fn function(&self) -> WaveFunction {
        self.function
    }

    pub fn domain(&self) -> ArrayView1<'_, f64> {
        self.domain.view()
    }

    pub fn wave(&self) -> ArrayView1<'_, f64> {
        self.wave.view()
    }

    pub fn deltas(&self) -> ArrayView1<'_, f64> {
        self.deltas.view()
    }

    pub fn len(&self) -> usize {
        self.wave.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wave.is_empty()
    }

    pub fn non_finite_count(&self) -> usize {
        count_non_finite(&self.wave.view())
    }

    /// Number of finite, non-zero amplitude changes.
    pub fn event_count(&self) -> usize {
        self.deltas
            .iter()
            .filter(|d| d.is_finite() && **d != 0.0)
            .count()
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            samples: self.len(),
            wave_range: finite_range(&self.wave.view()),
            delta_range: finite_range(&self.deltas.view()),
            non_finite: self.non_finite_count(),
            events: self.event_count(),
        }
    }
}
