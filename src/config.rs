use crate::error::{Result, WaveError};

pub const DEFAULT_SAMPLES: usize = 100;
pub const DEFAULT_LOWER: f64 = -1.0;
pub const DEFAULT_UPPER: f64 = 1.0;

pub const DEFAULT_PLOT_WIDTH: usize = 48;
pub const DEFAULT_PLOT_HEIGHT: usize = 14;
pub const MIN_PLOT_WIDTH: usize = 16;
pub const MIN_PLOT_HEIGHT: usize = 4;

/// How a wave is sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    /// Number of domain points, at least one.
    pub samples: usize,
    pub lower: f64,
    pub upper: f64,
    /// Seed for stochastic functions. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            seed: None,
        }
    }
}

impl SamplingConfig {
    pub fn new(samples: usize, lower: f64, upper: f64) -> Self {
        Self {
            samples,
            lower,
            upper,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects an empty domain and non-finite bounds. Reversed or equal
    /// bounds are fine.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(WaveError::EmptyDomain(self.samples));
        }
        for (name, value) in [("lower", self.lower), ("upper", self.upper)] {
            if !value.is_finite() {
                return Err(WaveError::NonFiniteBound { name, value });
            }
        }
        Ok(())
    }
}

/// Size of one chart panel in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl PlotConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_PLOT_WIDTH || self.height < MIN_PLOT_HEIGHT {
            return Err(WaveError::PlotTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_PLOT_WIDTH,
                min_height: MIN_PLOT_HEIGHT,
            });
        }
        Ok(())
    }
}
