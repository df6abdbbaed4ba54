use thiserror::Error;

/// Errors raised while sampling a wave or drawing it.
///
/// Non-finite function values are not errors: they travel through the wave
/// and delta sequences untouched.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A domain needs at least one sample point.
    #[error("sample count must be at least 1, got {0}")]
    EmptyDomain(usize),
    /// Domain bounds coming from configuration must be finite numbers.
    #[error("{name} bound must be finite, got {value}")]
    NonFiniteBound { name: &'static str, value: f64 },
    /// Requested chart panel cannot hold a readable plot.
    #[error("plot panel {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    PlotTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = WaveError> = std::result::Result<T, E>;
