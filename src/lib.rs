//! Wave Events - sample a menu function over a linear domain and watch its
//! amplitude changes emerge from the first difference.

pub mod config;
pub mod error;
pub mod ops;
pub mod render;
pub mod series;
pub mod wave;

#[cfg(feature = "python")]
mod bindings;

pub use config::{PlotConfig, SamplingConfig};
pub use error::{Result, WaveError};
pub use ops::{diffs, domain, sample, sample_with};
pub use render::{ChartPlotter, Plotter, TablePlotter};
pub use series::{EventSeries, SeriesSummary};
pub use wave::WaveFunction;

/// Samples `function`, then hands the series to `plotter`.
pub fn run<P: Plotter + ?Sized>(
    function: WaveFunction,
    config: &SamplingConfig,
    plotter: &mut P,
) -> Result<EventSeries> {
    let series = EventSeries::generate(function, config)?;
    let summary = series.summary();
    tracing::info!(
        function = function.name(),
        samples = summary.samples,
        events = summary.events,
        non_finite = summary.non_finite,
        "plotting wave"
    );
    plotter.plot(&series)?;
    Ok(series)
}
