//! # 렌더링
//!
//! Plotters turn an [`EventSeries`] into something a person can look at.
//! The sampling code never depends on a concrete plotter.

pub mod canvas;
pub mod chart;
pub mod table;

pub use chart::ChartPlotter;
pub use table::TablePlotter;

use crate::error::Result;
use crate::series::EventSeries;

pub trait Plotter {
    fn plot(&mut self, series: &EventSeries) -> Result<()>;
}
