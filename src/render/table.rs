use std::io::Write;

use super::Plotter;
use crate::error::Result;
use crate::series::EventSeries;

pub const HEADER: &str = "index\tx\tamplitude\tchange";

/// Tab separated rows of `index, x, amplitude, change`, one per sample.
/// Non-finite values print as `NaN`, `inf` or `-inf`.
pub struct TablePlotter<W: Write> {
    out: W,
}

impl<W: Write> TablePlotter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Plotter for TablePlotter<W> {
    fn plot(&mut self, series: &EventSeries) -> Result<()> {
        writeln!(self.out, "{}", HEADER)?;
        let rows = series
            .domain()
            .into_iter()
            .zip(series.wave())
            .zip(series.deltas());
        for (i, ((x, y), d)) in rows.enumerate() {
            writeln!(self.out, "{}\t{}\t{}\t{}", i, x, y, d)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
