use std::io::Write;

use ndarray::ArrayView1;

use super::canvas::{column, Canvas, YScale};
use super::Plotter;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::ops::finite_range;
use crate::series::EventSeries;

pub const WAVE_TITLE: &str = "Waveform as Event Sequence";
pub const DELTA_TITLE: &str = "Amplitude Changes (Emergent Events)";

const LABEL_WIDTH: usize = 10;
const GUTTER: usize = LABEL_WIDTH + 2;
const PANEL_GAP: &str = "    ";

const POINT: char = '*';
const TRACE: char = '.';
const STEM: char = '|';
const MARKER: char = 'o';
const BASELINE: char = '-';

/// Two text panels side by side: the wave against its event index on the
/// left and a stem plot of the amplitude changes on the right.
pub struct ChartPlotter<W: Write> {
    out: W,
    config: PlotConfig,
}

impl<W: Write> ChartPlotter<W> {
    pub fn new(out: W, config: PlotConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { out, config })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn wave_panel(&self, wave: &ArrayView1<f64>) -> Vec<String> {
        let PlotConfig { width, height } = self.config;
        let scale = YScale::fit(finite_range(wave), false);
        let mut canvas = Canvas::new(width, height);

        let mut prev: Option<(usize, usize)> = None;
        for (i, &v) in wave.iter().enumerate() {
            let col = column(i, wave.len(), width);
            let point = scale.row(v, height).map(|row| (col, row));
            if let (Some((pc, pr)), Some((c, r))) = (prev, point) {
                // join neighbours so steep stretches read as a line
                if c > pc && pr.abs_diff(r) > 1 {
                    canvas.vline(c, pr, r, TRACE);
                }
            }
            prev = point;
        }
        for (i, &v) in wave.iter().enumerate() {
            if let Some(row) = scale.row(v, height) {
                canvas.set(column(i, wave.len(), width), row, POINT);
            }
        }
        panel(&canvas, &scale, WAVE_TITLE, "Amplitude", wave.len())
    }

    fn delta_panel(&self, deltas: &ArrayView1<f64>) -> Vec<String> {
        let PlotConfig { width, height } = self.config;
        let scale = YScale::fit(finite_range(deltas), true);
        let mut canvas = Canvas::new(width, height);

        let base = scale.row(0.0, height).unwrap_or(height - 1);
        canvas.hline(base, BASELINE);
        for (i, &d) in deltas.iter().enumerate() {
            if let Some(row) = scale.row(d, height) {
                let col = column(i, deltas.len(), width);
                canvas.vline(col, base, row, STEM);
                canvas.set(col, row, MARKER);
            }
        }
        panel(&canvas, &scale, DELTA_TITLE, "Change in Amplitude", deltas.len())
    }
}

impl<W: Write> Plotter for ChartPlotter<W> {
    fn plot(&mut self, series: &EventSeries) -> Result<()> {
        let left = self.wave_panel(&series.wave());
        let right = self.delta_panel(&series.deltas());
        let panel_width = GUTTER + self.config.width;

        let domain = series.domain();
        let (first, last) = if domain.is_empty() {
            (0.0, 0.0)
        } else {
            (domain[0], domain[domain.len() - 1])
        };
        writeln!(
            self.out,
            "{} ({} samples, x from {} to {})",
            series.function().name(),
            series.len(),
            first,
            last
        )?;
        for (l, r) in left.iter().zip(right.iter()) {
            writeln!(self.out, "{:<w$}{}{}", l, PANEL_GAP, r, w = panel_width)?;
        }

        let skipped = series.non_finite_count();
        if skipped > 0 {
            writeln!(self.out, "({} non-finite values not drawn)", skipped)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Title, y label, plot rows with a labelled gutter, x axis and ticks.
fn panel(canvas: &Canvas, scale: &YScale, title: &str, y_label: &str, len: usize) -> Vec<String> {
    let width = canvas.width();
    let total = GUTTER + width;
    let mut lines = Vec::with_capacity(canvas.height() + 5);

    lines.push(format!("{:^w$}", clip(title, total), w = total));
    lines.push(format!("{:<w$}", clip(y_label, total), w = total));
    for row in 0..canvas.height() {
        let label = if row == 0 {
            format!("{:.3}", scale.max)
        } else if row + 1 == canvas.height() {
            format!("{:.3}", scale.min)
        } else {
            String::new()
        };
        lines.push(format!(
            "{:>lw$} |{}",
            clip(&label, LABEL_WIDTH),
            canvas.row_string(row),
            lw = LABEL_WIDTH
        ));
    }
    lines.push(format!("{:>lw$} +{}", "", "-".repeat(width), lw = LABEL_WIDTH));

    let last = len.saturating_sub(1).to_string();
    let pad = width.saturating_sub(1 + last.len());
    lines.push(format!("{:g$}0{}{}", "", " ".repeat(pad), last, g = GUTTER));
    lines.push(format!("{:^w$}", "Event Index", w = total));
    lines
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
