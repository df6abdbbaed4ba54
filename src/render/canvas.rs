/// Fixed-size grid of characters, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes `ch` at (`col`, `row`); out-of-range cells are ignored.
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = ch;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.cells[row * self.width + col])
    }

    /// Fills rows `from..=to` (in either order) of one column.
    pub fn vline(&mut self, col: usize, from: usize, to: usize, ch: char) {
        let (top, bottom) = if from <= to { (from, to) } else { (to, from) };
        for row in top..=bottom {
            self.set(col, row, ch);
        }
    }

    pub fn hline(&mut self, row: usize, ch: char) {
        for col in 0..self.width {
            self.set(col, row, ch);
        }
    }

    pub fn row_string(&self, row: usize) -> String {
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .collect()
    }
}

/// Vertical mapping from values to canvas rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
}

impl YScale {
    /// Fits the scale to a finite `(min, max)` range. A flat or missing range
    /// is widened by one unit each way so it still gets a band.
    pub fn fit(range: Option<(f64, f64)>, include_zero: bool) -> Self {
        let (mut min, mut max) = range.unwrap_or((0.0, 0.0));
        if include_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        Self { min, max }
    }

    /// Row for `value`, `None` when it is not finite.
    pub fn row(&self, value: f64, height: usize) -> Option<usize> {
        if !value.is_finite() || height == 0 {
            return None;
        }
        let t = (self.max - value) / (self.max - self.min);
        let row = (t * (height - 1) as f64).round();
        // NaN casts to 0, negatives saturate at 0
        Some((row as usize).min(height - 1))
    }
}

/// Column for sample `index` out of `len` samples spread over `width` cells.
pub fn column(index: usize, len: usize, width: usize) -> usize {
    if len <= 1 || width == 0 {
        0
    } else {
        index * (width - 1) / (len - 1)
    }
}
