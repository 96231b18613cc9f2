//! ASCII histograms for eyeballing distributions from a terminal

use crate::error::{QuietCastError, Result};
use std::fmt;

pub const DEFAULT_BIN_COUNT: usize = 70;
pub const DEFAULT_MAX_HEIGHT: usize = 100;
pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_BAR: char = '*';

/// Equal-width bins between the smallest and largest sample
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    ticks: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    pub fn new(data: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(QuietCastError::InvalidConfig(
                "Histogram needs at least one bin".to_string(),
            ));
        }
        if data.is_empty() || data.iter().any(|v| !v.is_finite()) {
            return Err(QuietCastError::InvalidConfig(
                "Histogram needs finite samples".to_string(),
            ));
        }

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &value in data {
            let bin = if width > 0.0 {
                (((value - min) / width) as usize).min(bin_count - 1)
            } else {
                0
            };
            counts[bin] += 1;
        }

        let ticks = (0..bin_count)
            .map(|i| min + width * (i as f64 + 0.5))
            .collect();

        Ok(Self { ticks, counts })
    }

    /// Bin centres
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// One line per bin: right-aligned tick, colon, bar. The fullest bin gets
    /// `max_height` bar characters and the others are scaled to match.
    pub fn render(&self, max_height: usize, bar: char, precision: usize) -> String {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let labels: Vec<String> = self
            .ticks
            .iter()
            .map(|tick| format!("{:.*}", precision, tick))
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        labels
            .iter()
            .zip(self.counts.iter())
            .map(|(label, &count)| {
                let len = (count as f64 * max_height as f64 / peak as f64).round() as usize;
                let bars: String = std::iter::repeat(bar).take(len).collect();
                format!("{:>width$}: {}", label, bars, width = label_width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_MAX_HEIGHT, DEFAULT_BAR, DEFAULT_PRECISION))
    }
}
