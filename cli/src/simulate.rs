//! Monte Carlo run over a binary symmetric channel

use log::debug;
use quietcast_core::histogram::Histogram;
use quietcast_core::{Codec, Result, MESSAGE_LEN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub trials: usize,
    pub bit_error_rate: f64,
    pub seed: u64,
    /// Blocks that arrived untouched
    pub clean: usize,
    /// Blocks with flipped bits that still decoded to the sent message
    pub corrected: usize,
    /// Blocks the decoder reported as damaged
    pub flagged: usize,
    /// Blocks decoded to the wrong message without an error flag
    pub silent: usize,
    pub mean_flipped_bits: f64,
    pub max_flipped_bits: usize,
    #[serde(skip)]
    flipped_bits: Vec<usize>,
}

pub fn run(codec: &Codec, trials: usize, bit_error_rate: f64, seed: u64) -> Result<SimulationReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SimulationReport {
        trials,
        bit_error_rate,
        seed,
        clean: 0,
        corrected: 0,
        flagged: 0,
        silent: 0,
        mean_flipped_bits: 0.0,
        max_flipped_bits: 0,
        flipped_bits: Vec::with_capacity(trials),
    };

    for trial in 0..trials {
        let mut message = [0u8; MESSAGE_LEN];
        rng.fill(&mut message[..]);
        let mut block = codec.encode_message(&message);

        let mut flipped = 0usize;
        for byte in block.iter_mut() {
            for bit in 0..8 {
                if rng.gen_bool(bit_error_rate) {
                    *byte ^= 0x80 >> bit;
                    flipped += 1;
                }
            }
        }

        let decoded = codec.decode(&block)?;

        if decoded.has_error {
            report.flagged += 1;
        } else if decoded.message != message {
            debug!("Trial {}: {} flipped bits decoded silently wrong", trial, flipped);
            report.silent += 1;
        } else if flipped == 0 {
            report.clean += 1;
        } else {
            report.corrected += 1;
        }
        report.flipped_bits.push(flipped);
    }

    if trials > 0 {
        let total: usize = report.flipped_bits.iter().sum();
        report.mean_flipped_bits = total as f64 / trials as f64;
        report.max_flipped_bits = report.flipped_bits.iter().copied().max().unwrap_or(0);
    }
    Ok(report)
}

impl SimulationReport {
    pub fn summary(&self, bins: usize) -> Result<String> {
        let mut lines = vec![
            format!(
                "{} trials at bit error rate {} (seed {})",
                self.trials, self.bit_error_rate, self.seed
            ),
            format!("  clean:     {}", self.clean),
            format!("  corrected: {}", self.corrected),
            format!("  flagged:   {}", self.flagged),
            format!("  silent:    {}", self.silent),
            format!(
                "  flipped bits per block: mean {:.2}, max {}",
                self.mean_flipped_bits, self.max_flipped_bits
            ),
        ];

        if !self.flipped_bits.is_empty() {
            let samples: Vec<f64> = self.flipped_bits.iter().map(|&n| n as f64).collect();
            let histogram = Histogram::new(&samples, bins)?;
            lines.push("Flipped bits per block:".to_string());
            lines.push(histogram.render(60, '*', 1));
        }
        Ok(lines.join("\n"))
    }
}
