use crate::error::{QuietCastError, Result};
use crate::hamming::{distance, min_pairwise_distance, weight};
use crate::tables;
use crate::{BITS_PER_BYTE, CODEBOOK_SIZE, MIN_CODEWORD_DISTANCE};
use log::debug;

/// The 16 codewords, one per nibble value, sorted ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codebook {
    codewords: [u8; CODEBOOK_SIZE],
}

impl Codebook {
    /// Wrap a set of codewords. Every pair must be at least
    /// `MIN_CODEWORD_DISTANCE` bits apart so a single flipped bit still lands
    /// nearest to the codeword it came from.
    pub fn new(codewords: [u8; CODEBOOK_SIZE]) -> Result<Self> {
        let dist = min_pairwise_distance(&codewords).unwrap_or(0);
        if dist < MIN_CODEWORD_DISTANCE {
            return Err(QuietCastError::InvalidConfig(format!(
                "Codewords are only {} bits apart, need {}",
                dist, MIN_CODEWORD_DISTANCE
            )));
        }
        Ok(Self { codewords })
    }

    /// The precomputed codebook produced by `CodebookBuilder::default()`
    pub fn standard() -> Self {
        Self {
            codewords: tables::CODEBOOK,
        }
    }

    /// Codeword for a nibble; bits above the low nibble are ignored
    pub fn codeword(&self, nibble: u8) -> u8 {
        self.codewords[(nibble & 0x0F) as usize]
    }

    pub fn codewords(&self) -> &[u8; CODEBOOK_SIZE] {
        &self.codewords
    }

    /// Nibble value for an exact codeword match
    pub fn index_of(&self, byte: u8) -> Option<u8> {
        self.codewords
            .iter()
            .position(|&codeword| codeword == byte)
            .map(|idx| idx as u8)
    }

    /// Smallest Hamming distance between any two codewords
    pub fn min_distance(&self) -> u32 {
        min_pairwise_distance(&self.codewords).unwrap_or(0)
    }
}

impl Default for Codebook {
    fn default() -> Self {
        Self::standard()
    }
}

/// Greedy codeword search.
///
/// Starts from the seed values, then scans 0..=255 in increasing order and
/// accepts a candidate when its set-bit count lies inside the weight window and
/// it keeps at least `min_distance` bits from every codeword accepted so far.
/// The search stops once 16 codewords are found; the result is sorted.
///
/// The defaults (seeds 0xAA/0x55 for maximum bit transitions, weight 2..=6,
/// distance 3) reproduce `tables::CODEBOOK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodebookBuilder {
    min_distance: u32,
    seeds: Vec<u8>,
    min_weight: u32,
    max_weight: u32,
}

impl CodebookBuilder {
    pub fn new() -> Self {
        Self {
            min_distance: MIN_CODEWORD_DISTANCE,
            seeds: vec![0xAA, 0x55],
            min_weight: 2,
            max_weight: 6,
        }
    }

    pub fn with_min_distance(mut self, min_distance: u32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_seeds(mut self, seeds: Vec<u8>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Inclusive window for the number of set bits in a scanned candidate
    pub fn with_weight_range(mut self, min_weight: u32, max_weight: u32) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    pub fn min_distance(&self) -> u32 {
        self.min_distance
    }

    fn validate(&self) -> Result<()> {
        if self.min_distance < MIN_CODEWORD_DISTANCE || self.min_distance > BITS_PER_BYTE as u32 {
            return Err(QuietCastError::InvalidConfig(format!(
                "Minimum distance must be in {}..={}, got {}",
                MIN_CODEWORD_DISTANCE, BITS_PER_BYTE, self.min_distance
            )));
        }
        if self.min_weight > self.max_weight || self.max_weight > BITS_PER_BYTE as u32 {
            return Err(QuietCastError::InvalidConfig(format!(
                "Invalid weight window {}..={}",
                self.min_weight, self.max_weight
            )));
        }
        if self.seeds.len() > CODEBOOK_SIZE {
            return Err(QuietCastError::InvalidConfig(format!(
                "{} seeds exceed the codebook size {}",
                self.seeds.len(),
                CODEBOOK_SIZE
            )));
        }
        if let Some(dist) = min_pairwise_distance(&self.seeds) {
            if dist < self.min_distance {
                return Err(QuietCastError::InvalidConfig(format!(
                    "Seeds are only {} bits apart, need {}",
                    dist, self.min_distance
                )));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Codebook> {
        self.validate()?;

        let mut accepted = self.seeds.clone();
        for candidate in 0..=u8::MAX {
            if accepted.len() == CODEBOOK_SIZE {
                break;
            }
            let bits = weight(candidate);
            if bits < self.min_weight || bits > self.max_weight {
                continue;
            }
            if accepted
                .iter()
                .all(|&codeword| distance(codeword, candidate) >= self.min_distance)
            {
                debug!("Accepted codeword {:#04x} (weight {})", candidate, bits);
                accepted.push(candidate);
            }
        }

        if accepted.len() < CODEBOOK_SIZE {
            return Err(QuietCastError::InvalidConfig(format!(
                "Only {} of {} codewords satisfy distance {} with weight {}..={}",
                accepted.len(),
                CODEBOOK_SIZE,
                self.min_distance,
                self.min_weight,
                self.max_weight
            )));
        }

        accepted.sort_unstable();
        let mut codewords = [0u8; CODEBOOK_SIZE];
        codewords.copy_from_slice(&accepted);
        debug!("Built codebook {:?}", codewords);
        Codebook::new(codewords)
    }
}

impl Default for CodebookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
