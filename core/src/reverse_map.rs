use crate::codebook::Codebook;
use crate::error::{QuietCastError, Result};
use crate::hamming::distance;
use crate::tables;
use crate::{AMBIGUOUS_SENTINEL, CODEBOOK_SIZE};
use log::debug;

/// Result of looking up a received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Unique nearest codeword; holds its nibble value (0..=15)
    Definite(u8),
    /// Two or more codewords tie for the minimum distance
    Ambiguous,
}

impl Symbol {
    /// Parse the raw table form, where `AMBIGUOUS_SENTINEL` (16) marks a tie
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            r if r < AMBIGUOUS_SENTINEL => Ok(Symbol::Definite(r)),
            AMBIGUOUS_SENTINEL => Ok(Symbol::Ambiguous),
            r => Err(QuietCastError::InvalidConfig(format!(
                "Reverse map entry {} out of range",
                r
            ))),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            Symbol::Definite(nibble) => nibble,
            Symbol::Ambiguous => AMBIGUOUS_SENTINEL,
        }
    }

    pub fn nibble(self) -> Option<u8> {
        match self {
            Symbol::Definite(nibble) => Some(nibble),
            Symbol::Ambiguous => None,
        }
    }

    /// Reconcile the two received copies of one nibble half.
    ///
    /// Two equal definite values, or one definite value next to an ambiguous
    /// one, resolve to that value. Conflicting definite values or two
    /// ambiguous copies stay unresolved.
    pub fn reconcile(first: Symbol, second: Symbol) -> Option<u8> {
        match (first, second) {
            (Symbol::Definite(a), Symbol::Definite(b)) if a == b => Some(a),
            (Symbol::Definite(_), Symbol::Definite(_)) => None,
            (Symbol::Definite(a), Symbol::Ambiguous) => Some(a),
            (Symbol::Ambiguous, Symbol::Definite(b)) => Some(b),
            (Symbol::Ambiguous, Symbol::Ambiguous) => None,
        }
    }
}

/// Nearest-codeword lookup for every possible received byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseMap {
    entries: [Symbol; 256],
}

impl ReverseMap {
    /// Load the precomputed table matching `Codebook::standard()`
    pub fn standard() -> Self {
        let mut entries = [Symbol::Ambiguous; 256];
        for (entry, &raw) in entries.iter_mut().zip(tables::REVERSE_MAP.iter()) {
            if raw < AMBIGUOUS_SENTINEL {
                *entry = Symbol::Definite(raw);
            }
        }
        Self { entries }
    }

    /// Rebuild from the raw sentinel form
    pub fn from_raw(raw: &[u8; 256]) -> Result<Self> {
        let mut entries = [Symbol::Ambiguous; 256];
        for (entry, &value) in entries.iter_mut().zip(raw.iter()) {
            *entry = Symbol::from_raw(value)?;
        }
        Ok(Self { entries })
    }

    pub fn to_raw(&self) -> [u8; 256] {
        let mut raw = [AMBIGUOUS_SENTINEL; 256];
        for (value, entry) in raw.iter_mut().zip(self.entries.iter()) {
            *value = entry.to_raw();
        }
        raw
    }

    #[inline]
    pub fn lookup(&self, byte: u8) -> Symbol {
        self.entries[byte as usize]
    }

    pub fn ambiguous_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|&&entry| entry == Symbol::Ambiguous)
            .count()
    }
}

impl Default for ReverseMap {
    fn default() -> Self {
        Self::standard()
    }
}

pub struct ReverseMapBuilder;

impl ReverseMapBuilder {
    /// For each byte value find the codeword at minimum Hamming distance.
    /// A tie between two or more codewords maps the byte to `Symbol::Ambiguous`.
    pub fn build(codebook: &Codebook) -> ReverseMap {
        let mut entries = [Symbol::Ambiguous; 256];

        for (byte, entry) in entries.iter_mut().enumerate() {
            let mut best_distance = u32::MAX;
            let mut best_index = 0usize;
            let mut ties = 0usize;

            for (index, &codeword) in codebook.codewords().iter().enumerate() {
                let dist = distance(byte as u8, codeword);
                if dist < best_distance {
                    best_distance = dist;
                    best_index = index;
                    ties = 1;
                } else if dist == best_distance {
                    ties += 1;
                }
            }

            if ties == 1 {
                *entry = Symbol::Definite(best_index as u8);
            }
        }

        let map = ReverseMap { entries };
        debug!(
            "Built reverse map: {} of 256 bytes ambiguous across {} codewords",
            map.ambiguous_count(),
            CODEBOOK_SIZE
        );
        map
    }
}
