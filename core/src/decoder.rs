use crate::error::{QuietCastError, Result};
use crate::reverse_map::{ReverseMap, Symbol};
use crate::transpose::BitTransposer;
use crate::{Message, CHUNK_LEN, ENCODED_LEN, MESSAGE_LEN, STREAM_COUNT};
use log::{debug, trace};

/// Outcome of decoding one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// True when at least one nibble half could not be resolved
    pub has_error: bool,
    /// Best-effort message; unresolved halves are zero
    pub message: Message,
    /// Number of unresolved nibble halves (0..=96)
    pub unresolved: usize,
}

impl DecodedMessage {
    pub fn into_parts(self) -> (bool, Message) {
        (self.has_error, self.message)
    }
}

/// Nearest-codeword decoder.
///
/// This is a per-symbol heuristic, not a maximum-likelihood decoder: each
/// received byte is mapped independently through the reverse map and the two
/// copies of each nibble half are reconciled with `Symbol::reconcile`.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    reverse_map: ReverseMap,
}

impl Decoder {
    pub fn new(reverse_map: ReverseMap) -> Self {
        Self { reverse_map }
    }

    pub fn reverse_map(&self) -> &ReverseMap {
        &self.reverse_map
    }

    /// Decode a block that must be exactly `ENCODED_LEN` bytes. Any content is
    /// accepted; corruption is reported through `DecodedMessage::has_error`.
    pub fn decode(&self, block: &[u8]) -> Result<DecodedMessage> {
        QuietCastError::check_len(ENCODED_LEN, block.len())?;

        // chunks arrive as copy1-high, copy2-high, copy1-low, copy2-low per plane
        let mut streams = [[0u8; MESSAGE_LEN]; STREAM_COUNT];
        for (k, chunk) in block.chunks_exact(CHUNK_LEN).enumerate() {
            let offset = (k / STREAM_COUNT) * CHUNK_LEN;
            streams[k % STREAM_COUNT][offset..offset + CHUNK_LEN].copy_from_slice(chunk);
        }
        let [high1, high2, low1, low2] = streams.map(|stream| BitTransposer::reverse_block(&stream));

        let mut message = [0u8; MESSAGE_LEN];
        let mut unresolved = 0usize;
        for (i, out) in message.iter_mut().enumerate() {
            let high = self.resolve(high1[i], high2[i]);
            let low = self.resolve(low1[i], low2[i]);

            if high.is_none() {
                trace!("Unresolved high nibble at byte {}", i);
                unresolved += 1;
            }
            if low.is_none() {
                trace!("Unresolved low nibble at byte {}", i);
                unresolved += 1;
            }

            *out = (high.unwrap_or(0) << 4) | low.unwrap_or(0);
        }

        if unresolved > 0 {
            debug!("Decoded block with {} unresolved nibble halves", unresolved);
        }

        Ok(DecodedMessage {
            has_error: unresolved > 0,
            message,
            unresolved,
        })
    }

    fn resolve(&self, first: u8, second: u8) -> Option<u8> {
        Symbol::reconcile(self.reverse_map.lookup(first), self.reverse_map.lookup(second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    fn sample_message() -> Message {
        let mut message = [0u8; MESSAGE_LEN];
        for (i, b) in message.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(53).wrapping_add(7);
        }
        message
    }

    #[test]
    fn test_clean_round_trip() {
        let message = sample_message();
        let block = Encoder::default().encode_message(&message);
        let decoded = Decoder::default().decode(&block).unwrap();
        assert_eq!(decoded.into_parts(), (false, message));
    }

    #[test]
    fn test_all_zero_block_fixture() {
        // 0x00 is equidistant from several codewords, so every half is ambiguous
        let decoded = Decoder::default().decode(&[0u8; ENCODED_LEN]).unwrap();
        assert!(decoded.has_error);
        assert_eq!(decoded.message, [0u8; MESSAGE_LEN]);
        assert_eq!(decoded.unresolved, 2 * MESSAGE_LEN);
    }

    #[test]
    fn test_saturated_copy_conflicts_with_clean_copy() {
        let message = sample_message();
        let mut block = Encoder::default().encode_message(&message);
        // 0xFF is nearest to nibble 6 only, so copy1-high reads 6 everywhere
        for plane in 0..8 {
            let start = plane * 24;
            block[start..start + CHUNK_LEN].fill(0xFF);
        }
        let decoded = Decoder::default().decode(&block).unwrap();

        let mismatched = message.iter().filter(|&&b| b >> 4 != 6).count();
        assert_eq!(decoded.unresolved, mismatched);
        assert_eq!(decoded.has_error, mismatched > 0);
        for (got, want) in decoded.message.iter().zip(message.iter()) {
            assert_eq!(got & 0x0F, want & 0x0F);
            let high = if want >> 4 == 6 { 6 } else { 0 };
            assert_eq!(got >> 4, high);
        }
    }

    #[test]
    fn test_conflicting_copies_flag_error() {
        let decoder = Decoder::default();
        let encoder = Encoder::default();
        let a = encoder.encode_message(&[0x11; MESSAGE_LEN]);
        let b = encoder.encode_message(&[0x22; MESSAGE_LEN]);

        // copy1 streams from `a`, copy2 streams from `b`
        let mut mixed = a;
        for (k, chunk) in mixed.chunks_exact_mut(CHUNK_LEN).enumerate() {
            if k % 2 == 1 {
                chunk.copy_from_slice(&b[k * CHUNK_LEN..(k + 1) * CHUNK_LEN]);
            }
        }

        let decoded = decoder.decode(&mixed).unwrap();
        assert!(decoded.has_error);
        assert_eq!(decoded.unresolved, 2 * MESSAGE_LEN);
        assert_eq!(decoded.message, [0u8; MESSAGE_LEN]);
    }

    #[test]
    fn test_ambiguous_copy_defers_to_definite_copy() {
        let message = [0x5Au8; MESSAGE_LEN];
        let mut block = Encoder::default().encode_message(&message);
        // zero bytes are ambiguous; blank out copy2-low everywhere
        for plane in 0..8 {
            let start = plane * 24 + 3 * CHUNK_LEN;
            block[start..start + CHUNK_LEN].fill(0x00);
        }
        let decoded = Decoder::default().decode(&block).unwrap();
        assert_eq!(decoded.into_parts(), (false, message));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let decoder = Decoder::default();
        assert_eq!(
            decoder.decode(&[0u8; 191]),
            Err(QuietCastError::InvalidLength { expected: 192, actual: 191 })
        );
        assert!(decoder.decode(&[0u8; 48]).is_err());
    }
}
