use crate::codebook::Codebook;
use crate::error::{QuietCastError, Result};
use crate::transpose::BitTransposer;
use crate::{EncodedBlock, Message, BITS_PER_BYTE, CHUNK_LEN, ENCODED_LEN, MESSAGE_LEN};
use log::trace;

/// Maps message nibbles to codewords and lays out the duplicated streams
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    codebook: Codebook,
}

impl Encoder {
    pub fn new(codebook: Codebook) -> Self {
        Self { codebook }
    }

    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }

    /// Encode a message that must be exactly `MESSAGE_LEN` bytes.
    /// Padding arbitrary payloads is left to `padding::pad`.
    pub fn encode(&self, message: &[u8]) -> Result<EncodedBlock> {
        let message: &Message = message
            .try_into()
            .map_err(|_| QuietCastError::InvalidLength {
                expected: MESSAGE_LEN,
                actual: message.len(),
            })?;
        Ok(self.encode_message(message))
    }

    /// Encode a fixed-size message
    ///
    /// Layout, for each bit plane p in 0..8 (24 bytes per plane):
    /// high[p], high[p], low[p], low[p], where each entry is the 6-byte
    /// chunk of the transposed codeword stream for that plane.
    pub fn encode_message(&self, message: &Message) -> EncodedBlock {
        let mut high = [0u8; MESSAGE_LEN];
        let mut low = [0u8; MESSAGE_LEN];
        for (i, &byte) in message.iter().enumerate() {
            high[i] = self.codebook.codeword(byte >> 4);
            low[i] = self.codebook.codeword(byte & 0x0F);
        }

        let high = BitTransposer::forward_block(&high);
        let low = BitTransposer::forward_block(&low);

        // one source chunk per output chunk; lib.rs asserts the counts agree
        let sources = (0..BITS_PER_BYTE).flat_map(|plane| {
            let range = plane * CHUNK_LEN..(plane + 1) * CHUNK_LEN;
            [&high, &high, &low, &low].map(|source| &source[range.clone()])
        });
        let mut out = [0u8; ENCODED_LEN];
        for (chunk, source) in out.chunks_exact_mut(CHUNK_LEN).zip(sources) {
            chunk.copy_from_slice(source);
        }

        trace!("Encoded {} byte message into {} byte block", MESSAGE_LEN, out.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_length_and_determinism() {
        let encoder = Encoder::default();
        let message = [0x42u8; MESSAGE_LEN];
        let first = encoder.encode(&message).unwrap();
        let second = encoder.encode(&message).unwrap();
        assert_eq!(first.len(), ENCODED_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_plane_group_is_duplicated() {
        let encoder = Encoder::default();
        let mut message = [0u8; MESSAGE_LEN];
        for (i, b) in message.iter_mut().enumerate() {
            *b = (i * 11) as u8;
        }
        let block = encoder.encode_message(&message);
        for group in block.chunks_exact(4 * CHUNK_LEN) {
            assert_eq!(group[0..6], group[6..12]);
            assert_eq!(group[12..18], group[18..24]);
        }
    }

    #[test]
    fn test_uniform_message_gives_solid_chunks() {
        // every byte 0x00 -> codeword 3 (0b0000_0011) in both streams, so
        // planes 6 and 7 are all ones and the rest all zeros
        let block = Encoder::default().encode_message(&[0u8; MESSAGE_LEN]);
        for (plane, group) in block.chunks_exact(24).enumerate() {
            let expected = if plane >= 6 { 0xFF } else { 0x00 };
            assert!(group.iter().all(|&b| b == expected), "plane {}", plane);
        }
    }

    #[test]
    fn test_high_and_low_streams_are_separate() {
        // 0xF0: high nibble 15 -> 192 (0b1100_0000), low nibble 0 -> 3
        let block = Encoder::default().encode_message(&[0xF0; MESSAGE_LEN]);
        assert_eq!(&block[0..12], &[0xFF; 12]);
        assert_eq!(&block[12..24], &[0x00; 12]);
        assert_eq!(&block[168..180], &[0x00; 12]);
        assert_eq!(&block[180..192], &[0xFF; 12]);
    }

    #[test]
    fn test_every_chunk_comes_from_its_plane() {
        let encoder = Encoder::default();
        let mut message = [0u8; MESSAGE_LEN];
        for (i, b) in message.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37) ^ 0x5A;
        }
        let codebook = encoder.codebook();
        let high = BitTransposer::forward_block(&message.map(|b| codebook.codeword(b >> 4)));
        let low = BitTransposer::forward_block(&message.map(|b| codebook.codeword(b & 0x0F)));

        let block = encoder.encode_message(&message);
        for (k, chunk) in block.chunks_exact(CHUNK_LEN).enumerate() {
            let plane = k / 4;
            let source = if k % 4 < 2 { &high } else { &low };
            assert_eq!(
                chunk,
                &source[plane * CHUNK_LEN..(plane + 1) * CHUNK_LEN],
                "chunk {}",
                k
            );
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        let encoder = Encoder::default();
        assert_eq!(
            encoder.encode(&[0u8; 47]),
            Err(QuietCastError::InvalidLength { expected: 48, actual: 47 })
        );
        assert!(encoder.encode(&[0u8; 49]).is_err());
        assert!(encoder.encode(&[]).is_err());
    }
}
