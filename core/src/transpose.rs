//! Bit-plane transposition of a 48-byte buffer
//!
//! Forward: bit `p` (MSB first) of input byte `i` lands at global bit
//! `p * 48 + i` of the output, i.e. the output is the 8 bit planes laid end to
//! end, each plane packed into `CHUNK_LEN` (6) bytes.
//!
//! Reverse walks the transposed bytes instead: transposed byte `t` belongs to
//! plane `t / CHUNK_LEN` and carries original bytes `(t % CHUNK_LEN) * 8 ..+8`.
//! The forward pass divides by `BITS_PER_BYTE` and the reverse pass by
//! `CHUNK_LEN`; both describe the same permutation because
//! `CHUNK_LEN * BITS_PER_BYTE == MESSAGE_LEN`.
//!
//! A corrupted run of consecutive transposed bits therefore touches one bit in
//! each of many original bytes rather than many bits in a few bytes.

use crate::error::{QuietCastError, Result};
use crate::{Message, BITS_PER_BYTE, CHUNK_LEN, MESSAGE_LEN};

pub struct BitTransposer;

impl BitTransposer {
    /// Transpose a buffer that must be exactly `MESSAGE_LEN` bytes
    pub fn forward(data: &[u8]) -> Result<Message> {
        Ok(Self::forward_block(&to_block(data)?))
    }

    /// Undo `forward`; the buffer must be exactly `MESSAGE_LEN` bytes
    pub fn reverse(data: &[u8]) -> Result<Message> {
        Ok(Self::reverse_block(&to_block(data)?))
    }

    pub fn forward_block(block: &Message) -> Message {
        let mut out = [0u8; MESSAGE_LEN];
        for plane in 0..BITS_PER_BYTE {
            let mask = 0x80u8 >> plane;
            for (i, &byte) in block.iter().enumerate() {
                if byte & mask != 0 {
                    out[plane * CHUNK_LEN + i / BITS_PER_BYTE] |= 0x80 >> (i % BITS_PER_BYTE);
                }
            }
        }
        out
    }

    pub fn reverse_block(block: &Message) -> Message {
        let mut out = [0u8; MESSAGE_LEN];
        for (t, &byte) in block.iter().enumerate() {
            let plane = t / CHUNK_LEN;
            let group = t % CHUNK_LEN;
            for bit in 0..BITS_PER_BYTE {
                if byte & (0x80 >> bit) != 0 {
                    out[group * BITS_PER_BYTE + bit] |= 0x80 >> plane;
                }
            }
        }
        out
    }
}

fn to_block(data: &[u8]) -> Result<Message> {
    data.try_into().map_err(|_| QuietCastError::InvalidLength {
        expected: MESSAGE_LEN,
        actual: data.len(),
    })
}
