//! Burst-tolerant forward error correction for short radio packets
//!
//! Expands a fixed 48-byte message into a 192-byte block: every nibble is mapped
//! to an 8-bit codeword (pairwise Hamming distance >= 3), the codeword streams are
//! bit-transposed to scatter bursts, and each stream is sent twice.

pub mod error;
pub mod hamming;
pub mod codebook;
pub mod reverse_map;
pub mod tables;
pub mod transpose;
pub mod encoder;
pub mod decoder;
pub mod codec;
pub mod padding;
pub mod hash;
pub mod auth;
pub mod histogram;

pub use codebook::{Codebook, CodebookBuilder};
pub use codec::Codec;
pub use decoder::{DecodedMessage, Decoder};
pub use encoder::Encoder;
pub use error::{QuietCastError, Result};
pub use reverse_map::{ReverseMap, ReverseMapBuilder, Symbol};
pub use transpose::BitTransposer;

// Block geometry
pub const BITS_PER_BYTE: usize = 8;
pub const MESSAGE_LEN: usize = 48;
pub const CHUNK_LEN: usize = MESSAGE_LEN / BITS_PER_BYTE; // 6 bytes per bit plane
pub const STREAM_COUNT: usize = 4; // high x2, low x2
pub const ENCODED_LEN: usize = MESSAGE_LEN * STREAM_COUNT; // 192
pub const MAX_PAYLOAD_LEN: usize = MESSAGE_LEN - 1; // one byte goes to the length prefix

// Codebook configuration
pub const CODEBOOK_SIZE: usize = 16; // one codeword per nibble value
pub const MIN_CODEWORD_DISTANCE: u32 = 3;
pub const AMBIGUOUS_SENTINEL: u8 = CODEBOOK_SIZE as u8; // 16, used by the raw table form

const _: () = assert!(MESSAGE_LEN % BITS_PER_BYTE == 0, "message length must be a multiple of 8");
const _: () = assert!(ENCODED_LEN == STREAM_COUNT * BITS_PER_BYTE * CHUNK_LEN);
const _: () = assert!(ENCODED_LEN <= 255, "encoded block must fit a single radio packet");

/// A message in its fixed on-air shape
pub type Message = [u8; MESSAGE_LEN];

/// An encoded block as transmitted
pub type EncodedBlock = [u8; ENCODED_LEN];
