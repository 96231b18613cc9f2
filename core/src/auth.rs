//! Lightweight keyed-hash message authentication
//!
//! HMAC-shaped construction over `hash17`:
//! inner = hash17((key ^ 0x36) || challenge || message),
//! tag   = hash17((key ^ 0x5c) || inner as 4 big-endian bytes).
//!
//! The 16-bit tag only guards against casual forgery on a shared channel. It
//! is not a cryptographic MAC. Each challenge must be used once.

use crate::hash::hash17;

pub const CHALLENGE_LEN: usize = 4;
pub const RECOMMENDED_KEY_LEN: usize = 16;

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

pub fn tag(key: &[u8], challenge: &[u8; CHALLENGE_LEN], message: &[u8]) -> u16 {
    let mut inner = Vec::with_capacity(key.len() + CHALLENGE_LEN + message.len());
    inner.extend(key.iter().map(|&b| b ^ INNER_PAD));
    inner.extend_from_slice(challenge);
    inner.extend_from_slice(message);
    let inner_hash = hash17(&inner) as u32;

    let mut outer = Vec::with_capacity(key.len() + 4);
    outer.extend(key.iter().map(|&b| b ^ OUTER_PAD));
    outer.extend_from_slice(&inner_hash.to_be_bytes());
    hash17(&outer)
}

pub fn verify(key: &[u8], challenge: &[u8; CHALLENGE_LEN], message: &[u8], expected: u16) -> bool {
    tag(key, challenge, message) == expected
}
