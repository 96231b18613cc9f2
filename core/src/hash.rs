//! Small multiplicative hashes for low-power targets. No claim is made about
//! their statistical quality.

/// 16-bit hash: seed 17, multiply by 17, xor in each byte
pub fn hash17(data: &[u8]) -> u16 {
    data.iter()
        .fold(17u16, |hash, &byte| hash.wrapping_mul(17) ^ byte as u16)
}

/// 32-bit DJB-style hash: seed 5381, multiply by 33, xor in each byte
pub fn hash33(data: &[u8]) -> u32 {
    data.iter()
        .fold(5381u32, |hash, &byte| hash.wrapping_mul(33) ^ byte as u32)
}
