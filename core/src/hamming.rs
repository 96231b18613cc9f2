//! Bit-distance helpers shared by the table builders

/// Number of differing bits between two bytes
pub fn distance(a: u8, b: u8) -> u32 {
    (a ^ b).count_ones()
}

/// Number of set bits in a byte
pub fn weight(value: u8) -> u32 {
    value.count_ones()
}

/// All byte values exactly `dist` bits away from `value`, in ascending order
pub fn neighbors(value: u8, dist: u32) -> Vec<u8> {
    (0..=u8::MAX)
        .filter(|&candidate| distance(value, candidate) == dist)
        .collect()
}

/// Smallest pairwise distance in a set of bytes, `None` for fewer than two
pub fn min_pairwise_distance(values: &[u8]) -> Option<u32> {
    values
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| values[i + 1..].iter().map(move |&b| distance(a, b)))
        .min()
}
