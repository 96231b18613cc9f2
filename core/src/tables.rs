// AUTO-GENERATED FILE - DO NOT EDIT MANUALLY
// Generated from CodebookBuilder::default() and ReverseMapBuilder
// Run `cargo run -p generate-tables` to regenerate

/// Codewords indexed by nibble value
pub const CODEBOOK: [u8; 16] = [
    3, 12, 22, 25, 37, 48, 63, 74, 85, 102, 105, 115, 124, 143, 170, 192,
];

/// Nearest codeword index per received byte; 16 marks a tie
pub const REVERSE_MAP: [u8; 256] = [
    16, 0, 0, 0, 1, 4, 2, 0, 1, 3, 7, 0, 1, 1, 1, 13,
    5, 3, 2, 0, 2, 8, 2, 2, 3, 3, 16, 3, 1, 3, 2, 6,
    5, 4, 16, 0, 4, 4, 9, 4, 16, 10, 14, 16, 1, 4, 16, 6,
    5, 5, 5, 11, 5, 4, 2, 6, 5, 3, 16, 6, 12, 6, 6, 6,
    15, 16, 7, 0, 16, 8, 9, 16, 7, 10, 7, 7, 1, 16, 7, 16,
    16, 8, 16, 11, 8, 8, 2, 8, 16, 3, 7, 16, 12, 8, 16, 16,
    16, 10, 9, 11, 9, 4, 9, 9, 10, 10, 7, 10, 12, 10, 9, 16,
    5, 11, 11, 11, 12, 8, 9, 11, 12, 10, 16, 11, 12, 12, 12, 6,
    15, 16, 16, 0, 16, 16, 16, 13, 16, 16, 14, 13, 1, 13, 13, 13,
    16, 3, 2, 0, 2, 8, 2, 16, 3, 3, 14, 16, 1, 16, 16, 13,
    16, 4, 14, 16, 4, 4, 16, 16, 14, 16, 14, 14, 16, 16, 14, 13,
    5, 5, 16, 11, 5, 4, 2, 6, 16, 3, 14, 16, 12, 6, 16, 6,
    15, 15, 15, 16, 15, 16, 16, 13, 15, 16, 7, 16, 16, 13, 16, 13,
    15, 16, 15, 11, 16, 8, 2, 8, 15, 3, 7, 16, 12, 8, 16, 13,
    15, 16, 16, 11, 16, 4, 9, 9, 16, 10, 14, 16, 12, 10, 16, 13,
    16, 11, 11, 11, 12, 8, 9, 11, 12, 10, 14, 11, 12, 12, 12, 6,
];
