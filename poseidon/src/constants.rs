/// Number of full rounds, split evenly around the partial rounds.
pub const ROUNDS_FULL: usize = 8;

pub const HALF_ROUNDS_FULL: usize = ROUNDS_FULL / 2;

/// Exponent of the S-box.
pub const SBOX_ALPHA: u64 = 5;

/// Partial rounds for state widths 2 to 17, targeting 128 bits of security
/// over a 254-bit prime field.
pub const ROUNDS_PARTIAL: [usize; 16] = [
    56, 57, 56, 60, 60, 63, 64, 63, 60, 66, 60, 65, 70, 60, 64, 68,
];

/// Number of partial rounds for a state of `width` lanes.
pub fn rounds_partial(width: usize) -> Option<usize> {
    width
        .checked_sub(2)
        .and_then(|i| ROUNDS_PARTIAL.get(i))
        .copied()
}
