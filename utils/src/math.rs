//! Small integer helpers used to size gadgets.

use num_bigint::BigUint;
use num_integer::Integer;

/// Smallest `r` such that `2^r - 1 >= a`, i.e. the bit length of `a`.
pub fn nbits(a: &BigUint) -> usize {
    a.bits() as usize
}

/// Rounds `len` up to the next multiple of `multiple`.
pub fn pad_to_multiple(len: usize, multiple: usize) -> usize {
    assert!(multiple != 0);
    Integer::div_ceil(&len, &multiple) * multiple
}
