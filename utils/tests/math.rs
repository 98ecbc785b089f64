use num_bigint::BigUint;
use pool_utils::math::*;

#[test]
fn test_nbits() {
    let tests = [(0u64, 0), (1, 1), (2, 2), (3, 2), (4, 3), (255, 8), (256, 9)];
    for (a, expected) in tests {
        assert_eq!(nbits(&BigUint::from(a)), expected, "nbits({a})");
    }
    // two 4-bit operands fit in 5 bits
    assert_eq!(nbits(&BigUint::from((16u64 - 1) * 2)), 5);
}

#[test]
fn test_pad_to_multiple() {
    assert_eq!(pad_to_multiple(0, 3), 0);
    assert_eq!(pad_to_multiple(4, 3), 6);
    assert_eq!(pad_to_multiple(6, 3), 6);
    assert_eq!(pad_to_multiple(7, 3), 9);
}
