use ark_bn254::Fr;
use ark_ff::{One, Zero};
use num_bigint::BigUint;
use pool_utils::{
    field_helpers::{FieldHelpersError, Result},
    BigUintFieldHelpers, FieldHelpers,
};
use proptest::prelude::*;

const MODULUS: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

#[test]
fn field_decimal() {
    assert_eq!(Fr::from_decimal("0"), Ok(Fr::zero()));
    assert_eq!(Fr::from_decimal("168700"), Ok(Fr::from(168700u64)));
    assert_eq!(Fr::from_decimal(""), Err(FieldHelpersError::DecodeDecimal));
    assert_eq!(Fr::from_decimal("-1"), Err(FieldHelpersError::DecodeDecimal));
    assert_eq!(Fr::from_decimal("0x12"), Err(FieldHelpersError::DecodeDecimal));
    assert_eq!(
        Fr::from_decimal(MODULUS),
        Err(FieldHelpersError::NotCanonical)
    );

    let minus_one = -Fr::one();
    let decimal = minus_one.to_decimal();
    assert_eq!(
        decimal,
        "21888242871839275222246405745257275088548364400416034343698204186575808495616"
    );
    assert_eq!(Fr::from_decimal(&decimal), Ok(minus_one));
}

#[test]
fn field_hex() {
    assert_eq!(Fr::from_hex(""), Err(FieldHelpersError::DeserializeBytes));
    assert_eq!(Fr::from_hex("0g"), Err(FieldHelpersError::DecodeHex));
    assert_eq!(
        Fr::one().to_hex(),
        "0100000000000000000000000000000000000000000000000000000000000000"
    );
    assert_eq!(
        Fr::from_hex("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        Err(FieldHelpersError::DeserializeBytes)
    );

    let fe = Fr::from(0xdead_beef_u64);
    assert_eq!(Fr::from_hex(&fe.to_hex()), Ok(fe));
}

#[test]
fn field_bits() {
    assert_eq!(
        Fr::from_bits(&[true, false, false]).expect("Failed to deserialize field bits"),
        Fr::one()
    );
    assert_eq!(Fr::from_bits(&[]), Ok(Fr::zero()));
    assert_eq!(
        Fr::from_bits(&vec![true; 254]),
        Err(FieldHelpersError::NotCanonical)
    );

    let bits = Fr::from(6u64).to_bits_le(4);
    assert_eq!(bits, vec![false, true, true, false]);

    fn lifetime_test() -> Result<Fr> {
        Fr::from_bits(&[false; 300])
    }
    assert!(lifetime_test().is_ok());
}

#[test]
fn field_big() {
    let modulus: BigUint = MODULUS.parse().unwrap();
    assert_eq!(Fr::modulus_biguint(), modulus);
    assert_eq!(Fr::size_in_bytes(), 32);

    let big: BigUint = BigUint::from(1u8) << 200;
    assert_eq!(big.to_field::<Fr>(), Ok(Fr::two_pow(200)));
    assert_eq!(Fr::two_pow(200).to_biguint(), big);
    assert_eq!(
        modulus.to_field::<Fr>(),
        Err(FieldHelpersError::NotCanonical)
    );
}

proptest! {
    #[test]
    fn bits_round_trip(v in any::<u128>()) {
        let fe = Fr::from(v);
        let bits = fe.to_bits_le(128);
        prop_assert_eq!(Fr::from_bits(&bits), Ok(fe));
    }

    #[test]
    fn decimal_round_trip(v in any::<u64>(), w in any::<u64>()) {
        let fe = Fr::from(v) * Fr::from(w) - Fr::from(w);
        prop_assert_eq!(Fr::from_decimal(&fe.to_decimal()), Ok(fe));
    }
}
