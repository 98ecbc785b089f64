use ark_bn254::Fr;
use pool_utils::serialization::DecimalString;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Inputs {
    #[serde_as(as = "DecimalString")]
    scope: Fr,
    #[serde_as(as = "Vec<DecimalString>")]
    siblings: Vec<Fr>,
}

#[test]
fn decimal_string_round_trip() {
    let inputs = Inputs {
        scope: Fr::from(42u64),
        siblings: vec![Fr::from(1u64), -Fr::from(1u64)],
    };
    let json = serde_json::to_string(&inputs).unwrap();
    assert_eq!(
        json,
        r#"{"scope":"42","siblings":["1","21888242871839275222246405745257275088548364400416034343698204186575808495616"]}"#
    );
    let back: Inputs = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inputs);
}

#[test]
fn decimal_string_rejects_non_canonical() {
    let json = r#"{"scope":"21888242871839275222246405745257275088548364400416034343698204186575808495617","siblings":[]}"#;
    assert!(serde_json::from_str::<Inputs>(json).is_err());
    assert!(serde_json::from_str::<Inputs>(r#"{"scope":7,"siblings":[]}"#).is_err());
}
