use ark_ff::fields::{Fp256, MontBackend, MontConfig};

/// The base field of Baby Jubjub is the scalar field of BN254.
pub type Fq = ark_bn254::Fr;

#[derive(MontConfig)]
#[modulus = "2736030358979909402780800718157159386076813972158567259200215660948447373041"]
#[generator = "31"]
pub struct FsConfig;

/// The scalar field of Baby Jubjub: integers modulo the order `l` of the
/// prime-order subgroup.
pub type Fs = Fp256<MontBackend<FsConfig, 4>>;
