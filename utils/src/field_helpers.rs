use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use std::str::FromStr;
use thiserror::Error;

// Field helpers error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("failed to deserialize field bytes")]
    DeserializeBytes,
    #[error("failed to decode hex")]
    DecodeHex,
    #[error("failed to decode decimal string")]
    DecodeDecimal,
    #[error("integer is not smaller than the field modulus")]
    NotCanonical,
}
pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Deserialize from little-endian bytes
    fn from_bytes(bytes: &[u8]) -> Result<F>;

    /// Deserialize from hex
    fn from_hex(hex: &str) -> Result<F>;

    /// Parse a canonical decimal representation, as used by circuit input
    /// files.
    fn from_decimal(decimal: &str) -> Result<F>;

    /// Deserialize from little-endian bits, rejecting non-canonical values
    fn from_bits(bits: &[bool]) -> Result<F>;

    /// Convert from a `BigUint`, rejecting values not below the modulus
    fn from_biguint(big: &BigUint) -> Result<F>;

    /// Serialize to little-endian bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Serialize to hex
    fn to_hex(&self) -> String;

    /// Canonical decimal representation
    fn to_decimal(&self) -> String;

    /// The `n` least significant bits, little-endian
    fn to_bits_le(&self, n: usize) -> Vec<bool>;

    /// Integer value of the canonical representative
    fn to_biguint(&self) -> BigUint;

    /// `2^n` as a field element
    fn two_pow(n: u64) -> F;

    /// Field size in bytes
    fn size_in_bytes() -> usize;

    /// Get the modulus as `BigUint`
    fn modulus_biguint() -> BigUint;
}

impl<F: PrimeField> FieldHelpers<F> for F {
    fn from_bytes(bytes: &[u8]) -> Result<F> {
        if bytes.len() != F::size_in_bytes() {
            return Err(FieldHelpersError::DeserializeBytes);
        }
        F::from_biguint(&BigUint::from_bytes_le(bytes))
            .map_err(|_| FieldHelpersError::DeserializeBytes)
    }

    fn from_hex(hex: &str) -> Result<F> {
        let bytes: Vec<u8> = hex::decode(hex).map_err(|_| FieldHelpersError::DecodeHex)?;
        F::from_bytes(&bytes)
    }

    fn from_decimal(decimal: &str) -> Result<F> {
        let big = BigUint::from_str(decimal).map_err(|_| FieldHelpersError::DecodeDecimal)?;
        F::from_biguint(&big)
    }

    fn from_bits(bits: &[bool]) -> Result<F> {
        let big = bits
            .iter()
            .rev()
            .fold(BigUint::from(0u8), |acc, bit| (acc << 1) + (*bit as u8));
        F::from_biguint(&big)
    }

    fn from_biguint(big: &BigUint) -> Result<F> {
        if *big >= F::modulus_biguint() {
            return Err(FieldHelpersError::NotCanonical);
        }
        Ok(F::from(big.clone()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_le()
    }

    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    fn to_decimal(&self) -> String {
        self.to_biguint().to_string()
    }

    fn to_bits_le(&self, n: usize) -> Vec<bool> {
        let repr = self.into_bigint();
        (0..n).map(|i| repr.get_bit(i)).collect()
    }

    fn to_biguint(&self) -> BigUint {
        (*self).into()
    }

    fn two_pow(n: u64) -> F {
        F::from(2u64).pow([n])
    }

    fn size_in_bytes() -> usize {
        let bits = F::MODULUS_BIT_SIZE as usize;
        bits / 8 + (bits % 8 != 0) as usize
    }

    fn modulus_biguint() -> BigUint {
        F::MODULUS.into()
    }
}

/// Conversions from big integers into field elements
pub trait BigUintFieldHelpers {
    /// Converts into a field element, failing if the integer is not a
    /// canonical representative.
    fn to_field<F: PrimeField>(&self) -> Result<F>;
}

impl BigUintFieldHelpers for BigUint {
    fn to_field<F: PrimeField>(&self) -> Result<F> {
        F::from_biguint(self)
    }
}
