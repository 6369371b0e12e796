//! Scalar field Fr operations for BLS12-377

use ark_bls12_377::Fr;
use ark_ff::{BigInt, Field, PrimeField};

use crate::error::PairingError;

#[inline]
fn to_ark(a: &[u64; 4]) -> Fr {
    Fr::new_unchecked(BigInt(*a))
}

#[inline]
fn from_ark(a: Fr) -> [u64; 4] {
    a.0 .0
}

/// Addition in Fr
#[inline]
pub fn add_fr_bls12_377(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    from_ark(to_ark(a) + to_ark(b))
}

/// Subtraction in Fr
#[inline]
pub fn sub_fr_bls12_377(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    from_ark(to_ark(a) - to_ark(b))
}

/// Negation in Fr
#[inline]
pub fn neg_fr_bls12_377(a: &[u64; 4]) -> [u64; 4] {
    from_ark(-to_ark(a))
}

/// Multiplication in Fr
#[inline]
pub fn mul_fr_bls12_377(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    from_ark(to_ark(a) * to_ark(b))
}

/// Inversion in Fr
#[inline]
pub fn inv_fr_bls12_377(a: &[u64; 4]) -> Result<[u64; 4], PairingError> {
    to_ark(a).inverse().map(from_ark).ok_or(PairingError::InversionOfZero)
}

/// Converts a canonical integer below r into Montgomery form
pub fn to_montgomery_fr_bls12_377(a: &[u64; 4]) -> Result<[u64; 4], PairingError> {
    Fr::from_bigint(BigInt(*a)).map(from_ark).ok_or(PairingError::NonCanonicalField)
}

/// Converts a Montgomery-form element into its canonical integer
pub fn from_montgomery_fr_bls12_377(a: &[u64; 4]) -> [u64; 4] {
    to_ark(a).into_bigint().0
}

/// Reduces an arbitrary little-endian byte string modulo r, returning Montgomery form
pub fn fr_from_le_bytes_mod_order_bls12_377(bytes: &[u8]) -> [u64; 4] {
    from_ark(Fr::from_le_bytes_mod_order(bytes))
}
