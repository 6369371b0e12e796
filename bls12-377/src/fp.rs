//! Finite field Fp operations for BLS12-377
//!
//! Elements are Montgomery-form limbs. The arithmetic itself is delegated to `ark-bls12-377`,
//! these functions only move limbs in and out of its representation.

use ark_bls12_377::Fq;
use ark_ff::{AdditiveGroup, BigInt, Field, PrimeField, Zero};

use crate::error::PairingError;

#[inline]
fn to_ark(a: &[u64; 6]) -> Fq {
    Fq::new_unchecked(BigInt(*a))
}

#[inline]
fn from_ark(a: Fq) -> [u64; 6] {
    a.0 .0
}

/// Addition in Fp
#[inline]
pub fn add_fp_bls12_377(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    from_ark(to_ark(a) + to_ark(b))
}

/// Doubling in Fp
#[inline]
pub fn dbl_fp_bls12_377(a: &[u64; 6]) -> [u64; 6] {
    from_ark(to_ark(a).double())
}

/// Subtraction in Fp
#[inline]
pub fn sub_fp_bls12_377(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    from_ark(to_ark(a) - to_ark(b))
}

/// Negation in Fp
#[inline]
pub fn neg_fp_bls12_377(a: &[u64; 6]) -> [u64; 6] {
    from_ark(-to_ark(a))
}

/// Multiplication in Fp
#[inline]
pub fn mul_fp_bls12_377(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    from_ark(to_ark(a) * to_ark(b))
}

/// Squaring in Fp
#[inline]
pub fn square_fp_bls12_377(a: &[u64; 6]) -> [u64; 6] {
    from_ark(to_ark(a).square())
}

/// Multiplication by the quadratic non-residue -5
//  -5·a = -(4·a + a)
#[inline]
pub fn mul_by_nqr_fp_bls12_377(a: &[u64; 6]) -> [u64; 6] {
    let x = to_ark(a);
    from_ark(-(x.double().double() + x))
}

/// Inversion in Fp
#[inline]
pub fn inv_fp_bls12_377(a: &[u64; 6]) -> Result<[u64; 6], PairingError> {
    to_ark(a).inverse().map(from_ark).ok_or(PairingError::InversionOfZero)
}

/// Checks whether a is zero in Fp
#[inline]
pub fn is_zero_fp_bls12_377(a: &[u64; 6]) -> bool {
    to_ark(a).is_zero()
}

/// Converts a canonical integer below p into Montgomery form
pub fn to_montgomery_fp_bls12_377(a: &[u64; 6]) -> Result<[u64; 6], PairingError> {
    Fq::from_bigint(BigInt(*a)).map(from_ark).ok_or(PairingError::NonCanonicalField)
}

/// Converts a Montgomery-form element into its canonical integer
pub fn from_montgomery_fp_bls12_377(a: &[u64; 6]) -> [u64; 6] {
    to_ark(a).into_bigint().0
}
