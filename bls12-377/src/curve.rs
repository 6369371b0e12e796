//! Operations on the curve E: y² = x³ + 1 of BLS12-377
//!
//! Jacobian points are `[u64; 18]` (X, Y, Z) and affine points are `[u64; 12]` (x, y), with the
//! affine identity encoded as all zeros. Group arithmetic is delegated to `ark-bls12-377`.

use ark_bls12_377::{Fq, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{BigInt, Zero};

use crate::{
    constants::{FP_ONE, G1_IDENTITY, G1_IDENTITY_AFFINE, R},
    error::PairingError,
    fp::is_zero_fp_bls12_377,
    fr::from_montgomery_fr_bls12_377,
    utils::{chunk, is_zero},
};

#[inline]
fn fq(limbs: &[u64; 6]) -> Fq {
    Fq::new_unchecked(BigInt(*limbs))
}

fn to_ark(p: &[u64; 18]) -> G1Projective {
    G1Projective::new_unchecked(fq(chunk(p, 0)), fq(chunk(p, 1)), fq(chunk(p, 2)))
}

fn from_ark(p: &G1Projective) -> [u64; 18] {
    if p.is_zero() {
        return G1_IDENTITY;
    }
    let mut result = [0; 18];
    result[0..6].copy_from_slice(&p.x.0 .0);
    result[6..12].copy_from_slice(&p.y.0 .0);
    result[12..18].copy_from_slice(&p.z.0 .0);
    result
}

fn to_ark_affine(p: &[u64; 12]) -> G1Affine {
    if is_zero(p) {
        return G1Affine::identity();
    }
    G1Affine::new_unchecked(fq(chunk(p, 0)), fq(chunk(p, 1)))
}

/// Packs little-endian scalar bytes into little-endian limbs
pub(crate) fn scalar_bytes_to_limbs(scalar: &[u8]) -> Vec<u64> {
    scalar
        .chunks(8)
        .map(|bytes| {
            let mut limb = [0u8; 8];
            limb[..bytes.len()].copy_from_slice(bytes);
            u64::from_le_bytes(limb)
        })
        .collect()
}

/// Checks whether a Jacobian point is the identity
#[inline]
pub fn is_zero_g1_bls12_377(p: &[u64; 18]) -> bool {
    is_zero_fp_bls12_377(chunk(p, 2))
}

/// Checks whether an affine point is the identity
#[inline]
pub fn is_zero_affine_g1_bls12_377(p: &[u64; 12]) -> bool {
    is_zero(p)
}

/// Checks whether an affine point satisfies y² = x³ + 1
pub fn in_curve_affine_g1_bls12_377(p: &[u64; 12]) -> bool {
    !is_zero(p) && to_ark_affine(p).is_on_curve()
}

/// Converts a Jacobian point to affine coordinates
pub fn to_affine_g1_bls12_377(p: &[u64; 18]) -> [u64; 12] {
    if is_zero_g1_bls12_377(p) {
        return G1_IDENTITY_AFFINE;
    }
    let affine = to_ark(p).into_affine();
    let mut result = [0; 12];
    result[0..6].copy_from_slice(&affine.x.0 .0);
    result[6..12].copy_from_slice(&affine.y.0 .0);
    result
}

/// Lifts an affine point to Jacobian coordinates with Z = 1
pub fn from_affine_g1_bls12_377(p: &[u64; 12]) -> [u64; 18] {
    if is_zero(p) {
        return G1_IDENTITY;
    }
    let mut result = [0; 18];
    result[0..12].copy_from_slice(p);
    result[12..18].copy_from_slice(&FP_ONE);
    result
}

/// Normalizes a Jacobian point to (x : y : 1), leaving the identity as (0 : 1 : 0)
pub fn normalize_g1_bls12_377(p: &[u64; 18]) -> [u64; 18] {
    from_affine_g1_bls12_377(&to_affine_g1_bls12_377(p))
}

/// Point addition in G1
pub fn add_g1_bls12_377(p: &[u64; 18], q: &[u64; 18]) -> [u64; 18] {
    from_ark(&(to_ark(p) + to_ark(q)))
}

/// Point doubling in G1
pub fn dbl_g1_bls12_377(p: &[u64; 18]) -> [u64; 18] {
    let p = to_ark(p);
    from_ark(&(p + p))
}

/// Point negation in G1
pub fn neg_g1_bls12_377(p: &[u64; 18]) -> [u64; 18] {
    from_ark(&-to_ark(p))
}

/// Multiplies a Jacobian point by a scalar given as little-endian bytes
pub fn times_scalar_g1_bls12_377(p: &[u64; 18], scalar: &[u8]) -> [u64; 18] {
    from_ark(&to_ark(p).mul_bigint(scalar_bytes_to_limbs(scalar)))
}

/// Multiplies an affine point by a scalar given as little-endian bytes
pub fn times_scalar_affine_g1_bls12_377(p: &[u64; 12], scalar: &[u8]) -> [u64; 18] {
    from_ark(&to_ark_affine(p).mul_bigint(scalar_bytes_to_limbs(scalar)))
}

/// Multiplies a Jacobian point by an Fr element in Montgomery form
pub fn times_fr_g1_bls12_377(p: &[u64; 18], scalar: &[u64; 4]) -> [u64; 18] {
    from_ark(&to_ark(p).mul_bigint(from_montgomery_fr_bls12_377(scalar)))
}

/// Multiplies an affine point by an Fr element in Montgomery form
pub fn times_fr_affine_g1_bls12_377(p: &[u64; 12], scalar: &[u64; 4]) -> [u64; 18] {
    from_ark(&to_ark_affine(p).mul_bigint(from_montgomery_fr_bls12_377(scalar)))
}

/// Checks whether an affine point belongs to G1 = E(Fp)[r]
//  The identity belongs to G1; otherwise P must be on E and satisfy [r]P = 𝒪
pub fn in_group_affine_g1_bls12_377(p: &[u64; 12]) -> bool {
    if is_zero_affine_g1_bls12_377(p) {
        return true;
    }
    if !in_curve_affine_g1_bls12_377(p) {
        return false;
    }
    to_ark_affine(p).mul_bigint(R).is_zero()
}

/// Checks whether a Jacobian point belongs to G1
pub fn in_group_g1_bls12_377(p: &[u64; 18]) -> bool {
    in_group_affine_g1_bls12_377(&to_affine_g1_bls12_377(p))
}

/// Validates an affine point as a G1 element, reporting why it is rejected
pub fn check_g1_bls12_377(p: &[u64; 12]) -> Result<(), PairingError> {
    if is_zero_affine_g1_bls12_377(p) {
        return Ok(());
    }
    if !in_curve_affine_g1_bls12_377(p) {
        return Err(PairingError::PointNotOnCurve);
    }
    if !in_group_affine_g1_bls12_377(p) {
        return Err(PairingError::PointNotInSubgroup);
    }
    Ok(())
}
