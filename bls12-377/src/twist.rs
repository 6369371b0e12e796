//! Operations on the twist E': y² = x³ + τ of the BLS12-377 curve
//!
//! Jacobian points are `[u64; 36]` and affine points `[u64; 24]`, with Fp2 coordinates.

use ark_bls12_377::{Fq, Fq2, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{BigInt, Zero};

use crate::{
    constants::{FP2_ONE, G2_IDENTITY, G2_IDENTITY_AFFINE, R},
    curve::scalar_bytes_to_limbs,
    error::PairingError,
    fp2::is_zero_fp2_bls12_377,
    fr::from_montgomery_fr_bls12_377,
    utils::{chunk, is_zero},
};

#[inline]
fn fq2(limbs: &[u64; 12]) -> Fq2 {
    Fq2::new(
        Fq::new_unchecked(BigInt(*chunk(limbs, 0))),
        Fq::new_unchecked(BigInt(*chunk(limbs, 1))),
    )
}

#[inline]
fn write_fq2(out: &mut [u64], a: &Fq2) {
    out[0..6].copy_from_slice(&a.c0.0 .0);
    out[6..12].copy_from_slice(&a.c1.0 .0);
}

fn to_ark(p: &[u64; 36]) -> G2Projective {
    G2Projective::new_unchecked(fq2(chunk(p, 0)), fq2(chunk(p, 1)), fq2(chunk(p, 2)))
}

fn from_ark(p: &G2Projective) -> [u64; 36] {
    if p.is_zero() {
        return G2_IDENTITY;
    }
    let mut result = [0; 36];
    write_fq2(&mut result[0..12], &p.x);
    write_fq2(&mut result[12..24], &p.y);
    write_fq2(&mut result[24..36], &p.z);
    result
}

fn to_ark_affine(p: &[u64; 24]) -> G2Affine {
    if is_zero(p) {
        return G2Affine::identity();
    }
    G2Affine::new_unchecked(fq2(chunk(p, 0)), fq2(chunk(p, 1)))
}

/// Checks whether a Jacobian point is the identity
#[inline]
pub fn is_zero_g2_bls12_377(p: &[u64; 36]) -> bool {
    is_zero_fp2_bls12_377(chunk(p, 2))
}

/// Checks whether an affine point is the identity
#[inline]
pub fn is_zero_affine_g2_bls12_377(p: &[u64; 24]) -> bool {
    is_zero(p)
}

/// Checks whether an affine point satisfies y² = x³ + τ
pub fn in_curve_affine_g2_bls12_377(p: &[u64; 24]) -> bool {
    !is_zero(p) && to_ark_affine(p).is_on_curve()
}

/// Converts a Jacobian point to affine coordinates
pub fn to_affine_g2_bls12_377(p: &[u64; 36]) -> [u64; 24] {
    if is_zero_g2_bls12_377(p) {
        return G2_IDENTITY_AFFINE;
    }
    let affine = to_ark(p).into_affine();
    let mut result = [0; 24];
    write_fq2(&mut result[0..12], &affine.x);
    write_fq2(&mut result[12..24], &affine.y);
    result
}

/// Lifts an affine point to Jacobian coordinates with Z = 1
pub fn from_affine_g2_bls12_377(p: &[u64; 24]) -> [u64; 36] {
    if is_zero(p) {
        return G2_IDENTITY;
    }
    let mut result = [0; 36];
    result[0..24].copy_from_slice(p);
    result[24..36].copy_from_slice(&FP2_ONE);
    result
}

/// Normalizes a Jacobian point to (x : y : 1), leaving the identity as (0 : 1 : 0)
pub fn normalize_g2_bls12_377(p: &[u64; 36]) -> [u64; 36] {
    from_affine_g2_bls12_377(&to_affine_g2_bls12_377(p))
}

/// Point addition in G2
pub fn add_g2_bls12_377(p: &[u64; 36], q: &[u64; 36]) -> [u64; 36] {
    from_ark(&(to_ark(p) + to_ark(q)))
}

/// Point doubling in G2
pub fn dbl_g2_bls12_377(p: &[u64; 36]) -> [u64; 36] {
    let p = to_ark(p);
    from_ark(&(p + p))
}

/// Point negation in G2
pub fn neg_g2_bls12_377(p: &[u64; 36]) -> [u64; 36] {
    from_ark(&-to_ark(p))
}

/// Multiplies a Jacobian point by a scalar given as little-endian bytes
pub fn times_scalar_g2_bls12_377(p: &[u64; 36], scalar: &[u8]) -> [u64; 36] {
    from_ark(&to_ark(p).mul_bigint(scalar_bytes_to_limbs(scalar)))
}

/// Multiplies an affine point by a scalar given as little-endian bytes
pub fn times_scalar_affine_g2_bls12_377(p: &[u64; 24], scalar: &[u8]) -> [u64; 36] {
    from_ark(&to_ark_affine(p).mul_bigint(scalar_bytes_to_limbs(scalar)))
}

/// Multiplies a Jacobian point by an Fr element in Montgomery form
pub fn times_fr_g2_bls12_377(p: &[u64; 36], scalar: &[u64; 4]) -> [u64; 36] {
    from_ark(&to_ark(p).mul_bigint(from_montgomery_fr_bls12_377(scalar)))
}

/// Multiplies an affine point by an Fr element in Montgomery form
pub fn times_fr_affine_g2_bls12_377(p: &[u64; 24], scalar: &[u64; 4]) -> [u64; 36] {
    from_ark(&to_ark_affine(p).mul_bigint(from_montgomery_fr_bls12_377(scalar)))
}

/// Checks whether an affine point belongs to G2 = E'(Fp2)[r]
//  The identity belongs to G2; otherwise Q must be on E' and satisfy [r]Q = 𝒪
pub fn in_group_affine_g2_bls12_377(p: &[u64; 24]) -> bool {
    if is_zero_affine_g2_bls12_377(p) {
        return true;
    }
    if !in_curve_affine_g2_bls12_377(p) {
        return false;
    }
    to_ark_affine(p).mul_bigint(R).is_zero()
}

/// Checks whether a Jacobian point belongs to G2
pub fn in_group_g2_bls12_377(p: &[u64; 36]) -> bool {
    in_group_affine_g2_bls12_377(&to_affine_g2_bls12_377(p))
}

/// Validates an affine point as a G2 element, reporting why it is rejected
pub fn check_g2_bls12_377(p: &[u64; 24]) -> Result<(), PairingError> {
    if is_zero_affine_g2_bls12_377(p) {
        return Ok(());
    }
    if !in_curve_affine_g2_bls12_377(p) {
        return Err(PairingError::PointNotOnCurve);
    }
    if !in_group_affine_g2_bls12_377(p) {
        return Err(PairingError::PointNotInSubgroup);
    }
    Ok(())
}
