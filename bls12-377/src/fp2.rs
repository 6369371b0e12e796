//! Finite field Fp2 = Fp[u]/(u² + 5) operations for BLS12-377

use crate::{
    constants::INV_XI,
    error::PairingError,
    fp::{
        add_fp_bls12_377, dbl_fp_bls12_377, inv_fp_bls12_377, mul_by_nqr_fp_bls12_377,
        mul_fp_bls12_377, neg_fp_bls12_377, square_fp_bls12_377, sub_fp_bls12_377,
    },
    utils::{chunk, is_zero},
};

#[inline]
fn join(c0: &[u64; 6], c1: &[u64; 6]) -> [u64; 12] {
    let mut result = [0; 12];
    result[0..6].copy_from_slice(c0);
    result[6..12].copy_from_slice(c1);
    result
}

/// Addition in Fp2
#[inline]
pub fn add_fp2_bls12_377(a: &[u64; 12], b: &[u64; 12]) -> [u64; 12] {
    join(
        &add_fp_bls12_377(chunk(a, 0), chunk(b, 0)),
        &add_fp_bls12_377(chunk(a, 1), chunk(b, 1)),
    )
}

/// Doubling in Fp2
#[inline]
pub fn dbl_fp2_bls12_377(a: &[u64; 12]) -> [u64; 12] {
    join(&dbl_fp_bls12_377(chunk(a, 0)), &dbl_fp_bls12_377(chunk(a, 1)))
}

/// Negation in Fp2
#[inline]
pub fn neg_fp2_bls12_377(a: &[u64; 12]) -> [u64; 12] {
    join(&neg_fp_bls12_377(chunk(a, 0)), &neg_fp_bls12_377(chunk(a, 1)))
}

/// Subtraction in Fp2
#[inline]
pub fn sub_fp2_bls12_377(a: &[u64; 12], b: &[u64; 12]) -> [u64; 12] {
    join(
        &sub_fp_bls12_377(chunk(a, 0), chunk(b, 0)),
        &sub_fp_bls12_377(chunk(a, 1), chunk(b, 1)),
    )
}

/// Multiplication in Fp2
//  in: (a0 + a1·u),(b0 + b1·u) ∈ Fp2
//  out: c0 + c1·u, where:
//       - c0 = a0·b0 - 5·a1·b1
//       - c1 = (a0 + a1)·(b0 + b1) - a0·b0 - a1·b1
#[inline]
pub fn mul_fp2_bls12_377(a: &[u64; 12], b: &[u64; 12]) -> [u64; 12] {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));
    let (b0, b1) = (chunk(b, 0), chunk(b, 1));

    let v0 = mul_fp_bls12_377(a0, b0);
    let v1 = mul_fp_bls12_377(a1, b1);

    let c0 = add_fp_bls12_377(&v0, &mul_by_nqr_fp_bls12_377(&v1));
    let mut c1 = mul_fp_bls12_377(&add_fp_bls12_377(a0, a1), &add_fp_bls12_377(b0, b1));
    c1 = sub_fp_bls12_377(&sub_fp_bls12_377(&c1, &v0), &v1);

    join(&c0, &c1)
}

/// Multiplication of an Fp2 element by an Fp element
#[inline]
pub fn scalar_mul_fp2_bls12_377(a: &[u64; 12], b: &[u64; 6]) -> [u64; 12] {
    join(&mul_fp_bls12_377(chunk(a, 0), b), &mul_fp_bls12_377(chunk(a, 1), b))
}

/// Squaring in Fp2
//  in: a0 + a1·u ∈ Fp2
//  out: c0 + c1·u, where:
//       - c0 = (a0 + a1)·(a0 - 5·a1) - a0·a1 + 5·a0·a1
//       - c1 = 2·a0·a1
#[inline]
pub fn square_fp2_bls12_377(a: &[u64; 12]) -> [u64; 12] {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));

    let v0 = mul_fp_bls12_377(a0, a1);
    let mut c0 = mul_fp_bls12_377(
        &add_fp_bls12_377(a0, a1),
        &add_fp_bls12_377(a0, &mul_by_nqr_fp_bls12_377(a1)),
    );
    c0 = sub_fp_bls12_377(&sub_fp_bls12_377(&c0, &v0), &mul_by_nqr_fp_bls12_377(&v0));

    join(&c0, &dbl_fp_bls12_377(&v0))
}

/// Inversion in Fp2
//  (a0 + a1·u)⁻¹ = (a0 - a1·u) / (a0² + 5·a1²)
#[inline]
pub fn inv_fp2_bls12_377(a: &[u64; 12]) -> Result<[u64; 12], PairingError> {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));

    let norm = sub_fp_bls12_377(
        &square_fp_bls12_377(a0),
        &mul_by_nqr_fp_bls12_377(&square_fp_bls12_377(a1)),
    );
    let norm_inv = inv_fp_bls12_377(&norm)?;

    Ok(join(&mul_fp_bls12_377(a0, &norm_inv), &neg_fp_bls12_377(&mul_fp_bls12_377(a1, &norm_inv))))
}

/// Conjugation in Fp2
#[inline]
pub fn conjugate_fp2_bls12_377(a: &[u64; 12]) -> [u64; 12] {
    join(chunk(a, 0), &neg_fp_bls12_377(chunk(a, 1)))
}

/// Multiplication by τ = invXi·u, the non-residue defining Fp6
//  (a0 + a1·u)·invXi·u = a1 + a0·invXi·u, since invXi·u² = 1
#[inline]
pub fn mul_nr_fp2_bls12_377(a: &[u64; 12]) -> [u64; 12] {
    join(chunk(a, 1), &mul_fp_bls12_377(chunk(a, 0), &INV_XI))
}

/// In-place multiplication by τ. The input is staged before the output is written.
#[inline]
pub fn mul_nr_assign_fp2_bls12_377(a: &mut [u64; 12]) {
    let staged = *a;
    *a = mul_nr_fp2_bls12_377(&staged);
}

/// Checks whether a is zero in Fp2
#[inline]
pub fn is_zero_fp2_bls12_377(a: &[u64; 12]) -> bool {
    is_zero(a)
}
