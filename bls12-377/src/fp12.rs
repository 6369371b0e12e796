//! Finite field Fp12 = Fp6[w]/(w² - v) operations for BLS12-377
//!
//! An element is stored as its six Fp2 slots over the basis {1, v, v², w, v·w, v²·w}.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

use crate::{
    constants::{FP2_ONE, FP_ONE, P, TAU},
    error::PairingError,
    fp::mul_fp_bls12_377,
    fp2::{
        add_fp2_bls12_377, conjugate_fp2_bls12_377, mul_fp2_bls12_377, scalar_mul_fp2_bls12_377,
    },
    fp6::{
        add_fp6_bls12_377, dbl_fp6_bls12_377, inv_fp6_bls12_377, mul01_fp6_bls12_377,
        mul1_fp6_bls12_377, mul_fp6_bls12_377, mul_nr_fp6_bls12_377, neg_fp6_bls12_377,
        sub_fp6_bls12_377,
    },
    utils::{chunk, is_zero},
};

/// Exponent pattern of γ per slot: slot i picks up γ^(n·e_i) under the n-th Frobenius map
const FROBENIUS_EXP_MAP: [u64; 6] = [0, 2, 4, 1, 3, 5];

/// Number of Frobenius maps exposed
pub const FROBENIUS_MAPS: usize = 10;

lazy_static! {
    /// γ^(n·e_i) ∈ Fp for n = 0..10 and every slot i, with γ = τ^((p-1)/6)
    static ref FROBENIUS_COEFFS: [[[u64; 6]; 6]; FROBENIUS_MAPS] = {
        let gamma = frobenius_gamma();
        let gamma: [u64; 6] = *chunk(&gamma, 0);

        let mut coeffs = [[[0u64; 6]; 6]; FROBENIUS_MAPS];
        for (n, map) in coeffs.iter_mut().enumerate() {
            for (slot, e) in map.iter_mut().zip(FROBENIUS_EXP_MAP) {
                let mut c = FP_ONE;
                for _ in 0..(n as u64 * e) {
                    c = mul_fp_bls12_377(&c, &gamma);
                }
                *slot = c;
            }
        }
        coeffs
    };
}

/// Computes γ = τ^((p-1)/6) ∈ Fp2. Its u-coordinate is zero.
fn frobenius_gamma() -> [u64; 12] {
    let mut p = BigUint::default();
    for limb in P.iter().rev() {
        p = (p << 64u32) + BigUint::from(*limb);
    }
    let exp: BigUint = (p - BigUint::one()) / BigUint::from(6u32);

    let mut result = FP2_ONE;
    for i in (0..exp.bits()).rev() {
        result = mul_fp2_bls12_377(&result, &result);
        if exp.bit(i) {
            result = mul_fp2_bls12_377(&result, &TAU);
        }
    }
    result
}

#[inline]
fn join(c0: &[u64; 36], c1: &[u64; 36]) -> [u64; 72] {
    let mut result = [0; 72];
    result[0..36].copy_from_slice(c0);
    result[36..72].copy_from_slice(c1);
    result
}

/// Addition in Fp12
#[inline]
pub fn add_fp12_bls12_377(a: &[u64; 72], b: &[u64; 72]) -> [u64; 72] {
    join(
        &add_fp6_bls12_377(chunk(a, 0), chunk(b, 0)),
        &add_fp6_bls12_377(chunk(a, 1), chunk(b, 1)),
    )
}

/// Subtraction in Fp12
#[inline]
pub fn sub_fp12_bls12_377(a: &[u64; 72], b: &[u64; 72]) -> [u64; 72] {
    join(
        &sub_fp6_bls12_377(chunk(a, 0), chunk(b, 0)),
        &sub_fp6_bls12_377(chunk(a, 1), chunk(b, 1)),
    )
}

/// Negation in Fp12
#[inline]
pub fn neg_fp12_bls12_377(a: &[u64; 72]) -> [u64; 72] {
    join(&neg_fp6_bls12_377(chunk(a, 0)), &neg_fp6_bls12_377(chunk(a, 1)))
}

/// Multiplication in Fp12
//  in: (a0 + a1·w),(b0 + b1·w) ∈ Fp12, where ai,bi ∈ Fp6
//  out: (c0 + c1·w) ∈ Fp12, where:
//       - c0 = a0·b0 + a1·b1·v
//       - c1 = (a0 + a1)·(b0 + b1) - a0·b0 - a1·b1
#[inline]
pub fn mul_fp12_bls12_377(a: &[u64; 72], b: &[u64; 72]) -> [u64; 72] {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));
    let (b0, b1) = (chunk(b, 0), chunk(b, 1));

    let t0 = mul_fp6_bls12_377(a0, b0);
    let t1 = mul_fp6_bls12_377(a1, b1);

    let c0 = add_fp6_bls12_377(&t0, &mul_nr_fp6_bls12_377(&t1));
    let mut c1 = mul_fp6_bls12_377(&add_fp6_bls12_377(a0, a1), &add_fp6_bls12_377(b0, b1));
    c1 = sub_fp6_bls12_377(&sub_fp6_bls12_377(&c1, &t0), &t1);

    join(&c0, &c1)
}

/// Squaring in Fp12
//  in: (a0 + a1·w) ∈ Fp12
//  out: (c0 + c1·w) ∈ Fp12, where:
//       - c0 = (a0 + a1)·(a0 + a1·v) - a0·a1 - a0·a1·v
//       - c1 = 2·a0·a1
#[inline]
pub fn square_fp12_bls12_377(a: &[u64; 72]) -> [u64; 72] {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));

    let ab = mul_fp6_bls12_377(a0, a1);
    let mut c0 = mul_fp6_bls12_377(
        &add_fp6_bls12_377(a0, a1),
        &add_fp6_bls12_377(a0, &mul_nr_fp6_bls12_377(a1)),
    );
    c0 = sub_fp6_bls12_377(&sub_fp6_bls12_377(&c0, &ab), &mul_nr_fp6_bls12_377(&ab));

    join(&c0, &dbl_fp6_bls12_377(&ab))
}

/// Inversion in Fp12
//  (a0 + a1·w)⁻¹ = (a0 - a1·w) / (a0² - a1²·v)
#[inline]
pub fn inv_fp12_bls12_377(a: &[u64; 72]) -> Result<[u64; 72], PairingError> {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));

    let t = sub_fp6_bls12_377(
        &mul_fp6_bls12_377(a0, a0),
        &mul_nr_fp6_bls12_377(&mul_fp6_bls12_377(a1, a1)),
    );
    let t_inv = inv_fp6_bls12_377(&t)?;

    Ok(join(&mul_fp6_bls12_377(a0, &t_inv), &neg_fp6_bls12_377(&mul_fp6_bls12_377(a1, &t_inv))))
}

/// Conjugation in Fp12, i.e. the p⁶-power Frobenius
#[inline]
pub fn conjugate_fp12_bls12_377(a: &[u64; 72]) -> [u64; 72] {
    join(chunk(a, 0), &neg_fp6_bls12_377(chunk(a, 1)))
}

/// Checks whether a is zero in Fp12
#[inline]
pub fn is_zero_fp12_bls12_377(a: &[u64; 72]) -> bool {
    is_zero(a)
}

/// Checks whether a is the multiplicative identity of Fp12
#[inline]
pub fn is_one_fp12_bls12_377(a: &[u64; 72]) -> bool {
    a[0..6] == FP_ONE && is_zero(&a[6..72])
}

/// Sparse multiplication in Fp12 by an element of the form c0 + c1·v + c4·v·w
//  in: (a0 + a1·w) ∈ Fp12, c0, c1, c4 ∈ Fp2
//  out: (r0 + r1·w) ∈ Fp12, where:
//       - aa = a0·(c0 + c1·v), bb = a1·(c4·v)
//       - r0 = aa + bb·v
//       - r1 = (a0 + a1)·(c0 + (c1 + c4)·v) - aa - bb
#[inline]
pub fn mul014_fp12_bls12_377(
    a: &[u64; 72],
    c0: &[u64; 12],
    c1: &[u64; 12],
    c4: &[u64; 12],
) -> [u64; 72] {
    let (a0, a1) = (chunk(a, 0), chunk(a, 1));

    let aa = mul01_fp6_bls12_377(a0, c0, c1);
    let bb = mul1_fp6_bls12_377(a1, c4);

    let o = add_fp2_bls12_377(c1, c4);
    let mut r1 = mul01_fp6_bls12_377(&add_fp6_bls12_377(a1, a0), c0, &o);
    r1 = sub_fp6_bls12_377(&sub_fp6_bls12_377(&r1, &aa), &bb);

    let r0 = add_fp6_bls12_377(&mul_nr_fp6_bls12_377(&bb), &aa);

    join(&r0, &r1)
}

/// n-th power of the Frobenius endomorphism x ↦ x^(pⁿ), for n < 10
//  Slot i is conjugated when n is odd and then scaled by γ^(n·e_i)
pub fn frobenius_map_fp12_bls12_377(a: &[u64; 72], n: usize) -> [u64; 72] {
    assert!(n < FROBENIUS_MAPS, "frobenius_map_fp12_bls12_377: n = {n} out of range");

    let coeffs = &FROBENIUS_COEFFS[n];
    let mut result = [0; 72];
    for (i, coeff) in coeffs.iter().enumerate() {
        let mut slot = *chunk::<12>(a, i);
        if n % 2 == 1 {
            slot = conjugate_fp2_bls12_377(&slot);
        }
        result[i * 12..(i + 1) * 12].copy_from_slice(&scalar_mul_fp2_bls12_377(&slot, coeff));
    }
    result
}

macro_rules! define_frobenius_maps {
    ($($n:literal),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Frobenius endomorphism x ↦ x^(p^", stringify!($n), ")")]
                #[inline]
                pub fn [<frobenius $n _fp12_bls12_377>](a: &[u64; 72]) -> [u64; 72] {
                    frobenius_map_fp12_bls12_377(a, $n)
                }
            )+
        }
    };
}

define_frobenius_maps!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
