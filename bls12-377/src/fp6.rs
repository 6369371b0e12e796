//! Finite field Fp6 = Fp2[v]/(v³ - τ) operations for BLS12-377

use crate::{
    error::PairingError,
    fp2::{
        add_fp2_bls12_377, dbl_fp2_bls12_377, inv_fp2_bls12_377, mul_fp2_bls12_377,
        mul_nr_fp2_bls12_377, neg_fp2_bls12_377, square_fp2_bls12_377, sub_fp2_bls12_377,
    },
    utils::{chunk, is_zero},
};

#[inline]
fn join(c0: &[u64; 12], c1: &[u64; 12], c2: &[u64; 12]) -> [u64; 36] {
    let mut result = [0; 36];
    result[0..12].copy_from_slice(c0);
    result[12..24].copy_from_slice(c1);
    result[24..36].copy_from_slice(c2);
    result
}

/// Addition in Fp6
#[inline]
pub fn add_fp6_bls12_377(a: &[u64; 36], b: &[u64; 36]) -> [u64; 36] {
    let mut result = [0; 36];
    for i in 0..3 {
        let c_i = add_fp2_bls12_377(chunk(a, i), chunk(b, i));
        result[i * 12..(i + 1) * 12].copy_from_slice(&c_i);
    }
    result
}

/// Doubling in Fp6
#[inline]
pub fn dbl_fp6_bls12_377(a: &[u64; 36]) -> [u64; 36] {
    let mut result = [0; 36];
    for i in 0..3 {
        let c_i = dbl_fp2_bls12_377(chunk(a, i));
        result[i * 12..(i + 1) * 12].copy_from_slice(&c_i);
    }
    result
}

/// Negation in Fp6
#[inline]
pub fn neg_fp6_bls12_377(a: &[u64; 36]) -> [u64; 36] {
    let mut result = [0; 36];
    for i in 0..3 {
        let c_i = neg_fp2_bls12_377(chunk(a, i));
        result[i * 12..(i + 1) * 12].copy_from_slice(&c_i);
    }
    result
}

/// Subtraction in Fp6
#[inline]
pub fn sub_fp6_bls12_377(a: &[u64; 36], b: &[u64; 36]) -> [u64; 36] {
    let mut result = [0; 36];
    for i in 0..3 {
        let c_i = sub_fp2_bls12_377(chunk(a, i), chunk(b, i));
        result[i * 12..(i + 1) * 12].copy_from_slice(&c_i);
    }
    result
}

/// Multiplication in Fp6
//  in: (a0 + a1·v + a2·v²),(b0 + b1·v + b2·v²) ∈ Fp6, where ai,bi ∈ Fp2
//  out: (c0 + c1·v + c2·v²) ∈ Fp6, where:
//       - c0 = a0·b0 + τ·[(a1 + a2)·(b1 + b2) - a1·b1 - a2·b2]
//       - c1 = (a0 + a1)·(b0 + b1) - a0·b0 - a1·b1 + τ·a2·b2
//       - c2 = (a0 + a2)·(b0 + b2) - a0·b0 - a2·b2 + a1·b1
#[inline]
pub fn mul_fp6_bls12_377(a: &[u64; 36], b: &[u64; 36]) -> [u64; 36] {
    let (a0, a1, a2) = (chunk(a, 0), chunk(a, 1), chunk(a, 2));
    let (b0, b1, b2) = (chunk(b, 0), chunk(b, 1), chunk(b, 2));

    let t0 = mul_fp2_bls12_377(a0, b0);
    let t1 = mul_fp2_bls12_377(a1, b1);
    let t2 = mul_fp2_bls12_377(a2, b2);

    let mut c0 = mul_fp2_bls12_377(&add_fp2_bls12_377(a1, a2), &add_fp2_bls12_377(b1, b2));
    c0 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&c0, &t1), &t2);
    c0 = add_fp2_bls12_377(&mul_nr_fp2_bls12_377(&c0), &t0);

    let mut c1 = mul_fp2_bls12_377(&add_fp2_bls12_377(a0, a1), &add_fp2_bls12_377(b0, b1));
    c1 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&c1, &t0), &t1);
    c1 = add_fp2_bls12_377(&c1, &mul_nr_fp2_bls12_377(&t2));

    let mut c2 = mul_fp2_bls12_377(&add_fp2_bls12_377(a0, a2), &add_fp2_bls12_377(b0, b2));
    c2 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&c2, &t0), &t2);
    c2 = add_fp2_bls12_377(&c2, &t1);

    join(&c0, &c1, &c2)
}

/// Squaring in Fp6
//  in: (a0 + a1·v + a2·v²) ∈ Fp6
//  out: (c0 + c1·v + c2·v²) ∈ Fp6, where:
//       - c0 = a0² + τ·(2·a1·a2)
//       - c1 = 2·a0·a1 + τ·a2²
//       - c2 = 2·a0·a1 + (a0 - a1 + a2)² + 2·a1·a2 - a0² - a2²
#[inline]
pub fn square_fp6_bls12_377(a: &[u64; 36]) -> [u64; 36] {
    let (a0, a1, a2) = (chunk(a, 0), chunk(a, 1), chunk(a, 2));

    let s0 = square_fp2_bls12_377(a0);
    let s1 = dbl_fp2_bls12_377(&mul_fp2_bls12_377(a0, a1));
    let s2 = square_fp2_bls12_377(&add_fp2_bls12_377(&sub_fp2_bls12_377(a0, a1), a2));
    let s3 = dbl_fp2_bls12_377(&mul_fp2_bls12_377(a1, a2));
    let s4 = square_fp2_bls12_377(a2);

    let c0 = add_fp2_bls12_377(&s0, &mul_nr_fp2_bls12_377(&s3));
    let c1 = add_fp2_bls12_377(&s1, &mul_nr_fp2_bls12_377(&s4));
    let mut c2 = add_fp2_bls12_377(&add_fp2_bls12_377(&s1, &s2), &s3);
    c2 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&c2, &s0), &s4);

    join(&c0, &c1, &c2)
}

/// Inversion in Fp6
//  in: (a0 + a1·v + a2·v²) ∈ Fp6
//  out: (t0 + t1·v + t2·v²)·d⁻¹, where:
//       - t0 = a0² - τ·a1·a2
//       - t1 = τ·a2² - a0·a1
//       - t2 = a1² - a0·a2
//       - d = a0·t0 + τ·(a2·t1 + a1·t2)
#[inline]
pub fn inv_fp6_bls12_377(a: &[u64; 36]) -> Result<[u64; 36], PairingError> {
    let (a0, a1, a2) = (chunk(a, 0), chunk(a, 1), chunk(a, 2));

    let t0 = sub_fp2_bls12_377(
        &square_fp2_bls12_377(a0),
        &mul_nr_fp2_bls12_377(&mul_fp2_bls12_377(a1, a2)),
    );
    let t1 = sub_fp2_bls12_377(
        &mul_nr_fp2_bls12_377(&square_fp2_bls12_377(a2)),
        &mul_fp2_bls12_377(a0, a1),
    );
    let t2 = sub_fp2_bls12_377(&square_fp2_bls12_377(a1), &mul_fp2_bls12_377(a0, a2));

    let mut d = add_fp2_bls12_377(&mul_fp2_bls12_377(a2, &t1), &mul_fp2_bls12_377(a1, &t2));
    d = add_fp2_bls12_377(&mul_nr_fp2_bls12_377(&d), &mul_fp2_bls12_377(a0, &t0));
    let d_inv = inv_fp2_bls12_377(&d)?;

    Ok(join(
        &mul_fp2_bls12_377(&t0, &d_inv),
        &mul_fp2_bls12_377(&t1, &d_inv),
        &mul_fp2_bls12_377(&t2, &d_inv),
    ))
}

/// Checks whether a is zero in Fp6
#[inline]
pub fn is_zero_fp6_bls12_377(a: &[u64; 36]) -> bool {
    is_zero(a)
}

/// Multiplication by v, the non-residue defining Fp12
//  (a0 + a1·v + a2·v²)·v = τ·a2 + a0·v + a1·v²
#[inline]
pub fn mul_nr_fp6_bls12_377(a: &[u64; 36]) -> [u64; 36] {
    join(&mul_nr_fp2_bls12_377(chunk(a, 2)), chunk(a, 0), chunk(a, 1))
}

/// In-place multiplication by v. The input is staged before the output is written.
#[inline]
pub fn mul_nr_assign_fp6_bls12_377(a: &mut [u64; 36]) {
    let staged = *a;
    *a = mul_nr_fp6_bls12_377(&staged);
}

/// Sparse multiplication in Fp6 by an element of the form c1·v
//  (a0 + a1·v + a2·v²)·c1·v = τ·a2·c1 + a0·c1·v + a1·c1·v²
#[inline]
pub fn mul1_fp6_bls12_377(a: &[u64; 36], c1: &[u64; 12]) -> [u64; 36] {
    let (a0, a1, a2) = (chunk(a, 0), chunk(a, 1), chunk(a, 2));

    join(
        &mul_nr_fp2_bls12_377(&mul_fp2_bls12_377(a2, c1)),
        &mul_fp2_bls12_377(a0, c1),
        &mul_fp2_bls12_377(a1, c1),
    )
}

/// Sparse multiplication in Fp6 by an element of the form c0 + c1·v
//  in: (a0 + a1·v + a2·v²) ∈ Fp6, c0, c1 ∈ Fp2
//  out: (r0 + r1·v + r2·v²) ∈ Fp6, where:
//       - r0 = a0·c0 + τ·a2·c1
//       - r1 = (a0 + a1)·(c0 + c1) - a0·c0 - a1·c1
//       - r2 = a2·c0 + a1·c1
#[inline]
pub fn mul01_fp6_bls12_377(a: &[u64; 36], c0: &[u64; 12], c1: &[u64; 12]) -> [u64; 36] {
    let (a0, a1, a2) = (chunk(a, 0), chunk(a, 1), chunk(a, 2));

    let a_a = mul_fp2_bls12_377(a0, c0);
    let b_b = mul_fp2_bls12_377(a1, c1);

    let r0 = add_fp2_bls12_377(&mul_nr_fp2_bls12_377(&mul_fp2_bls12_377(a2, c1)), &a_a);
    let mut r1 = mul_fp2_bls12_377(&add_fp2_bls12_377(c0, c1), &add_fp2_bls12_377(a0, a1));
    r1 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&r1, &a_a), &b_b);
    let r2 = add_fp2_bls12_377(&mul_fp2_bls12_377(a2, c0), &b_b);

    join(&r0, &r1, &r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FP6_ONE, FP_ONE};
    use crate::fp::to_montgomery_fp_bls12_377;

    fn fp6(seed: u64) -> [u64; 36] {
        let mut result = [0; 36];
        for i in 0..6 {
            let c = to_montgomery_fp_bls12_377(&[seed * 31 + i as u64 * 7 + 1, 0, 0, 0, 0, 0])
                .unwrap();
            result[i * 6..(i + 1) * 6].copy_from_slice(&c);
        }
        result
    }

    fn v() -> [u64; 36] {
        let mut v = [0; 36];
        v[12..18].copy_from_slice(&FP_ONE);
        v
    }

    #[test]
    fn test_v_cubed_is_tau() {
        let v = v();
        let v3 = mul_fp6_bls12_377(&mul_fp6_bls12_377(&v, &v), &v);
        let mut expected = [0; 36];
        expected[0..12].copy_from_slice(&crate::constants::TAU);
        assert_eq!(v3, expected);
    }

    #[test]
    fn test_square() {
        let a = fp6(3);
        assert_eq!(square_fp6_bls12_377(&a), mul_fp6_bls12_377(&a, &a));
    }

    #[test]
    fn test_inv() {
        let a = fp6(5);
        let a_inv = inv_fp6_bls12_377(&a).unwrap();
        assert_eq!(mul_fp6_bls12_377(&a, &a_inv), FP6_ONE);
        assert_eq!(inv_fp6_bls12_377(&[0; 36]), Err(PairingError::InversionOfZero));
    }

    #[test]
    fn test_mul_nr() {
        let a = fp6(8);
        assert_eq!(mul_nr_fp6_bls12_377(&a), mul_fp6_bls12_377(&a, &v()));
        let mut b = a;
        mul_nr_assign_fp6_bls12_377(&mut b);
        assert_eq!(b, mul_nr_fp6_bls12_377(&a));
    }

    #[test]
    fn test_sparse_muls() {
        let a = fp6(11);
        let b = fp6(13);
        let (c0, c1) = (chunk::<12>(&b, 0), chunk::<12>(&b, 1));

        let mut b01 = [0; 36];
        b01[0..24].copy_from_slice(&b[0..24]);
        assert_eq!(mul01_fp6_bls12_377(&a, c0, c1), mul_fp6_bls12_377(&a, &b01));

        let mut b1 = [0; 36];
        b1[12..24].copy_from_slice(c1);
        assert_eq!(mul1_fp6_bls12_377(&a, c1), mul_fp6_bls12_377(&a, &b1));
    }

    #[test]
    fn test_add_sub_neg() {
        let a = fp6(1);
        let b = fp6(2);
        assert_eq!(sub_fp6_bls12_377(&add_fp6_bls12_377(&a, &b), &b), a);
        assert!(is_zero_fp6_bls12_377(&add_fp6_bls12_377(&a, &neg_fp6_bls12_377(&a))));
        assert!(!is_zero_fp6_bls12_377(&a));
        assert_eq!(dbl_fp6_bls12_377(&a), add_fp6_bls12_377(&a, &a));
    }
}
