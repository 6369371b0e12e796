//! Miller loop for BLS12-377

use crate::{
    constants::{ATE_LOOP_BITS, ATE_LOOP_IS_NEGATIVE, FP12_ONE},
    fp12::{
        conjugate_fp12_bls12_377, mul014_fp12_bls12_377, mul_fp12_bls12_377, square_fp12_bls12_377,
    },
    fp2::scalar_mul_fp2_bls12_377,
    prepare::{G1Prepared, G2Prepared, LineCoeffs},
    utils::chunk,
};

/// Evaluates a precomputed line at P and multiplies it into f
//  The line (c0, c1, c2) at P = (x, y) is the sparse element c2 + (c1·x)·v + (c0·y)·v·w
#[inline]
pub fn ell_bls12_377(f: &mut [u64; 72], coeffs: &LineCoeffs, p: &G1Prepared) {
    let (px, py) = p.xy();

    let c0 = scalar_mul_fp2_bls12_377(chunk(coeffs, 0), py);
    let c1 = scalar_mul_fp2_bls12_377(chunk(coeffs, 1), px);

    *f = mul014_fp12_bls12_377(f, chunk(coeffs, 2), &c1, &c0);
}

/// Computes the Miller loop f_{x,Q}(P) ∈ Fp12 of the optimal Ate pairing
//  The coefficient table is consumed in the same order `prepare_g2` produced it:
//  one doubling line per bit below the top one, plus one addition line per set bit,
//  squaring after every bit but the last.
pub fn miller_loop_bls12_377(p: &G1Prepared, q: &G2Prepared) -> [u64; 72] {
    let mut f = FP12_ONE;

    // e(𝒪, Q) = e(P, 𝒪) = 1
    if p.is_zero() || q.is_zero() {
        return f;
    }

    let mut coeffs = q.coeffs().iter();
    let mut next = || coeffs.next().expect("miller_loop_bls12_377: coefficient table exhausted");

    for i in (1..ATE_LOOP_BITS.len() - 1).rev() {
        ell_bls12_377(&mut f, next(), p);
        if ATE_LOOP_BITS[i] == 1 {
            ell_bls12_377(&mut f, next(), p);
        }
        f = square_fp12_bls12_377(&f);
    }

    // Last bit, no trailing square
    ell_bls12_377(&mut f, next(), p);
    if ATE_LOOP_BITS[0] == 1 {
        ell_bls12_377(&mut f, next(), p);
    }

    assert!(
        coeffs.next().is_none(),
        "miller_loop_bls12_377: coefficient table not fully consumed"
    );

    if ATE_LOOP_IS_NEGATIVE {
        f = conjugate_fp12_bls12_377(&f);
    }
    f
}

/// Computes the product of the Miller loops of several pairs, skipping any pair containing
/// the identity
pub fn miller_loop_batch_bls12_377(pairs: &[(G1Prepared, G2Prepared)]) -> [u64; 72] {
    let mut f = FP12_ONE;
    for (p, q) in pairs {
        if p.is_zero() || q.is_zero() {
            continue;
        }
        f = mul_fp12_bls12_377(&f, &miller_loop_bls12_377(p, q));
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G1_GENERATOR, G1_IDENTITY, G2_GENERATOR, G2_IDENTITY};
    use crate::fp12::is_one_fp12_bls12_377;
    use crate::prepare::{prepare_g1_bls12_377, prepare_g2_bls12_377};

    #[test]
    fn test_identity_short_circuits() {
        let p = prepare_g1_bls12_377(&G1_GENERATOR);
        let q = prepare_g2_bls12_377(&G2_GENERATOR);
        let p0 = prepare_g1_bls12_377(&G1_IDENTITY);
        let q0 = prepare_g2_bls12_377(&G2_IDENTITY);

        assert_eq!(miller_loop_bls12_377(&p0, &q), FP12_ONE);
        assert_eq!(miller_loop_bls12_377(&p, &q0), FP12_ONE);
        assert!(!is_one_fp12_bls12_377(&miller_loop_bls12_377(&p, &q)));
    }

    #[test]
    fn test_batch_is_product() {
        let p = prepare_g1_bls12_377(&G1_GENERATOR);
        let q = prepare_g2_bls12_377(&G2_GENERATOR);
        let p0 = prepare_g1_bls12_377(&G1_IDENTITY);

        let single = miller_loop_bls12_377(&p, &q);
        let batch = miller_loop_batch_bls12_377(&[(p, q.clone()), (p0, q.clone()), (p, q)]);
        assert_eq!(batch, mul_fp12_bls12_377(&single, &single));
    }

    #[test]
    #[should_panic(expected = "coefficient table")]
    fn test_truncated_table_panics() {
        let p = prepare_g1_bls12_377(&G1_GENERATOR);
        let mut q = prepare_g2_bls12_377(&G2_GENERATOR);
        q.coeffs.pop();
        miller_loop_bls12_377(&p, &q);
    }
}
