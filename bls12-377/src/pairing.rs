//! Pairing over BLS12-377 curve

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    constants::{FP12_ONE, G1_BYTES, G2_BYTES, GT_BYTES},
    curve::{check_g1_bls12_377, in_group_g1_bls12_377, to_affine_g1_bls12_377},
    error::PairingError,
    final_exp::final_exp_bls12_377,
    miller_loop::{miller_loop_batch_bls12_377, miller_loop_bls12_377},
    prepare::{prepare_g1_bls12_377, prepare_g2_bls12_377},
    twist::{check_g2_bls12_377, in_group_g2_bls12_377, to_affine_g2_bls12_377},
    utils::{bytes_le_to_u64_le, check_canonical, eq, u64_le_to_bytes_le},
};

/// Optimal Ate Pairing e: G1 x G2 -> GT over the BLS12-377 curve
/// where G1 = E(Fp)[r], G2 = E'(Fp2)[r] and GT = μ_r (the r-th roots of unity over Fp12*)
/// the involved curves are E/Fp: y² = x³ + 1 and E'/Fp2: y² = x³ + τ
///  pairingBLS12-377:
///          input: P ∈ G1 and Q ∈ G2, in Jacobian coordinates
///          output: e(P,Q) ∈ GT
pub fn pairing_bls12_377(p: &[u64; 18], q: &[u64; 36]) -> Result<[u64; 72], PairingError> {
    trace!("pairing_bls12_377");

    let pre_p = prepare_g1_bls12_377(p);
    let pre_q = prepare_g2_bls12_377(q);

    // e(P, 𝒪) = e(𝒪, Q) = 1
    if pre_p.is_zero() || pre_q.is_zero() {
        trace!("pairing_bls12_377: identity input");
        return Ok(FP12_ONE);
    }

    let f = miller_loop_bls12_377(&pre_p, &pre_q);
    final_exp_bls12_377(&f)
}

/// Checks whether e(P₁, Q₁) · e(P₂, Q₂) · ... · e(Pₙ, Qₙ) == target
///
/// Returns false if any point is not in its prime order subgroup.
pub fn pairing_eq_bls12_377(pairs: &[([u64; 18], [u64; 36])], target: &[u64; 72]) -> bool {
    // Since each e(Pi, Qi) := FinalExp(MillerLoop(Pi, Qi)), the product equals
    // FinalExp(MillerLoop(P₁, Q₁) · ... · MillerLoop(Pₙ, Qₙ)), so the final exponentiation
    // is applied once to the accumulated Miller loops
    trace!("pairing_eq_bls12_377: {} pairs", pairs.len());

    let mut prepared = Vec::with_capacity(pairs.len());
    for (i, (p, q)) in pairs.iter().enumerate() {
        if !in_group_g1_bls12_377(p) {
            debug!("pairing_eq_bls12_377: G1 point {i} rejected");
            return false;
        }
        if !in_group_g2_bls12_377(q) {
            debug!("pairing_eq_bls12_377: G2 point {i} rejected");
            return false;
        }

        prepared.push((prepare_g1_bls12_377(p), prepare_g2_bls12_377(q)));
    }

    let f = miller_loop_batch_bls12_377(&prepared);
    match final_exp_bls12_377(&f) {
        Ok(result) => eq(&result, target),
        Err(err) => {
            debug!("pairing_eq_bls12_377: {err}");
            false
        }
    }
}

macro_rules! define_pairing_eq {
    ($($k:literal => ($($p:ident, $q:ident);+)),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Checks a product of ", stringify!($k), " pairings against a target")]
                #[allow(clippy::too_many_arguments)]
                pub fn [<pairing_eq $k _bls12_377>](
                    $($p: &[u64; 18], $q: &[u64; 36],)+
                    target: &[u64; 72],
                ) -> bool {
                    pairing_eq_bls12_377(&[$((*$p, *$q)),+], target)
                }
            )+
        }
    };
}

define_pairing_eq!(
    1 => (p1, q1),
    2 => (p1, q1; p2, q2),
    3 => (p1, q1; p2, q2; p3, q3),
    4 => (p1, q1; p2, q2; p3, q3; p4, q4),
    5 => (p1, q1; p2, q2; p3, q3; p4, q4; p5, q5),
);

/// A pairing product equation Π e(Pᵢ, Qᵢ) == target
#[derive(Debug, Clone)]
pub struct PairingEquation {
    pub pairs: Vec<([u64; 18], [u64; 36])>,
    pub target: [u64; 72],
}

/// Checks many independent pairing equations, in parallel when the `parallel` feature is on
pub fn batch_pairing_eq_bls12_377(equations: &[PairingEquation]) -> Vec<bool> {
    trace!("batch_pairing_eq_bls12_377: {} equations", equations.len());

    #[cfg(feature = "parallel")]
    let iter = equations.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = equations.iter();

    iter.map(|equation| pairing_eq_bls12_377(&equation.pairs, &equation.target)).collect()
}

fn decode_g1(bytes: &[u8]) -> Result<[u64; 18], PairingError> {
    let p: [u64; 18] = bytes_le_to_u64_le(bytes)?;
    check_canonical(&p)?;
    check_g1_bls12_377(&to_affine_g1_bls12_377(&p))?;
    Ok(p)
}

fn decode_g2(bytes: &[u8]) -> Result<[u64; 36], PairingError> {
    let q: [u64; 36] = bytes_le_to_u64_le(bytes)?;
    check_canonical(&q)?;
    check_g2_bls12_377(&to_affine_g2_bls12_377(&q))?;
    Ok(q)
}

/// Byte-level pairing: P and Q are little-endian Montgomery Jacobian points of `G1_BYTES` and
/// `G2_BYTES` bytes, the result is `GT_BYTES` bytes
pub fn pairing_bytes_bls12_377(p: &[u8], q: &[u8]) -> Result<Vec<u8>, PairingError> {
    if p.len() != G1_BYTES {
        return Err(PairingError::InvalidLength { expected: G1_BYTES, got: p.len() });
    }
    if q.len() != G2_BYTES {
        return Err(PairingError::InvalidLength { expected: G2_BYTES, got: q.len() });
    }

    let result = pairing_bls12_377(&decode_g1(p)?, &decode_g2(q)?)?;

    let mut bytes = vec![0u8; GT_BYTES];
    u64_le_to_bytes_le(&result, &mut bytes);
    Ok(bytes)
}

/// Byte-level pairing equation check over concatenated (P, Q) pairs
///
/// Malformed encodings are reported as errors, valid encodings of invalid points yield `false`.
pub fn pairing_eq_bytes_bls12_377(pairs: &[u8], target: &[u8]) -> Result<bool, PairingError> {
    const PAIR_BYTES: usize = G1_BYTES + G2_BYTES;
    if pairs.len() % PAIR_BYTES != 0 {
        return Err(PairingError::InvalidLength {
            expected: pairs.len().next_multiple_of(PAIR_BYTES),
            got: pairs.len(),
        });
    }
    let target: [u64; 72] = bytes_le_to_u64_le(target)?;
    check_canonical(&target)?;

    let mut decoded = Vec::with_capacity(pairs.len() / PAIR_BYTES);
    for pair in pairs.chunks_exact(PAIR_BYTES) {
        let p: [u64; 18] = bytes_le_to_u64_le(&pair[..G1_BYTES])?;
        let q: [u64; 36] = bytes_le_to_u64_le(&pair[G1_BYTES..])?;
        check_canonical(&p)?;
        check_canonical(&q)?;
        decoded.push((p, q));
    }

    Ok(pairing_eq_bls12_377(&decoded, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FP_ONE, G1_GENERATOR, G1_IDENTITY, G2_GENERATOR, G2_IDENTITY};
    use crate::curve::neg_g1_bls12_377;
    use crate::fp12::is_one_fp12_bls12_377;
    use crate::twist::{from_affine_g2_bls12_377, tests::non_subgroup_point};

    #[test]
    fn test_pairing_identity() {
        assert_eq!(pairing_bls12_377(&G1_IDENTITY, &G2_GENERATOR).unwrap(), FP12_ONE);
        assert_eq!(pairing_bls12_377(&G1_GENERATOR, &G2_IDENTITY).unwrap(), FP12_ONE);
    }

    #[test]
    fn test_pairing_eq_cancellation() {
        // e(P, Q)·e(-P, Q) = 1
        let minus_p = neg_g1_bls12_377(&G1_GENERATOR);
        assert!(pairing_eq2_bls12_377(
            &G1_GENERATOR,
            &G2_GENERATOR,
            &minus_p,
            &G2_GENERATOR,
            &FP12_ONE
        ));
        assert!(!pairing_eq1_bls12_377(&G1_GENERATOR, &G2_GENERATOR, &FP12_ONE));
    }

    #[test]
    fn test_pairing_eq_rejects_non_subgroup_points() {
        // (0, 1) has order 3 on E
        let mut p = [0; 18];
        p[6..12].copy_from_slice(&FP_ONE);
        p[12..18].copy_from_slice(&FP_ONE);
        assert!(!pairing_eq_bls12_377(&[(p, G2_GENERATOR)], &FP12_ONE));

        let q = from_affine_g2_bls12_377(&non_subgroup_point());
        assert!(!pairing_eq_bls12_377(&[(G1_GENERATOR, q)], &FP12_ONE));
        assert!(!pairing_eq_bls12_377(&[(G1_IDENTITY, q)], &FP12_ONE));

        let mut q_bytes = [0u8; G2_BYTES];
        u64_le_to_bytes_le(&q, &mut q_bytes);
        let mut p_bytes = [0u8; G1_BYTES];
        u64_le_to_bytes_le(&G1_GENERATOR, &mut p_bytes);
        assert_eq!(
            pairing_bytes_bls12_377(&p_bytes, &q_bytes),
            Err(PairingError::PointNotInSubgroup)
        );
    }

    #[test]
    fn test_pairing_eq_empty() {
        assert!(pairing_eq_bls12_377(&[], &FP12_ONE));
    }

    #[test]
    fn test_batch() {
        let e = pairing_bls12_377(&G1_GENERATOR, &G2_GENERATOR).unwrap();
        assert!(!is_one_fp12_bls12_377(&e));
        let equations = vec![
            PairingEquation { pairs: vec![(G1_GENERATOR, G2_GENERATOR)], target: e },
            PairingEquation { pairs: vec![(G1_GENERATOR, G2_GENERATOR)], target: FP12_ONE },
            PairingEquation { pairs: vec![(G1_IDENTITY, G2_GENERATOR)], target: FP12_ONE },
        ];
        assert_eq!(batch_pairing_eq_bls12_377(&equations), vec![true, false, true]);
    }

    #[test]
    fn test_bytes_entry_points() {
        let mut p = [0u8; G1_BYTES];
        let mut q = [0u8; G2_BYTES];
        u64_le_to_bytes_le(&G1_GENERATOR, &mut p);
        u64_le_to_bytes_le(&G2_GENERATOR, &mut q);

        let e = pairing_bytes_bls12_377(&p, &q).unwrap();
        let expected = pairing_bls12_377(&G1_GENERATOR, &G2_GENERATOR).unwrap();
        let mut expected_bytes = vec![0u8; GT_BYTES];
        u64_le_to_bytes_le(&expected, &mut expected_bytes);
        assert_eq!(e, expected_bytes);

        let pairs = [p.as_slice(), q.as_slice()].concat();
        assert_eq!(pairing_eq_bytes_bls12_377(&pairs, &e), Ok(true));

        assert_eq!(
            pairing_bytes_bls12_377(&p[1..], &q),
            Err(PairingError::InvalidLength { expected: G1_BYTES, got: G1_BYTES - 1 })
        );
        assert!(matches!(
            pairing_eq_bytes_bls12_377(&pairs[1..], &e),
            Err(PairingError::InvalidLength { .. })
        ));
    }
}
