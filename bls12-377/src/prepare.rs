//! Pairing precomputation for BLS12-377
//!
//! `prepare_g2` walks the Ate loop once and records the three Fp2 coefficients of every line
//! function, so the Miller loop only needs sparse multiplications.

use crate::{
    constants::{
        ATE_COEF_SIZE, ATE_LOOP_BITS, ATE_N_COEFS, ATE_N_USED_COEFS, FP2_ONE, FP_BYTES, FP_ONE,
        G1_IDENTITY, G2_IDENTITY, PRE_P_SIZE, PRE_Q_SIZE,
    },
    curve::{in_curve_affine_g1_bls12_377, is_zero_g1_bls12_377, normalize_g1_bls12_377},
    error::PairingError,
    fp2::{
        add_fp2_bls12_377, dbl_fp2_bls12_377, mul_fp2_bls12_377, neg_fp2_bls12_377,
        square_fp2_bls12_377, sub_fp2_bls12_377,
    },
    twist::{in_curve_affine_g2_bls12_377, is_zero_g2_bls12_377, normalize_g2_bls12_377},
    utils::{bytes_le_to_u64_le, check_canonical, chunk, u64_le_to_bytes_le},
};

/// Line function coefficients (c0, c1, c2) ∈ Fp2³
pub type LineCoeffs = [u64; 36];

/// Prepared G1 input: the point normalized to (x : y : 1), or the identity (0 : 1 : 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G1Prepared {
    pub(crate) point: [u64; 18],
}

/// Prepared G2 input: the normalized point and the coefficients of every line of the Ate loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2Prepared {
    pub(crate) point: [u64; 36],
    pub(crate) coeffs: Vec<LineCoeffs>,
}

impl G1Prepared {
    /// The normalized Jacobian point
    pub fn point(&self) -> &[u64; 18] {
        &self.point
    }

    /// Whether the prepared point is the identity
    pub fn is_zero(&self) -> bool {
        is_zero_g1_bls12_377(&self.point)
    }

    /// x and y in Fp
    pub(crate) fn xy(&self) -> (&[u64; 6], &[u64; 6]) {
        (chunk(&self.point, 0), chunk(&self.point, 1))
    }

    /// Serializes into a `PRE_P_SIZE` buffer: (x, y, z) little-endian, zero padded
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; PRE_P_SIZE];
        u64_le_to_bytes_le(&self.point, &mut bytes[0..3 * FP_BYTES]);
        bytes
    }

    /// Parses a `PRE_P_SIZE` buffer produced by [`G1Prepared::to_bytes`]
    ///
    /// The point must be (0 : 1 : 0) or satisfy Z = 1 and lie on the curve, and the padding
    /// must be zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        if bytes.len() != PRE_P_SIZE {
            return Err(PairingError::InvalidLength { expected: PRE_P_SIZE, got: bytes.len() });
        }
        if bytes[3 * FP_BYTES..].iter().any(|&b| b != 0) {
            return Err(PairingError::NonZeroPadding);
        }
        let point: [u64; 18] = bytes_le_to_u64_le(&bytes[0..3 * FP_BYTES])?;
        check_canonical(&point)?;
        if is_zero_g1_bls12_377(&point) {
            if point != G1_IDENTITY {
                return Err(PairingError::PointNotNormalized);
            }
            return Ok(Self { point });
        }
        if chunk::<6>(&point, 2) != &FP_ONE {
            return Err(PairingError::PointNotNormalized);
        }
        if !in_curve_affine_g1_bls12_377(chunk(&point, 0)) {
            return Err(PairingError::PointNotOnCurve);
        }
        Ok(Self { point })
    }
}

impl G2Prepared {
    /// The normalized Jacobian point
    pub fn point(&self) -> &[u64; 36] {
        &self.point
    }

    /// Line coefficients in the order the Miller loop consumes them
    pub fn coeffs(&self) -> &[LineCoeffs] {
        &self.coeffs
    }

    /// Whether the prepared point is the identity
    pub fn is_zero(&self) -> bool {
        is_zero_g2_bls12_377(&self.point)
    }

    /// Serializes into a `PRE_Q_SIZE` buffer: (x, y, z) little-endian followed by
    /// `ATE_N_COEFS` coefficient slots, the unused ones left zero
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; PRE_Q_SIZE];
        u64_le_to_bytes_le(&self.point, &mut bytes[0..ATE_COEF_SIZE]);
        let slots = bytes[ATE_COEF_SIZE..].chunks_exact_mut(ATE_COEF_SIZE);
        for (coeffs, out) in self.coeffs.iter().zip(slots) {
            u64_le_to_bytes_le(coeffs, out);
        }
        bytes
    }

    /// Parses a `PRE_Q_SIZE` buffer produced by [`G2Prepared::to_bytes`]
    ///
    /// The point must be (0 : 1 : 0) or satisfy Z = 1 and lie on the twist, and the
    /// coefficient region must be exactly the table `prepare_g2` builds for that point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        if bytes.len() != PRE_Q_SIZE {
            return Err(PairingError::InvalidLength { expected: PRE_Q_SIZE, got: bytes.len() });
        }
        let point: [u64; 36] = bytes_le_to_u64_le(&bytes[0..ATE_COEF_SIZE])?;
        check_canonical(&point)?;
        for slot in bytes[ATE_COEF_SIZE..].chunks_exact(ATE_COEF_SIZE) {
            let c: LineCoeffs = bytes_le_to_u64_le(slot)?;
            check_canonical(&c)?;
        }

        let prepared = if is_zero_g2_bls12_377(&point) {
            if point != G2_IDENTITY {
                return Err(PairingError::PointNotNormalized);
            }
            Self { point, coeffs: Vec::new() }
        } else {
            if chunk::<12>(&point, 2) != &FP2_ONE {
                return Err(PairingError::PointNotNormalized);
            }
            if !in_curve_affine_g2_bls12_377(chunk(&point, 0)) {
                return Err(PairingError::PointNotOnCurve);
            }
            prepare_g2_bls12_377(&point)
        };

        if prepared.to_bytes()[ATE_COEF_SIZE..] != bytes[ATE_COEF_SIZE..] {
            return Err(PairingError::InconsistentLineCoefficients);
        }
        Ok(prepared)
    }
}

/// Prepares a G1 point for the Miller loop
pub fn prepare_g1_bls12_377(p: &[u64; 18]) -> G1Prepared {
    G1Prepared { point: normalize_g1_bls12_377(p) }
}

/// Prepares a G2 point for the Miller loop
pub fn prepare_g2_bls12_377(q: &[u64; 36]) -> G2Prepared {
    let q = normalize_g2_bls12_377(q);
    if is_zero_g2_bls12_377(&q) {
        return G2Prepared { point: G2_IDENTITY, coeffs: Vec::new() };
    }

    let q_affine: [u64; 24] = q[0..24].try_into().unwrap();
    let mut r = q;
    let mut coeffs = Vec::with_capacity(ATE_N_COEFS);
    for i in (0..ATE_LOOP_BITS.len() - 1).rev() {
        coeffs.push(dbl_step_bls12_377(&mut r));
        if ATE_LOOP_BITS[i] == 1 {
            coeffs.push(add_step_bls12_377(&mut r, &q_affine));
        }
    }
    debug_assert_eq!(coeffs.len(), ATE_N_USED_COEFS);

    G2Prepared { point: q, coeffs }
}

#[inline]
fn join(c0: &[u64; 12], c1: &[u64; 12], c2: &[u64; 12]) -> LineCoeffs {
    let mut result = [0; 36];
    result[0..12].copy_from_slice(c0);
    result[12..24].copy_from_slice(c1);
    result[24..36].copy_from_slice(c2);
    result
}

/// Doubling step: R ← 2R in Jacobian coordinates, returning the tangent line coefficients
//  Adapted from Algorithm 26 in https://eprint.iacr.org/2010/354.pdf
fn dbl_step_bls12_377(r: &mut [u64; 36]) -> LineCoeffs {
    let (rx, ry, rz) = (*chunk::<12>(r, 0), *chunk::<12>(r, 1), *chunk::<12>(r, 2));

    let tmp0 = square_fp2_bls12_377(&rx);
    let tmp1 = square_fp2_bls12_377(&ry);
    let mut tmp2 = square_fp2_bls12_377(&tmp1);

    // tmp3 = 2·((tmp1 + X)² - tmp0 - tmp2)
    let mut tmp3 = square_fp2_bls12_377(&add_fp2_bls12_377(&tmp1, &rx));
    tmp3 = dbl_fp2_bls12_377(&sub_fp2_bls12_377(&sub_fp2_bls12_377(&tmp3, &tmp0), &tmp2));

    let tmp4 = add_fp2_bls12_377(&dbl_fp2_bls12_377(&tmp0), &tmp0);
    let mut tmp6 = add_fp2_bls12_377(&rx, &tmp4);
    let tmp5 = square_fp2_bls12_377(&tmp4);
    let zsquared = square_fp2_bls12_377(&rz);

    let new_x = sub_fp2_bls12_377(&sub_fp2_bls12_377(&tmp5, &tmp3), &tmp3);
    let mut new_z = square_fp2_bls12_377(&add_fp2_bls12_377(&rz, &ry));
    new_z = sub_fp2_bls12_377(&sub_fp2_bls12_377(&new_z, &tmp1), &zsquared);
    let mut new_y = mul_fp2_bls12_377(&sub_fp2_bls12_377(&tmp3, &new_x), &tmp4);
    tmp2 = dbl_fp2_bls12_377(&dbl_fp2_bls12_377(&dbl_fp2_bls12_377(&tmp2)));
    new_y = sub_fp2_bls12_377(&new_y, &tmp2);

    // tmp3 = -2·tmp4·Z²
    tmp3 = neg_fp2_bls12_377(&dbl_fp2_bls12_377(&mul_fp2_bls12_377(&tmp4, &zsquared)));

    // tmp6 = (X + tmp4)² - tmp0 - tmp5 - 4·tmp1
    tmp6 = square_fp2_bls12_377(&tmp6);
    tmp6 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&tmp6, &tmp0), &tmp5);
    tmp6 = sub_fp2_bls12_377(&tmp6, &dbl_fp2_bls12_377(&dbl_fp2_bls12_377(&tmp1)));

    // tmp0 = 2·Z'·Z²
    let tmp0 = dbl_fp2_bls12_377(&mul_fp2_bls12_377(&new_z, &zsquared));

    r[0..12].copy_from_slice(&new_x);
    r[12..24].copy_from_slice(&new_y);
    r[24..36].copy_from_slice(&new_z);

    join(&tmp0, &tmp3, &tmp6)
}

/// Mixed addition step: R ← R + Q with Q affine, returning the chord line coefficients
//  Adapted from Algorithm 27 in https://eprint.iacr.org/2010/354.pdf
fn add_step_bls12_377(r: &mut [u64; 36], q: &[u64; 24]) -> LineCoeffs {
    let (rx, ry, rz) = (*chunk::<12>(r, 0), *chunk::<12>(r, 1), *chunk::<12>(r, 2));
    let (qx, qy) = (chunk::<12>(q, 0), chunk::<12>(q, 1));

    let zsquared = square_fp2_bls12_377(&rz);
    let ysquared = square_fp2_bls12_377(qy);

    let t0 = mul_fp2_bls12_377(&zsquared, qx);

    // t1 = ((Qy + Z)² - Qy² - Z²)·Z²
    let mut t1 = square_fp2_bls12_377(&add_fp2_bls12_377(qy, &rz));
    t1 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&t1, &ysquared), &zsquared);
    t1 = mul_fp2_bls12_377(&t1, &zsquared);

    let t2 = sub_fp2_bls12_377(&t0, &rx);
    let t3 = square_fp2_bls12_377(&t2);
    let t4 = dbl_fp2_bls12_377(&dbl_fp2_bls12_377(&t3));
    let t5 = mul_fp2_bls12_377(&t4, &t2);
    let mut t6 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&t1, &ry), &ry);
    let mut t9 = mul_fp2_bls12_377(&t6, qx);
    let t7 = mul_fp2_bls12_377(&t4, &rx);

    let mut new_x = sub_fp2_bls12_377(&square_fp2_bls12_377(&t6), &t5);
    new_x = sub_fp2_bls12_377(&sub_fp2_bls12_377(&new_x, &t7), &t7);
    let mut new_z = square_fp2_bls12_377(&add_fp2_bls12_377(&rz, &t2));
    new_z = sub_fp2_bls12_377(&sub_fp2_bls12_377(&new_z, &zsquared), &t3);

    let mut t10 = add_fp2_bls12_377(qy, &new_z);
    let t8 = mul_fp2_bls12_377(&sub_fp2_bls12_377(&t7, &new_x), &t6);
    let t0 = dbl_fp2_bls12_377(&mul_fp2_bls12_377(&ry, &t5));
    let new_y = sub_fp2_bls12_377(&t8, &t0);

    // t10 = (Qy + Z')² - Qy² - Z'²
    t10 = sub_fp2_bls12_377(&square_fp2_bls12_377(&t10), &ysquared);
    t10 = sub_fp2_bls12_377(&t10, &square_fp2_bls12_377(&new_z));

    t9 = sub_fp2_bls12_377(&dbl_fp2_bls12_377(&t9), &t10);
    let t10 = dbl_fp2_bls12_377(&new_z);
    t6 = neg_fp2_bls12_377(&t6);
    let t1 = dbl_fp2_bls12_377(&t6);

    r[0..12].copy_from_slice(&new_x);
    r[12..24].copy_from_slice(&new_y);
    r[24..36].copy_from_slice(&new_z);

    join(&t10, &t1, &t9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ATE_N_ADD_COEFS, ATE_N_DBL_COEFS, G1_GENERATOR, G2_GENERATOR};
    use crate::curve::dbl_g1_bls12_377;
    use crate::fp::add_fp_bls12_377;
    use crate::twist::{add_g2_bls12_377, dbl_g2_bls12_377, to_affine_g2_bls12_377};

    #[test]
    fn test_coefficient_counts() {
        assert_eq!(ATE_N_DBL_COEFS, 63);
        assert_eq!(ATE_N_ADD_COEFS, 7);
        assert_eq!(ATE_N_COEFS, 71);
        assert_eq!(ATE_N_USED_COEFS, 69);
        assert_eq!(PRE_Q_SIZE, 288 + 71 * 288);

        let prepared = prepare_g2_bls12_377(&G2_GENERATOR);
        assert_eq!(prepared.coeffs.len(), ATE_N_USED_COEFS);
        assert!(prepared.coeffs.len() <= ATE_N_COEFS);
    }

    #[test]
    fn test_steps_track_the_point() {
        let q = normalize_g2_bls12_377(&G2_GENERATOR);
        let q_affine: [u64; 24] = q[0..24].try_into().unwrap();

        let mut r = q;
        dbl_step_bls12_377(&mut r);
        assert_eq!(to_affine_g2_bls12_377(&r), to_affine_g2_bls12_377(&dbl_g2_bls12_377(&q)));

        let two_q = r;
        add_step_bls12_377(&mut r, &q_affine);
        assert_eq!(
            to_affine_g2_bls12_377(&r),
            to_affine_g2_bls12_377(&add_g2_bls12_377(&two_q, &q))
        );
    }

    #[test]
    fn test_identity() {
        let prepared = prepare_g2_bls12_377(&G2_IDENTITY);
        assert!(prepared.is_zero());
        assert!(prepared.coeffs.is_empty());
        assert!(prepare_g1_bls12_377(&G1_IDENTITY).is_zero());
    }

    #[test]
    fn test_prepared_bytes() {
        let p = prepare_g1_bls12_377(&G1_GENERATOR);
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), PRE_P_SIZE);
        assert_eq!(G1Prepared::from_bytes(&bytes).unwrap(), p);

        let q = prepare_g2_bls12_377(&G2_GENERATOR);
        let bytes = q.to_bytes();
        assert_eq!(bytes.len(), PRE_Q_SIZE);
        assert!(bytes[ATE_COEF_SIZE * (1 + ATE_N_USED_COEFS)..].iter().all(|&b| b == 0));
        assert_eq!(G2Prepared::from_bytes(&bytes).unwrap(), q);

        let id = prepare_g2_bls12_377(&G2_IDENTITY);
        assert_eq!(G2Prepared::from_bytes(&id.to_bytes()).unwrap(), id);
    }

    #[test]
    fn test_g1_prepared_bytes_rejected() {
        assert_eq!(
            G1Prepared::from_bytes(&[0u8; 10]),
            Err(PairingError::InvalidLength { expected: PRE_P_SIZE, got: 10 })
        );

        let valid = prepare_g1_bls12_377(&G1_GENERATOR).to_bytes();

        let mut bytes = valid.clone();
        bytes[0..FP_BYTES].fill(0xFF);
        assert_eq!(G1Prepared::from_bytes(&bytes), Err(PairingError::NonCanonicalField));

        let mut bytes = valid.clone();
        bytes[PRE_P_SIZE - 1] = 1;
        assert_eq!(G1Prepared::from_bytes(&bytes), Err(PairingError::NonZeroPadding));

        // 2·G1 straight out of the doubling keeps Z ≠ 1
        let unnormalized = G1Prepared { point: dbl_g1_bls12_377(&G1_GENERATOR) };
        assert_eq!(
            G1Prepared::from_bytes(&unnormalized.to_bytes()),
            Err(PairingError::PointNotNormalized)
        );

        // (0 : 0 : 0) is not the canonical identity
        let zero = G1Prepared { point: [0; 18] };
        assert_eq!(G1Prepared::from_bytes(&zero.to_bytes()), Err(PairingError::PointNotNormalized));

        let mut off_curve = prepare_g1_bls12_377(&G1_GENERATOR);
        let y = add_fp_bls12_377(chunk(&off_curve.point, 1), &FP_ONE);
        off_curve.point[6..12].copy_from_slice(&y);
        assert_eq!(
            G1Prepared::from_bytes(&off_curve.to_bytes()),
            Err(PairingError::PointNotOnCurve)
        );
    }

    #[test]
    fn test_g2_prepared_bytes_rejected() {
        assert_eq!(
            G2Prepared::from_bytes(&[0u8; PRE_Q_SIZE - 1]),
            Err(PairingError::InvalidLength { expected: PRE_Q_SIZE, got: PRE_Q_SIZE - 1 })
        );

        let q = prepare_g2_bls12_377(&G2_GENERATOR);
        let valid = q.to_bytes();

        let mut bytes = valid.clone();
        bytes[ATE_COEF_SIZE..ATE_COEF_SIZE + FP_BYTES].fill(0xFF);
        assert_eq!(G2Prepared::from_bytes(&bytes), Err(PairingError::NonCanonicalField));

        let unnormalized =
            G2Prepared { point: dbl_g2_bls12_377(&G2_GENERATOR), coeffs: q.coeffs.clone() };
        assert_eq!(
            G2Prepared::from_bytes(&unnormalized.to_bytes()),
            Err(PairingError::PointNotNormalized)
        );

        let mut off_curve = q.clone();
        let y = add_fp2_bls12_377(chunk(&off_curve.point, 1), &FP2_ONE);
        off_curve.point[12..24].copy_from_slice(&y);
        assert_eq!(
            G2Prepared::from_bytes(&off_curve.to_bytes()),
            Err(PairingError::PointNotOnCurve)
        );
    }

    #[test]
    fn test_g2_prepared_coefficients_must_match_the_point() {
        let q = prepare_g2_bls12_377(&G2_GENERATOR);

        // Valid point, zeroed table
        let mut bytes = q.to_bytes();
        bytes[ATE_COEF_SIZE..].fill(0);
        assert_eq!(
            G2Prepared::from_bytes(&bytes),
            Err(PairingError::InconsistentLineCoefficients)
        );

        // Valid point, table of a different point
        let two_q = prepare_g2_bls12_377(&dbl_g2_bls12_377(&G2_GENERATOR));
        let swapped = G2Prepared { point: q.point, coeffs: two_q.coeffs.clone() };
        assert_eq!(
            G2Prepared::from_bytes(&swapped.to_bytes()),
            Err(PairingError::InconsistentLineCoefficients)
        );

        // One line replaced by another
        let mut tampered = q.clone();
        tampered.coeffs[ATE_N_USED_COEFS - 1] = tampered.coeffs[0];
        assert_eq!(
            G2Prepared::from_bytes(&tampered.to_bytes()),
            Err(PairingError::InconsistentLineCoefficients)
        );

        // Unused trailing slots must stay zero
        let mut bytes = q.to_bytes();
        bytes[PRE_Q_SIZE - ATE_COEF_SIZE] = 1;
        assert_eq!(
            G2Prepared::from_bytes(&bytes),
            Err(PairingError::InconsistentLineCoefficients)
        );

        // The identity carries no lines
        let mut bytes = prepare_g2_bls12_377(&G2_IDENTITY).to_bytes();
        bytes[ATE_COEF_SIZE..ATE_COEF_SIZE + FP_BYTES].copy_from_slice(&valid_fp_bytes());
        assert_eq!(
            G2Prepared::from_bytes(&bytes),
            Err(PairingError::InconsistentLineCoefficients)
        );
    }

    #[test]
    fn test_prepared_accessors() {
        let q = prepare_g2_bls12_377(&G2_GENERATOR);
        assert_eq!(q.point(), &normalize_g2_bls12_377(&G2_GENERATOR));
        assert_eq!(q.coeffs().len(), ATE_N_USED_COEFS);
        let p = prepare_g1_bls12_377(&G1_GENERATOR);
        assert_eq!(p.point(), &normalize_g1_bls12_377(&G1_GENERATOR));
    }

    fn valid_fp_bytes() -> [u8; FP_BYTES] {
        let mut bytes = [0u8; FP_BYTES];
        u64_le_to_bytes_le(&FP_ONE, &mut bytes);
        bytes
    }
}
