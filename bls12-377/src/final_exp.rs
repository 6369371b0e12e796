//! Final exponentiation for BLS12-377

use crate::{
    cyclotomic::{cyclotomic_square_bls12_377, exp_by_z_cyclo_bls12_377},
    error::PairingError,
    fp12::{
        conjugate_fp12_bls12_377, frobenius1_fp12_bls12_377, frobenius2_fp12_bls12_377,
        frobenius3_fp12_bls12_377, frobenius6_fp12_bls12_377, inv_fp12_bls12_377,
        mul_fp12_bls12_377,
    },
};

/// Given f ∈ Fp12*, computes f^((p¹²-1)/r) ∈ GT
///
/// Fails with [`PairingError::InversionOfZero`] when f = 0.
pub fn final_exp_bls12_377(f: &[u64; 72]) -> Result<[u64; 72], PairingError> {
    //////////////////
    // The easy part: exp by (p^6-1)(p^2+1)
    //////////////////

    // f^(p^6-1) = f^(p^6)·f⁻¹
    let t0 = frobenius6_fp12_bls12_377(f);
    let t1 = inv_fp12_bls12_377(f)?;
    let t2 = mul_fp12_bls12_377(&t0, &t1);

    // t2^(p²+1) = t2^(p²)·t2
    let t1 = t2;
    let t2 = mul_fp12_bls12_377(&frobenius2_fp12_bls12_377(&t2), &t1);

    //////////////////
    // The hard part: exp by (p⁴-p²+1)/r
    //////////////////

    let t1 = conjugate_fp12_bls12_377(&cyclotomic_square_bls12_377(&t2));
    let t3 = exp_by_z_cyclo_bls12_377(&t2);
    let t4 = cyclotomic_square_bls12_377(&t3);
    let t5 = mul_fp12_bls12_377(&t1, &t3);

    let t1 = exp_by_z_cyclo_bls12_377(&t5);
    let t0 = exp_by_z_cyclo_bls12_377(&t1);
    let mut t6 = exp_by_z_cyclo_bls12_377(&t0);

    t6 = mul_fp12_bls12_377(&t6, &t4);
    let mut t4 = exp_by_z_cyclo_bls12_377(&t6);
    let t5 = conjugate_fp12_bls12_377(&t5);

    t4 = mul_fp12_bls12_377(&mul_fp12_bls12_377(&t4, &t5), &t2);
    let t5 = conjugate_fp12_bls12_377(&t2);
    let mut t1 = mul_fp12_bls12_377(&t1, &t2);

    t1 = frobenius3_fp12_bls12_377(&t1);
    t6 = mul_fp12_bls12_377(&t6, &t5);
    t6 = frobenius1_fp12_bls12_377(&t6);

    let mut t3 = mul_fp12_bls12_377(&t3, &t0);
    t3 = frobenius2_fp12_bls12_377(&t3);
    t3 = mul_fp12_bls12_377(&t3, &t1);
    t3 = mul_fp12_bls12_377(&t3, &t6);

    Ok(mul_fp12_bls12_377(&t3, &t4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FP12_ONE;
    use crate::fp12::is_one_fp12_bls12_377;
    use ark_bls12_377::Fq;
    use ark_ff::UniformRand;
    use ark_std::test_rng;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(final_exp_bls12_377(&[0; 72]), Err(PairingError::InversionOfZero));
    }

    #[test]
    fn test_one_maps_to_one() {
        assert!(is_one_fp12_bls12_377(&final_exp_bls12_377(&FP12_ONE).unwrap()));
    }

    #[test]
    fn test_output_is_cyclotomic() {
        let mut rng = test_rng();
        let mut f = [0; 72];
        for i in 0..12 {
            f[i * 6..(i + 1) * 6].copy_from_slice(&Fq::rand(&mut rng).0 .0);
        }
        let x = final_exp_bls12_377(&f).unwrap();
        assert_eq!(frobenius6_fp12_bls12_377(&x), conjugate_fp12_bls12_377(&x));
        assert_eq!(mul_fp12_bls12_377(&x, &conjugate_fp12_bls12_377(&x)), FP12_ONE);
    }
}
