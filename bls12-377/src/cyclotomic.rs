//! Cyclotomic subgroup operations for BLS12-377
//!
//! Elements of the cyclotomic subgroup GΦ₁₂(p) ⊂ Fp12* admit a cheaper squaring and their inverse
//! is their conjugate. Both shortcuts are only valid after the easy part of the final
//! exponentiation.

use crate::{
    constants::{FINAL_EXP_IS_NEGATIVE, FINAL_EXP_Z_NAF, FP12_ONE},
    fp12::{conjugate_fp12_bls12_377, mul_fp12_bls12_377},
    fp2::{
        add_fp2_bls12_377, dbl_fp2_bls12_377, mul_fp2_bls12_377, mul_nr_fp2_bls12_377,
        sub_fp2_bls12_377,
    },
    utils::chunk,
};

/// Squaring in Fp4 = Fp2[y]/(y² - τ)
//  (a + b·y)² = (a² + τ·b²) + 2·a·b·y
//  with t = a·b: a² + τ·b² = (a + b)·(a + τ·b) - t - τ·t
#[inline]
fn fp4_square(a: &[u64; 12], b: &[u64; 12]) -> ([u64; 12], [u64; 12]) {
    let tmp = mul_fp2_bls12_377(a, b);
    let mut t0 = mul_fp2_bls12_377(
        &add_fp2_bls12_377(a, b),
        &add_fp2_bls12_377(a, &mul_nr_fp2_bls12_377(b)),
    );
    t0 = sub_fp2_bls12_377(&sub_fp2_bls12_377(&t0, &tmp), &mul_nr_fp2_bls12_377(&tmp));
    (t0, dbl_fp2_bls12_377(&tmp))
}

// 3·t - 2·z
#[inline]
fn triple_minus_double(t: &[u64; 12], z: &[u64; 12]) -> [u64; 12] {
    let d = dbl_fp2_bls12_377(&sub_fp2_bls12_377(t, z));
    add_fp2_bls12_377(&d, t)
}

// 3·t + 2·z
#[inline]
fn triple_plus_double(t: &[u64; 12], z: &[u64; 12]) -> [u64; 12] {
    let d = dbl_fp2_bls12_377(&add_fp2_bls12_377(t, z));
    add_fp2_bls12_377(&d, t)
}

/// Squaring in the cyclotomic subgroup (Granger-Scott)
//  The slots are regrouped into three Fp4 elements (z0, z1), (z2, z3), (z4, z5), where
//  z0 = slot 0, z4 = slot 1, z3 = slot 2, z2 = slot 3, z1 = slot 4, z5 = slot 5.
//  With (t0, t1) = (z0 + z1·y)², (t2, t3) = (z2 + z3·y)², (t4, t5) = (z4 + z5·y)²:
//       - z0' = 3·t0 - 2·z0, z1' = 3·t1 + 2·z1
//       - z2' = 3·τ·t5 + 2·z2, z3' = 3·t4 - 2·z3
//       - z4' = 3·t2 - 2·z4, z5' = 3·t3 + 2·z5
pub fn cyclotomic_square_bls12_377(a: &[u64; 72]) -> [u64; 72] {
    let z0 = chunk::<12>(a, 0);
    let z4 = chunk::<12>(a, 1);
    let z3 = chunk::<12>(a, 2);
    let z2 = chunk::<12>(a, 3);
    let z1 = chunk::<12>(a, 4);
    let z5 = chunk::<12>(a, 5);

    let (t0, t1) = fp4_square(z0, z1);
    let (t2, t3) = fp4_square(z2, z3);
    let (t4, t5) = fp4_square(z4, z5);

    let r0 = triple_minus_double(&t0, z0);
    let r1 = triple_plus_double(&t1, z1);
    let r2 = triple_plus_double(&mul_nr_fp2_bls12_377(&t5), z2);
    let r3 = triple_minus_double(&t4, z3);
    let r4 = triple_minus_double(&t2, z4);
    let r5 = triple_plus_double(&t3, z5);

    let mut result = [0; 72];
    result[0..12].copy_from_slice(&r0);
    result[12..24].copy_from_slice(&r4);
    result[24..36].copy_from_slice(&r3);
    result[36..48].copy_from_slice(&r2);
    result[48..60].copy_from_slice(&r1);
    result[60..72].copy_from_slice(&r5);
    result
}

/// Exponentiation by a signed digit expansion in the cyclotomic subgroup, digits given least
/// significant first
pub fn cyclotomic_exp_naf_bls12_377(a: &[u64; 72], naf: &[i8]) -> [u64; 72] {
    let a_conj = conjugate_fp12_bls12_377(a);

    let mut result = FP12_ONE;
    let mut started = false;
    for &digit in naf.iter().rev() {
        if started {
            result = cyclotomic_square_bls12_377(&result);
        }
        match digit {
            1 => {
                result = mul_fp12_bls12_377(&result, a);
                started = true;
            }
            -1 => {
                result = mul_fp12_bls12_377(&result, &a_conj);
                started = true;
            }
            _ => {}
        }
    }
    result
}

/// Computes a^z in the cyclotomic subgroup, z being the final exponentiation parameter
pub fn exp_by_z_cyclo_bls12_377(a: &[u64; 72]) -> [u64; 72] {
    let result = cyclotomic_exp_naf_bls12_377(a, &FINAL_EXP_Z_NAF);
    if FINAL_EXP_IS_NEGATIVE {
        conjugate_fp12_bls12_377(&result)
    } else {
        result
    }
}
