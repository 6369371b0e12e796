mod bench;
mod constants;
mod pairing;
mod verify;

pub use bench::*;
pub use constants::*;
pub use pairing::*;
pub use verify::*;

use bls12_377_pairing::{
    fr_from_le_bytes_mod_order_bls12_377, from_montgomery_fp_bls12_377, times_fr_g1_bls12_377,
    times_fr_g2_bls12_377, G1_GENERATOR, G2_GENERATOR,
};

/// Slot names of an Fp12 element, in memory order
const FP12_SLOTS: [&str; 6] = ["1", "v", "v²", "w", "v·w", "v²·w"];

/// Big-endian hex of the canonical value of an Fp element in Montgomery form
pub(crate) fn fp_to_hex(limbs: &[u64]) -> String {
    let limbs: &[u64; 6] = limbs.try_into().expect("Fp element must have 6 limbs");
    let canonical = from_montgomery_fp_bls12_377(limbs);
    let mut out = String::from("0x");
    for limb in canonical.iter().rev() {
        out.push_str(&format!("{limb:016x}"));
    }
    out
}

/// Logs an Fp12 element coefficient by coefficient
pub(crate) fn log_fp12(f: &[u64; 72]) {
    for (slot, name) in FP12_SLOTS.iter().enumerate() {
        let c0 = fp_to_hex(&f[slot * 12..slot * 12 + 6]);
        let c1 = fp_to_hex(&f[slot * 12 + 6..slot * 12 + 12]);
        tracing::info!("{: >6}: {} + {}·u", name, c0, c1);
    }
}

/// [a]G1 and [b]G2 for small scalars
pub(crate) fn scaled_generators(a: u64, b: u64) -> ([u64; 18], [u64; 36]) {
    let a = fr_from_le_bytes_mod_order_bls12_377(&a.to_le_bytes());
    let b = fr_from_le_bytes_mod_order_bls12_377(&b.to_le_bytes());
    (times_fr_g1_bls12_377(&G1_GENERATOR, &a), times_fr_g2_bls12_377(&G2_GENERATOR, &b))
}
