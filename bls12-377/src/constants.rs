//! Constants for the BLS12-377 curve and its optimal Ate pairing
//!
//! Field elements are little-endian `u64` limbs. Every field constant except the moduli
//! is stored in Montgomery form with R = 2³⁸⁴ mod p.

/// Byte width of an Fp element
pub const FP_BYTES: usize = 48;

/// Byte width of an Fr element
pub const FR_BYTES: usize = 32;

/// Byte width of a Jacobian G1 point
pub const G1_BYTES: usize = 3 * FP_BYTES;

/// Byte width of a Jacobian G2 point
pub const G2_BYTES: usize = 3 * 2 * FP_BYTES;

/// Byte width of an Fp12 element
pub const GT_BYTES: usize = 12 * FP_BYTES;

/// Base field modulus p
pub const P: [u64; 6] = [
    0x8508C00000000001, 0x170B5D4430000000, 0x1EF3622FBA094800,
    0x1A22D9F300F5138F, 0xC63B05C06CA1493B, 0x01AE3A4617C510EA,
];

/// P - 1
pub const P_MINUS_ONE: [u64; 6] = [P[0] - 1, P[1], P[2], P[3], P[4], P[5]];

/// Group order r
pub const R: [u64; 4] = [
    0x0A11800000000001, 0x59AA76FED0000001, 0x60B44D1E5C37B001,
    0x12AB655E9A2CA556,
];

/// R - 1
pub const R_MINUS_ONE: [u64; 4] = [R[0] - 1, R[1], R[2], R[3]];

/// Zero in Fp
pub const FP_ZERO: [u64; 6] = [0; 6];

/// One in Fp (Montgomery form)
pub const FP_ONE: [u64; 6] = [
    0x02CDFFFFFFFFFF68, 0x51409F837FFFFFB1, 0x9F7DB3A98A7D3FF2,
    0x7B4E97B76E7C6305, 0x4CF495BF803C84E8, 0x008D6661E2FDF49A,
];

/// invXi = -1/5 ∈ Fp (Montgomery form), so that τ := invXi·u = u⁻¹
pub const INV_XI: [u64; 6] = [
    0x8072266666666685, 0x8DF55926899999A9, 0x7FE4561AD64F34CF,
    0xB95DA6D8B6E4F01B, 0x4B747CCCFC142743, 0x0039C3FA70F49F43,
];

/// Zero in Fp2
pub const FP2_ZERO: [u64; 12] = [0; 12];

/// One in Fp2
pub const FP2_ONE: [u64; 12] = [
    FP_ONE[0], FP_ONE[1], FP_ONE[2], FP_ONE[3], FP_ONE[4], FP_ONE[5], 0, 0, 0, 0, 0, 0,
];

/// τ = (0, invXi) ∈ Fp2, the cubic non-residue defining Fp6 = Fp2[v]/(v³ - τ)
pub const TAU: [u64; 12] = [
    0, 0, 0, 0, 0, 0, INV_XI[0], INV_XI[1], INV_XI[2], INV_XI[3], INV_XI[4], INV_XI[5],
];

/// One in Fp6
pub const FP6_ONE: [u64; 36] = {
    let mut one = [0; 36];
    let mut i = 0;
    while i < 6 {
        one[i] = FP_ONE[i];
        i += 1;
    }
    one
};

/// One in Fp12, the identity of GT
pub const FP12_ONE: [u64; 72] = {
    let mut one = [0; 72];
    let mut i = 0;
    while i < 6 {
        one[i] = FP_ONE[i];
        i += 1;
    }
    one
};

/// Coefficient b of E: y² = x³ + 1
pub const E_B: [u64; 6] = FP_ONE;

/// Coefficient b' = τ of the twist E': y² = x³ + τ
pub const ETWISTED_B: [u64; 12] = TAU;

/// Generator of G1 in Jacobian coordinates (X, Y, Z = 1)
pub const G1_GENERATOR: [u64; 18] = [
    0x260F33B9772451F4, 0xC54DD773169D5658, 0x5C1551C469A510DD,
    0x761662E4425E1698, 0xC97D78CC6F065272, 0x00A41206B361FD4D,
    0x8193961FB8CB81F3, 0x00638D4C5F44ADB8, 0xFAFAF3DAD4DAF54A,
    0xC27849E2D655CD18, 0x2EC3DDB401D52814, 0x007DA93326303C71,
    0x02CDFFFFFFFFFF68, 0x51409F837FFFFFB1, 0x9F7DB3A98A7D3FF2,
    0x7B4E97B76E7C6305, 0x4CF495BF803C84E8, 0x008D6661E2FDF49A,
];

/// Generator of G2 in Jacobian coordinates (X, Y, Z = 1)
pub const G2_GENERATOR: [u64; 36] = [
    0x68904082F268725B, 0x668F2EA74F45328B, 0xEBCA7A65802BE84F,
    0x1E1850F4C1ADA3E6, 0x830DC22D588EF1E9, 0x01862A81767C0982,
    0x5F02A915C91C7F39, 0xF8C553BA388DA2A7, 0xD51A416DBD198850,
    0xE943C6F38AE3073A, 0xFFE24AA8259A4981, 0x011853391E73DFDD,
    0xD5B19B897881430F, 0x05BE9118A5B371ED, 0x6063F91F86C131EE,
    0x3244A61BE8F4EC19, 0xA02E425B9F9A3A12, 0x018AF8C04F3360D2,
    0x57601AC71A5B96F5, 0xE99ACC1714F2440E, 0x2339612F10118EA9,
    0x8321E68A3B1CD722, 0x2B543B050CC74917, 0x00590182B396C112,
    0x02CDFFFFFFFFFF68, 0x51409F837FFFFFB1, 0x9F7DB3A98A7D3FF2,
    0x7B4E97B76E7C6305, 0x4CF495BF803C84E8, 0x008D6661E2FDF49A,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// Identity of G1 in Jacobian coordinates (0 : 1 : 0)
pub const G1_IDENTITY: [u64; 18] = {
    let mut id = [0; 18];
    let mut i = 0;
    while i < 6 {
        id[6 + i] = FP_ONE[i];
        i += 1;
    }
    id
};

/// Identity of G2 in Jacobian coordinates (0 : 1 : 0)
pub const G2_IDENTITY: [u64; 36] = {
    let mut id = [0; 36];
    let mut i = 0;
    while i < 6 {
        id[12 + i] = FP_ONE[i];
        i += 1;
    }
    id
};

/// Affine encoding of the G1 identity, off the curve since 0 ≠ 0³ + 1
pub const G1_IDENTITY_AFFINE: [u64; 12] = [0; 12];

/// Affine encoding of the G2 identity
pub const G2_IDENTITY_AFFINE: [u64; 24] = [0; 24];

/// Ate loop parameter x = 0x8508C00000000001
pub const ATE_LOOP_PARAM: u64 = 0x8508C00000000001;

/// Whether the Ate loop parameter is negative
pub const ATE_LOOP_IS_NEGATIVE: bool = false;

/// Binary digits of the Ate loop parameter, least significant first
pub const ATE_LOOP_BITS: [u8; 64] = [
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
];

/// Number of doubling steps in the Ate loop
pub const ATE_N_DBL_COEFS: usize = ATE_LOOP_BITS.len() - 1;

/// Number of nonzero digits of the Ate loop parameter
pub const ATE_N_ADD_COEFS: usize = {
    let mut n = 0;
    let mut i = 0;
    while i < ATE_LOOP_BITS.len() {
        n += ATE_LOOP_BITS[i] as usize;
        i += 1;
    }
    n
};

/// Capacity of the line coefficient table
pub const ATE_N_COEFS: usize = ATE_N_DBL_COEFS + ATE_N_ADD_COEFS + 1;

/// Number of coefficient triples actually emitted by the double-and-add walk:
/// one doubling per bit below the top one and one addition per set bit below the top one
pub const ATE_N_USED_COEFS: usize = ATE_N_DBL_COEFS + ATE_N_ADD_COEFS - 1;

/// Byte size of one coefficient triple (c0, c1, c2) ∈ Fp2³
pub const ATE_COEF_SIZE: usize = 3 * 2 * FP_BYTES;

/// Byte size of a prepared G1 point
pub const PRE_P_SIZE: usize = 3 * 2 * FP_BYTES;

/// Byte size of a prepared G2 point
pub const PRE_Q_SIZE: usize = 3 * 2 * FP_BYTES + ATE_N_COEFS * ATE_COEF_SIZE;

/// Whether the final exponentiation parameter z is negative
pub const FINAL_EXP_IS_NEGATIVE: bool = false;

/// Parameter z of the hard part of the final exponentiation
pub const FINAL_EXP_Z: u64 = 9586122913090633729;

/// Non-adjacent form of z, least significant digit first
pub const FINAL_EXP_Z_NAF: [i8; 64] = [
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0,
    1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
];
