//! Limb and byte helpers shared by the tower and curve modules

use std::cmp::Ordering;

use crate::{constants::P, error::PairingError};

/// Given two n-limb numbers `x` and `y`, returns true if `x == y`; otherwise, false.
pub fn eq(x: &[u64], y: &[u64]) -> bool {
    debug_assert_eq!(x.len(), y.len(), "x and y must have the same length");
    x == y
}

/// Returns true if x == 0
pub fn is_zero(x: &[u64]) -> bool {
    x.iter().all(|&word| word == 0)
}

/// Borrows the `i`-th chunk of `N` limbs of `x`
#[inline]
pub(crate) fn chunk<const N: usize>(x: &[u64], i: usize) -> &[u64; N] {
    x[i * N..(i + 1) * N].try_into().unwrap()
}

/// Serializes little-endian limbs into little-endian bytes
pub fn u64_le_to_bytes_le(limbs: &[u64], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), limbs.len() * 8);
    for (limb, out) in limbs.iter().zip(bytes.chunks_exact_mut(8)) {
        out.copy_from_slice(&limb.to_le_bytes());
    }
}

/// Parses little-endian bytes into little-endian limbs
pub fn bytes_le_to_u64_le<const N: usize>(bytes: &[u8]) -> Result<[u64; N], PairingError> {
    if bytes.len() != N * 8 {
        return Err(PairingError::InvalidLength { expected: N * 8, got: bytes.len() });
    }
    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        *limb = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    Ok(limbs)
}

/// Rejects limbs holding an Fp element that is not below p
pub fn check_canonical(limbs: &[u64]) -> Result<(), PairingError> {
    for fp in limbs.chunks_exact(6) {
        if fp.iter().rev().cmp(P.iter().rev()) != Ordering::Less {
            return Err(PairingError::NonCanonicalField);
        }
    }
    Ok(())
}
