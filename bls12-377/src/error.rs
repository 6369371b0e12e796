//! Errors reported by the BLS12-377 pairing library

/// Errors specific to field and pairing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    #[error("Attempted inversion of zero")]
    InversionOfZero,

    #[error("Invalid input length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("Field element is not in canonical form")]
    NonCanonicalField,

    #[error("Point is not on the curve")]
    PointNotOnCurve,

    #[error("Point is not in the prime order subgroup")]
    PointNotInSubgroup,

    #[error("Prepared point is neither normalized to Z = 1 nor the identity")]
    PointNotNormalized,

    #[error("Non-zero padding in a prepared point encoding")]
    NonZeroPadding,

    #[error("Line coefficients do not match the prepared point")]
    InconsistentLineCoefficients,
}
