//! Optimal Ate pairing over the BLS12-377 curve
//!
//! Field elements are little-endian `u64` limbs in Montgomery form, towers are laid out
//! coefficient by coefficient and points are Jacobian unless the name says `affine`.

mod constants;
mod curve;
mod cyclotomic;
mod error;
mod final_exp;
mod fp;
mod fp12;
mod fp2;
mod fp6;
mod fr;
mod miller_loop;
mod pairing;
mod prepare;
mod twist;
mod utils;

// For public consumption
pub use constants::*;
pub use curve::*;
pub use cyclotomic::*;
pub use error::*;
pub use final_exp::*;
pub use fp::*;
pub use fp12::*;
pub use fp2::*;
pub use fp6::*;
pub use fr::*;
pub use miller_loop::*;
pub use pairing::*;
pub use prepare::*;
pub use twist::*;
pub use utils::*;
