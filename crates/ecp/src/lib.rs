//! Elliptic-curve keypair primitives consumed by the public-key layer.
//!
//! A thin layer over the `p256`/`k256` crates and `curve25519-dalek`:
//! canonical group identifiers, a group descriptor, and a keypair type with
//! the fixed wire encodings used across the library (SEC1 points for short
//! Weierstrass groups, raw RFC 7748 u-coordinates for Montgomery groups).
//!
//! Each group is gated behind its own Cargo feature so builds only carry the
//! curve backends they use.

mod error;
mod group;
#[cfg(any(feature = "secp256r1", feature = "secp256k1", feature = "curve25519"))]
mod keypair;

pub use self::{error::*, group::*};

#[cfg(any(feature = "secp256r1", feature = "secp256k1", feature = "curve25519"))]
pub use self::keypair::*;
