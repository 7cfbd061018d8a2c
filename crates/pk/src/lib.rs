//! Public-key handle abstraction shared by the library's algorithm dispatch
//! layer.
//!
//! A [`PkContext`] wraps one of two mutually exclusive backing
//! representations of elliptic-curve key material, chosen once per build by
//! the `keystore-ec-data` feature:
//!
//! * **classic** (default): the handle owns a live
//!   [`EcKeypair`](parapet_ecp::EcKeypair) and exposes typed read-only and
//!   mutable views of it;
//! * **opaque-backed**: the private key lives in the external key store and
//!   the handle keeps only the store identifier, curve metadata and a cached
//!   copy of the raw public key.
//!
//! Operations tied to one representation are only compiled in that
//! representation's builds; everything else keeps the same signature across
//! both. The handle itself performs no cryptographic computation, no I/O and
//! no logging — failures are reported through [`PkError`] return values.

#[cfg(any(feature = "secp256r1", feature = "secp256k1", feature = "curve25519"))]
mod context;
mod error;
#[cfg(feature = "keystore")]
mod group;
mod kind;

#[cfg(any(feature = "secp256r1", feature = "secp256k1", feature = "curve25519"))]
pub use self::context::PkContext;
#[cfg(feature = "keystore")]
pub use self::group::{ec_group_from_family, ec_group_to_family};
pub use self::{error::PkError, kind::KeyKind};
