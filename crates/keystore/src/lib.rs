//! Opaque key-store collaborator: status codes, key metadata and the minimal
//! store contract consumed by the public-key layer.
//!
//! The store owns private key material; consumers only ever see a [`KeyId`]
//! and the metadata needed to reason about the key. [`InMemoryKeyStore`] is a
//! process-local implementation for development and tests.

mod error;
mod key;
mod store;

pub use self::{error::*, key::*, store::*};
