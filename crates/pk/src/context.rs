#[cfg(feature = "keystore-ec-data")]
use core::fmt;

use parapet_ecp::GroupId;
#[cfg(not(feature = "keystore-ec-data"))]
use parapet_ecp::EcKeypair;
#[cfg(feature = "keystore-ec-data")]
use parapet_ecp::{EcKeypair, MAX_EC_PUBKEY_LEN};
#[cfg(feature = "keystore-ec-data")]
use parapet_keystore::{CurveFamily, KeyId};

use crate::{KeyKind, PkError};

/// Generic public-key handle.
///
/// Wraps one of two mutually exclusive backing representations of
/// elliptic-curve material, chosen at build time by the `keystore-ec-data`
/// feature: a live [`EcKeypair`] (classic, the default) or store metadata
/// plus a cached raw public key (opaque-backed). Non-EC kinds never populate
/// the EC slot, and a handle never mixes the two representations.
///
/// Handles are not internally synchronized; callers serialize mutation
/// against reads on the same handle.
#[derive(Debug, Default)]
pub struct PkContext {
    kind: KeyKind,
    ec: Option<EcData>,
}

/// Classic backing storage: the handle directly owns the live keypair.
#[cfg(not(feature = "keystore-ec-data"))]
#[derive(Debug)]
struct EcData {
    keypair: EcKeypair,
}

/// Opaque-backed storage: the private key lives in the external store; the
/// handle keeps the store identifier, curve metadata and cached public bytes.
#[cfg(feature = "keystore-ec-data")]
#[derive(Debug)]
struct EcData {
    key_id: KeyId,
    family: CurveFamily,
    bits: usize,
    pub_raw: PubKeyBuf,
}

impl PkContext {
    /// Creates a handle of the given kind with no key material attached.
    #[inline]
    pub const fn new(kind: KeyKind) -> Self {
        Self { kind, ec: None }
    }

    /// Key-kind tag of this handle.
    #[inline]
    pub const fn kind(&self) -> KeyKind {
        self.kind
    }
}

#[cfg(not(feature = "keystore-ec-data"))]
impl PkContext {
    /// Installs a live keypair, replacing any previously installed one.
    ///
    /// Fails with [`PkError::TypeMismatch`] when the handle's kind is not an
    /// elliptic-curve kind.
    pub fn set_keypair(&mut self, keypair: EcKeypair) -> Result<(), PkError> {
        if !self.kind.is_ec() {
            return Err(PkError::TypeMismatch);
        }
        self.ec = Some(EcData { keypair });
        Ok(())
    }

    /// Read-only view of the wrapped elliptic-curve keypair.
    ///
    /// `None` when the handle's kind is not an elliptic-curve kind or no
    /// keypair has been installed — absence, not an error.
    #[inline]
    pub fn ec_keypair(&self) -> Option<&EcKeypair> {
        if self.kind.is_ec() {
            self.ec.as_ref().map(|ec| &ec.keypair)
        } else {
            None
        }
    }

    /// Mutable view of the wrapped elliptic-curve keypair, under the same
    /// selection rule as [`Self::ec_keypair`].
    #[inline]
    pub fn ec_keypair_mut(&mut self) -> Option<&mut EcKeypair> {
        if self.kind.is_ec() {
            self.ec.as_mut().map(|ec| &mut ec.keypair)
        } else {
            None
        }
    }

    /// Canonical group identifier, read from the live keypair's group
    /// descriptor.
    #[inline]
    pub fn ec_group_id(&self) -> Option<GroupId> {
        self.ec_keypair().map(|keypair| keypair.group().id())
    }
}

#[cfg(feature = "keystore-ec-data")]
impl PkContext {
    /// Binds store metadata to an elliptic-curve handle.
    ///
    /// `key_id` is [`KeyId::NULL`] for keys that are not store-resident. The
    /// cached public key starts out empty until the first
    /// [`Self::update_public_key_from_keypair`] run. Fails with
    /// [`PkError::TypeMismatch`] when the handle's kind is not an
    /// elliptic-curve kind.
    pub fn set_stored_key(
        &mut self,
        key_id: KeyId,
        family: CurveFamily,
        bits: usize,
    ) -> Result<(), PkError> {
        if !self.kind.is_ec() {
            return Err(PkError::TypeMismatch);
        }
        self.ec = Some(EcData {
            key_id,
            family,
            bits,
            pub_raw: PubKeyBuf::new(),
        });
        Ok(())
    }

    /// Store identifier of the wrapped key, if metadata is bound.
    #[inline]
    pub fn key_id(&self) -> Option<KeyId> {
        self.ec_meta().map(|ec| ec.key_id)
    }

    /// Cached raw public key; empty until the first synchronization.
    #[inline]
    pub fn public_key_bytes(&self) -> Option<&[u8]> {
        self.ec_meta().map(|ec| ec.pub_raw.as_slice())
    }

    /// Canonical group identifier, derived from the stored curve metadata.
    ///
    /// `None` doubles as the sentinel for (family, bits) pairs outside the
    /// mapping table.
    #[inline]
    pub fn ec_group_id(&self) -> Option<GroupId> {
        let ec = self.ec_meta()?;
        crate::group::ec_group_from_family(ec.family, ec.bits)
    }

    /// Copies `keypair`'s public key into the handle's cache in the group's
    /// fixed wire encoding, replacing any previous contents.
    ///
    /// This bridges a freshly generated or imported classic keypair into the
    /// opaque-backed representation; invoke it once per generation or import
    /// event. On encoding failure the cache is cleared to empty length before
    /// the error is returned. The source keypair is never mutated.
    ///
    /// Fails with [`PkError::TypeMismatch`] for non-EC kinds and
    /// [`PkError::BadInputData`] when no store metadata is bound.
    pub fn update_public_key_from_keypair(&mut self, keypair: &EcKeypair) -> Result<(), PkError> {
        if !self.kind.is_ec() {
            return Err(PkError::TypeMismatch);
        }
        let ec = self.ec.as_mut().ok_or(PkError::BadInputData)?;
        match keypair.write_public_key(&mut ec.pub_raw.bytes) {
            Ok(len) => {
                ec.pub_raw.len = len;
                Ok(())
            }
            Err(err) => {
                ec.pub_raw.clear();
                Err(err.into())
            }
        }
    }

    #[inline]
    fn ec_meta(&self) -> Option<&EcData> {
        if self.kind.is_ec() {
            self.ec.as_ref()
        } else {
            None
        }
    }
}

/// Fixed-capacity cache for the raw encoded public key.
///
/// Empty at creation; the synchronizer overwrites the full contents on
/// success and clears it back to empty on encoding failure.
#[cfg(feature = "keystore-ec-data")]
struct PubKeyBuf {
    bytes: [u8; MAX_EC_PUBKEY_LEN],
    len: usize,
}

#[cfg(feature = "keystore-ec-data")]
impl PubKeyBuf {
    const fn new() -> Self {
        Self {
            bytes: [0; MAX_EC_PUBKEY_LEN],
            len: 0,
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    const fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(feature = "keystore-ec-data")]
impl fmt::Debug for PubKeyBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_handle_is_empty() {
        let pk = PkContext::default();
        assert_eq!(pk.kind(), KeyKind::None);
    }

    #[rstest]
    #[case(KeyKind::Rsa)]
    #[case(KeyKind::Ecdsa)]
    fn new_keeps_the_kind(#[case] kind: KeyKind) {
        assert_eq!(PkContext::new(kind).kind(), kind);
    }

    #[cfg(all(not(feature = "keystore-ec-data"), feature = "secp256r1"))]
    mod classic {
        use parapet_ecp::{EcKeypair, GroupId, MAX_EC_PUBKEY_LEN};

        use super::*;

        #[rstest]
        #[case(KeyKind::None)]
        #[case(KeyKind::Rsa)]
        #[cfg_attr(feature = "keystore", case(KeyKind::Opaque))]
        fn non_ec_kinds_have_no_keypair(#[case] kind: KeyKind) {
            let mut pk = PkContext::new(kind);
            assert!(pk.ec_keypair().is_none());
            assert!(pk.ec_keypair_mut().is_none());
            assert!(pk.ec_group_id().is_none());
        }

        #[rstest]
        #[case(KeyKind::None)]
        #[case(KeyKind::Rsa)]
        fn set_keypair_rejects_non_ec_kinds(#[case] kind: KeyKind) {
            let mut pk = PkContext::new(kind);
            let keypair = EcKeypair::generate(GroupId::Secp256r1).unwrap();
            assert_eq!(pk.set_keypair(keypair), Err(PkError::TypeMismatch));
        }

        #[rstest]
        #[case(KeyKind::EcKey)]
        #[case(KeyKind::EcKeyDh)]
        #[case(KeyKind::Ecdsa)]
        fn ec_kinds_expose_the_installed_keypair(#[case] kind: KeyKind) {
            let mut pk = PkContext::new(kind);
            assert!(pk.ec_keypair().is_none());

            pk.set_keypair(EcKeypair::generate(GroupId::Secp256r1).unwrap())
                .unwrap();
            assert!(pk.ec_keypair().is_some());
            assert!(pk.ec_keypair_mut().is_some());
            assert_eq!(pk.ec_group_id(), Some(GroupId::Secp256r1));
        }

        #[test]
        fn both_views_reference_the_same_keypair() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_keypair(EcKeypair::generate(GroupId::Secp256r1).unwrap())
                .unwrap();

            let mut via_ro = [0u8; MAX_EC_PUBKEY_LEN];
            let mut via_rw = [0u8; MAX_EC_PUBKEY_LEN];
            let ro_len = pk.ec_keypair().unwrap().write_public_key(&mut via_ro).unwrap();
            let rw_len = pk
                .ec_keypair_mut()
                .unwrap()
                .write_public_key(&mut via_rw)
                .unwrap();
            assert_eq!(via_ro[..ro_len], via_rw[..rw_len]);
        }

        #[cfg(feature = "secp256k1")]
        #[test]
        fn mutable_view_changes_show_through_read_only_view() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_keypair(EcKeypair::generate(GroupId::Secp256r1).unwrap())
                .unwrap();

            *pk.ec_keypair_mut().unwrap() = EcKeypair::generate(GroupId::Secp256k1).unwrap();
            assert_eq!(pk.ec_group_id(), Some(GroupId::Secp256k1));
        }

        #[test]
        fn secp256r1_public_key_encodes_to_65_bytes() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_keypair(EcKeypair::generate(GroupId::Secp256r1).unwrap())
                .unwrap();

            let mut buf = [0u8; MAX_EC_PUBKEY_LEN];
            let len = pk.ec_keypair().unwrap().write_public_key(&mut buf).unwrap();
            assert_eq!(len, 65);
            assert_eq!(buf[0], 0x04);
        }
    }

    #[cfg(all(feature = "keystore-ec-data", feature = "secp256r1"))]
    mod opaque {
        use parapet_ecp::{EcKeypair, GroupId};
        use parapet_keystore::{
            CurveFamily, InMemoryKeyStore, KeyAttributes, KeyId, KeyStore as _,
        };

        use super::*;

        #[rstest]
        #[case(KeyKind::None)]
        #[case(KeyKind::Rsa)]
        #[case(KeyKind::Opaque)]
        fn non_ec_kinds_have_no_stored_metadata(#[case] kind: KeyKind) {
            let mut pk = PkContext::new(kind);
            assert_eq!(
                pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 256),
                Err(PkError::TypeMismatch)
            );
            assert!(pk.key_id().is_none());
            assert!(pk.public_key_bytes().is_none());
            assert!(pk.ec_group_id().is_none());
        }

        #[test]
        fn stored_metadata_resolves_the_group() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 256)
                .unwrap();

            assert_eq!(pk.key_id(), Some(KeyId::NULL));
            assert_eq!(pk.ec_group_id(), Some(GroupId::Secp256r1));
            assert_eq!(pk.public_key_bytes(), Some(&[][..]));
        }

        #[test]
        fn unknown_metadata_resolves_to_no_group() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 521)
                .unwrap();
            assert_eq!(pk.ec_group_id(), None);
        }

        #[test]
        fn synchronizer_requires_bound_metadata() {
            let keypair = EcKeypair::generate(GroupId::Secp256r1).unwrap();

            let mut pk = PkContext::new(KeyKind::Rsa);
            assert_eq!(
                pk.update_public_key_from_keypair(&keypair),
                Err(PkError::TypeMismatch)
            );

            let mut pk = PkContext::new(KeyKind::EcKey);
            assert_eq!(
                pk.update_public_key_from_keypair(&keypair),
                Err(PkError::BadInputData)
            );
        }

        #[test]
        fn synchronizer_publishes_the_public_key() {
            let keypair = EcKeypair::generate(GroupId::Secp256r1).unwrap();
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 256)
                .unwrap();

            pk.update_public_key_from_keypair(&keypair).unwrap();
            let cached = pk.public_key_bytes().unwrap();
            assert_eq!(cached.len(), 65);
            assert_eq!(cached[0], 0x04);

            // Round-trip through the curve layer's standard decode routine.
            let decoded = EcKeypair::from_public_bytes(GroupId::Secp256r1, cached).unwrap();
            let mut reencoded = [0u8; 65];
            decoded.write_public_key(&mut reencoded).unwrap();
            assert_eq!(cached, &reencoded[..]);
        }

        #[test]
        fn synchronizer_is_idempotent() {
            let keypair = EcKeypair::generate(GroupId::Secp256r1).unwrap();
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 256)
                .unwrap();

            pk.update_public_key_from_keypair(&keypair).unwrap();
            let first = pk.public_key_bytes().unwrap().to_vec();
            pk.update_public_key_from_keypair(&keypair).unwrap();
            assert_eq!(pk.public_key_bytes().unwrap(), first);
        }

        #[test]
        fn synchronizer_overwrites_previous_contents() {
            let mut pk = PkContext::new(KeyKind::EcKey);
            pk.set_stored_key(KeyId::NULL, CurveFamily::SecpR1, 256)
                .unwrap();

            let first = EcKeypair::generate(GroupId::Secp256r1).unwrap();
            pk.update_public_key_from_keypair(&first).unwrap();
            let before = pk.public_key_bytes().unwrap().to_vec();

            let second = EcKeypair::generate(GroupId::Secp256r1).unwrap();
            pk.update_public_key_from_keypair(&second).unwrap();
            assert_ne!(pk.public_key_bytes().unwrap(), before);
            assert_eq!(pk.public_key_bytes().unwrap().len(), 65);
        }

        #[test]
        fn store_resident_key_flow() {
            let store = InMemoryKeyStore::default();
            let keypair = EcKeypair::generate(GroupId::Secp256r1).unwrap();

            let mut public = [0u8; 65];
            keypair.write_public_key(&mut public).unwrap();
            let attrs = KeyAttributes {
                family: CurveFamily::SecpR1,
                bits: 256,
            };
            let id = store.import_key(&attrs, &public).unwrap();

            let mut pk = PkContext::new(KeyKind::EcKey);
            let stored = store.key_attributes(id).unwrap();
            pk.set_stored_key(id, stored.family, stored.bits).unwrap();
            pk.update_public_key_from_keypair(&keypair).unwrap();

            let mut exported = [0u8; 65];
            let len = store.export_public_key(id, &mut exported).unwrap();
            assert_eq!(pk.public_key_bytes().unwrap(), &exported[..len]);
            assert_eq!(pk.ec_group_id(), Some(GroupId::Secp256r1));
        }
    }
}
