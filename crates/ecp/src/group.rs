/// Maximum length of an encoded public key over all supported groups: the
/// SEC1 uncompressed point of a 256-bit short Weierstrass curve.
pub const MAX_EC_PUBKEY_LEN: usize = 65;

/// Canonical identifier of a supported elliptic-curve group.
#[derive(strum::Display, strum::IntoStaticStr, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum GroupId {
    #[cfg(feature = "secp256r1")]
    Secp256r1 = 0,
    #[cfg(feature = "secp256k1")]
    Secp256k1 = 1,
    #[cfg(feature = "curve25519")]
    Curve25519 = 2,
}

impl GroupId {
    /// Bit size of the group, as registered in curve metadata.
    #[inline]
    pub const fn bits(self) -> usize {
        #[allow(clippy::match_same_arms)]
        match self {
            #[cfg(feature = "secp256r1")]
            Self::Secp256r1 => 256,
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1 => 256,
            #[cfg(feature = "curve25519")]
            Self::Curve25519 => 255,
        }
    }

    /// Length of an encoded public key on this group.
    #[inline]
    pub const fn pubkey_len(self) -> usize {
        #[allow(clippy::match_same_arms)]
        match self {
            #[cfg(feature = "secp256r1")]
            Self::Secp256r1 => 65,
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1 => 65,
            #[cfg(feature = "curve25519")]
            Self::Curve25519 => 32,
        }
    }
}

/// Group descriptor attached to a keypair.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct EcGroup {
    id: GroupId,
}

impl EcGroup {
    pub(crate) const fn new(id: GroupId) -> Self {
        Self { id }
    }

    /// Canonical identifier of this group.
    #[inline]
    pub const fn id(self) -> GroupId {
        self.id
    }
}
