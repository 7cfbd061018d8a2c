/// Algorithm-family tag of a [`PkContext`](crate::PkContext).
#[derive(strum::Display, strum::IntoStaticStr, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum KeyKind {
    /// No key material has been assigned to the handle yet.
    #[default]
    None = 0,
    Rsa = 1,
    /// Generic elliptic-curve key, usable for derivation and signing alike.
    EcKey = 2,
    /// Elliptic-curve key restricted to key agreement.
    EcKeyDh = 3,
    /// Elliptic-curve key restricted to ECDSA signing.
    Ecdsa = 4,
    /// Key fully owned by the opaque store; its material never enters this
    /// process.
    #[cfg(feature = "keystore")]
    Opaque = 5,
}

impl KeyKind {
    /// Whether this kind carries elliptic-curve material in the handle's EC
    /// slot.
    #[inline]
    pub const fn is_ec(self) -> bool {
        matches!(self, Self::EcKey | Self::EcKeyDh | Self::Ecdsa)
    }
}
