use parapet_ecp::GroupId;
use parapet_keystore::CurveFamily;

/// Resolves the canonical group for stored-key metadata.
///
/// Total over the supported (family, bits) pairs; `None` is the sentinel for
/// combinations this build does not know — a legitimate outcome, not an
/// error.
pub const fn ec_group_from_family(family: CurveFamily, bits: usize) -> Option<GroupId> {
    match (family, bits) {
        #[cfg(feature = "secp256r1")]
        (CurveFamily::SecpR1, 256) => Some(GroupId::Secp256r1),
        #[cfg(feature = "secp256k1")]
        (CurveFamily::SecpK1, 256) => Some(GroupId::Secp256k1),
        #[cfg(feature = "curve25519")]
        (CurveFamily::Montgomery, 255) => Some(GroupId::Curve25519),
        _ => None,
    }
}

/// Store-side metadata for a canonical group, the reverse of
/// [`ec_group_from_family`].
pub const fn ec_group_to_family(id: GroupId) -> (CurveFamily, usize) {
    let family = match id {
        #[cfg(feature = "secp256r1")]
        GroupId::Secp256r1 => CurveFamily::SecpR1,
        #[cfg(feature = "secp256k1")]
        GroupId::Secp256k1 => CurveFamily::SecpK1,
        #[cfg(feature = "curve25519")]
        GroupId::Curve25519 => CurveFamily::Montgomery,
    };
    (family, id.bits())
}
