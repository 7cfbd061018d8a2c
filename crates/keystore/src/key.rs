/// Curve family registry identifiers used in stored-key metadata.
///
/// Discriminants match the store's wire-level family registry.
#[derive(strum::Display, strum::IntoStaticStr, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum CurveFamily {
    /// Short Weierstrass curves over a random prime (secp*r1).
    SecpR1 = 0x12,
    /// Short Weierstrass curves with a Koblitz structure (secp*k1).
    SecpK1 = 0x17,
    /// Montgomery curves (curve25519, curve448).
    Montgomery = 0x41,
}

/// Identifier of a key owned by the store.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyId(pub u32);

impl KeyId {
    /// Reserved identifier for keys that are not store-resident.
    pub const NULL: Self = Self(0);
}

/// Metadata the store keeps for each key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyAttributes {
    pub family: CurveFamily,
    pub bits: usize,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CurveFamily::SecpR1, "secpr1")]
    #[case(CurveFamily::SecpK1, "secpk1")]
    #[case(CurveFamily::Montgomery, "montgomery")]
    fn family_display_and_parse(#[case] family: CurveFamily, #[case] name: &str) {
        assert_eq!(family.to_string(), name);
        assert_eq!(name.parse::<CurveFamily>().unwrap(), family);
    }

    #[test]
    fn null_key_id_is_reserved() {
        assert_eq!(KeyId::NULL, KeyId(0));
    }
}
