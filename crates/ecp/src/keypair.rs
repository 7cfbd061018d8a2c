use core::fmt;

#[cfg(feature = "curve25519")]
use curve25519_dalek::montgomery::MontgomeryPoint;
use zeroize::Zeroizing;

use crate::{EcGroup, EcpError, GroupId, MAX_EC_PUBKEY_LEN};

/// An elliptic-curve keypair: a group descriptor plus curve-specific key
/// material.
///
/// The secret half is optional so imported public keys are represented by the
/// same type as locally generated keypairs.
pub struct EcKeypair {
    group: EcGroup,
    keys: CurveKeys,
}

enum CurveKeys {
    #[cfg(feature = "secp256r1")]
    Secp256r1 {
        secret: Option<p256::SecretKey>,
        public: p256::PublicKey,
    },
    #[cfg(feature = "secp256k1")]
    Secp256k1 {
        secret: Option<k256::SecretKey>,
        public: k256::PublicKey,
    },
    #[cfg(feature = "curve25519")]
    Curve25519 {
        secret: Option<Zeroizing<[u8; 32]>>,
        public: MontgomeryPoint,
    },
}

impl EcKeypair {
    /// Generates a fresh keypair on the given group.
    pub fn generate(id: GroupId) -> Result<Self, EcpError> {
        let keys = match id {
            #[cfg(feature = "secp256r1")]
            GroupId::Secp256r1 => {
                let secret = random_scalar(p256::SecretKey::from_slice)?;
                let public = secret.public_key();
                CurveKeys::Secp256r1 {
                    secret: Some(secret),
                    public,
                }
            }
            #[cfg(feature = "secp256k1")]
            GroupId::Secp256k1 => {
                let secret = random_scalar(k256::SecretKey::from_slice)?;
                let public = secret.public_key();
                CurveKeys::Secp256k1 {
                    secret: Some(secret),
                    public,
                }
            }
            #[cfg(feature = "curve25519")]
            GroupId::Curve25519 => {
                let mut secret = Zeroizing::new([0u8; 32]);
                getrandom::getrandom(&mut *secret).map_err(|_| EcpError::RandomFailed)?;
                let public = MontgomeryPoint::mul_base_clamped(*secret);
                CurveKeys::Curve25519 {
                    secret: Some(secret),
                    public,
                }
            }
        };
        Ok(Self {
            group: EcGroup::new(id),
            keys,
        })
    }

    /// Decodes a public key from the group's fixed wire encoding.
    ///
    /// The resulting keypair carries no secret half.
    pub fn from_public_bytes(id: GroupId, bytes: &[u8]) -> Result<Self, EcpError> {
        let keys = match id {
            #[cfg(feature = "secp256r1")]
            GroupId::Secp256r1 => CurveKeys::Secp256r1 {
                secret: None,
                public: p256::PublicKey::from_sec1_bytes(bytes)
                    .map_err(|_| EcpError::InvalidPoint)?,
            },
            #[cfg(feature = "secp256k1")]
            GroupId::Secp256k1 => CurveKeys::Secp256k1 {
                secret: None,
                public: k256::PublicKey::from_sec1_bytes(bytes)
                    .map_err(|_| EcpError::InvalidPoint)?,
            },
            #[cfg(feature = "curve25519")]
            GroupId::Curve25519 => CurveKeys::Curve25519 {
                secret: None,
                public: bytes
                    .try_into()
                    .map(MontgomeryPoint)
                    .map_err(|_| EcpError::InvalidPoint)?,
            },
        };
        Ok(Self {
            group: EcGroup::new(id),
            keys,
        })
    }

    /// Group descriptor of this keypair.
    #[inline]
    pub const fn group(&self) -> EcGroup {
        self.group
    }

    /// Whether the secret half of the keypair is present.
    #[inline]
    pub const fn has_secret(&self) -> bool {
        #[allow(clippy::match_same_arms)]
        match &self.keys {
            #[cfg(feature = "secp256r1")]
            CurveKeys::Secp256r1 { secret, .. } => secret.is_some(),
            #[cfg(feature = "secp256k1")]
            CurveKeys::Secp256k1 { secret, .. } => secret.is_some(),
            #[cfg(feature = "curve25519")]
            CurveKeys::Curve25519 { secret, .. } => secret.is_some(),
        }
    }

    /// Encodes the public key into `out` using the group's fixed wire
    /// format: the SEC1 uncompressed point for short Weierstrass groups, the
    /// raw RFC 7748 u-coordinate for Montgomery groups.
    ///
    /// Returns the number of bytes written.
    pub fn write_public_key(&self, out: &mut [u8]) -> Result<usize, EcpError> {
        match &self.keys {
            #[cfg(feature = "secp256r1")]
            CurveKeys::Secp256r1 { public, .. } => {
                use p256::elliptic_curve::sec1::ToEncodedPoint as _;
                copy_into(out, public.to_encoded_point(false).as_bytes())
            }
            #[cfg(feature = "secp256k1")]
            CurveKeys::Secp256k1 { public, .. } => {
                use k256::elliptic_curve::sec1::ToEncodedPoint as _;
                copy_into(out, public.to_encoded_point(false).as_bytes())
            }
            #[cfg(feature = "curve25519")]
            CurveKeys::Curve25519 { public, .. } => copy_into(out, public.as_bytes()),
        }
    }
}

impl fmt::Debug for EcKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_EC_PUBKEY_LEN];
        let len = self.write_public_key(&mut buf).unwrap_or(0);
        write!(f, "{}:{}", self.group.id(), hex::encode(&buf[..len]))
    }
}

fn copy_into(out: &mut [u8], bytes: &[u8]) -> Result<usize, EcpError> {
    out.get_mut(..bytes.len())
        .ok_or(EcpError::BufferTooSmall)?
        .copy_from_slice(bytes);
    Ok(bytes.len())
}

/// Rejection-samples random bytes until they form a valid nonzero scalar for
/// the curve; a retry is vanishingly rare on the supported groups.
#[cfg(any(feature = "secp256r1", feature = "secp256k1"))]
fn random_scalar<K, E>(parse: impl Fn(&[u8]) -> Result<K, E>) -> Result<K, EcpError> {
    loop {
        let mut bytes = Zeroizing::new([0u8; 32]);
        getrandom::getrandom(&mut *bytes).map_err(|_| EcpError::RandomFailed)?;
        if let Ok(key) = parse(&*bytes) {
            return Ok(key);
        }
    }
}
