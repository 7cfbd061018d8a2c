use parapet_ecp::EcpError;
#[cfg(feature = "keystore")]
use parapet_keystore::StoreError;
use thiserror::Error as ThisError;

/// Error domain of the public-key layer.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum PkError {
    /// The handle's key kind does not admit the requested operation.
    #[error("key type mismatch")]
    TypeMismatch,
    #[error("bad input data")]
    BadInputData,
    #[error("feature unavailable")]
    FeatureUnavailable,
    #[error("output buffer too small")]
    BufferTooSmall,
    #[error("memory allocation failed")]
    AllocFailed,
    /// An RSA padding check failed.
    #[error("invalid padding")]
    InvalidPadding,
    /// A signature did not verify.
    #[error("signature verification failed")]
    VerifyFailed,
    /// Store status with no closer equivalent in this domain.
    #[cfg(feature = "keystore")]
    #[error("key store: {0}")]
    KeyStore(StoreError),
}

impl From<EcpError> for PkError {
    fn from(err: EcpError) -> Self {
        match err {
            EcpError::InvalidPoint => Self::BadInputData,
            EcpError::BufferTooSmall => Self::BufferTooSmall,
            EcpError::RandomFailed => Self::AllocFailed,
        }
    }
}

#[cfg(feature = "keystore")]
impl PkError {
    /// Translates a store status for generic call sites.
    pub const fn from_store(status: StoreError) -> Self {
        match status {
            StoreError::NotSupported => Self::FeatureUnavailable,
            StoreError::InvalidArgument => Self::BadInputData,
            StoreError::BufferTooSmall => Self::BufferTooSmall,
            StoreError::InsufficientMemory => Self::AllocFailed,
            _ => Self::KeyStore(status),
        }
    }

    /// Translates a store status for RSA call sites, where padding and
    /// signature statuses carry algorithm-specific meaning.
    pub const fn from_store_rsa(status: StoreError) -> Self {
        match status {
            StoreError::InvalidPadding => Self::InvalidPadding,
            StoreError::InvalidSignature => Self::VerifyFailed,
            _ => Self::from_store(status),
        }
    }

    /// Translates a store status for ECDSA call sites.
    pub const fn from_store_ecdsa(status: StoreError) -> Self {
        match status {
            StoreError::InvalidSignature => Self::VerifyFailed,
            _ => Self::from_store(status),
        }
    }
}
