use thiserror::Error as ThisError;

/// Status codes returned by key-store operations.
#[derive(Debug, ThisError, Clone, Copy, Hash, PartialEq, Eq)]
pub enum StoreError {
    #[error("operation not supported")]
    NotSupported,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("operation not permitted")]
    NotPermitted,
    #[error("output buffer too small")]
    BufferTooSmall,
    #[error("key does not exist")]
    DoesNotExist,
    #[error("key already exists")]
    AlreadyExists,
    #[error("bad state")]
    BadState,
    #[error("communication with the store failed")]
    CommunicationFailure,
    #[error("persistent storage failed")]
    StorageFailure,
    #[error("data corruption detected")]
    CorruptionDetected,
    #[error("insufficient memory")]
    InsufficientMemory,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid padding")]
    InvalidPadding,
    #[error("generic error")]
    GenericError,
}
