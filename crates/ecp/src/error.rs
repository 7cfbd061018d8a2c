use thiserror::Error as ThisError;

/// Errors surfaced by the elliptic-curve layer.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum EcpError {
    /// Input bytes do not encode a valid point on the group.
    #[error("invalid point encoding")]
    InvalidPoint,
    /// The output buffer cannot hold the encoded point.
    #[error("output buffer too small")]
    BufferTooSmall,
    /// The platform randomness source failed.
    #[error("random source failed")]
    RandomFailed,
}
