//! Error types for imgproxy URL construction and signing.

use thiserror::Error;

/// Errors that can occur while configuring the generator or signing a URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImgproxyError {
    /// The signing key is not valid hex.
    #[error("Signing key is not valid hex: {0}")]
    InvalidKey(String),

    /// The salt is not valid hex.
    #[error("Salt is not valid hex: {0}")]
    InvalidSalt(String),

    /// The signature size is out of range for the underlying digest.
    #[error("Invalid signature size: must be between 1 and 32 bytes, got {0}")]
    InvalidSignatureSize(usize),

    /// The keyed-hash computation could not be initialized.
    #[error("Signature computation failed: {0}")]
    Signing(String),
}
