//! Generator configuration.

use crate::error::ImgproxyError;

/// Caller-supplied configuration for URL generation.
///
/// `key` and `salt` are hex strings, the form imgproxy deployments hand out
/// in `IMGPROXY_KEY` / `IMGPROXY_SALT`. Leave both empty to generate unsigned
/// URLs carrying the `insecure` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix the final URL is concatenated onto; expected to end with `/`.
    pub base_url: String,
    /// Hex-encoded signing key, or empty for unsigned URLs.
    pub key: String,
    /// Hex-encoded salt, or empty for unsigned URLs.
    pub salt: String,
    /// Bytes of HMAC digest to keep, 1 to 32.
    pub signature_size: usize,
    /// Base64-encode the source path; `false` uses the `plain/` form.
    pub encode_path: bool,
}

impl Config {
    /// Configuration for unsigned URLs with full-length signatures once key
    /// material is filled in.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            key: String::new(),
            salt: String::new(),
            signature_size: 32,
            encode_path: true,
        }
    }

    /// Decode the hex key, or an empty byte string when unset.
    pub(crate) fn key_bytes(&self) -> Result<Vec<u8>, ImgproxyError> {
        hex::decode(&self.key).map_err(|e| ImgproxyError::InvalidKey(e.to_string()))
    }

    /// Decode the hex salt, or an empty byte string when unset.
    pub(crate) fn salt_bytes(&self) -> Result<Vec<u8>, ImgproxyError> {
        hex::decode(&self.salt).map_err(|e| ImgproxyError::InvalidSalt(e.to_string()))
    }

    pub(crate) fn validate_signature_size(&self) -> Result<(), ImgproxyError> {
        if self.signature_size == 0 || self.signature_size > 32 {
            return Err(ImgproxyError::InvalidSignatureSize(self.signature_size));
        }
        Ok(())
    }
}
