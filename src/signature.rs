//! Truncated HMAC-SHA256 signatures for the leading URL segment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ImgproxyError;

type HmacSha256 = Hmac<Sha256>;

/// Placeholder emitted instead of a signature when no key material is
/// configured.
pub const INSECURE_SIGNATURE: &str = "insecure";

/// Sign a composed path with truncated HMAC-SHA256.
///
/// The MAC is keyed on `key` and fed `salt` followed by the UTF-8 bytes of
/// `payload`. The digest is truncated to the first `signature_size` bytes and
/// encoded as unpadded URL-safe base64, which is what imgproxy recomputes and
/// compares on its side.
///
/// Pure: identical inputs always produce identical output.
///
/// # Errors
///
/// [`ImgproxyError::InvalidSignatureSize`] when `signature_size` is zero or
/// exceeds the 32-byte SHA-256 digest, and [`ImgproxyError::Signing`] when
/// the MAC cannot be keyed. Neither occurs with a configuration accepted by
/// [`crate::Imgproxy::new`].
pub fn sign(
    key: &[u8],
    salt: &[u8],
    signature_size: usize,
    payload: &str,
) -> Result<String, ImgproxyError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| ImgproxyError::Signing(e.to_string()))?;

    mac.update(salt);
    mac.update(payload.as_bytes());

    let digest = mac.finalize().into_bytes();
    let truncated = digest
        .get(..signature_size)
        .ok_or(ImgproxyError::InvalidSignatureSize(signature_size))?;

    Ok(URL_SAFE_NO_PAD.encode(truncated))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Key/salt pair used throughout the signing tests, in the hex form
    // imgproxy deployments hand out.
    const KEY: &str = "943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881";
    const SALT: &str = "520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5";

    fn key_bytes() -> Vec<u8> {
        hex::decode(KEY).unwrap()
    }

    fn salt_bytes() -> Vec<u8> {
        hex::decode(SALT).unwrap()
    }

    #[test]
    fn test_known_signature_vector() {
        let payload = "/w:100/h:50/aHR0cDovL2V4YW1wbGUuY29tL2ltYWdlLmpwZw";
        let signature = sign(&key_bytes(), &salt_bytes(), 32, payload).unwrap();
        assert_eq!(signature, "XDHSNylJZpwggUvy5kw8EtUV9FZ39A8-VzuiULn2V5I");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let first = sign(&key_bytes(), &salt_bytes(), 32, "/payload").unwrap();
        let second = sign(&key_bytes(), &salt_bytes(), 32, "/payload").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncation_length() {
        let payload = "/w:100/h:50/aHR0cDovL2V4YW1wbGUuY29tL2ltYWdlLmpwZw";

        let truncated = sign(&key_bytes(), &salt_bytes(), 8, payload).unwrap();
        assert_eq!(truncated, "XDHSNylJZpw");

        // 8 bytes decode back out of the base64 form
        assert_eq!(URL_SAFE_NO_PAD.decode(&truncated).unwrap().len(), 8);

        // and a truncated signature is a prefix of the full one
        let full = sign(&key_bytes(), &salt_bytes(), 32, payload).unwrap();
        assert!(full.starts_with(&truncated[..10]));
    }

    #[test]
    fn test_salt_is_prepended_not_appended() {
        // salt || payload and payload || salt must differ
        let salted = sign(&key_bytes(), b"salty", 32, "payload").unwrap();
        let swapped = sign(&key_bytes(), b"", 32, "saltypayload").unwrap();
        let correct = sign(&key_bytes(), b"payload", 32, "salty").unwrap();

        assert_eq!(salted, swapped);
        assert_ne!(salted, correct);
    }

    #[test]
    fn test_oversized_signature_size_is_an_error() {
        let result = sign(&key_bytes(), &salt_bytes(), 33, "/p");
        assert_eq!(result, Err(ImgproxyError::InvalidSignatureSize(33)));
    }

    #[test]
    fn test_output_is_url_safe() {
        // Scan a few payloads; URL-safe base64 never yields '+' or '/'.
        for i in 0..16 {
            let signature = sign(&key_bytes(), &salt_bytes(), 32, &format!("/p:{i}/")).unwrap();
            assert!(!signature.contains('+'));
            assert!(!signature.contains('/'));
            assert!(!signature.contains('='));
        }
    }
}
