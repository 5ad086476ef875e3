//! Source-path encoding for the trailing URL segment.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

/// Prefix used for unencoded source paths.
pub const PLAIN_PREFIX: &str = "plain/";

/// Encode a source locator into the URL-embeddable form.
///
/// With `encode` set, the source is base64 encoded with the *standard*
/// alphabet, unpadded — imgproxy decodes this segment with the standard
/// alphabet, so URL-safe base64 here would corrupt any source containing
/// bytes that map to `+` or `/`. Otherwise the raw source is appended after
/// the literal `plain/` prefix.
///
/// Total over any input string; this layer never fails.
pub fn encode_source(uri: &str, encode: bool) -> String {
    if encode {
        STANDARD_NO_PAD.encode(uri.as_bytes())
    } else {
        format!("{PLAIN_PREFIX}{uri}")
    }
}
