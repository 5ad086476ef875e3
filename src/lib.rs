//! imgproxy-url - builder and signer for imgproxy processing URLs
//!
//! This crate constructs URLs in the grammar the imgproxy server accepts:
//! a signature segment, an ordered sequence of processing-option segments,
//! and an encoded source path.
//!
//! ```text
//! <base_url><signature>/<short:value>/.../<encoded-or-plain-source>
//! ```
//!
//! # Features
//!
//! - **Canonical ordering**: options serialize in a fixed table order, so the
//!   same option set always yields the same URL regardless of insertion order
//! - **Alias equivalence**: every option can be set by long name or short code
//! - **Deterministic signatures**: truncated HMAC-SHA256 over `salt || path`,
//!   URL-safe unpadded base64, byte-identical across calls
//! - **Unsigned mode**: empty key and salt produce the `insecure` placeholder
//!
//! # Quick Start
//!
//! ```
//! use imgproxy_url::{Config, Imgproxy, ResizingType};
//!
//! let mut config = Config::new("https://img.example.com/");
//! config.key = "943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881".to_string();
//! config.salt = "520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5".to_string();
//!
//! let proxy = Imgproxy::new(config)?;
//! let url = proxy
//!     .builder()
//!     .resize(ResizingType::Fill, 300, 300, false, false)
//!     .generate("http://example.com/image.jpg")?;
//!
//! assert!(url.starts_with("https://img.example.com/"));
//! # Ok::<(), imgproxy_url::ImgproxyError>(())
//! ```
//!
//! # Scope
//!
//! This is a pure, synchronous transformation library: no HTTP transport, no
//! image processing, no validation of option values beyond serialization.
//! Option values are opaque strings; the typed setters on
//! [`UrlBuilder`] produce well-formed ones for the common options.

// Re-export the main generation surface
pub use builder::{Imgproxy, UrlBuilder};
pub use config::Config;
pub use error::ImgproxyError;

// Re-export the pipeline pieces for callers composing them directly
pub use canonical::serialize_options;
pub use path::{encode_source, PLAIN_PREFIX};
pub use registry::{short_code_for, OptionDescriptor, OPTIONS};
pub use signature::{sign, INSECURE_SIGNATURE};

// Re-export typed option values
pub use types::{
    BackgroundColor, Gravity, GravityPosition, ResizingType, WatermarkOffset, WatermarkPosition,
};

// Module declarations
pub mod builder;
pub mod canonical;
pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod signature;
pub mod types;
mod utils;

/// Mapping from option key (long name or short code) to value.
///
/// Serialization drains the map; see [`serialize_options`].
pub type OptionSet = std::collections::BTreeMap<String, String>;
