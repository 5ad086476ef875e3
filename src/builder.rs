//! URL assembly: the `Imgproxy` handle and the per-request `UrlBuilder`.

use crate::canonical::serialize_options;
use crate::config::Config;
use crate::error::ImgproxyError;
use crate::path::encode_source;
use crate::signature::{sign, INSECURE_SIGNATURE};
use crate::types::{
    resize_value, BackgroundColor, Gravity, ResizingType, WatermarkOffset, WatermarkPosition,
};
use crate::utils::{bool_as_number_str, format_float};
use crate::OptionSet;

/// A validated imgproxy endpoint: decoded key material plus the original
/// configuration. Construct once, then mint a [`UrlBuilder`] per URL.
#[derive(Debug, Clone)]
pub struct Imgproxy {
    config: Config,
    key: Vec<u8>,
    salt: Vec<u8>,
}

impl Imgproxy {
    /// Validate a configuration and freeze it.
    ///
    /// # Errors
    ///
    /// [`ImgproxyError::InvalidKey`] / [`ImgproxyError::InvalidSalt`] when the
    /// hex material does not decode, [`ImgproxyError::InvalidSignatureSize`]
    /// when the truncation length is 0 or exceeds the SHA-256 digest.
    pub fn new(config: Config) -> Result<Self, ImgproxyError> {
        config.validate_signature_size()?;
        let key = config.key_bytes()?;
        let salt = config.salt_bytes()?;

        Ok(Self { config, key, salt })
    }

    /// Start building a URL with an empty option set.
    pub fn builder(&self) -> UrlBuilder<'_> {
        UrlBuilder {
            proxy: self,
            options: OptionSet::new(),
        }
    }
}

/// Accumulates processing options for one URL, then assembles and signs it.
///
/// Setters are chainable and may be applied in any order; the emitted options
/// path always follows the canonical table order. [`UrlBuilder::generate`]
/// drains the accumulated options, so one builder produces one URL; build a
/// fresh one (or re-populate) for the next request.
///
/// # Examples
///
/// ```
/// use imgproxy_url::{Config, Imgproxy, ResizingType};
///
/// let proxy = Imgproxy::new(Config::new("https://img.example.com/"))?;
/// let url = proxy
///     .builder()
///     .resize(ResizingType::Fill, 300, 300, false, false)
///     .quality(80)
///     .generate("http://example.com/image.jpg")?;
///
/// assert!(url.starts_with("https://img.example.com/insecure/rs:fill:300:300:0:0/q:80/"));
/// # Ok::<(), imgproxy_url::ImgproxyError>(())
/// ```
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    proxy: &'a Imgproxy,
    options: OptionSet,
}

impl<'a> UrlBuilder<'a> {
    /// Set a raw option by long name or short code. Typed setters below all
    /// funnel through here.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The options accumulated so far.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Meta-option combining resizing type, dimensions, enlarge and extend.
    pub fn resize(
        &mut self,
        resizing_type: ResizingType,
        width: u32,
        height: u32,
        enlarge: bool,
        extend: bool,
    ) -> &mut Self {
        self.set_option(
            "resize",
            resize_value(resizing_type, width, height, enlarge, extend),
        )
    }

    /// Meta-option combining dimensions and enlarge.
    pub fn size(&mut self, width: u32, height: u32, enlarge: bool) -> &mut Self {
        self.set_option(
            "size",
            format!("{}:{}:{}", width, height, bool_as_number_str(enlarge)),
        )
    }

    pub fn resizing_type(&mut self, resizing_type: ResizingType) -> &mut Self {
        self.set_option("resizing_type", resizing_type.as_str())
    }

    /// Width of the resulting image; 0 lets the server derive it from the
    /// height and the source aspect ratio.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.set_option("width", width.to_string())
    }

    /// Height of the resulting image; 0 lets the server derive it from the
    /// width and the source aspect ratio.
    pub fn height(&mut self, height: u32) -> &mut Self {
        self.set_option("height", height.to_string())
    }

    /// Multiplier applied after resizing.
    pub fn zoom(&mut self, factor: f64) -> &mut Self {
        self.set_option("zoom", format_float(factor))
    }

    /// Output density. Non-positive values are ignored.
    pub fn dpr(&mut self, dpr: i32) -> &mut Self {
        if dpr > 0 {
            self.set_option("dpr", dpr.to_string());
        }
        self
    }

    pub fn enlarge(&mut self, enlarge: i32) -> &mut Self {
        self.set_option("enlarge", enlarge.to_string())
    }

    pub fn gravity(&mut self, gravity: Gravity) -> &mut Self {
        self.set_option("gravity", gravity.to_canonical_string())
    }

    /// Crop to `width`x`height`, anchored at `gravity` when given.
    pub fn crop(&mut self, width: u32, height: u32, gravity: Option<Gravity>) -> &mut Self {
        let mut value = format!("{width}:{height}");
        if let Some(gravity) = gravity {
            value.push(':');
            value.push_str(&gravity.to_canonical_string());
        }
        self.set_option("crop", value)
    }

    /// Quality of the resulting image as a percentage.
    pub fn quality(&mut self, quality: u8) -> &mut Self {
        self.set_option("quality", quality.to_string())
    }

    pub fn background(&mut self, color: BackgroundColor) -> &mut Self {
        self.set_option("background", color.to_canonical_string())
    }

    /// Gaussian blur; `sigma` sets the mask size.
    pub fn blur(&mut self, sigma: u32) -> &mut Self {
        self.set_option("blur", sigma.to_string())
    }

    /// Sharpen filter; `sigma` sets the mask size.
    pub fn sharpen(&mut self, sigma: u32) -> &mut Self {
        self.set_option("sharpen", sigma.to_string())
    }

    /// Place a watermark: `opacity:position[:x:y]:scale`.
    pub fn watermark(
        &mut self,
        opacity: u8,
        position: WatermarkPosition,
        offset: Option<WatermarkOffset>,
        scale: u32,
    ) -> &mut Self {
        let offset_part = match offset {
            Some(WatermarkOffset { x, y }) => format!(":{x}:{y}"),
            None => String::new(),
        };

        self.set_option(
            "watermark",
            format!("{}:{}{}:{}", opacity, position.as_str(), offset_part, scale),
        )
    }

    /// Apply named server-side presets, joined with `:`.
    pub fn preset(&mut self, presets: &[&str]) -> &mut Self {
        self.set_option("preset", presets.join(":"))
    }

    /// Opaque value for busting CDN and browser caches. Signed along with the
    /// rest of the path, unlike a query string.
    pub fn cachebuster(&mut self, buster: impl Into<String>) -> &mut Self {
        self.set_option("cachebuster", buster)
    }

    /// Resulting image format, e.g. `webp`.
    pub fn format(&mut self, extension: impl Into<String>) -> &mut Self {
        self.set_option("format", extension)
    }

    /// Assemble and sign the final URL for `uri`.
    ///
    /// Encodes the source per the configured mode, serializes the accumulated
    /// options in canonical order, and prepends either the HMAC signature or
    /// the `insecure` placeholder when no key material is configured. The
    /// option set is drained in the process.
    ///
    /// # Errors
    ///
    /// Propagates [`ImgproxyError::Signing`] from the signature step; never
    /// fails for unsigned configurations.
    pub fn generate(&mut self, uri: &str) -> Result<String, ImgproxyError> {
        let encoded = encode_source(uri, self.proxy.config.encode_path);
        let options_path = serialize_options(&mut self.options);
        let path_with_options = format!("{options_path}{encoded}");

        let signature = if self.proxy.key.is_empty() && self.proxy.salt.is_empty() {
            INSECURE_SIGNATURE.to_string()
        } else {
            sign(
                &self.proxy.key,
                &self.proxy.salt,
                self.proxy.config.signature_size,
                &path_with_options,
            )?
        };

        Ok(format!(
            "{}{}{}",
            self.proxy.config.base_url, signature, path_with_options
        ))
    }
}
