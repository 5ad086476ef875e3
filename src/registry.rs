//! The canonical processing-option table.
//!
//! imgproxy accepts every processing option under a long name and a short
//! code, and URL segments are emitted in a fixed table order regardless of
//! how the caller populated the option set. This module holds that table and
//! the derived long-to-short alias map.

use std::collections::HashMap;
use std::sync::OnceLock;

/// One row of the option table: the long option name and its short URL code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub long: &'static str,
    pub short: &'static str,
}

const fn opt(long: &'static str, short: &'static str) -> OptionDescriptor {
    OptionDescriptor { long, short }
}

/// Every known processing option, in canonical emission order.
///
/// The order matters: [`crate::canonical::serialize_options`] walks this table
/// top to bottom, so `resize` always precedes `width`, `width` precedes
/// `height`, and so on, independent of insertion order.
///
/// Note the short code `ra` appears twice (`resizing_algorithm` and
/// `return_attachment`); the table reproduces upstream imgproxy client
/// behavior as observed, duplicate included.
pub const OPTIONS: &[OptionDescriptor] = &[
    opt("resize", "rs"),
    opt("size", "s"),
    opt("resizing_type", "rt"),
    opt("resizing_algorithm", "ra"),
    opt("width", "w"),
    opt("height", "h"),
    opt("min-width", "mw"),
    opt("min-height", "mh"),
    opt("zoom", "z"),
    opt("dpr", "dpr"),
    opt("enlarge", "el"),
    opt("extend", "ex"),
    opt("extend_aspect_ratio", "ea"),
    opt("gravity", "g"),
    opt("crop", "c"),
    opt("trim", "t"),
    opt("padding", "p"),
    opt("auto_rotate", "ar"),
    opt("rotate", "ro"),
    opt("background", "bg"),
    opt("background_alpha", "ba"),
    opt("adjust", "ad"),
    opt("brightness", "br"),
    opt("contrast", "co"),
    opt("saturation", "sa"),
    opt("blur", "bl"),
    opt("sharpen", "sh"),
    opt("pixelate", "px"),
    opt("unsharp_masking", "um"),
    opt("blur_detections", "bd"),
    opt("draw_detections", "dd"),
    opt("gradient", "gr"),
    opt("watermark", "wm"),
    opt("watermark_url", "wu"),
    opt("watermark_text", "wt"),
    opt("watermark_size", "ws"),
    opt("watermark_rotate", "wr"),
    opt("watermark_shadow", "wsh"),
    opt("style", "st"),
    opt("strip_metadata", "sm"),
    opt("keep_copyright", "kc"),
    opt("dpi", "dpi"),
    opt("strip_color_profile", "scp"),
    opt("enforce_thumbnail", "et"),
    opt("quality", "q"),
    opt("format_quality", "fq"),
    opt("autoquality", "aq"),
    opt("max_bytes", "mb"),
    opt("jpeg_options", "jpeg_options"),
    opt("png_options", "png_options"),
    opt("webp_options", "webp_options"),
    opt("format", "f"),
    opt("page", "page"),
    opt("pages", "pages"),
    opt("disable_animation", "da"),
    opt("video_thumbnail_second", "vts"),
    opt("video_thumbnail_keyframes", "vtk"),
    opt("video_thumbnail_tile", "vtt"),
    opt("fallback_image_url", "fi"),
    opt("skip_processing", "sp"),
    opt("raw", "raw"),
    opt("cachebuster", "cb"),
    opt("expires", "exp"),
    opt("filename", "fn"),
    opt("return_attachment", "ra"),
    opt("preset", "pr"),
    opt("hashsum", "hs"),
    opt("max_src_resolution", "msr"),
    opt("max_src_file_size", "msfs"),
    opt("max_animation_frames", "maf"),
    opt("max_animation_frame_resolution", "mafr"),
];

/// Look up the short code for a long option name.
///
/// Returns `None` for keys the table does not know, including keys that are
/// already short codes.
pub fn short_code_for(long: &str) -> Option<&'static str> {
    static ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    let aliases = ALIASES.get_or_init(|| {
        OPTIONS
            .iter()
            .map(|descriptor| (descriptor.long, descriptor.short))
            .collect()
    });

    aliases.get(long).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_order_is_stable() {
        assert_eq!(OPTIONS[0], opt("resize", "rs"));
        assert_eq!(OPTIONS[OPTIONS.len() - 1], opt("max_animation_frame_resolution", "mafr"));

        // width precedes height precedes gravity, the ordering callers rely on
        let position = |long: &str| OPTIONS.iter().position(|o| o.long == long).unwrap();
        assert!(position("width") < position("height"));
        assert!(position("height") < position("gravity"));
    }

    #[test]
    fn test_long_names_are_unique() {
        let longs: HashSet<_> = OPTIONS.iter().map(|o| o.long).collect();
        assert_eq!(longs.len(), OPTIONS.len());
    }

    #[test]
    fn test_short_code_lookup() {
        assert_eq!(short_code_for("width"), Some("w"));
        assert_eq!(short_code_for("watermark_shadow"), Some("wsh"));
        assert_eq!(short_code_for("dpr"), Some("dpr"));
        assert_eq!(short_code_for("w"), None);
        assert_eq!(short_code_for("no_such_option"), None);
    }

    #[test]
    fn test_ra_short_code_collision_preserved() {
        // Upstream reuses "ra" for two different options; we keep that as-is.
        let ra: Vec<_> = OPTIONS.iter().filter(|o| o.short == "ra").collect();
        assert_eq!(ra.len(), 2);
        assert_eq!(short_code_for("resizing_algorithm"), Some("ra"));
        assert_eq!(short_code_for("return_attachment"), Some("ra"));
    }
}
