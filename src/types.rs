//! Typed values for compound processing options.
//!
//! Each type here is a closed sum over the variants imgproxy understands and
//! knows how to render itself as the exact wire token the URL grammar uses.
//! The builder setters in [`crate::builder`] call these renderings; nothing
//! in this module touches the option set directly.

use crate::utils::bool_as_number_str;

/// Resizing behavior for the `resize`/`resizing_type` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizingType {
    /// Keep aspect ratio, fit within the given size.
    Fit,
    /// Keep aspect ratio, fill the given size, crop projecting parts.
    Fill,
    /// Like `Fill`, but crop down when the result is smaller than requested.
    FillDown,
    /// Resize without keeping the aspect ratio.
    Force,
    /// `Fill` when source and target share orientation, `Fit` otherwise.
    Auto,
}

impl ResizingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizingType::Fit => "fit",
            ResizingType::Fill => "fill",
            ResizingType::FillDown => "fill-down",
            ResizingType::Force => "force",
            ResizingType::Auto => "auto",
        }
    }
}

/// Fixed gravity anchor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityPosition {
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    /// Let the server pick the most interesting region.
    Smart,
}

impl GravityPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            GravityPosition::Center => "ce",
            GravityPosition::North => "no",
            GravityPosition::South => "so",
            GravityPosition::East => "ea",
            GravityPosition::West => "we",
            GravityPosition::NorthEast => "noea",
            GravityPosition::NorthWest => "nowe",
            GravityPosition::SouthEast => "soea",
            GravityPosition::SouthWest => "sowe",
            GravityPosition::Smart => "sm",
        }
    }
}

/// Gravity for cropping and extension, in its three wire forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// A bare anchor position, e.g. `sm`.
    Position(GravityPosition),
    /// An anchor position with pixel offsets, e.g. `nowe:10:20`.
    Offset {
        position: GravityPosition,
        x_offset: i32,
        y_offset: i32,
    },
    /// A relative focus point, e.g. `fp:300:200`.
    FocusPoint { x: i64, y: i64 },
}

impl Gravity {
    /// Render the gravity value exactly as the URL grammar expects it.
    pub fn to_canonical_string(&self) -> String {
        match self {
            Gravity::Position(position) => position.as_str().to_string(),
            Gravity::Offset {
                position,
                x_offset,
                y_offset,
            } => format!("{}:{}:{}", position.as_str(), x_offset, y_offset),
            Gravity::FocusPoint { x, y } => format!("fp:{x}:{y}"),
        }
    }
}

/// Background fill color, hex-coded or by RGB channels.
///
/// Useful when converting an image with an alpha channel to JPEG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundColor {
    /// Hex-coded color without the leading `#`, e.g. `ffcc00`.
    Hex(String),
    /// Red, green and blue channel values, 0-255 each.
    Rgb { r: u8, g: u8, b: u8 },
}

impl BackgroundColor {
    pub fn to_canonical_string(&self) -> String {
        match self {
            BackgroundColor::Hex(hex) => hex.clone(),
            BackgroundColor::Rgb { r, g, b } => format!("{r}:{g}:{b}"),
        }
    }
}

/// Watermark placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkPosition {
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    /// Replicate the watermark to fill the whole image.
    Replicate,
}

impl WatermarkPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkPosition::Center => "ce",
            WatermarkPosition::North => "no",
            WatermarkPosition::South => "so",
            WatermarkPosition::East => "ea",
            WatermarkPosition::West => "we",
            WatermarkPosition::NorthEast => "noea",
            WatermarkPosition::NorthWest => "nowe",
            WatermarkPosition::SouthEast => "soea",
            WatermarkPosition::SouthWest => "sowe",
            WatermarkPosition::Replicate => "re",
        }
    }
}

/// Pixel offset for watermark placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkOffset {
    pub x: i32,
    pub y: i32,
}

/// Render a full `resize` option value: `type:width:height:enlarge:extend`.
pub(crate) fn resize_value(
    resizing_type: ResizingType,
    width: u32,
    height: u32,
    enlarge: bool,
    extend: bool,
) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        resizing_type.as_str(),
        width,
        height,
        bool_as_number_str(enlarge),
        bool_as_number_str(extend),
    )
}
