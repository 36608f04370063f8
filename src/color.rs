//! Color conversions, parsing and contrast decisions.
//!
//! Colors are plain [`rgb::RGB8`] triples; everything here is a pure
//! function from input to value.  Two entry points exist for turning user
//! text into a color: [`hex_to_rgb`], which only accepts 6-digit hex and
//! signals failure with `None` ("no palette produced"), and the richer
//! [`parse_color`], which also understands `rgb()` functions and CSS color
//! names and reports *why* a string was rejected.

use rgb::RGB8;
use thiserror::Error;

use crate::named;

/// Failure to interpret a user-supplied color string.
///
/// Always recoverable: the caller shows a validation message and keeps
/// whatever it was displaying before.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color")]
    InvalidHex,
    #[error("invalid rgb() function")]
    InvalidRgbFunc,
    #[error("rgb() channel out of range")]
    ChannelOutOfRange,
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// Parse a 6-digit hex string, with or without a leading `#`,
/// case-insensitive.  Returns `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<RGB8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// Pack three channels into a lowercase `#rrggbb` string.
///
/// Channels are clamped to \[0, 255\] before packing, so arithmetic that
/// overshoots a channel can never produce malformed hex.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", clamp(r), clamp(g), clamp(b))
}

/// Lowercase `#rrggbb` encoding of a color.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Perceived brightness in \[0, 1\].
///
/// This is the legacy luma heuristic `(0.299 r + 0.587 g + 0.114 b) / 255`,
/// not the WCAG sRGB-linearized luminance.  It is only used to pick a
/// readable text color for a swatch, where the cheap weights are plenty.
pub fn relative_luminance(c: RGB8) -> f64 {
    (0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64) / 255.
}

/// Which text color stays readable on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Dark text, for light backgrounds.
    Dark,
    /// Light text, for dark backgrounds.
    Light,
}

impl TextColor {
    /// Decision at the luminance level: `>= 0.5` takes dark text.
    pub fn for_luminance(luminance: f64) -> TextColor {
        if luminance >= 0.5 { TextColor::Dark } else { TextColor::Light }
    }

    /// A concrete CSS color for this choice.
    pub fn css_value(&self) -> &'static str {
        match self {
            TextColor::Dark => "#111827",
            TextColor::Light => "#ffffff",
        }
    }
}

/// Text color that stays readable on top of `background`.
pub fn text_color_for(background: RGB8) -> TextColor {
    TextColor::for_luminance(relative_luminance(background))
}

fn parse_hex(digits: &str) -> Result<RGB8, ColorParseError> {
    let nibble = |b: u8| -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    };
    let bytes = digits.as_bytes();
    match bytes.len() {
        // #rgb is shorthand for #rrggbb
        3 => {
            let r = nibble(bytes[0]).ok_or(ColorParseError::InvalidHex)?;
            let g = nibble(bytes[1]).ok_or(ColorParseError::InvalidHex)?;
            let b = nibble(bytes[2]).ok_or(ColorParseError::InvalidHex)?;
            Ok(RGB8 { r: r * 17, g: g * 17, b: b * 17 })
        }
        6 => hex_to_rgb(digits).ok_or(ColorParseError::InvalidHex),
        _ => Err(ColorParseError::InvalidHex),
    }
}

fn parse_rgb_func(args: &str) -> Result<RGB8, ColorParseError> {
    let nums: Vec<&str> = args.split(',').map(str::trim).collect();
    if nums.len() != 3 {
        return Err(ColorParseError::InvalidRgbFunc);
    }
    let channel = |s: &str| -> Result<u8, ColorParseError> {
        let v: u16 = s.parse().map_err(|_| ColorParseError::InvalidRgbFunc)?;
        if v > 255 {
            return Err(ColorParseError::ChannelOutOfRange);
        }
        Ok(v as u8)
    };
    Ok(RGB8 { r: channel(nums[0])?, g: channel(nums[1])?, b: channel(nums[2])? })
}

/// Parse any supported color notation: `#rgb`, `#rrggbb`, `rgb(r, g, b)`
/// or a CSS color name.  Case-insensitive, surrounding whitespace ignored.
pub fn parse_color(input: &str) -> Result<RGB8, ColorParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits.trim());
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        return parse_rgb_func(args);
    }
    named::lookup(&lower).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        for &c in &[0u8, 1, 0x42, 127, 128, 0xab, 254, 255] {
            for &d in &[0u8, 0x3b, 0x82, 0xf6, 255] {
                let hex = to_hex(RGB8 { r: c, g: d, b: c });
                assert_eq!(hex_to_rgb(&hex), Some(RGB8 { r: c, g: d, b: c }));
            }
        }
        assert_eq!(to_hex(hex_to_rgb("#3B82F6").unwrap()), "#3b82f6");
        assert_eq!(to_hex(hex_to_rgb("3b82f6").unwrap()), "#3b82f6");
    }

    #[test]
    fn hex_rejects_garbage() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "#gg0000", "notacolor"] {
            assert_eq!(hex_to_rgb(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-20, 0, 300), "#0000ff");
        assert_eq!(rgb_to_hex(255, 128, 0), "#ff8000");
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(relative_luminance(RGB8 { r: 255, g: 255, b: 255 }), 1.0);
        assert_eq!(relative_luminance(RGB8 { r: 0, g: 0, b: 0 }), 0.0);
    }

    #[test]
    fn text_color_boundary() {
        assert_eq!(TextColor::for_luminance(0.5), TextColor::Dark);
        assert_eq!(TextColor::for_luminance(0.4999), TextColor::Light);
        assert_eq!(TextColor::for_luminance(1.0), TextColor::Dark);
        // #808080 sits just above the threshold, #7f7f7f just below
        assert_eq!(text_color_for(RGB8 { r: 128, g: 128, b: 128 }), TextColor::Dark);
        assert_eq!(text_color_for(RGB8 { r: 127, g: 127, b: 127 }), TextColor::Light);
    }

    #[test]
    fn parse_color_notations() {
        let blue = RGB8 { r: 59, g: 130, b: 246 };
        assert_eq!(parse_color("#3B82F6"), Ok(blue));
        assert_eq!(parse_color("  rgb(59, 130, 246) "), Ok(blue));
        assert_eq!(parse_color("#28f"), Ok(RGB8 { r: 0x22, g: 0x88, b: 0xff }));
        assert_eq!(parse_color("Blue"), Ok(RGB8 { r: 0, g: 0, b: 255 }));
        assert_eq!(parse_color("rebeccapurple"), Ok(RGB8 { r: 0x66, g: 0x33, b: 0x99 }));
    }

    #[test]
    fn parse_color_failures() {
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12345z"), Err(ColorParseError::InvalidHex));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorParseError::InvalidRgbFunc));
        assert_eq!(parse_color("rgb(256, 0, 0)"), Err(ColorParseError::ChannelOutOfRange));
        assert_eq!(
            parse_color("notacolor"),
            Err(ColorParseError::UnknownName("notacolor".into()))
        );
    }
}
