//! sRGB color values and the conversions the palette needs.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ThemeError;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string.
    ///
    /// ```rust
    /// use orbit_style::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#00A991").unwrap(), Rgb::new(0x00, 0xA9, 0x91));
    /// assert!(Rgb::from_hex("#00A9").is_err());
    /// ```
    pub fn from_hex(value: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidHex {
            value: value.to_string(),
        };
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parses the `rgb(r, g, b)` notation used by design-token exports.
    ///
    /// Every run of decimal digits is one component; exactly three are
    /// required and each must fit in a byte.
    pub fn from_css_rgb(key: &str, value: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidRgb {
            key: key.to_string(),
            value: value.to_string(),
        };

        let components = value
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .map(|run| run.parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }

    /// Uppercase hex components without prefix, as `("00", "A9", "91")`.
    pub fn hex_components(&self) -> (String, String, String) {
        (
            format!("{:02X}", self.r),
            format!("{:02X}", self.g),
            format!("{:02X}", self.b),
        )
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.r as f64, self.g as f64, self.b as f64)
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// This color composited over an opaque `background`, rounded to bytes.
    pub fn over(&self, background: Rgb) -> Rgb {
        let alpha = self.a as u16;
        let blend = |fg: u8, bg: u8| ((fg as u16 * alpha + bg as u16 * (255 - alpha) + 127) / 255) as u8;
        Rgb::new(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }

    /// Relative luminance of this color composited over `background`.
    ///
    /// Compositing is done in unrounded floating point so that two colors a
    /// single step apart never collapse to the same value.
    pub fn luminance_over(&self, background: Rgb) -> f64 {
        let alpha = self.a as f64 / 255.0;
        let blend = |fg: u8, bg: u8| fg as f64 * alpha + bg as f64 * (1.0 - alpha);
        relative_luminance(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Serializes as `#RRGGBBAA`.
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    fn linear(channel: f64) -> f64 {
        let c = channel / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}
