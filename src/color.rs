//! Color type — the public color representation for the picker.
//!
//! Stores a 24-bit RGB triple plus an opacity percentage. The canonical
//! textual form is 6-digit uppercase hex with alpha carried separately;
//! conversions and hex parsing/formatting use direct math.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math;
use crate::names;

/// Errors produced when parsing color text.
///
/// Every variant is recovered locally by the caller: a failed parse leaves
/// the previous color in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid arguments in `{0}`")]
    InvalidFunc(String),
    #[error("unrecognized color format `{0}`")]
    InvalidColorFormat(String),
}

/// RGB color with a separate opacity percentage (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: u8,
}

impl Color {
    /// Create from 0–255 RGB values with full opacity.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 100 }
    }

    /// Red component (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green component (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue component (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Opacity percent (0–100).
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns the color with the given opacity percent. Out-of-range values
    /// are clamped into 0–100, never rejected.
    pub fn with_alpha(self, alpha: i32) -> Self {
        Self {
            alpha: alpha.clamp(0, 100) as u8,
            ..self
        }
    }

    /// Returns the color with this color's RGB channels replaced by `other`'s,
    /// keeping the current opacity.
    pub fn with_rgb_of(self, other: Color) -> Self {
        Self {
            r: other.r,
            g: other.g,
            b: other.b,
            ..self
        }
    }

    /// Canonical 6-digit uppercase hex (no `#`, alpha separate).
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)` / `rgba(r, g, b, a)` form, matching what the composed
    /// gradient description embeds.
    pub fn rgba_string(&self) -> String {
        if self.alpha == 100 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.alpha as f64 / 100.0
            )
        }
    }

    /// HSV view of the color. Hue comes back as 0 for achromatic colors;
    /// the controller layers its own hue stability on top.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, saturation, value) = math::rgb_to_hsv(self.r, self.g, self.b);
        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// Build a color from an HSV view plus an opacity percent.
    pub fn from_hsv(hsv: Hsv, alpha: i32) -> Self {
        let (r, g, b) = math::hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0, 100) as u8,
        }
    }

    /// Parse color text: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#`
    /// optional), CSS color names including `transparent`, and
    /// `rgb()`/`rgba()`/`hsl()`/`hsla()` functional notation.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            return parse_hex(rest.trim());
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some((r, g, b, alpha)) = names::lookup(&lower) {
            return Ok(Color::rgb(r, g, b).with_alpha(alpha as i32));
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return parse_rgb_args(args, false).map_err(|_| func_err(trimmed));
        }
        if let Some(args) = lower.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
            return parse_rgb_args(args, true).map_err(|_| func_err(trimmed));
        }
        if let Some(args) = lower.strip_prefix("hsl(").and_then(|s| s.strip_suffix(')')) {
            return parse_hsl_args(args, false).map_err(|_| func_err(trimmed));
        }
        if let Some(args) = lower.strip_prefix("hsla(").and_then(|s| s.strip_suffix(')')) {
            return parse_hsl_args(args, true).map_err(|_| func_err(trimmed));
        }

        // Bare hex without the `#` prefix
        if trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return parse_hex(trimmed);
        }

        Err(ParseError::InvalidColorFormat(trimmed.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// HSV view of a color: hue in degrees, saturation/value in percent.
/// Derived from [`Color`], never stored as source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Clamps saturation/value into 0–100 and wraps hue into 0–360.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            value: value.clamp(0.0, 100.0),
        }
    }
}

/// Solid-mode state: one color, opacity carried inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SingleState {
    pub color: Color,
}

impl SingleState {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

fn func_err(input: &str) -> ParseError {
    ParseError::InvalidFunc(input.to_string())
}

/// Parse a hex body (no `#`): 3, 4, 6, or 8 digits. 4/8-digit forms carry
/// alpha, which is rescaled from 0–255 to the 0–100 percent domain.
fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    let err = || ParseError::InvalidHex(hex.to_string());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }
    let nibble2 = |range: &str| u8::from_str_radix(range, 16).map_err(|_| err());
    let (r, g, b, a255) = match hex.len() {
        3 | 4 => {
            let digit = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .map(|v| v * 17)
                    .map_err(|_| err())
            };
            let a = if hex.len() == 4 { digit(3)? } else { 255 };
            (digit(0)?, digit(1)?, digit(2)?, a)
        }
        6 | 8 => {
            let a = if hex.len() == 8 {
                nibble2(&hex[6..8])?
            } else {
                255
            };
            (
                nibble2(&hex[0..2])?,
                nibble2(&hex[2..4])?,
                nibble2(&hex[4..6])?,
                a,
            )
        }
        _ => return Err(err()),
    };
    let alpha = (a255 as f64 / 255.0 * 100.0).round() as i32;
    Ok(Color::rgb(r, g, b).with_alpha(alpha))
}

/// `rgb(r, g, b)` / `rgba(r, g, b, a)` with comma-separated integer channels.
/// Channels clamp to 0–255; alpha is 0.0–1.0.
fn parse_rgb_args(args: &str, with_alpha: bool) -> Result<Color, ()> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return Err(());
    }
    let channel = |s: &str| -> Result<u8, ()> {
        let v = s.parse::<i64>().map_err(|_| ())?;
        Ok(v.clamp(0, 255) as u8)
    };
    let color = Color::rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    if with_alpha {
        let a = parts[3].parse::<f64>().map_err(|_| ())?;
        Ok(color.with_alpha((a.clamp(0.0, 1.0) * 100.0).round() as i32))
    } else {
        Ok(color)
    }
}

/// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`; `%` suffixes are optional.
fn parse_hsl_args(args: &str, with_alpha: bool) -> Result<Color, ()> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return Err(());
    }
    let number = |s: &str| -> Result<f64, ()> {
        s.trim_end_matches('%').trim_end().parse::<f64>().map_err(|_| ())
    };
    let h = number(parts[0])?;
    let s = number(parts[1])?;
    let l = number(parts[2])?;
    let (h, s, v) = math::hsl_to_hsv(h.rem_euclid(360.0), s, l);
    let hsv = Hsv::new(h, s, v);
    if with_alpha {
        let a = parts[3].parse::<f64>().map_err(|_| ())?;
        Ok(Color::from_hsv(hsv, (a.clamp(0.0, 1.0) * 100.0).round() as i32))
    } else {
        Ok(Color::from_hsv(hsv, 100))
    }
}
