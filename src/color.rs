//! Display colors and the default palette of known bodies.

use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PlotError, Result};

/// An 8-bit-per-channel RGBA color.
///
/// Parses from and formats to `#rrggbb` (opaque) or `#rrggbbaa`.
///
/// # Example
/// ```
/// use orbit_plotter::Color;
///
/// let color: Color = "#ffcc00".parse().unwrap();
/// assert_eq!(color, Color::rgb(0xff, 0xcc, 0x00));
/// assert_eq!(color.to_string(), "#ffcc00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Neutral gray used for attractors without a known color.
    pub const FALLBACK: Color = Color::rgb(0x99, 0x99, 0x99);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Returns the same color with another alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the color set for a trajectory: the color itself, followed
    /// by a fully transparent variant when `trail` is set.
    ///
    /// Backends interpolate between the entries to fade the trail.
    pub fn trail(self, trail: bool) -> Vec<Color> {
        if trail {
            vec![self, self.with_alpha(0)]
        } else {
            vec![self]
        }
    }

    /// Linear interpolation between two colors, channel by channel.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// The alpha channel as a fraction in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Formats the color channels without alpha, as `#rrggbb`.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PlotError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 0xff },
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

const BODY_COLORS: [(&str, Color); 10] = [
    ("Sun", Color::rgb(0xff, 0xcc, 0x00)),
    ("Mercury", Color::rgb(0x8c, 0x78, 0x53)),
    ("Venus", Color::rgb(0xe6, 0xdb, 0x67)),
    ("Earth", Color::rgb(0x2a, 0x7b, 0xde)),
    ("Moon", Color::rgb(0x99, 0x99, 0x99)),
    ("Mars", Color::rgb(0xcc, 0x65, 0x3f)),
    ("Jupiter", Color::rgb(0xbf, 0x8f, 0x5c)),
    ("Saturn", Color::rgb(0xde, 0xcf, 0x83)),
    ("Uranus", Color::rgb(0x7e, 0xbe, 0xc2)),
    ("Neptune", Color::rgb(0x3b, 0x66, 0xd4)),
];

/// Looks up the default display color of a body by name.
///
/// Returns `None` for bodies without a default color.
pub fn body_color(name: &str) -> Option<Color> {
    BODY_COLORS
        .iter()
        .find(|(body, _)| *body == name)
        .map(|&(_, color)| color)
}

/// Default color cycle used by the bundled backends when the caller
/// doesn't pick a color.
pub const PALETTE: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];
