//! Optional-color wrapper.
//!
//! [`Color`] distinguishes "no color set" (inherit/default) from every
//! explicit RGBA value, including the value the accessors fall back to.
//! Text forms are handled by [`crate::property::parser`]; this module holds
//! the storage type plus the hex/named lookup tables it needs.

use std::fmt;

/// The implicit fallback used by the component accessors: opaque black.
const DEFAULT_RGBA: [u8; 4] = [0, 0, 0, 255];

/// An optionally-set RGBA color.
///
/// Equality and hashing treat the unset state as distinct from any explicit
/// color, so `Color::NONE != Color::new(0, 0, 0)` even though both read back
/// as black through the accessors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    rgba: Option<[u8; 4]>,
}

impl Color {
    /// The unset color.
    pub const NONE: Color = Color { rgba: None };

    /// Fully opaque white / black, for convenience in defaults.
    pub const WHITE: Color = Color { rgba: Some([255, 255, 255, 255]) };
    pub const BLACK: Color = Color { rgba: Some([0, 0, 0, 255]) };

    /// Create an opaque color from RGB components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { rgba: Some([red, green, blue, 255]) }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { rgba: Some([red, green, blue, alpha]) }
    }

    /// Whether an explicit color was set.
    pub const fn is_set(self) -> bool {
        self.rgba.is_some()
    }

    /// The stored components, or the caller-supplied default when unset.
    pub fn components_or(self, default: [u8; 4]) -> [u8; 4] {
        self.rgba.unwrap_or(default)
    }

    /// The stored components, or opaque black when unset.
    pub fn components(self) -> [u8; 4] {
        self.components_or(DEFAULT_RGBA)
    }

    /// Red component (falls back to the implicit default when unset).
    pub fn red(self) -> u8 {
        self.components()[0]
    }

    /// Green component (falls back to the implicit default when unset).
    pub fn green(self) -> u8 {
        self.components()[1]
    }

    /// Blue component (falls back to the implicit default when unset).
    pub fn blue(self) -> u8 {
        self.components()[2]
    }

    /// Alpha component (falls back to the implicit default when unset).
    pub fn alpha(self) -> u8 {
        self.components()[3]
    }

    /// This color with its alpha scaled by `opacity` in `[0, 1]`.
    ///
    /// The unset color stays unset.
    pub fn with_opacity(self, opacity: f32) -> Color {
        match self.rgba {
            Some([r, g, b, a]) => {
                let scaled = (a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
                Color { rgba: Some([r, g, b, scaled]) }
            }
            None => Color::NONE,
        }
    }

    /// Look up a named color (case-insensitive). `"none"` yields the unset
    /// color. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Color> {
        let lower = name.to_ascii_lowercase();
        Some(match lower.as_str() {
            "none" => Color::NONE,
            "black" => Color::new(0, 0, 0),
            "white" => Color::new(255, 255, 255),
            "red" => Color::new(255, 0, 0),
            "green" => Color::new(0, 255, 0),
            "blue" => Color::new(0, 0, 255),
            "yellow" => Color::new(255, 255, 0),
            "magenta" => Color::new(255, 0, 255),
            "cyan" => Color::new(0, 255, 255),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return None,
        })
    }

    /// Decode a `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa` literal.
    ///
    /// `text` must include the leading `#`. Returns `None` for other lengths.
    pub fn from_hex(text: &str) -> Option<Color> {
        let digits = text.strip_prefix('#')?;
        let nibble = |ch: u8| -> Option<u8> {
            match ch {
                b'0'..=b'9' => Some(ch - b'0'),
                b'a'..=b'f' => Some(ch - b'a' + 10),
                b'A'..=b'F' => Some(ch - b'A' + 10),
                _ => None,
            }
        };
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 | 4 => {
                let mut out = [0u8, 0, 0, 255];
                for (i, &b) in bytes.iter().enumerate() {
                    let n = nibble(b)?;
                    out[i] = n << 4 | n;
                }
                Some(Color { rgba: Some(out) })
            }
            6 | 8 => {
                let mut out = [0u8, 0, 0, 255];
                for i in 0..bytes.len() / 2 {
                    out[i] = nibble(bytes[2 * i])? << 4 | nibble(bytes[2 * i + 1])?;
                }
                Some(Color { rgba: Some(out) })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    /// The theme-format text form: `None`, `rgb(r,g,b)`, or `rgba(r,g,b,a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rgba {
            None => write!(f, "None"),
            Some([r, g, b, 255]) => write!(f, "rgb({r}, {g}, {b})"),
            Some([r, g, b, a]) => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
