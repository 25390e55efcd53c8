//! RGB color values used by `<col>` and persistent page colors

use crate::utils::CoreError;
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// White, used for text on dark bubbles
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Black, used for text on light bubbles
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create color from components
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `RRGGBBAA` hex; alpha is ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// # use spm_core::render::Rgb;
    /// assert_eq!(Rgb::from_hex("ff8000")?, Rgb::new(255, 128, 0));
    /// assert_eq!(Rgb::from_hex("00FF00ff")?, Rgb::new(0, 255, 0));
    /// assert!(Rgb::from_hex("#ff0000").is_err());
    /// # Ok::<(), spm_core::CoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] if `hex` is not 6 or 8 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::invalid_color(hex));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16).map_err(|_| CoreError::invalid_color(hex))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Pick the default text color for a bubble background
    #[must_use]
    pub const fn text_on(light_text: bool) -> Self {
        if light_text {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
