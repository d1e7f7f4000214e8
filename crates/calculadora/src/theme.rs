//! Named colour themes
//!
//! The fourteen ttkbootstrap themes of the desktop window, each reduced to
//! the handful of colours the terminal front-end paints with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a colour from a `0xRRGGBB` literal
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// Colours used by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background
    pub background: Rgb,
    /// Display and label text
    pub foreground: Rgb,
    /// Borders and selector highlight
    pub primary: Rgb,
    /// Digit buttons
    pub secondary: Rgb,
    /// Operator and command buttons
    pub warning: Rgb,
    /// Text drawn on top of button faces
    pub button_text: Rgb,
}

/// Unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{name}' (expected one of: {expected})")]
pub struct UnknownTheme {
    /// The rejected name
    pub name: String,
    /// Comma-separated list of valid names
    pub expected: String,
}

/// Theme selection, applied process-wide and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark grey with orange operators
    #[default]
    Darkly,
    /// White with blue accents
    Cosmo,
    /// Flat navy and grey
    Flatly,
    /// Newspaper style with red accents
    Journal,
    /// Light with blue accents
    Litera,
    /// Light with cyan accents
    Lumen,
    /// Mint green
    Minty,
    /// Purple
    Pulse,
    /// Warm beige and blue
    Sandstone,
    /// Ubuntu orange
    United,
    /// Light with teal accents
    Yeti,
    /// Soft neumorphic blue-grey
    Morph,
    /// Minimal red
    Simplex,
    /// Sky blue
    Cerulean,
}

impl Theme {
    /// Every theme, in selector order
    pub const ALL: [Self; 14] = [
        Self::Darkly,
        Self::Cosmo,
        Self::Flatly,
        Self::Journal,
        Self::Litera,
        Self::Lumen,
        Self::Minty,
        Self::Pulse,
        Self::Sandstone,
        Self::United,
        Self::Yeti,
        Self::Morph,
        Self::Simplex,
        Self::Cerulean,
    ];

    /// Lowercase theme name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Darkly => "darkly",
            Self::Cosmo => "cosmo",
            Self::Flatly => "flatly",
            Self::Journal => "journal",
            Self::Litera => "litera",
            Self::Lumen => "lumen",
            Self::Minty => "minty",
            Self::Pulse => "pulse",
            Self::Sandstone => "sandstone",
            Self::United => "united",
            Self::Yeti => "yeti",
            Self::Morph => "morph",
            Self::Simplex => "simplex",
            Self::Cerulean => "cerulean",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The following theme in selector order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding theme in selector order, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Returns true for the dark theme
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Darkly)
    }

    /// Colours for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        const WHITE: Rgb = Rgb::hex(0xffffff);
        let (background, foreground, primary, secondary, warning) = match self {
            Self::Darkly => (0x222222, 0xffffff, 0x375a7f, 0x444444, 0xf39c12),
            Self::Cosmo => (0xffffff, 0x373a3c, 0x2780e3, 0x7e8081, 0xff7518),
            Self::Flatly => (0xffffff, 0x212529, 0x2c3e50, 0x95a5a6, 0xf39c12),
            Self::Journal => (0xffffff, 0x222222, 0xeb6864, 0xaaaaaa, 0xf5e625),
            Self::Litera => (0xffffff, 0x343a40, 0x4582ec, 0xadb5bd, 0xf0ad4e),
            Self::Lumen => (0xffffff, 0x555555, 0x158cba, 0x575757, 0xff851b),
            Self::Minty => (0xffffff, 0x5a5a5a, 0x78c2ad, 0xf3969a, 0xffce67),
            Self::Pulse => (0xffffff, 0x444444, 0x593196, 0xa991d4, 0xefa31d),
            Self::Sandstone => (0xffffff, 0x3e3f3a, 0x325d88, 0x8e8c84, 0xf47c3c),
            Self::United => (0xffffff, 0x333333, 0xe95420, 0xaea79f, 0xefb73e),
            Self::Yeti => (0xffffff, 0x222222, 0x008cba, 0x707070, 0xe99002),
            Self::Morph => (0xd9e3f1, 0x7f8a99, 0x378dfc, 0xaaaaaa, 0xffc107),
            Self::Simplex => (0xffffff, 0x444444, 0xd9230f, 0x7c7c7c, 0xd9831f),
            Self::Cerulean => (0xffffff, 0x495057, 0x2fa4e7, 0xe9ecef, 0xdd5600),
        };
        Palette {
            background: Rgb::hex(background),
            foreground: Rgb::hex(foreground),
            primary: Rgb::hex(primary),
            secondary: Rgb::hex(secondary),
            warning: Rgb::hex(warning),
            button_text: WHITE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme {
                name: s.to_string(),
                expected: Self::ALL.map(Self::name).join(", "),
            })
    }
}
