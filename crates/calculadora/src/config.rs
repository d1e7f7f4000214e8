//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Window title
pub const WINDOW_TITLE: &str = "Calculadora SENAI";

/// Logo dimensions in image pixels.
///
/// Half-block rendering packs two pixel rows into one terminal row, so the
/// logo occupies `width` columns and `height / 2` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSize {
    /// Width in pixels (terminal columns)
    pub width: u32,
    /// Height in pixels (two per terminal row)
    pub height: u32,
}

impl Default for LogoSize {
    fn default() -> Self {
        // 3:1, matching the 300x100 banner
        Self {
            width: 30,
            height: 10,
        }
    }
}

impl LogoSize {
    /// Terminal rows needed to draw the logo
    #[must_use]
    pub const fn rows(self) -> u32 {
        self.height.div_ceil(2)
    }
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme applied at startup
    pub theme: Theme,
    /// Extra directory searched first for assets
    pub assets_dir: Option<PathBuf>,
    /// Logo dimensions
    pub logo_size: LogoSize,
    /// Load and draw the logo
    pub show_logo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            assets_dir: None,
            logo_size: LogoSize::default(),
            show_logo: true,
        }
    }
}

impl AppConfig {
    /// Default configuration with the logo enabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set startup theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set assets directory
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.assets_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set logo size
    #[must_use]
    pub const fn with_logo_size(mut self, width: u32, height: u32) -> Self {
        self.logo_size = LogoSize { width, height };
        self
    }

    /// Enable or disable the logo
    #[must_use]
    pub const fn with_logo(mut self, show: bool) -> Self {
        self.show_logo = show;
        self
    }
}
