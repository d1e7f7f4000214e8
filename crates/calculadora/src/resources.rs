//! Asset lookup and logo decoding
//!
//! The logo is optional decoration: a missing file is skipped quietly and an
//! unreadable one is skipped with a warning. Neither ever stops the calculator.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LogoSize;
use crate::theme::Rgb;

/// File name of the banner logo
pub const LOGO_FILE: &str = "Senai.png";

/// Result type for resource loading
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Resource loading errors
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No search directory contains the asset
    #[error("asset '{0}' not found")]
    NotFound(String),

    /// The file exists but could not be decoded
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        /// Offending file
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// Requested a logo with a zero dimension
    #[error("invalid logo size {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Resolves asset names against an ordered list of directories
#[derive(Debug, Clone, Default)]
pub struct ResourceLocator {
    dirs: Vec<PathBuf>,
}

impl ResourceLocator {
    /// Searches `configured` (if any), then the executable's directory, then
    /// the working directory
    #[must_use]
    pub fn new(configured: Option<&Path>) -> Self {
        let mut dirs = Vec::new();
        if let Some(dir) = configured {
            dirs.push(dir.to_path_buf());
        }
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            dirs.push(dir);
        }
        if let Ok(dir) = std::env::current_dir() {
            dirs.push(dir);
        }
        Self { dirs }
    }

    /// Searches exactly `dirs`, in order
    #[must_use]
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Directories searched, in order
    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// First existing file called `name`
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

/// Logo pixels resized for terminal rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Logo {
    /// Decodes `path` and resizes it to `width` x `height` with a Lanczos
    /// filter
    pub fn load(path: &Path, width: u32, height: u32) -> ResourceResult<Self> {
        if width == 0 || height == 0 {
            return Err(ResourceError::InvalidSize { width, height });
        }
        let img = image::open(path).map_err(|source| ResourceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(&img, width, height))
    }

    /// Resizes an already decoded image
    #[must_use]
    pub fn from_image(img: &DynamicImage, width: u32, height: u32) -> Self {
        let rgb = if img.width() == width && img.height() == height {
            img.to_rgb8()
        } else {
            img.resize_exact(width, height, FilterType::Lanczos3).to_rgb8()
        };
        let pixels = rgb.pixels().map(|p| Rgb(p[0], p[1], p[2])).collect();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels,
        }
    }

    /// Looks up [`LOGO_FILE`] and loads it, degrading to `None` on any failure
    #[must_use]
    pub fn load_optional(locator: &ResourceLocator, size: LogoSize) -> Option<Self> {
        let Some(path) = locator.locate(LOGO_FILE) else {
            debug!(file = LOGO_FILE, dirs = ?locator.search_dirs(), "logo not found");
            return None;
        };
        match Self::load(&path, size.width, size.height) {
            Ok(logo) => {
                debug!(path = %path.display(), "logo loaded");
                Some(logo)
            }
            Err(err) => {
                warn!(error = %err, "skipping logo");
                None
            }
        }
    }

    /// Width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Colour at (`x`, `y`), or `None` outside the image
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()?;
        self.pixels.get(index).copied()
    }
}
