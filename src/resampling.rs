//! Resampling method identifiers.
//!
//! The resampling method selects the interpolation algorithm the host
//! renderer uses to rescale raster data when serving tiles at zoom levels
//! that do not match a native raster resolution. The settings record carries
//! one method as the server-wide default.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Interpolation algorithm used to rescale raster data between zoom levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    /// Nearest-neighbor sampling. Fastest, blocky output.
    #[default]
    Nearest,

    /// Linear interpolation in both axes.
    Bilinear,

    /// Cubic (Catmull-Rom) interpolation.
    Cubic,

    /// Gaussian sampling.
    Gaussian,

    /// Lanczos windowed sinc. Highest quality, highest cost.
    Lanczos,
}

impl ResamplingMethod {
    /// All recognized resampling methods, in declaration order.
    pub const ALL: [ResamplingMethod; 5] = [
        ResamplingMethod::Nearest,
        ResamplingMethod::Bilinear,
        ResamplingMethod::Cubic,
        ResamplingMethod::Gaussian,
        ResamplingMethod::Lanczos,
    ];

    /// The lowercase identifier used in settings keys.
    pub fn name(&self) -> &'static str {
        match self {
            ResamplingMethod::Nearest => "nearest",
            ResamplingMethod::Bilinear => "bilinear",
            ResamplingMethod::Cubic => "cubic",
            ResamplingMethod::Gaussian => "gaussian",
            ResamplingMethod::Lanczos => "lanczos",
        }
    }

    /// The `image` crate filter implementing this method.
    pub fn filter_type(&self) -> FilterType {
        match self {
            ResamplingMethod::Nearest => FilterType::Nearest,
            ResamplingMethod::Bilinear => FilterType::Triangle,
            ResamplingMethod::Cubic => FilterType::CatmullRom,
            ResamplingMethod::Gaussian => FilterType::Gaussian,
            ResamplingMethod::Lanczos => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResamplingMethod {
    type Err = SettingsError;

    /// Parse a resampling method identifier, case-insensitively.
    ///
    /// `linear` is accepted as an alias for `bilinear`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResamplingMethod::Nearest),
            "bilinear" | "linear" => Ok(ResamplingMethod::Bilinear),
            "cubic" => Ok(ResamplingMethod::Cubic),
            "gaussian" => Ok(ResamplingMethod::Gaussian),
            "lanczos" => Ok(ResamplingMethod::Lanczos),
            _ => Err(SettingsError::UnknownResampling(s.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
