use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on a single request length unless configured otherwise.
///
/// A length of `n` resamples the source into an `(n + 1) x (n + 1)` grid.
pub const DEFAULT_MAX_LENGTH: u32 = 1024;

/// Hard ceiling for [`HashConfig::max_length`]; keeps the grid at or below 64 MiB.
pub const MAX_GRID_LENGTH: u32 = 8191;

/// Smoothing filters available for the downsampling step.
///
/// Nearest-neighbour is not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Linear filter
    Triangle,

    /// Cubic filter
    CatmullRom,

    /// Gaussian filter
    Gaussian,

    /// Lanczos with window 3
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// How the shared grid is shaped from the largest requested length `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridShape {
    /// `(L + 1) x (L + 1)`: serves row and column gradients at every length
    #[default]
    Square,

    /// `(L + 1) x L`: the row-gradient shape only.
    ///
    /// Column gradients at length `L` need one more row, so Vertical and
    /// Combined requests at the batch maximum fail with [`Error::Encode`].
    Short,
}

impl GridShape {
    /// Grid `(width, height)` for the largest length in a batch, `None` on overflow
    pub fn dimensions(self, max_length: u32) -> Option<(u32, u32)> {
        let side = max_length.checked_add(1)?;
        match self {
            Self::Square => Some((side, side)),
            Self::Short => Some((side, max_length)),
        }
    }
}

/// Configuration for the batch hashing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Filter used when downsampling to the shared grid
    pub filter: ResampleFilter,

    /// Shape of the shared grid
    pub grid_shape: GridShape,

    /// Largest accepted request length
    pub max_length: u32,

    /// Encode requests on the rayon pool instead of sequentially
    pub parallel: bool,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            filter: ResampleFilter::default(),
            grid_shape: GridShape::default(),
            max_length: DEFAULT_MAX_LENGTH,
            parallel: false,
        }
    }
}

impl HashConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(Error::InvalidInput(
                "max_length must be at least 1".to_string(),
            ));
        }

        if self.max_length > MAX_GRID_LENGTH {
            return Err(Error::InvalidInput(format!(
                "max_length {} exceeds the ceiling of {}",
                self.max_length, MAX_GRID_LENGTH
            )));
        }

        Ok(())
    }
}
