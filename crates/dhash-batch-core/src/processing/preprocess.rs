//! Grid preprocessing: luminance reduction and downsampling to the shared grid.

use image::imageops;
use image::{DynamicImage, GenericImageView, GrayImage};
use log::debug;

use crate::config::{HashConfig, MAX_GRID_LENGTH};
use crate::error::{Error, Result};

/// Single-channel luminance grid shared by every request of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaGrid {
    pixels: GrayImage,
}

impl LumaGrid {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Luminance at column `x`, row `y`
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y)[0]
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.pixels
    }
}

impl From<GrayImage> for LumaGrid {
    fn from(pixels: GrayImage) -> Self {
        Self { pixels }
    }
}

/// Reduce `img` to luminance and resample it to the grid needed for `max_length`.
///
/// The grid is `(max_length + 1)` wide; its height follows
/// [`HashConfig::grid_shape`].
pub fn prepare(img: &DynamicImage, max_length: u32, config: &HashConfig) -> Result<LumaGrid> {
    let (src_width, src_height) = img.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(Error::Preprocess(format!(
            "source image has no pixels ({}x{})",
            src_width, src_height
        )));
    }
    if max_length == 0 {
        return Err(Error::Preprocess(
            "grid length must be at least 1".to_string(),
        ));
    }

    if max_length > MAX_GRID_LENGTH {
        return Err(Error::Preprocess(format!(
            "grid length {} exceeds the ceiling of {}",
            max_length, MAX_GRID_LENGTH
        )));
    }

    let (width, height) = config.grid_shape.dimensions(max_length).ok_or_else(|| {
        Error::Preprocess(format!("grid for length {} overflows", max_length))
    })?;
    debug!(
        "Preparing {}x{} luminance grid from {}x{} source",
        width, height, src_width, src_height
    );

    // Grayscale first so the resize works on a single channel
    let gray = img.to_luma8();
    let small = imageops::resize(&gray, width, height, config.filter.filter_type());

    if small.dimensions() != (width, height) {
        return Err(Error::Preprocess(format!(
            "resampling produced {}x{}, expected {}x{}",
            small.width(),
            small.height(),
            width,
            height
        )));
    }

    Ok(LumaGrid::from(small))
}
