//! Gradient encoding over the shared luminance grid.
//!
//! Each call yields exactly `length` bits. For [`Axis::Row`], bit `c` compares
//! the brightness of column `c` against column `c + 1`, summed over the first
//! `length` rows. [`Axis::Column`] is the transpose: bit `r` compares row `r`
//! against row `r + 1` over the first `length` columns. A bit is set when the
//! earlier line is strictly brighter.

use crate::error::{Error, Result};
use crate::types::{Axis, Fingerprint};

use super::bits::{pack_bits, BitPacker};
use super::preprocess::LumaGrid;

/// Grid `(width, height)` needed to encode `length` bits along `axis`, `None` on overflow
pub fn required_dimensions(length: u32, axis: Axis) -> Option<(u32, u32)> {
    let span = length.checked_add(1)?;
    match axis {
        Axis::Row => Some((span, length)),
        Axis::Column => Some((length, span)),
    }
}

/// Encode `length` gradient bits along `axis` and pack them MSB-first
pub fn encode_directional(grid: &LumaGrid, length: u32, axis: Axis) -> Result<Fingerprint> {
    let bits = gradient_bits(grid, length, axis)?;
    let len = bits.len();
    Ok(Fingerprint::from_packed(pack_bits(&bits), len))
}

/// Row bits followed by column bits, packed as one sequence of `2 * length` bits
pub fn encode_combined(grid: &LumaGrid, length: u32) -> Result<Fingerprint> {
    let row = gradient_bits(grid, length, Axis::Row)?;
    let column = gradient_bits(grid, length, Axis::Column)?;

    let mut packer = BitPacker::with_capacity(row.len() + column.len());
    packer.extend(row);
    packer.extend(column);

    let (bytes, len) = packer.finish();
    Ok(Fingerprint::from_packed(bytes, len))
}

pub(crate) fn gradient_bits(grid: &LumaGrid, length: u32, axis: Axis) -> Result<Vec<bool>> {
    if length == 0 {
        return Err(Error::Encode("length must be at least 1".to_string()));
    }

    let (need_width, need_height) = required_dimensions(length, axis).ok_or_else(|| {
        Error::Encode(format!("{:?} gradient of length {} overflows", axis, length))
    })?;
    if grid.width() < need_width || grid.height() < need_height {
        return Err(Error::Encode(format!(
            "{:?} gradient of length {} needs a {}x{} grid, got {}x{}",
            axis,
            length,
            need_width,
            need_height,
            grid.width(),
            grid.height()
        )));
    }

    // Brightness of each line across the window; length + 1 lines
    let profile: Vec<u32> = match axis {
        Axis::Row => (0..=length)
            .map(|x| (0..length).map(|y| u32::from(grid.sample(x, y))).sum())
            .collect(),
        Axis::Column => (0..=length)
            .map(|y| (0..length).map(|x| u32::from(grid.sample(x, y))).sum())
            .collect(),
    };

    Ok(profile.windows(2).map(|pair| pair[0] > pair[1]).collect())
}
