//! Synthetic test images.
//!
//! Everything is generated in memory so the tests need no fixture files.

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| Rgb(rgb)))
}

/// Bright on the left, dark on the right
pub fn falling_horizontal(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, _| {
        let v = ((width - 1 - x) * 255 / (width - 1)) as u8;
        Rgb([v, v, v])
    }))
}

/// Dark on the left, bright on the right
pub fn rising_horizontal(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1)) as u8;
        Rgb([v, v, v])
    }))
}

/// Deterministic textured image with structure in both directions
pub fn textured(width: u32, height: u32) -> DynamicImage {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        let r = ((x * 7 + y * 3) % 256) as u8;
        let g = ((x * x + y * 5) % 256) as u8;
        let b = (((x / 16) ^ (y / 16)) * 40 % 256) as u8;
        Rgb([r, g, b])
    });
    DynamicImage::ImageRgb8(img)
}

/// Smooth waves whose content scales with the image size
pub fn waves(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        let u = x as f64 / width as f64;
        let v = y as f64 / height as f64;
        let l = 127.5 + 110.0 * (3.0 * u + 0.4).sin() * (2.2 * v + 0.3).cos();
        let l = l.round().clamp(0.0, 255.0) as u8;
        Rgb([l, l.saturating_add(20), l / 2])
    }))
}

/// Hamming distance between two equally long fingerprints
pub fn hamming(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}
