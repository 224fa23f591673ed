//! Batch coordination: one preprocessing pass, many fingerprints.
//!
//! The grid is sized from the largest requested length, then every request is
//! encoded from that same grid. Results are index-aligned with the requests and
//! the first failure (by request index) aborts the whole batch.

use image::DynamicImage;
use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::config::HashConfig;
use crate::error::{Error, Result};
use crate::types::{Axis, Fingerprint, HashKind, HashRequest};

use super::gradient::{encode_combined, encode_directional};
use super::preprocess::{prepare, LumaGrid};

/// Stateless batch hashing engine
#[derive(Debug, Clone, Default)]
pub struct BatchHasher {
    config: HashConfig,
}

impl BatchHasher {
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Compute every requested fingerprint for `img`.
    ///
    /// Returns one fingerprint per request, in request order, or the first error.
    pub fn compute(&self, img: &DynamicImage, requests: &[HashRequest]) -> Result<Vec<Fingerprint>> {
        self.config.validate()?;
        let max_length = self.max_length(requests)?;

        let grid = prepare(img, max_length, &self.config)?;
        debug!(
            "Encoding {} request(s) from a {}x{} grid",
            requests.len(),
            grid.width(),
            grid.height()
        );

        let result = if self.config.parallel {
            encode_parallel(&grid, requests)
        } else {
            requests
                .iter()
                .map(|request| encode_request(&grid, request))
                .collect()
        };

        if let Err(e) = &result {
            warn!("Batch of {} request(s) failed: {}", requests.len(), e);
        }
        result
    }

    /// Largest requested length, after validating every request
    fn max_length(&self, requests: &[HashRequest]) -> Result<u32> {
        if requests.is_empty() {
            return Err(Error::InvalidInput("no hash requests".to_string()));
        }

        let mut max_length = 0;
        for (index, request) in requests.iter().enumerate() {
            if request.length == 0 {
                return Err(Error::InvalidInput(format!(
                    "request {} ({}) has zero length",
                    index, request.kind
                )));
            }
            if request.length > self.config.max_length {
                return Err(Error::InvalidInput(format!(
                    "request {} length {} exceeds the limit of {}",
                    index, request.length, self.config.max_length
                )));
            }
            max_length = max_length.max(request.length);
        }

        Ok(max_length)
    }
}

fn encode_request(grid: &LumaGrid, request: &HashRequest) -> Result<Fingerprint> {
    trace!("Encoding {}", request);
    match request.kind {
        HashKind::Horizontal => encode_directional(grid, request.length, Axis::Row),
        HashKind::Vertical => encode_directional(grid, request.length, Axis::Column),
        HashKind::Combined => encode_combined(grid, request.length),
    }
}

fn encode_parallel(grid: &LumaGrid, requests: &[HashRequest]) -> Result<Vec<Fingerprint>> {
    // Collect every slot first so the reported error is the lowest index
    let slots: Vec<Result<Fingerprint>> = requests
        .par_iter()
        .map(|request| encode_request(grid, request))
        .collect();

    slots.into_iter().collect()
}

/// Compute a batch with the default configuration
pub fn compute_batch(img: &DynamicImage, requests: &[HashRequest]) -> Result<Vec<Fingerprint>> {
    BatchHasher::default().compute(img, requests)
}

fn single(img: &DynamicImage, request: HashRequest) -> Result<Fingerprint> {
    let mut fingerprints = compute_batch(img, &[request])?;
    fingerprints
        .pop()
        .ok_or_else(|| Error::Encode("batch returned no fingerprint".to_string()))
}

/// Combined row and column hash, `2 * length` bits
pub fn dhash(img: &DynamicImage, length: u32) -> Result<Fingerprint> {
    single(img, HashRequest::combined(length))
}

/// Row gradient hash, `length` bits
pub fn dhash_horizontal(img: &DynamicImage, length: u32) -> Result<Fingerprint> {
    single(img, HashRequest::horizontal(length))
}

/// Column gradient hash, `length` bits
pub fn dhash_vertical(img: &DynamicImage, length: u32) -> Result<Fingerprint> {
    single(img, HashRequest::vertical(length))
}
