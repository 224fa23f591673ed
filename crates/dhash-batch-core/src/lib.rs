//! Batch difference hashing for near-duplicate image detection.
//!
//! This library computes compact "difference hash" fingerprints from a decoded
//! image. Visually similar images give fingerprints with a small bit distance.
//!
//! - One shared preprocessing pass per image: luminance reduction and
//!   downsampling to a grid sized for the largest request
//! - Horizontal, vertical and combined gradient fingerprints of any length
//! - All-or-nothing batches: results in request order, or the first error
//!
//! ```no_run
//! use dhash_batch_core::{compute_batch, HashRequest};
//!
//! let img = image::open("photo.jpg").unwrap();
//! let hashes = compute_batch(
//!     &img,
//!     &[HashRequest::horizontal(8), HashRequest::combined(16)],
//! )
//! .unwrap();
//! assert_eq!(hashes[0].as_bytes().len(), 1);
//! assert_eq!(hashes[1].as_bytes().len(), 4);
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use processing::{
    compute_batch, dhash, dhash_horizontal, dhash_vertical, encode_combined, encode_directional,
    prepare, BatchHasher, LumaGrid,
};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod processing;
pub mod types;
