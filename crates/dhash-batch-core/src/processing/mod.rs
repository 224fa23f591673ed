// Core modules
mod bits;

pub mod batch;
pub mod gradient;
pub mod preprocess;

// Reexport core functionality
pub use batch::{compute_batch, dhash, dhash_horizontal, dhash_vertical, BatchHasher};
pub use gradient::{encode_combined, encode_directional, required_dimensions};
pub use preprocess::{prepare, LumaGrid};

#[cfg(test)]
mod tests;
