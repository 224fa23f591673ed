use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the batch hashing engine.
///
/// The set of variants is closed: a batch either succeeds completely or fails
/// with exactly one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty request list, zero length, or a length above the configured limit
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The image could not be reduced to the shared luminance grid
    #[error("Preprocessing failed: {0}")]
    Preprocess(String),

    /// The grid cannot serve the requested axis and length
    #[error("Encoding failed: {0}")]
    Encode(String),
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    pub fn is_preprocess(&self) -> bool {
        matches!(self, Error::Preprocess(_))
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }
}
