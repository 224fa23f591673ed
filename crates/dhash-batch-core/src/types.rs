use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Hash variants that can be requested from a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashKind {
    /// Row gradients only (`length` bits)
    Horizontal,

    /// Column gradients only (`length` bits)
    Vertical,

    /// Row gradients followed by column gradients (`2 * length` bits)
    Combined,
}

impl HashKind {
    /// Number of bits a fingerprint of this kind carries for `length`
    pub fn bit_len(self, length: u32) -> usize {
        match self {
            Self::Horizontal | Self::Vertical => length as usize,
            Self::Combined => 2 * length as usize,
        }
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h" | "horizontal" | "hhash" => Ok(Self::Horizontal),
            "v" | "vertical" | "vhash" => Ok(Self::Vertical),
            "d" | "combined" | "dhash" => Ok(Self::Combined),
            other => Err(Error::InvalidInput(format!("unknown hash kind: {}", other))),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// A single hash request: which gradients, and how many bits per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashRequest {
    pub kind: HashKind,
    pub length: u32,
}

impl HashRequest {
    pub fn new(kind: HashKind, length: u32) -> Self {
        Self { kind, length }
    }

    pub fn horizontal(length: u32) -> Self {
        Self::new(HashKind::Horizontal, length)
    }

    pub fn vertical(length: u32) -> Self {
        Self::new(HashKind::Vertical, length)
    }

    pub fn combined(length: u32) -> Self {
        Self::new(HashKind::Combined, length)
    }
}

/// Parses `kind:length`, e.g. `h:8`, `vertical:16` or `dhash:8`
impl FromStr for HashRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, length) = s.split_once(':').ok_or_else(|| {
            Error::InvalidInput(format!("expected kind:length, got {:?}", s))
        })?;

        let length = length
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::InvalidInput(format!("bad length in {:?}: {}", s, e)))?;

        Ok(Self::new(kind.trim().parse()?, length))
    }
}

impl fmt::Display for HashRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.length)
    }
}

/// Direction of the adjacent-sample comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compare column `c` with column `c + 1`
    Row,

    /// Compare row `r` with row `r + 1`
    Column,
}

/// A packed fingerprint, most significant bit first within each byte
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    bytes: Vec<u8>,
    bits: usize,
}

impl Fingerprint {
    pub(crate) fn from_packed(bytes: Vec<u8>, bits: usize) -> Self {
        debug_assert_eq!(bytes.len(), bits.div_ceil(8));
        Self { bytes, bits }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of meaningful bits; trailing bits of the last byte are zero
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Bit `n` in fingerprint order, `None` past the end
    pub fn bit(&self, n: usize) -> Option<bool> {
        if n >= self.bits {
            return None;
        }
        Some(self.bytes[n / 8] & (0x80 >> (n % 8)) != 0)
    }

    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
