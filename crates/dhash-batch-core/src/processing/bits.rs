//! MSB-first bit packing.
//!
//! Bit `n` of a sequence lands in byte `n / 8` at mask `0x80 >> (n % 8)`.
//! Unused trailing bits of the last byte stay zero.

/// Accumulates bits and packs them into bytes, most significant bit first
#[derive(Debug, Default)]
pub(crate) struct BitPacker {
    bytes: Vec<u8>,
    current: u8,
    filled: u8,
    len: usize,
}

impl BitPacker {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            ..Self::default()
        }
    }

    pub fn push(&mut self, bit: bool) {
        if bit {
            self.current |= 0x80 >> self.filled;
        }
        self.filled += 1;
        self.len += 1;

        if self.filled == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    pub fn extend(&mut self, bits: impl IntoIterator<Item = bool>) {
        for bit in bits {
            self.push(bit);
        }
    }

    /// Packed bytes and the number of bits they hold
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        // Flush the partial byte
        if self.filled > 0 {
            self.bytes.push(self.current);
        }
        (self.bytes, self.len)
    }
}

/// Pack a bit sequence into `ceil(len / 8)` bytes
pub(crate) fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut packer = BitPacker::with_capacity(bits.len());
    packer.extend(bits.iter().copied());
    packer.finish().0
}
