//! The chunked big unsigned integer type.
//!
//! A [`BigUint`] is an ordered sequence of 32-bit chunks, least significant
//! chunk first, with value Σ `chunks[i] · 2^(32·i)`. The representation is
//! kept canonical at all times: the most significant chunk is never zero,
//! and the value zero is the empty sequence. Every mutating operation ends
//! by trimming trailing zero chunks back to that form.

use smallvec::{smallvec, SmallVec};

/// One storage chunk.
pub(crate) type Chunk = u32;

/// Accumulator wide enough for a chunk operation plus its carry.
pub(crate) type Wide = u64;

/// Width of one chunk in bits.
pub(crate) const CHUNK_BITS: usize = Chunk::BITS as usize;

/// Mask selecting the low chunk of a [`Wide`] value.
pub(crate) const CHUNK_MASK: Wide = Chunk::MAX as Wide;

/// Chunks stored inline before spilling to the heap.
const INLINE_CHUNKS: usize = 4;

pub(crate) type ChunkVec = SmallVec<[Chunk; INLINE_CHUNKS]>;

/// An arbitrary precision unsigned integer.
///
/// `BigUint` supports bit-level access, addition, the bitwise logical
/// operators and left shift; see the crate docs for the full operator set.
/// Compound operators (`+=`, `|=`, ...) mutate in place, the value forms
/// copy the left operand first. Each instance exclusively owns its chunk
/// storage; cloning deep-copies it.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct BigUint {
    pub(crate) chunks: ChunkVec,
}

impl BigUint {
    /// Creates the value zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunks: ChunkVec::new(),
        }
    }

    /// Returns the number of chunks in the canonical representation.
    ///
    /// Zero occupies no chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the bit at `pos`.
    ///
    /// Positions at or beyond the current magnitude read as `false`.
    #[must_use]
    pub fn bit(&self, pos: usize) -> bool {
        self.chunks
            .get(pos / CHUNK_BITS)
            .map_or(false, |&chunk| (chunk >> (pos % CHUNK_BITS)) & 1 == 1)
    }

    /// Sets the bit at `pos` to `value`, growing the magnitude as needed.
    ///
    /// Writing a bit that already holds `value` is a no-op. Clearing the
    /// highest set bit re-normalizes, so the representation stays canonical.
    pub fn set_bit(&mut self, pos: usize, value: bool) {
        if self.bit(pos) == value {
            return;
        }

        let index = pos / CHUNK_BITS;
        if index >= self.chunks.len() {
            self.chunks.resize(index + 1, 0);
        }
        self.chunks[index] ^= 1 << (pos % CHUNK_BITS);
        self.normalize();
    }

    /// Returns the canonical bit length: one past the highest set bit.
    ///
    /// Zero has length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self.chunks.last() {
            None => 0,
            Some(&top) => CHUNK_BITS * self.chunks.len() - top.leading_zeros() as usize,
        }
    }

    /// Returns the floor of the base-2 logarithm, `bit_len() - 1`.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    #[must_use]
    pub fn ilog2(&self) -> usize {
        assert!(!self.chunks.is_empty(), "ilog2 of zero is undefined");
        self.bit_len() - 1
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.chunks.len() > 2 {
            return None;
        }
        let lo = Wide::from(self.chunk(0));
        let hi = Wide::from(self.chunk(1));
        Some((hi << CHUNK_BITS) | lo)
    }

    /// Returns the chunk at `index`, reading zero past the magnitude.
    pub(crate) fn chunk(&self, index: usize) -> Chunk {
        self.chunks.get(index).copied().unwrap_or(0)
    }

    /// Trims trailing zero chunks, restoring canonical form.
    pub(crate) fn normalize(&mut self) {
        while self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
    }
}

impl num_traits::Zero for BigUint {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        let mut out = Self {
            chunks: smallvec![(value & CHUNK_MASK) as Chunk, (value >> CHUNK_BITS) as Chunk],
        };
        out.normalize();
        out
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        let mut out = Self::new();
        if value != 0 {
            out.chunks.push(value);
        }
        out
    }
}

/// Collects a little-endian bit sequence: the first item is bit 0.
///
/// This is the construction path for callers that produce one bit at a
/// time, e.g. a random bit source.
impl FromIterator<bool> for BigUint {
    fn from_iter<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut out = Self::new();
        for (pos, bit) in bits.into_iter().enumerate() {
            if bit {
                out.set_bit(pos, true);
            }
        }
        out
    }
}
