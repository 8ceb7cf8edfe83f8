//! Operator implementations for [`BigUint`].
//!
//! The assigning forms hold the algorithms and mutate the left operand in
//! place; the value-returning forms copy the left operand and delegate.
//! None of the operations can fail: missing chunks read as zero, results
//! are re-normalized, and the chunk storage grows exactly as each
//! algorithm requires.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign,
};

use crate::biguint::{BigUint, Chunk, Wide, CHUNK_BITS, CHUNK_MASK};

impl AddAssign<&BigUint> for BigUint {
    /// Ripple-carry addition over chunks, least significant first.
    fn add_assign(&mut self, rhs: &BigUint) {
        // One chunk of headroom for the final carry.
        let longest = self.chunks.len().max(rhs.chunks.len());
        self.chunks.resize(longest + 1, 0);

        let mut carry: Wide = 0;
        for (index, &chunk) in rhs.chunks.iter().enumerate() {
            let sum = carry + Wide::from(self.chunks[index]) + Wide::from(chunk);
            carry = sum >> CHUNK_BITS;
            self.chunks[index] = (sum & CHUNK_MASK) as Chunk;
        }

        // The carry keeps rippling through chunks the right operand
        // doesn't cover; the headroom chunk bounds the loop.
        let mut index = rhs.chunks.len();
        while carry != 0 {
            let sum = carry + Wide::from(self.chunks[index]);
            carry = sum >> CHUNK_BITS;
            self.chunks[index] = (sum & CHUNK_MASK) as Chunk;
            index += 1;
        }

        self.normalize();
    }
}

impl AddAssign for BigUint {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add for BigUint {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<&BigUint> for BigUint {
    type Output = Self;

    fn add(mut self, rhs: &BigUint) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

impl BitOrAssign<&BigUint> for BigUint {
    fn bitor_assign(&mut self, rhs: &BigUint) {
        if rhs.chunks.len() > self.chunks.len() {
            self.chunks.resize(rhs.chunks.len(), 0);
        }
        for (dst, &src) in self.chunks.iter_mut().zip(&rhs.chunks) {
            *dst |= src;
        }
        self.normalize();
    }
}

impl BitOrAssign for BigUint {
    fn bitor_assign(&mut self, rhs: Self) {
        *self |= &rhs;
    }
}

impl BitOr for BigUint {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= &rhs;
        self
    }
}

impl BitOr<&BigUint> for BigUint {
    type Output = Self;

    fn bitor(mut self, rhs: &BigUint) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOr for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.clone() | rhs
    }
}

impl BitAndAssign<&BigUint> for BigUint {
    /// Chunks beyond the shorter operand AND with implicit zeros, so the
    /// destination is truncated to the right operand's chunk count first.
    fn bitand_assign(&mut self, rhs: &BigUint) {
        self.chunks.truncate(rhs.chunks.len());
        for (dst, &src) in self.chunks.iter_mut().zip(&rhs.chunks) {
            *dst &= src;
        }
        self.normalize();
    }
}

impl BitAndAssign for BigUint {
    fn bitand_assign(&mut self, rhs: Self) {
        *self &= &rhs;
    }
}

impl BitAnd for BigUint {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= &rhs;
        self
    }
}

impl BitAnd<&BigUint> for BigUint {
    type Output = Self;

    fn bitand(mut self, rhs: &BigUint) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitAnd for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.clone() & rhs
    }
}

impl BitXorAssign<&BigUint> for BigUint {
    fn bitxor_assign(&mut self, rhs: &BigUint) {
        if rhs.chunks.len() > self.chunks.len() {
            self.chunks.resize(rhs.chunks.len(), 0);
        }
        for (dst, &src) in self.chunks.iter_mut().zip(&rhs.chunks) {
            *dst ^= src;
        }
        self.normalize();
    }
}

impl BitXorAssign for BigUint {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self ^= &rhs;
    }
}

impl BitXor for BigUint {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= &rhs;
        self
    }
}

impl BitXor<&BigUint> for BigUint {
    type Output = Self;

    fn bitxor(mut self, rhs: &BigUint) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl BitXor for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.clone() ^ rhs
    }
}

impl ShlAssign<usize> for BigUint {
    /// Shifts left by `dec` bits: an intra-chunk shift-with-carry pass
    /// followed by prepending `dec / 32` whole zero chunks.
    ///
    /// Panics if the shifted chunk count overflows `usize`.
    fn shl_assign(&mut self, dec: usize) {
        let whole = dec / CHUNK_BITS;
        let offset = dec % CHUNK_BITS;

        let grown = self
            .chunks
            .len()
            .checked_add(whole + 1)
            .expect("shifted chunk count overflows usize");
        self.chunks.reserve(grown - self.chunks.len());

        // Headroom chunk absorbing the carry out of the top chunk.
        self.chunks.push(0);
        if offset != 0 {
            let mut carry: Wide = 0;
            for chunk in &mut self.chunks {
                let shifted = (Wide::from(*chunk) << offset) | carry;
                carry = shifted >> CHUNK_BITS;
                *chunk = (shifted & CHUNK_MASK) as Chunk;
            }
        }
        if whole > 0 {
            self.chunks.insert_many(0, std::iter::repeat(0).take(whole));
        }
        self.normalize();
    }
}

impl Shl<usize> for BigUint {
    type Output = Self;

    fn shl(mut self, dec: usize) -> Self::Output {
        self <<= dec;
        self
    }
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, dec: usize) -> Self::Output {
        self.clone() << dec
    }
}

#[cfg(test)]
impl BigUint {
    /// Right shift by `dec` bits. Only the shift-law tests need this; it is
    /// not part of the public operator set.
    pub(crate) fn shr_bits(&self, dec: usize) -> Self {
        let whole = dec / CHUNK_BITS;
        if whole >= self.chunks.len() {
            return Self::new();
        }

        let mut out = self.clone();
        out.chunks.drain(..whole);

        let offset = dec % CHUNK_BITS;
        if offset != 0 {
            let mut carry: Chunk = 0;
            for chunk in out.chunks.iter_mut().rev() {
                let kept = *chunk & ((1 << offset) - 1);
                *chunk = (*chunk >> offset) | (carry << (CHUNK_BITS - offset));
                carry = kept;
            }
        }
        out.normalize();
        out
    }
}
