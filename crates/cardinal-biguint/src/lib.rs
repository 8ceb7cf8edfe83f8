//! # cardinal-biguint
//!
//! Chunked arbitrary precision unsigned integers.
//!
//! This crate provides [`BigUint`], an unsigned integer of unbounded size
//! stored as little-endian 32-bit chunks, supporting:
//! - Bit-level access (`bit`, `set_bit`)
//! - Addition and the bitwise operators OR / AND / XOR
//! - Left shift by an arbitrary bit count
//! - Bit-length queries (`bit_len`, `ilog2`)
//!
//! ## Performance Notes
//!
//! - Values up to 128 bits are stored inline without heap allocation
//! - Every operation leaves the value in canonical form (no trailing zero
//!   chunk), so storage growth is deterministic and observable through
//!   [`BigUint::chunk_count`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod biguint;
mod ops;

#[cfg(test)]
mod proptests;

pub use biguint::BigUint;
