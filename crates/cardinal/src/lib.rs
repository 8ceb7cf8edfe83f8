//! # Cardinal
//!
//! Chunked big unsigned integers with bit-level access, plus generic
//! elementary number theory.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardinal::prelude::*;
//!
//! let a = BigUint::from(0xFFFF_FFFFu64);
//! let b = BigUint::from(1u64);
//! assert_eq!((a + b).bit_len(), 33);
//!
//! let mut c = BigUint::new();
//! c.set_bit(70, true);
//! assert_eq!(c.ilog2(), 70);
//!
//! assert_eq!(gcd(48u64, 18), 6);
//! assert_eq!(lcm(4u64, 6), 12);
//! assert_eq!(factorial(5u64), 120);
//! ```
//!
//! The generic routines accept any type meeting their operator bounds.
//! [`BigUint`](cardinal_biguint::BigUint) does not expose `%`, `/` or `*`,
//! so instantiating them over it fails to compile:
//!
//! ```rust,compile_fail
//! use cardinal::prelude::*;
//!
//! let g = gcd(BigUint::from(48u64), BigUint::from(18u64));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cardinal_biguint as biguint;
pub use cardinal_numtheory as numtheory;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cardinal_biguint::BigUint;
    pub use cardinal_numtheory::{factorial, gcd, lcm};
}
