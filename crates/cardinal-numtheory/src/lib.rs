//! # cardinal-numtheory
//!
//! Generic elementary number theory routines:
//! - [`gcd`]: greatest common divisor, Euclid's algorithm
//! - [`lcm`]: least common multiple
//! - [`factorial`]: product of `1..=a`
//!
//! Each routine is written once against minimal operator bounds
//! (equality-to-zero, `%`, `/`, `*`, a unit value) and instantiated per
//! numeric type rather than duplicated.
//!
//! ## Limitations
//!
//! `cardinal_biguint::BigUint` satisfies none of the `Rem` / `Div` / `Mul`
//! bounds, so instantiating these routines over it is rejected at compile
//! time. That is deliberate: the chunked type's operator set stops at
//! addition, the bitwise operators and left shift.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod euclid;
pub mod factorial;

#[cfg(test)]
mod proptests;

pub use euclid::{gcd, lcm};
pub use factorial::factorial;
