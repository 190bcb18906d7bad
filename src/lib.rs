#![cfg_attr(not(test), no_std)]
//! Arbitrary-precision signed integers.
//!
//! Values are stored as little-endian 32-bit digits in two's complement,
//! always kept in their shortest form whose top bit agrees with the sign.

extern crate alloc;

#[macro_use]
extern crate delog;
generate_macros!();

mod arithmetic;
mod decimal;
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{BigInt, Digit, One, Zero};

#[cfg(test)]
mod proptests;
