//! # quotient-integers
//!
//! Arbitrary precision integers and small modular rings for the
//! quotient number tower.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Residue rings with a compile-time modulus (`ModInt`, `Mod3Int`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{Mod3Int, ModInt};
