//! # quotient-rings
//!
//! Algebraic structures for the quotient number tower.
//!
//! This crate provides the abstract traits `Ring`, `CommutativeRing` and
//! `Field`, and implements them for the residue rings of
//! `quotient-integers`. The rational and complex crates implement them
//! for their own exact types.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod modular;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::{CommutativeRing, Field, Ring};
