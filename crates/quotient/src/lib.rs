//! # Quotient
//!
//! An exact-arithmetic number tower on arbitrary precision integers.
//!
//! ## Features
//!
//! - **Two rational flavours**: `FixedBigRational` treats division by zero
//!   as an error, `FloatingBigRational` adds signed infinities and a NaN
//! - **Progressions**: lazy, restartable stepped ranges of rationals
//! - **Enumerations**: Cantor walks over the positive and all rationals
//! - **Complex rationals**: exact `a + bi` over either flavour, with conjugate,
//!   norm and division
//! - **Modular rings**: `ModInt<M>` with the integers modulo 3 as `Mod3Int`
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let third = FixedBigRational::over(1, 3).unwrap();
//! assert_eq!((&third + &third).to_string(), "2/3");
//!
//! let nan = FloatingBigRational::over(0, 0);
//! assert!(nan.is_identical(&FloatingBigRational::nan()));
//! assert!(nan != FloatingBigRational::nan());
//!
//! assert_eq!(Mod3Int::value_of(-1), -Mod3Int::ONE);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_complex as complex;
pub use quotient_integers as integers;
pub use quotient_rational as rational;
pub use quotient_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_complex::{
        BigComplex, BigImaginary, ComplexError, FixedBigComplex, FixedBigImaginary,
        FloatingBigComplex, FloatingBigImaginary, I,
    };
    pub use quotient_integers::{Integer, Mod3Int, ModInt};
    pub use quotient_rational::cantor;
    pub use quotient_rational::{
        equivalent, BigRational, ContinuedFraction, FixedBigRational, FloatingBigRational,
        Progression, ProgressionError, RationalError,
    };
    pub use quotient_rings::{CommutativeRing, Field, Ring};
}
