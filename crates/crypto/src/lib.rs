//! Curvearith_crypto is a library for fixed-width integer, prime field and
//! elliptic curve arithmetic.

/// Contains algebra such as integers, finite fields and elliptic curves.
pub mod algebra;

mod error;

pub use algebra::{
    AffinePoint, Curve, EdwardsCurve, Field, FieldElement, MontgomeryField, PrimeField,
    ProjectivePoint, Uint, WeierstrassCurve, U1024, U128, U256, U512, U64,
};
pub use error::{ArithmeticError, CurveError};
