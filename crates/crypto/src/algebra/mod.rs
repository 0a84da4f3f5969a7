/// Elliptic curves
pub mod curve;

/// Prime fields
pub mod field;

/// Fixed-width unsigned integers
pub mod uint;

pub use curve::{AffinePoint, Curve, EdwardsCurve, ProjectivePoint, WeierstrassCurve};
pub use field::{Field, FieldElement, MontgomeryField, PrimeField};
pub use uint::{Uint, U1024, U128, U256, U512, U64};
