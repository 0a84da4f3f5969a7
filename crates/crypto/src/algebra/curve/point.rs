use crate::algebra::uint::Uint;

/// An affine point with coordinates in the field's internal representation.
///
/// The point at infinity (the neutral element) is marked by `infinity`, its
/// coordinates are zero and carry no meaning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AffinePoint<const LIMBS: usize> {
    pub x: Uint<LIMBS>,
    pub y: Uint<LIMBS>,
    pub infinity: bool,
}

impl<const LIMBS: usize> AffinePoint<LIMBS> {
    pub const fn new(x: Uint<LIMBS>, y: Uint<LIMBS>) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Point of infinity
    pub const fn identity() -> Self {
        Self {
            x: Uint::ZERO,
            y: Uint::ZERO,
            infinity: true,
        }
    }
}

/// A projective point with coordinates in the field's internal
/// representation.
///
/// Weierstrass curves interpret it in Jacobian coordinates
/// `(X / Z², Y / Z³)` with `Z = 0` at infinity, Edwards curves in
/// homogeneous coordinates `(X / Z, Y / Z)`. Equality is equality of the
/// representation; use [Curve::eq_points](super::Curve::eq_points) to
/// compare group elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ProjectivePoint<const LIMBS: usize> {
    pub x: Uint<LIMBS>,
    pub y: Uint<LIMBS>,
    pub z: Uint<LIMBS>,
}

impl<const LIMBS: usize> ProjectivePoint<LIMBS> {
    pub const fn new(x: Uint<LIMBS>, y: Uint<LIMBS>, z: Uint<LIMBS>) -> Self {
        Self { x, y, z }
    }
}
