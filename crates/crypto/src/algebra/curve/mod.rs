mod edwards;
mod encoding;
mod params;
mod point;
mod scalar_mul;
mod weierstrass;
mod wnaf;

pub use edwards::EdwardsCurve;
pub use params::{bn256, ed25519, secp256k1, secp256r1, CurveParams};
pub use point::{AffinePoint, ProjectivePoint};
pub use weierstrass::WeierstrassCurve;
pub use wnaf::wnaf_digits;

use crate::algebra::field::Field;
use crate::algebra::uint::Uint;
use crate::{ArithmeticError, CurveError};

/// Window used by [Curve::mul]
pub const DEFAULT_WINDOW: u32 = 4;

/// An elliptic curve group over a prime field.
///
/// Implementors provide the point representation and the group law, the
/// scalar multiplication strategies, validation and encodings are shared.
/// All coordinates are in the internal representation of [Curve::field].
pub trait Curve<const LIMBS: usize>: Send + Sync {
    type Field: Field<LIMBS>;

    fn name(&self) -> &str;

    fn field(&self) -> &Self::Field;

    /// Order of the subgroup generated by [Curve::generator]
    fn order(&self) -> &Uint<LIMBS>;

    fn generator(&self) -> &AffinePoint<LIMBS>;

    /// Neutral element in projective coordinates
    fn identity(&self) -> ProjectivePoint<LIMBS>;

    fn is_identity(&self, p: &ProjectivePoint<LIMBS>) -> bool;

    /// Whether `p` satisfies the curve equation. The point at infinity does
    /// not.
    fn is_on_curve(&self, p: &AffinePoint<LIMBS>) -> bool;

    fn to_projective(&self, p: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS>;

    fn to_affine(&self, p: &ProjectivePoint<LIMBS>) -> AffinePoint<LIMBS>;

    fn add(&self, p: &ProjectivePoint<LIMBS>, q: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS>;

    fn double(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS>;

    /// Adds an affine point, saving the multiplications by its `Z = 1`.
    fn mixed_add(&self, p: &ProjectivePoint<LIMBS>, q: &AffinePoint<LIMBS>)
        -> ProjectivePoint<LIMBS>;

    fn neg(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS>;

    fn neg_affine(&self, p: &AffinePoint<LIMBS>) -> AffinePoint<LIMBS>;

    /// Recovers the point with canonical x coordinate `x` whose canonical y
    /// coordinate has parity `odd`.
    fn lift_x(&self, _x: &Uint<LIMBS>, _odd: bool) -> Result<AffinePoint<LIMBS>, CurveError> {
        Err(CurveError::Unsupported("point decompression"))
    }

    /// Create a point from canonical coordinates, checking the curve equation.
    /// Coordinates of the neutral element yield the point at infinity.
    fn point(&self, x: &Uint<LIMBS>, y: &Uint<LIMBS>) -> Result<AffinePoint<LIMBS>, CurveError> {
        let field = self.field();
        let p = AffinePoint::new(field.to_internal(x)?, field.to_internal(y)?);
        if !self.is_on_curve(&p) {
            return Err(CurveError::NotOnCurve);
        }
        if self.is_identity(&self.to_projective(&p)) {
            return Ok(AffinePoint::identity());
        }
        Ok(p)
    }

    /// Canonical coordinates of `p`, `None` at infinity.
    fn coordinates(&self, p: &AffinePoint<LIMBS>) -> Option<(Uint<LIMBS>, Uint<LIMBS>)> {
        if p.infinity {
            return None;
        }
        let field = self.field();
        Some((field.from_internal(&p.x), field.from_internal(&p.y)))
    }

    /// Group equality of two projective points
    fn eq_points(&self, p: &ProjectivePoint<LIMBS>, q: &ProjectivePoint<LIMBS>) -> bool {
        self.to_affine(p) == self.to_affine(q)
    }

    fn mul_double_and_add(&self, k: &Uint<LIMBS>, p: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        scalar_mul::double_and_add(self, k, p)
    }

    /// Windowed NAF scalar multiplication, `window` must lie in `2..=8`.
    fn mul_wnaf(
        &self,
        k: &Uint<LIMBS>,
        p: &AffinePoint<LIMBS>,
        window: u32,
    ) -> Result<ProjectivePoint<LIMBS>, CurveError> {
        if !(2..=8).contains(&window) {
            return Err(CurveError::InvalidWindow(window));
        }
        Ok(wnaf::mul(self, k, p, window))
    }

    /// Scalar multiplication with the default wNAF window
    fn mul(&self, k: &Uint<LIMBS>, p: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        wnaf::mul(self, k, p, DEFAULT_WINDOW)
    }

    fn mul_generator(&self, k: &Uint<LIMBS>) -> ProjectivePoint<LIMBS> {
        self.mul(k, self.generator())
    }

    /// Checks that `g` lies on the curve, is not the neutral element and is
    /// annihilated by [Curve::order].
    fn test_generator(&self, g: &AffinePoint<LIMBS>) -> Result<(), CurveError> {
        if !self.is_on_curve(g)
            || self.order().is_zero()
            || self.is_identity(&self.to_projective(g))
        {
            return Err(CurveError::InvalidGenerator);
        }
        let check = self.mul_double_and_add(self.order(), g);
        if !self.is_identity(&check) {
            return Err(CurveError::InvalidGenerator);
        }
        Ok(())
    }

    /// `0x00` for infinity, `0x04 ‖ x ‖ y` otherwise
    fn to_bytes(&self, p: &AffinePoint<LIMBS>) -> Vec<u8> {
        encoding::encode(self, p, false)
    }

    /// `0x00` for infinity, `0x02 ‖ x` or `0x03 ‖ x` by the parity of y
    fn to_compressed_bytes(&self, p: &AffinePoint<LIMBS>) -> Vec<u8> {
        encoding::encode(self, p, true)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<AffinePoint<LIMBS>, CurveError> {
        encoding::decode(self, bytes)
    }
}

/// Converts the canonical curve constants into the field's representation.
pub(crate) fn internal<F: Field<LIMBS>, const LIMBS: usize>(
    field: &F,
    values: [&Uint<LIMBS>; 4],
) -> Result<[Uint<LIMBS>; 4], ArithmeticError> {
    Ok([
        field.to_internal(values[0])?,
        field.to_internal(values[1])?,
        field.to_internal(values[2])?,
        field.to_internal(values[3])?,
    ])
}
