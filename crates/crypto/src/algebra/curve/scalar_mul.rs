use super::{AffinePoint, Curve, ProjectivePoint};
use crate::algebra::uint::Uint;

/// Multiply a point by scanning the scalar's bits from the most significant
/// one. The scalar is used as given, without reduction by the order.
pub(crate) fn double_and_add<C, const LIMBS: usize>(
    curve: &C,
    k: &Uint<LIMBS>,
    p: &AffinePoint<LIMBS>,
) -> ProjectivePoint<LIMBS>
where
    C: Curve<LIMBS> + ?Sized,
{
    let bits = k.into_le_bits();
    let mut product = curve.identity();
    for b in bits[..k.bits() as usize].iter().rev() {
        product = curve.double(&product);
        if *b {
            product = curve.mixed_add(&product, p);
        }
    }
    product
}
