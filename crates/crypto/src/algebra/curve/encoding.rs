use super::{AffinePoint, Curve};
use crate::algebra::field::Field;
use crate::algebra::uint::Uint;
use crate::CurveError;

const INFINITY: u8 = 0x00;
const COMPRESSED_EVEN: u8 = 0x02;
const COMPRESSED_ODD: u8 = 0x03;
const UNCOMPRESSED: u8 = 0x04;

pub(crate) fn encode<C, const LIMBS: usize>(
    curve: &C,
    p: &AffinePoint<LIMBS>,
    compressed: bool,
) -> Vec<u8>
where
    C: Curve<LIMBS> + ?Sized,
{
    let Some((x, y)) = curve.coordinates(p) else {
        return vec![INFINITY];
    };

    let mut out = Vec::with_capacity(1 + 2 * Uint::<LIMBS>::BYTES);
    if compressed {
        out.push(if y.is_odd() { COMPRESSED_ODD } else { COMPRESSED_EVEN });
        out.extend(x.to_be_bytes());
    } else {
        out.push(UNCOMPRESSED);
        out.extend(x.to_be_bytes());
        out.extend(y.to_be_bytes());
    }
    out
}

pub(crate) fn decode<C, const LIMBS: usize>(
    curve: &C,
    bytes: &[u8],
) -> Result<AffinePoint<LIMBS>, CurveError>
where
    C: Curve<LIMBS> + ?Sized,
{
    let n = Uint::<LIMBS>::BYTES;
    let (&tag, body) = bytes.split_first().ok_or(CurveError::InvalidEncoding)?;

    match (tag, body.len()) {
        (INFINITY, 0) => Ok(AffinePoint::identity()),
        (UNCOMPRESSED, len) if len == 2 * n => {
            let x = coordinate(curve, &body[..n])?;
            let y = coordinate(curve, &body[n..])?;
            curve.point(&x, &y)
        }
        (COMPRESSED_EVEN | COMPRESSED_ODD, len) if len == n => {
            let x = coordinate(curve, body)?;
            curve.lift_x(&x, tag == COMPRESSED_ODD)
        }
        _ => Err(CurveError::InvalidEncoding),
    }
}

/// Parses a canonical coordinate, values not below the modulus are
/// malformed.
fn coordinate<C, const LIMBS: usize>(curve: &C, bytes: &[u8]) -> Result<Uint<LIMBS>, CurveError>
where
    C: Curve<LIMBS> + ?Sized,
{
    let v = Uint::from_be_slice(bytes)?;
    if v.const_geq(curve.field().modulus()) {
        return Err(CurveError::InvalidEncoding);
    }
    Ok(v)
}
