use super::{AffinePoint, Curve, ProjectivePoint};
use crate::algebra::uint::Uint;
use crate::CurveError;

/// Width-`window` non-adjacent form of `k`, least significant digit first.
///
/// Every non-zero digit is odd and lies in `±[1, 2^(window-1) - 1]`, and
/// any `window` consecutive digits contain at most one non-zero digit.
/// `window` must lie in `2..=8`.
pub fn wnaf_digits<const LIMBS: usize>(
    k: &Uint<LIMBS>,
    window: u32,
) -> Result<Vec<i8>, CurveError> {
    if !(2..=8).contains(&window) {
        return Err(CurveError::InvalidWindow(window));
    }
    Ok(digits(k, window))
}

fn digits<const LIMBS: usize>(k: &Uint<LIMBS>, window: u32) -> Vec<i8> {
    let width = 1u64 << window;
    let half = width >> 1;
    let top_bit = Uint::<LIMBS>::ONE.shl(Uint::<LIMBS>::BITS - 1);

    let mut k = *k;
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);
    while !k.is_zero() {
        let mut carry = false;
        let digit = if k.is_odd() {
            let m = k.low_u64() & (width - 1);
            if m >= half {
                // k - (m - width) may exceed the width, keep the carry
                let (sum, c) = k.overflowing_add(&Uint::from_u64(width - m));
                k = sum;
                carry = c;
                m as i64 - width as i64
            } else {
                k = k.wrapping_sub(&Uint::from_u64(m));
                m as i64
            }
        } else {
            0
        };
        digits.push(digit as i8);

        k = k.shr(1);
        if carry {
            k = k | top_bit;
        }
    }
    digits
}

/// wNAF scalar multiplication for a window already known to be valid.
///
/// Multiples of the generator reduce the scalar by the curve order first.
/// Other points may lie outside its subgroup and use the scalar as given.
/// Odd multiples `P, 3P, ..., (2^(window-1) - 1)P` are tabulated in affine
/// form so the main loop only needs mixed additions.
pub(crate) fn mul<C, const LIMBS: usize>(
    curve: &C,
    k: &Uint<LIMBS>,
    p: &AffinePoint<LIMBS>,
    window: u32,
) -> ProjectivePoint<LIMBS>
where
    C: Curve<LIMBS> + ?Sized,
{
    // k·G = (k mod n)·G
    let k = if p == curve.generator() {
        k.modulo(curve.order()).unwrap_or(*k)
    } else {
        *k
    };
    if p.infinity || k.is_zero() {
        return curve.identity();
    }

    let digits = digits(&k, window);

    let size = 1usize << (window - 2);
    let double = curve.double(&curve.to_projective(p));
    let mut table = Vec::with_capacity(size);
    table.push(*p);
    for i in 1..size {
        let next = curve.mixed_add(&double, &table[i - 1]);
        table.push(curve.to_affine(&next));
    }

    tracing::trace!(window, table = table.len(), digits = digits.len(), "wNAF precomputation");

    let mut acc = curve.identity();
    for &d in digits.iter().rev() {
        acc = curve.double(&acc);
        let idx = d.unsigned_abs() as usize / 2;
        if d > 0 {
            acc = curve.mixed_add(&acc, &table[idx]);
        } else if d < 0 {
            acc = curve.mixed_add(&acc, &curve.neg_affine(&table[idx]));
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use pretty_assertions_sorted::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::algebra::uint::{U256, U64};

    fn value(digits: &[i8]) -> BigInt {
        digits
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &d| acc * BigInt::from(2) + BigInt::from(d))
    }

    fn check_form(digits: &[i8], window: u32) {
        let bound = 1i16 << (window - 1);
        for (i, &d) in digits.iter().enumerate() {
            if d != 0 {
                assert!(d % 2 != 0, "even digit {d}");
                assert!((d as i16).abs() < bound, "digit {d} out of range");
                let next = &digits[i + 1..digits.len().min(i + window as usize)];
                assert!(next.iter().all(|&x| x == 0), "adjacent digits at {i}");
            }
        }
        // the most significant digit is never zero
        assert_ne!(digits.last(), Some(&0));
    }

    #[test]
    fn small_scalars() {
        assert!(wnaf_digits(&U64::ZERO, 4).unwrap().is_empty());
        assert_eq!(wnaf_digits(&U64::from_u64(7), 2).unwrap(), vec![-1, 0, 0, 1]);
        assert_eq!(wnaf_digits(&U64::from_u64(7), 4).unwrap(), vec![7]);
        assert_eq!(wnaf_digits(&U64::from_u64(15), 4).unwrap(), vec![-1, 0, 0, 0, 1]);
    }

    #[test]
    fn carry_beyond_the_width() {
        // 2^64 - 1 = 2^64 - 1·2^0, the leading digit sits past the width
        let digits = wnaf_digits(&U64::MAX, 3).unwrap();
        check_form(&digits, 3);
        assert_eq!(value(&digits), BigInt::from(u64::MAX));
        assert_eq!(digits.len(), 65);
    }

    #[test]
    fn invalid_windows() {
        for window in [0, 1, 9, 10] {
            assert_eq!(
                wnaf_digits(&U256::MAX, window),
                Err(CurveError::InvalidWindow(window))
            );
        }
    }

    #[rstest]
    fn random_scalars(#[values(2, 3, 4, 5, 6, 7, 8)] window: u32) {
        let rng = &mut rand::thread_rng();
        for _ in 0..100 {
            let k = U256::random(rng);
            let digits = wnaf_digits(&k, window).unwrap();
            check_form(&digits, window);
            assert_eq!(value(&digits), BigInt::from(BigUint::from(k)));
        }
    }
}
