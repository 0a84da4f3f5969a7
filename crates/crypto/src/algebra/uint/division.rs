use super::core::{adc, div_wide, sbb};
use super::Uint;
use crate::ArithmeticError;

const BASE: u128 = 1 << 64;

/// Number of limbs up to and including the most significant non-zero limb.
fn significant(limbs: &[u64]) -> usize {
    limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1)
}

/// Long division of little-endian limb strings using Knuth's Algorithm D
/// (TAOCP vol. 2, 4.3.1).
///
/// Returns `(quotient, remainder)`. The divisor must be non-zero.
pub(crate) fn div_rem_limbs(u: &[u64], v: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let n = significant(v);
    let m = significant(u);
    debug_assert!(n > 0, "division by zero");

    if m < n {
        return (Vec::new(), u[..m].to_vec());
    }

    if n == 1 {
        let d = v[0];
        let mut q = vec![0u64; m];
        let mut r = 0u64;
        for i in (0..m).rev() {
            (q[i], r) = div_wide(r, u[i], d);
        }
        return (q, vec![r]);
    }

    // D1: normalize so the divisor's top limb has its high bit set.
    let s = v[n - 1].leading_zeros();
    let vn = shift_left(&v[..n], s, n);
    let mut un = shift_left(&u[..m], s, m + 1);

    let mut q = vec![0u64; m - n + 1];
    let v_top = vn[n - 1] as u128;
    let v_next = vn[n - 2] as u128;

    for j in (0..=m - n).rev() {
        // D3: estimate the quotient limb from the top three dividend limbs.
        let num = ((un[j + n] as u128) << 64) | un[j + n - 1] as u128;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= BASE || qhat * v_next > ((rhat << 64) | un[j + n - 2] as u128) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= BASE {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut borrow = 0u64;
        let mut carry = 0u64;
        for i in 0..n {
            let p = qhat * vn[i] as u128 + carry as u128;
            carry = (p >> 64) as u64;
            (un[i + j], borrow) = sbb(un[i + j], p as u64, borrow);
        }
        let (top, borrow) = sbb(un[j + n], carry, borrow);
        un[j + n] = top;

        // D6: the estimate was one too large, add the divisor back.
        if borrow != 0 {
            qhat -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                (un[i + j], carry) = adc(un[i + j], vn[i], carry);
            }
            un[j + n] = un[j + n].wrapping_add(carry);
        }

        q[j] = qhat as u64;
    }

    // D8: unnormalize the remainder.
    let r = shift_right(&un[..n], s);
    (q, r)
}

/// Shifts `limbs` left by `s < 64` bits into a buffer of `len` limbs.
fn shift_left(limbs: &[u64], s: u32, len: usize) -> Vec<u64> {
    let mut out = vec![0u64; len];
    let mut carry = 0u64;
    for (o, &l) in out.iter_mut().zip(limbs) {
        *o = (l << s) | carry;
        carry = if s == 0 { 0 } else { l >> (64 - s) };
    }
    if len > limbs.len() {
        out[limbs.len()] = carry;
    }
    out
}

fn shift_right(limbs: &[u64], s: u32) -> Vec<u64> {
    let mut out = limbs.to_vec();
    if s == 0 {
        return out;
    }
    for i in 0..out.len() {
        let next = limbs.get(i + 1).copied().unwrap_or(0);
        out[i] = (limbs[i] >> s) | (next << (64 - s));
    }
    out
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Loads up to `LIMBS` little-endian limbs, the rest must be zero.
    pub(crate) fn from_limb_slice(limbs: &[u64]) -> Self {
        debug_assert!(limbs.iter().skip(LIMBS).all(|&l| l == 0));
        let mut r = [0u64; LIMBS];
        for (r, &l) in r.iter_mut().zip(limbs) {
            *r = l;
        }
        Uint(r)
    }

    /// Computes `(self / rhs, self % rhs)`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (q, r) = div_rem_limbs(&self.0, &rhs.0);
        Ok((Self::from_limb_slice(&q), Self::from_limb_slice(&r)))
    }

    /// Divides the double-width value `hi * 2^BITS + lo` by `d`, returning
    /// the quotient as `(high, low)` together with the remainder.
    pub fn div_rem_wide(
        hi: &Self,
        lo: &Self,
        d: &Self,
    ) -> Result<((Self, Self), Self), ArithmeticError> {
        if d.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (q, r) = div_rem_limbs(&wide(hi, lo), &d.0);
        let q_lo = Self::from_limb_slice(&q[..q.len().min(LIMBS)]);
        let q_hi = Self::from_limb_slice(q.get(LIMBS..).unwrap_or_default());
        Ok(((q_hi, q_lo), Self::from_limb_slice(&r)))
    }

    /// Remainder of `hi * 2^BITS + lo` modulo the non-zero `m`.
    pub(crate) fn rem_wide_nonzero(hi: &Self, lo: &Self, m: &Self) -> Self {
        let (_, r) = div_rem_limbs(&wide(hi, lo), &m.0);
        Self::from_limb_slice(&r)
    }

    /// Truncating division
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Remainder of the truncating division
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

fn wide<const LIMBS: usize>(hi: &Uint<LIMBS>, lo: &Uint<LIMBS>) -> Vec<u64> {
    let mut u = Vec::with_capacity(2 * LIMBS);
    u.extend_from_slice(&lo.0);
    u.extend_from_slice(&hi.0);
    u
}
