use super::core::mac;
use super::Uint;
use crate::ArithmeticError;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Schoolbook multiplication returning the full product as `(high, low)`
    /// so that `high * 2^BITS + low = self * rhs` exactly.
    pub fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        let mut lo = [0u64; LIMBS];
        let mut hi = [0u64; LIMBS];

        for i in 0..LIMBS {
            let mut carry = 0u64;
            for j in 0..LIMBS {
                let k = i + j;
                if k < LIMBS {
                    (lo[k], carry) = mac(self.0[i], rhs.0[j], lo[k], carry);
                } else {
                    (hi[k - LIMBS], carry) = mac(self.0[i], rhs.0[j], hi[k - LIMBS], carry);
                }
            }
            // Row `i` never wrote position `i + LIMBS` before.
            hi[i] = carry;
        }

        (Uint(hi), Uint(lo))
    }

    /// Full-width square of `self` as `(high, low)`.
    #[inline(always)]
    pub fn square_wide(&self) -> (Self, Self) {
        self.widening_mul(self)
    }

    /// Schoolbook multiplication keeping only the low `BITS` bits of the
    /// product. Partial products landing above the width are never formed.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut r = [0u64; LIMBS];
        for i in 0..LIMBS {
            let mut carry = 0u64;
            for j in 0..LIMBS - i {
                let k = i + j;
                (r[k], carry) = mac(self.0[i], rhs.0[j], r[k], carry);
            }
        }
        Uint(r)
    }

    /// Multiply, reporting [ArithmeticError::Overflow] when the product does
    /// not fit the width.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let (hi, lo) = self.widening_mul(rhs);
        if hi.is_zero() {
            Ok(lo)
        } else {
            Err(ArithmeticError::Overflow)
        }
    }
}
