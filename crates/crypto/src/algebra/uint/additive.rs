use super::core::{adc, sbb};
use super::Uint;
use crate::ArithmeticError;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs`, returning the wrapped sum and whether the
    /// addition overflowed.
    #[inline(always)]
    pub const fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut r = [0u64; LIMBS];
        let mut carry = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let (lo, hi) = adc(self.0[i], rhs.0[i], carry);
            r[i] = lo;
            carry = hi;
            i += 1;
        }
        (Uint(r), carry != 0)
    }

    /// Computes `self - rhs`, returning the wrapped difference and whether
    /// the subtraction borrowed.
    #[inline(always)]
    pub const fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut r = [0u64; LIMBS];
        let mut borrow = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let (lo, hi) = sbb(self.0[i], rhs.0[i], borrow);
            r[i] = lo;
            borrow = hi;
            i += 1;
        }
        (Uint(r), borrow != 0)
    }

    /// Add modulo `2^BITS`
    #[inline(always)]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Subtract modulo `2^BITS`
    #[inline(always)]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Add, reporting [ArithmeticError::Overflow] instead of wrapping.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(ArithmeticError::Overflow),
        }
    }

    /// Subtract, reporting [ArithmeticError::Overflow] instead of wrapping.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(ArithmeticError::Overflow),
        }
    }
}
