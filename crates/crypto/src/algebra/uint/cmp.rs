use std::cmp::Ordering;

use super::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns whether the value is zero
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns whether the value is one
    #[inline(always)]
    pub const fn is_one(&self) -> bool {
        self.const_eq(&Self::ONE)
    }

    #[inline(always)]
    pub const fn is_odd(&self) -> bool {
        LIMBS > 0 && self.0[0] & 1 == 1
    }

    #[inline(always)]
    pub const fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Compare limb-wise starting from the most significant limb
    #[inline(always)]
    pub const fn const_cmp(&self, x: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.0[i] < x.0[i] {
                return Ordering::Less;
            } else if self.0[i] > x.0[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Equality
    #[inline(always)]
    pub const fn const_eq(&self, x: &Self) -> bool {
        matches!(self.const_cmp(x), Ordering::Equal)
    }

    /// Less than
    #[inline(always)]
    pub const fn const_lt(&self, x: &Self) -> bool {
        matches!(self.const_cmp(x), Ordering::Less)
    }

    /// Greater than or equal
    #[inline(always)]
    pub const fn const_geq(&self, x: &Self) -> bool {
        !self.const_lt(x)
    }
}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(other)
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::uint::U256;

    #[test]
    fn test_ord() {
        let a = U256::from_limbs([u64::MAX, 0, 0, 0]);
        let b = U256::from_limbs([0, 1, 0, 0]);
        let c = U256::from_limbs([0, 0, 0, 1]);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert!(c > a);
        assert!(c >= c);
        assert!(a.const_lt(&b));
        assert!(c.const_geq(&b));
        assert!(U256::ONE.is_one());
        assert!(U256::ZERO.is_zero());
        assert!(U256::ONE.is_odd());
        assert!(b.is_even());
    }
}
