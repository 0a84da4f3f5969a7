//! Modular arithmetic over plain [Uint] values.
//!
//! Unless stated otherwise the operands must already be reduced modulo `m`,
//! which is checked with debug assertions only.

use super::Uint;
use crate::ArithmeticError;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Remainder of `self` modulo `m`.
    pub fn modulo(&self, m: &Self) -> Result<Self, ArithmeticError> {
        self.checked_rem(m)
    }

    /// Computes `self + rhs mod m`.
    ///
    /// The sum is never formed when it could exceed the width: `self` is
    /// compared against the headroom `m - rhs` instead.
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        debug_assert!(self < m && rhs < m);
        let headroom = m.wrapping_sub(rhs);
        if self.const_geq(&headroom) {
            self.wrapping_sub(&headroom)
        } else {
            self.wrapping_add(rhs)
        }
    }

    /// Computes `self - rhs mod m`.
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        debug_assert!(self < m && rhs < m);
        if self.const_geq(rhs) {
            self.wrapping_sub(rhs)
        } else {
            m.wrapping_sub(&rhs.wrapping_sub(self))
        }
    }

    /// Computes `-self mod m`.
    pub fn neg_mod(&self, m: &Self) -> Self {
        debug_assert!(self < m);
        if self.is_zero() {
            *self
        } else {
            m.wrapping_sub(self)
        }
    }

    /// Computes `self * rhs mod m` from the double-width product.
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Result<Self, ArithmeticError> {
        if m.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.mul_mod_nonzero(rhs, m))
    }

    /// [Self::mul_mod] for a modulus already known to be non-zero.
    #[inline]
    pub(crate) fn mul_mod_nonzero(&self, rhs: &Self, m: &Self) -> Self {
        let (hi, lo) = self.widening_mul(rhs);
        Self::rem_wide_nonzero(&hi, &lo, m)
    }

    /// Modular inverse through the extended Euclidean algorithm.
    ///
    /// Only the magnitude of the Bézout coefficient is tracked. Its sign
    /// alternates with every division step, so a flag is flipped per step and
    /// a negative coefficient is mapped to `m - |t|` at the end.
    pub fn inv_mod(&self, m: &Self) -> Result<Self, ArithmeticError> {
        let a = self.modulo(m)?;
        if a.is_zero() {
            return Err(ArithmeticError::NotInvertible);
        }

        let (mut r0, mut r1) = (*m, a);
        let (mut t0, mut t1) = (Self::ZERO, Self::ONE);
        let mut negative = true;

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            (r0, r1) = (r1, r);
            (t0, t1) = (t1, t0.wrapping_add(&q.wrapping_mul(&t1)));
            negative = !negative;
        }

        if !r0.is_one() {
            return Err(ArithmeticError::NotInvertible);
        }

        Ok(if negative { m.wrapping_sub(&t0) } else { t0 })
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use pretty_assertions_sorted::assert_eq;
    use proptest::prelude::*;

    use crate::algebra::uint::{U128, U256, U64};
    use crate::ArithmeticError;

    /// secp256k1 base field prime
    const P: U256 = U256::from_limbs([
        0xfffffffefffffc2f,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ]);

    fn below_p() -> impl Strategy<Value = U256> {
        any::<[u64; 4]>()
            .prop_map(U256::from_limbs)
            .prop_filter("must be reduced", |x| x < &P)
    }

    #[test]
    fn small_inverses() {
        let seven = U64::from_u64(7);
        assert_eq!(U64::from_u64(3).inv_mod(&seven).unwrap(), U64::from_u64(5));
        assert_eq!(U64::ONE.inv_mod(&seven).unwrap(), U64::ONE);
        assert_eq!(U64::from_u64(6).inv_mod(&seven).unwrap(), U64::from_u64(6));
        // operands above the modulus are reduced first
        assert_eq!(U64::from_u64(10).inv_mod(&seven).unwrap(), U64::from_u64(5));
    }

    #[test]
    fn inverse_errors() {
        let m = U128::from_u64(12);
        assert_eq!(U128::from_u64(4).inv_mod(&m), Err(ArithmeticError::NotInvertible));
        assert_eq!(U128::ZERO.inv_mod(&m), Err(ArithmeticError::NotInvertible));
        assert_eq!(U128::from_u64(24).inv_mod(&m), Err(ArithmeticError::NotInvertible));
        assert_eq!(U128::ONE.inv_mod(&U128::ZERO), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            U128::ONE.mul_mod(&U128::ONE, &U128::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn add_near_the_top_of_the_width() {
        let m = U64::from_u64(u64::MAX - 58); // 2^64 - 59 is prime
        let a = U64::from_u64(u64::MAX - 60);
        assert_eq!(a.add_mod(&a, &m), U64::from_u64(u64::MAX - 62));
        assert_eq!(U64::ZERO.sub_mod(&U64::ONE, &m), U64::from_u64(u64::MAX - 59));
        assert_eq!(U64::ONE.neg_mod(&m), U64::from_u64(u64::MAX - 59));
        assert_eq!(U64::ZERO.neg_mod(&m), U64::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn modular_ops_match_biguint(a in below_p(), b in below_p()) {
            let (ba, bb, bp) = (a.to_biguint(), b.to_biguint(), P.to_biguint());
            prop_assert_eq!(a.add_mod(&b, &P).to_biguint(), (&ba + &bb) % &bp);
            prop_assert_eq!(a.sub_mod(&b, &P).to_biguint(), (&ba + &bp - &bb) % &bp);
            prop_assert_eq!(a.neg_mod(&P).to_biguint(), (&bp - &ba) % &bp);
            prop_assert_eq!(a.mul_mod(&b, &P).unwrap().to_biguint(), (&ba * &bb) % &bp);
        }

        #[test]
        fn inverse_matches_fermat(a in below_p()) {
            prop_assume!(!a.is_zero());
            let bp = P.to_biguint();
            let expected = a.to_biguint().modpow(&(&bp - BigUint::from(2u8)), &bp);
            let inv = a.inv_mod(&P).unwrap();
            prop_assert_eq!(inv.to_biguint(), expected);
            prop_assert_eq!(a.mul_mod(&inv, &P).unwrap(), U256::ONE);
        }
    }
}
