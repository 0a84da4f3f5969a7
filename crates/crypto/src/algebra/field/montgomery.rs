use super::{validate_modulus, Field};
use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// How [MontgomeryField] multiplies two residues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MontgomeryReduction {
    /// Reduce the product modulo `p` by division, then apply REDC to the
    /// single-width result.
    #[default]
    ReduceThenRedc,
    /// Apply REDC directly to the double-width product.
    Classic,
}

/// Prime field whose elements are kept in Montgomery form `x·R mod p` with
/// `R = 2^BITS`.
///
/// The constants `R mod p`, `R⁻¹ mod p` and `K = (R·R⁻¹ - 1) / p` are derived
/// once by the constructor, which also checks `K·p ≡ -1 (mod R)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MontgomeryField<const LIMBS: usize> {
    modulus: Uint<LIMBS>,
    r: Uint<LIMBS>,
    r_inv: Uint<LIMBS>,
    k: Uint<LIMBS>,
    reduction: MontgomeryReduction,
}

impl<const LIMBS: usize> MontgomeryField<LIMBS> {
    pub fn new(modulus: Uint<LIMBS>) -> Result<Self, ArithmeticError> {
        Self::with_reduction(modulus, MontgomeryReduction::default())
    }

    pub fn with_reduction(
        modulus: Uint<LIMBS>,
        reduction: MontgomeryReduction,
    ) -> Result<Self, ArithmeticError> {
        validate_modulus(&modulus)?;

        // 2^BITS mod p = ((2^BITS - 1) mod p) + 1
        let r = Uint::MAX.modulo(&modulus)?.add_mod(&Uint::ONE, &modulus);
        let r_inv = r.inv_mod(&modulus)?;

        // 2^BITS·R⁻¹ - 1 as the double-width value (R⁻¹ - 1, 2^BITS - 1)
        let hi = r_inv.wrapping_sub(&Uint::ONE);
        let ((k_hi, k), rem) = Uint::div_rem_wide(&hi, &Uint::MAX, &modulus)?;
        if !k_hi.is_zero() || !rem.is_zero() {
            return Err(ArithmeticError::NonCanonicalResidue);
        }
        if !k.wrapping_mul(&modulus).wrapping_add(&Uint::ONE).is_zero() {
            return Err(ArithmeticError::NonCanonicalResidue);
        }

        tracing::debug!(
            bits = Uint::<LIMBS>::BITS,
            %modulus,
            ?reduction,
            "Montgomery field constructed"
        );

        Ok(Self {
            modulus,
            r,
            r_inv,
            k,
            reduction,
        })
    }

    pub fn reduction(&self) -> MontgomeryReduction {
        self.reduction
    }

    /// `R mod p`, the Montgomery form of one
    pub fn r(&self) -> &Uint<LIMBS> {
        &self.r
    }

    pub fn r_inv(&self) -> &Uint<LIMBS> {
        &self.r_inv
    }

    /// `K` with `K·p ≡ -1 (mod R)`
    pub fn k(&self) -> &Uint<LIMBS> {
        &self.k
    }

    /// Montgomery reduction of `T = hi·R + lo`, returning `T·R⁻¹ mod p`.
    ///
    /// `T` must be below `p·R`. Adding `p·(lo·K mod R)` clears the low half
    /// of `T`; a low half left non-zero is reported as
    /// [ArithmeticError::NonCanonicalResidue].
    pub fn redc(&self, hi: &Uint<LIMBS>, lo: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        let m = lo.wrapping_mul(&self.k);
        let (v_hi, v_lo) = self.modulus.widening_mul(&m);

        let (t_lo, carry_lo) = lo.overflowing_add(&v_lo);
        let (t_hi, carry_hi) = hi.overflowing_add(&v_hi);
        let (t_hi, carry) = if carry_lo {
            let (t_hi, c) = t_hi.overflowing_add(&Uint::ONE);
            (t_hi, carry_hi | c)
        } else {
            (t_hi, carry_hi)
        };

        if !t_lo.is_zero() {
            return Err(ArithmeticError::NonCanonicalResidue);
        }

        // The quotient is below 2p, with bit BITS held in `carry`.
        if carry || t_hi.const_geq(&self.modulus) {
            Ok(t_hi.wrapping_sub(&self.modulus))
        } else {
            Ok(t_hi)
        }
    }

    /// `a·b·R⁻¹ mod p` by reducing `a·b mod p` first.
    pub fn mul_reduce_then_redc(
        &self,
        a: &Uint<LIMBS>,
        b: &Uint<LIMBS>,
    ) -> Result<Uint<LIMBS>, ArithmeticError> {
        let x = a.mul_mod_nonzero(b, &self.modulus);
        self.redc(&Uint::ZERO, &x)
    }

    /// `a·b·R⁻¹ mod p` by reducing the double-width product directly.
    pub fn mul_classic(
        &self,
        a: &Uint<LIMBS>,
        b: &Uint<LIMBS>,
    ) -> Result<Uint<LIMBS>, ArithmeticError> {
        let (hi, lo) = a.widening_mul(b);
        self.redc(&hi, &lo)
    }

    /// Multiplication with the configured [MontgomeryReduction].
    pub fn try_mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        match self.reduction {
            MontgomeryReduction::ReduceThenRedc => self.mul_reduce_then_redc(a, b),
            MontgomeryReduction::Classic => self.mul_classic(a, b),
        }
    }
}

impl<const LIMBS: usize> Field<LIMBS> for MontgomeryField<LIMBS> {
    fn modulus(&self) -> &Uint<LIMBS> {
        &self.modulus
    }

    fn one(&self) -> Uint<LIMBS> {
        self.r
    }

    fn to_internal(&self, x: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        if x.const_geq(&self.modulus) {
            return Err(ArithmeticError::NotReduced);
        }
        Ok(x.mul_mod_nonzero(&self.r, &self.modulus))
    }

    fn from_internal(&self, x: &Uint<LIMBS>) -> Uint<LIMBS> {
        x.mul_mod_nonzero(&self.r_inv, &self.modulus)
    }

    /// Panics only if the reduction constants are inconsistent, which the
    /// constructor rules out.
    fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        match self.try_mul(a, b) {
            Ok(x) => x,
            Err(e) => panic!("Montgomery multiplication of reduced residues failed: {e}"),
        }
    }

    fn inv(&self, a: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        let canonical = self.from_internal(a);
        let inv = canonical.inv_mod(&self.modulus)?;
        Ok(inv.mul_mod_nonzero(&self.r, &self.modulus))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions_sorted::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::algebra::uint::{U128, U256, U64};

    /// secp256r1 base field prime
    const P256: U256 = U256::from_limbs([
        0xffffffffffffffff,
        0x00000000ffffffff,
        0x0000000000000000,
        0xffffffff00000001,
    ]);

    #[test_log::test]
    fn constants() {
        let field = MontgomeryField::new(U64::from_u64(7)).unwrap();
        // 2^64 mod 7 = 2, 2^-1 mod 7 = 4
        assert_eq!(field.r(), &U64::from_u64(2));
        assert_eq!(field.r_inv(), &U64::from_u64(4));
        assert_eq!(
            field.k().wrapping_mul(&U64::from_u64(7)).wrapping_add(&U64::ONE),
            U64::ZERO
        );
        assert_eq!(field.reduction(), MontgomeryReduction::ReduceThenRedc);
    }

    #[test]
    fn small_field_roundtrip() {
        let field = MontgomeryField::new(U64::from_u64(7)).unwrap();
        for v in 0..7 {
            let x = U64::from_u64(v);
            let m = field.to_internal(&x).unwrap();
            assert_eq!(field.from_internal(&m), x);
        }
        let three = field.to_internal(&U64::from_u64(3)).unwrap();
        let five = field.to_internal(&U64::from_u64(5)).unwrap();
        assert_eq!(field.from_internal(&field.mul(&three, &five)), U64::ONE);
        assert_eq!(field.from_internal(&field.inv(&three).unwrap()), U64::from_u64(5));
    }

    #[test]
    fn redc_rejects_inconsistent_constants() {
        let mut field = MontgomeryField::new(U128::from_u64(101)).unwrap();
        field.k = field.k.wrapping_add(&U128::ONE);
        assert_eq!(
            field.redc(&U128::ZERO, &U128::from_u64(5)),
            Err(ArithmeticError::NonCanonicalResidue)
        );
    }

    #[test]
    fn redc_of_one_is_r_inverse() {
        let field = MontgomeryField::new(P256).unwrap();
        assert_eq!(field.redc(&U256::ZERO, &U256::ONE).unwrap(), *field.r_inv());
        assert_eq!(field.redc(&U256::ZERO, field.r()).unwrap(), U256::ONE);
    }

    fn below_p() -> impl Strategy<Value = U256> {
        any::<[u64; 4]>()
            .prop_map(U256::from_limbs)
            .prop_filter("must be reduced", |x| x < &P256)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn roundtrip(a in below_p()) {
            let field = MontgomeryField::new(P256).unwrap();
            prop_assert_eq!(field.from_internal(&field.to_internal(&a).unwrap()), a);
        }

        #[test]
        fn reduction_strategies_agree(a in below_p(), b in below_p()) {
            let field = MontgomeryField::new(P256).unwrap();
            let x = field.mul_reduce_then_redc(&a, &b).unwrap();
            let y = field.mul_classic(&a, &b).unwrap();
            prop_assert_eq!(x, y);
        }
    }
}
