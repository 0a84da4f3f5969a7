mod derive;
mod element;
mod montgomery;
mod pow;
mod prime;
mod sqrt;

pub use element::FieldElement;
pub use montgomery::{MontgomeryField, MontgomeryReduction};
pub use pow::{decode_exponent, WindowStep};
pub use prime::PrimeField;

use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// Arithmetic over the integers modulo an odd prime `p`.
///
/// Values handed to and returned from the arithmetic methods are in the
/// field's internal representation and always reduced below the modulus.
/// Only [Field::to_internal] and [Field::from_internal] cross between the
/// canonical integers and that representation, which is the identity for a
/// [PrimeField] and the Montgomery form for a [MontgomeryField].
pub trait Field<const LIMBS: usize>: std::fmt::Debug + Send + Sync {
    fn modulus(&self) -> &Uint<LIMBS>;

    /// Additive identity, zero in every representation
    fn zero(&self) -> Uint<LIMBS> {
        Uint::ZERO
    }

    /// Multiplicative identity in the internal representation
    fn one(&self) -> Uint<LIMBS>;

    /// Converts a canonical integer into the internal representation,
    /// failing with [ArithmeticError::NotReduced] unless `x < p`.
    fn to_internal(&self, x: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError>;

    fn from_internal(&self, x: &Uint<LIMBS>) -> Uint<LIMBS>;

    fn add(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.add_mod(b, self.modulus())
    }

    fn sub(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.sub_mod(b, self.modulus())
    }

    fn neg(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.neg_mod(self.modulus())
    }

    fn double(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.add(a, a)
    }

    fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS>;

    fn square(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.mul(a, a)
    }

    /// Multiplicative inverse, [ArithmeticError::NotInvertible] for zero.
    fn inv(&self, a: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError>;

    /// `a^e` for a plain integer exponent `e`
    fn pow(&self, a: &Uint<LIMBS>, e: &Uint<LIMBS>) -> Uint<LIMBS> {
        pow::double_and_add(self, a, e)
    }

    fn pow_double_and_add(&self, a: &Uint<LIMBS>, e: &Uint<LIMBS>) -> Uint<LIMBS> {
        pow::double_and_add(self, a, e)
    }

    /// `a^e` using a table of odd powers of `a` up to `a^(2^window - 1)`.
    /// The window must lie in `1..=8`.
    fn pow_sliding_window(
        &self,
        a: &Uint<LIMBS>,
        e: &Uint<LIMBS>,
        window: u32,
    ) -> Result<Uint<LIMBS>, ArithmeticError> {
        pow::sliding_window(self, a, e, window)
    }

    /// Square root for moduli `p ≡ 3 (mod 4)`.
    ///
    /// Returns `Ok(None)` when `a` is not a quadratic residue and
    /// [ArithmeticError::Unsupported] for any other modulus.
    fn sqrt(&self, a: &Uint<LIMBS>) -> Result<Option<Uint<LIMBS>>, ArithmeticError> {
        sqrt::sqrt_3_mod_4(self, a)
    }

    fn is_zero(&self, a: &Uint<LIMBS>) -> bool {
        a.is_zero()
    }

    /// Wraps a canonical integer as an element of this field.
    fn element(&self, v: &Uint<LIMBS>) -> Result<FieldElement<'_, Self, LIMBS>, ArithmeticError>
    where
        Self: Sized,
    {
        FieldElement::new(self, v)
    }
}

/// Rejects moduli that cannot be an odd prime.
pub(crate) fn validate_modulus<const LIMBS: usize>(
    modulus: &Uint<LIMBS>,
) -> Result<(), ArithmeticError> {
    if modulus.is_even() || modulus.const_lt(&Uint::from_u64(3)) {
        return Err(ArithmeticError::InvalidModulus);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use pretty_assertions_sorted::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::algebra::uint::{U256, U64};

    /// secp256k1 base field prime
    const P: U256 = U256::from_limbs([
        0xfffffffefffffc2f,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ]);

    fn canonical() -> impl Strategy<Value = U256> {
        any::<[u64; 4]>()
            .prop_map(U256::from_limbs)
            .prop_filter("must be reduced", |x| x < &P)
    }

    /// Runs `f` on internal values and maps the result back to canonical
    /// form, so both field kinds can be compared against the same oracle.
    fn binary<F: Field<4>>(
        field: &F,
        a: &U256,
        b: &U256,
        f: impl Fn(&F, &U256, &U256) -> U256,
    ) -> BigUint {
        let a = field.to_internal(a).unwrap();
        let b = field.to_internal(b).unwrap();
        field.from_internal(&f(field, &a, &b)).to_biguint()
    }

    fn check_oracle<F: Field<4>>(field: &F, a: &U256, b: &U256) {
        let (ba, bb, bp) = (a.to_biguint(), b.to_biguint(), P.to_biguint());
        assert_eq!(binary(field, a, b, F::add), (&ba + &bb) % &bp);
        assert_eq!(binary(field, a, b, F::sub), (&ba + &bp - &bb) % &bp);
        assert_eq!(binary(field, a, b, F::mul), (&ba * &bb) % &bp);
        assert_eq!(binary(field, a, b, |f, x, _| f.square(x)), (&ba * &ba) % &bp);
        assert_eq!(binary(field, a, b, |f, x, _| f.neg(x)), (&bp - &ba) % &bp);
        assert_eq!(binary(field, a, b, |f, x, _| f.double(x)), (&ba + &ba) % &bp);
    }

    fn check_inverse<F: Field<4>>(field: &F, a: &U256) {
        let x = field.to_internal(a).unwrap();
        let inv = field.inv(&x).unwrap();
        assert_eq!(field.mul(&x, &inv), field.one());
        assert_eq!(field.from_internal(&field.one()), U256::ONE);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prime_field_matches_biguint(a in canonical(), b in canonical()) {
            check_oracle(&PrimeField::new(P).unwrap(), &a, &b);
        }

        #[test]
        fn montgomery_field_matches_biguint(a in canonical(), b in canonical()) {
            check_oracle(&MontgomeryField::new(P).unwrap(), &a, &b);
            let classic = MontgomeryField::with_reduction(P, MontgomeryReduction::Classic).unwrap();
            check_oracle(&classic, &a, &b);
        }

        #[test]
        fn inverse_law(a in canonical()) {
            prop_assume!(!a.is_zero());
            check_inverse(&PrimeField::new(P).unwrap(), &a);
            check_inverse(&MontgomeryField::new(P).unwrap(), &a);
        }
    }

    #[rstest]
    #[case::even(U64::from_u64(10))]
    #[case::zero(U64::ZERO)]
    #[case::one(U64::ONE)]
    #[case::two(U64::from_u64(2))]
    fn invalid_moduli(#[case] modulus: U64) {
        assert_eq!(PrimeField::new(modulus), Err(ArithmeticError::InvalidModulus));
        assert_eq!(
            MontgomeryField::new(modulus).map(|_| ()),
            Err(ArithmeticError::InvalidModulus)
        );
    }

    #[test]
    fn zero_has_no_inverse() {
        let field = MontgomeryField::new(P).unwrap();
        assert_eq!(field.inv(&field.zero()), Err(ArithmeticError::NotInvertible));
        let field = PrimeField::new(P).unwrap();
        assert_eq!(field.inv(&field.zero()), Err(ArithmeticError::NotInvertible));
    }

    #[test]
    fn unreduced_values_are_rejected() {
        let field = PrimeField::new(P).unwrap();
        assert_eq!(field.to_internal(&P), Err(ArithmeticError::NotReduced));
        let field = MontgomeryField::new(P).unwrap();
        assert_eq!(field.to_internal(&U256::MAX), Err(ArithmeticError::NotReduced));
    }

    #[test]
    fn fields_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrimeField<4>>();
        assert_send_sync::<MontgomeryField<4>>();
        assert_send_sync::<FieldElement<'static, MontgomeryField<4>, 4>>();
    }
}
