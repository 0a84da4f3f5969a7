use super::Field;
use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// Square root as `a^((p + 1) / 4)`, valid only when `p ≡ 3 (mod 4)`.
///
/// The candidate is squared again to tell residues from non-residues.
pub(crate) fn sqrt_3_mod_4<F, const LIMBS: usize>(
    field: &F,
    a: &Uint<LIMBS>,
) -> Result<Option<Uint<LIMBS>>, ArithmeticError>
where
    F: Field<LIMBS> + ?Sized,
{
    let p = field.modulus();
    if p.low_u64() & 3 != 3 {
        return Err(ArithmeticError::Unsupported(
            "square root requires a modulus congruent to 3 mod 4",
        ));
    }

    // (p + 1) / 4 without overflowing for p close to 2^BITS
    let e = p.shr(2).wrapping_add(&Uint::ONE);
    let x = field.pow(a, &e);
    Ok((field.square(&x) == *a).then_some(x))
}

#[cfg(test)]
mod tests {
    use pretty_assertions_sorted::assert_eq;

    use crate::algebra::field::{Field, MontgomeryField, PrimeField};
    use crate::algebra::uint::{U256, U64};
    use crate::ArithmeticError;

    fn secp256k1_p() -> U256 {
        U256::from_hex_str("0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
            .unwrap()
    }

    #[test]
    fn squares_have_roots() {
        let field = MontgomeryField::new(secp256k1_p()).unwrap();
        let rng = &mut rand::thread_rng();
        for _ in 0..50 {
            let a = U256::random_below(rng, &secp256k1_p()).unwrap();
            let x = field.to_internal(&a).unwrap();
            let sq = field.square(&x);
            let root = field.sqrt(&sq).unwrap().unwrap();
            assert!(root == x || root == field.neg(&x));
        }
    }

    #[test]
    fn non_residue() {
        // -1 is a non-residue whenever p ≡ 3 mod 4
        let field = PrimeField::new(U64::from_u64(23)).unwrap();
        let minus_one = field.neg(&field.one());
        assert_eq!(field.sqrt(&minus_one), Ok(None));
        assert_eq!(field.sqrt(&U64::from_u64(2)), Ok(Some(U64::from_u64(18))));
        assert_eq!(field.sqrt(&U64::ZERO), Ok(Some(U64::ZERO)));
    }

    #[test]
    fn other_moduli_are_unsupported() {
        // 2^255 - 19 ≡ 1 mod 4
        let p = U256::from_hex_str(
            "0x7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        )
        .unwrap();
        let field = PrimeField::new(p).unwrap();
        assert!(matches!(
            field.sqrt(&U256::from_u64(4)),
            Err(ArithmeticError::Unsupported(_))
        ));

        let field = MontgomeryField::new(U64::from_u64(13)).unwrap();
        assert!(matches!(
            field.sqrt(&field.one()),
            Err(ArithmeticError::Unsupported(_))
        ));
    }
}
