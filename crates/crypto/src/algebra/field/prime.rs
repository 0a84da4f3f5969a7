use super::{validate_modulus, Field};
use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// Prime field whose elements are held as plain canonical integers.
///
/// Multiplication forms the double-width product and divides it by the
/// modulus. The modulus is assumed to be prime, it is not tested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField<const LIMBS: usize> {
    modulus: Uint<LIMBS>,
}

impl<const LIMBS: usize> PrimeField<LIMBS> {
    /// Fails with [ArithmeticError::InvalidModulus] for even moduli and
    /// moduli below three.
    pub fn new(modulus: Uint<LIMBS>) -> Result<Self, ArithmeticError> {
        validate_modulus(&modulus)?;
        Ok(Self { modulus })
    }
}

impl<const LIMBS: usize> Field<LIMBS> for PrimeField<LIMBS> {
    fn modulus(&self) -> &Uint<LIMBS> {
        &self.modulus
    }

    fn one(&self) -> Uint<LIMBS> {
        Uint::ONE
    }

    fn to_internal(&self, x: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        if x.const_geq(&self.modulus) {
            return Err(ArithmeticError::NotReduced);
        }
        Ok(*x)
    }

    fn from_internal(&self, x: &Uint<LIMBS>) -> Uint<LIMBS> {
        *x
    }

    fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.mul_mod_nonzero(b, &self.modulus)
    }

    fn inv(&self, a: &Uint<LIMBS>) -> Result<Uint<LIMBS>, ArithmeticError> {
        a.inv_mod(&self.modulus)
    }
}
