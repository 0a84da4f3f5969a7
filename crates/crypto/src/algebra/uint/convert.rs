use bitvec::prelude::*;
use num_bigint::BigUint;

use super::Uint;
use crate::ArithmeticError;

impl<const LIMBS: usize> Uint<LIMBS> {
    pub const fn from_u64(x: u64) -> Self {
        let mut r = [0u64; LIMBS];
        if LIMBS > 0 {
            r[0] = x;
        }
        Uint(r)
    }

    /// Create an integer from little-endian limbs
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Uint(limbs)
    }

    /// Little-endian limbs
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Parses a big-endian byte string. Inputs shorter than the width are
    /// zero-extended, longer inputs are rejected even if their excess
    /// bytes are zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, ArithmeticError> {
        if bytes.len() > Self::BYTES {
            return Err(ArithmeticError::InputTooLong {
                len: bytes.len(),
                max: Self::BYTES,
            });
        }
        let mut r = [0u64; LIMBS];
        for (i, &b) in bytes.iter().rev().enumerate() {
            r[i / 8] |= (b as u64) << ((i % 8) * 8);
        }
        Ok(Uint(r))
    }

    /// Big-endian encoding of exactly [Self::BYTES] bytes
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.iter().rev().flat_map(|l| l.to_be_bytes()).collect()
    }

    /// Convert to little-endian bits
    pub fn into_le_bits(self) -> BitArray<[u64; LIMBS], Lsb0> {
        BitArray::new(self.0)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    /// Converts from an arbitrary precision integer, failing with
    /// [ArithmeticError::Overflow] if it does not fit the width.
    pub fn from_biguint(x: &BigUint) -> Result<Self, ArithmeticError> {
        let digits = x.to_u64_digits();
        if digits.len() > LIMBS {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Self::from_limb_slice(&digits))
    }

    /// Changes the width, failing if significant limbs would be dropped.
    pub fn try_resize<const M: usize>(&self) -> Result<Uint<M>, ArithmeticError> {
        if self.0.iter().skip(M).any(|&l| l != 0) {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Uint::<M>::from_limb_slice(&self.0[..LIMBS.min(M)]))
    }
}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    fn from(x: u64) -> Self {
        Self::from_u64(x)
    }
}

impl<const LIMBS: usize> TryFrom<&BigUint> for Uint<LIMBS> {
    type Error = ArithmeticError;

    fn try_from(x: &BigUint) -> Result<Self, Self::Error> {
        Self::from_biguint(x)
    }
}

impl<const LIMBS: usize> From<Uint<LIMBS>> for BigUint {
    fn from(x: Uint<LIMBS>) -> Self {
        x.to_biguint()
    }
}
