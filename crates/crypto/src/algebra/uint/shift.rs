use super::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Shift left, bits shifted past the width are dropped
    pub fn shl(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }
        let limbs = (shift / 64) as usize;
        let bits = shift % 64;
        let mut r = [0u64; LIMBS];
        for i in limbs..LIMBS {
            let src = i - limbs;
            r[i] = self.0[src] << bits;
            if bits > 0 && src > 0 {
                r[i] |= self.0[src - 1] >> (64 - bits);
            }
        }
        Uint(r)
    }

    /// Shift right
    pub fn shr(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }
        let limbs = (shift / 64) as usize;
        let bits = shift % 64;
        let mut r = [0u64; LIMBS];
        for i in 0..LIMBS - limbs {
            let src = i + limbs;
            r[i] = self.0[src] >> bits;
            if bits > 0 && src + 1 < LIMBS {
                r[i] |= self.0[src + 1] << (64 - bits);
            }
        }
        Uint(r)
    }

    /// Returns bit `i`, counting from the least significant bit
    #[inline(always)]
    pub const fn bit(&self, i: u32) -> bool {
        let limb = (i / 64) as usize;
        limb < LIMBS && (self.0[limb] >> (i % 64)) & 1 == 1
    }

    /// Number of bits needed to represent the value, zero for zero
    pub const fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    pub const fn leading_zeros(&self) -> u32 {
        let mut zeros = 0;
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return zeros + self.0[i].leading_zeros();
            }
            zeros += 64;
        }
        zeros
    }

    /// The least significant limb
    #[inline(always)]
    pub const fn low_u64(&self) -> u64 {
        if LIMBS == 0 {
            0
        } else {
            self.0[0]
        }
    }
}

impl<const LIMBS: usize> std::ops::Shl<u32> for Uint<LIMBS> {
    type Output = Self;
    fn shl(self, rhs: u32) -> Self::Output {
        Uint::shl(&self, rhs)
    }
}

impl<const LIMBS: usize> std::ops::Shr<u32> for Uint<LIMBS> {
    type Output = Self;
    fn shr(self, rhs: u32) -> Self::Output {
        Uint::shr(&self, rhs)
    }
}

impl<const LIMBS: usize> std::ops::BitAnd for Uint<LIMBS> {
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a &= b);
        self
    }
}

impl<const LIMBS: usize> std::ops::BitOr for Uint<LIMBS> {
    type Output = Self;
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a |= b);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::uint::{U256, U64};

    #[test]
    fn shifts() {
        let one = U256::ONE;
        assert_eq!(one << 64, U256::from_limbs([0, 1, 0, 0]));
        assert_eq!(one << 255, U256::from_limbs([0, 0, 0, 1 << 63]));
        assert_eq!(one << 256, U256::ZERO);
        assert_eq!((one << 255) >> 255, one);
        assert_eq!(U256::MAX >> 300, U256::ZERO);
        assert_eq!(U256::from_limbs([0, 0b11, 0, 0]) >> 65, U256::ONE);
        assert_eq!(
            U256::from_limbs([0, 0b11, 0, 0]) >> 1,
            U256::from_limbs([1 << 63, 1, 0, 0])
        );
        assert_eq!(U64::from_u64(6) >> 1, U64::from_u64(3));
    }

    #[test]
    fn shift_roundtrip_random() {
        let rng = &mut rand::thread_rng();
        for s in 0..256 {
            let a = U256::random(rng) >> s;
            assert_eq!((a << s) >> s, a);
        }
    }

    #[test]
    fn bit_access() {
        let x = U256::from_limbs([0b101, 0, 0, 1 << 62]);
        assert!(x.bit(0));
        assert!(!x.bit(1));
        assert!(x.bit(2));
        assert!(x.bit(254));
        assert!(!x.bit(255));
        assert!(!x.bit(1000));
        assert_eq!(x.bits(), 255);
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(U256::MAX.leading_zeros(), 0);
    }

    #[test]
    fn bitwise() {
        let a = U256::from_limbs([0b1100, 1, 0, 0]);
        let b = U256::from_limbs([0b1010, 1, 1, 0]);
        assert_eq!(a & b, U256::from_limbs([0b1000, 1, 0, 0]));
        assert_eq!(a | b, U256::from_limbs([0b1110, 1, 1, 0]));
    }
}
