mod additive;
mod cmp;
mod convert;
pub(crate) mod core;
mod division;
mod hex;
mod modular;
mod multiplicative;
mod random;
mod serde;
mod shift;

/// Fixed-width unsigned integer of `64 * LIMBS` bits.
///
/// Limbs are stored little-endian, `self.0[0]` being the least significant
/// word. Every operation returns a fresh value; nothing is ever shared
/// between two integers.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Uint<const LIMBS: usize>(pub [u64; LIMBS]);

/// 64-bit unsigned integer.
pub type U64 = Uint<1>;
/// 128-bit unsigned integer.
pub type U128 = Uint<2>;
/// 256-bit unsigned integer.
pub type U256 = Uint<4>;
/// 512-bit unsigned integer.
pub type U512 = Uint<8>;
/// 1024-bit unsigned integer.
pub type U1024 = Uint<16>;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Constant zero
    pub const ZERO: Self = Uint([0u64; LIMBS]);

    /// Constant one
    pub const ONE: Self = Self::from_u64(1);

    /// Largest representable value, `2^BITS - 1`
    pub const MAX: Self = Uint([u64::MAX; LIMBS]);

    /// Width in bits
    pub const BITS: u32 = 64 * LIMBS as u32;

    /// Width in bytes of the big-endian encoding
    pub const BYTES: usize = 8 * LIMBS;
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> std::fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Uint<{}>(0x{:x})", Self::BITS, self)
    }
}

impl<const LIMBS: usize> std::fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{self:x}")
    }
}

impl<const LIMBS: usize> std::fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut limbs = self.0.iter().rev().skip_while(|&&l| l == 0);
        match limbs.next() {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{top:x}")?;
                limbs.try_for_each(|l| write!(f, "{l:016x}"))
            }
        }
    }
}

impl<const LIMBS: usize> std::fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut limbs = self.0.iter().rev().skip_while(|&&l| l == 0);
        match limbs.next() {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{top:X}")?;
                limbs.try_for_each(|l| write!(f, "{l:016X}"))
            }
        }
    }
}
