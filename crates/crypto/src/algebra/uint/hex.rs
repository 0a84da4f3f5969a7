use std::str::FromStr;

use num_bigint::BigUint;

use super::Uint;
use crate::ArithmeticError;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Parses a hex string with an optional `0x` prefix. The empty string
    /// (and a bare `0x`) parse as zero.
    pub fn from_hex_str(s: &str) -> Result<Self, ArithmeticError> {
        let s = s.strip_prefix("0x").unwrap_or(s).as_bytes();

        let mut res = [0u64; LIMBS];
        for (i, &c) in s.iter().rev().enumerate() {
            let v = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => return Err(ArithmeticError::InvalidDigit),
            } as u64;
            let limb = i / 16;
            if limb >= LIMBS {
                if v != 0 {
                    return Err(ArithmeticError::Overflow);
                }
                continue;
            }
            res[limb] |= v << ((i % 16) * 4);
        }
        Ok(Uint(res))
    }

    /// Parses a decimal string.
    pub fn from_dec_str(s: &str) -> Result<Self, ArithmeticError> {
        if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
            return Err(ArithmeticError::InvalidDigit);
        }
        let big = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(ArithmeticError::InvalidDigit)?;
        Self::from_biguint(&big)
    }
}

/// Accepts `0x`-prefixed hex or plain decimal.
impl<const LIMBS: usize> FromStr for Uint<LIMBS> {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            Self::from_hex_str(s)
        } else {
            Self::from_dec_str(s)
        }
    }
}
