//! Curve parameter sets and the named curves built from them.
//!
//! Parameters are plain arbitrary-precision integers so they can be loaded
//! from configuration; they are converted into fixed-width values once, when
//! a curve is constructed.
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{EdwardsCurve, WeierstrassCurve};
use crate::algebra::field::{Field, MontgomeryField};
use crate::algebra::uint::Uint;
use crate::{ArithmeticError, CurveError};

/// Domain parameters of a curve.
///
/// For Weierstrass curves `a` and `b` are the coefficients of
/// `y² = x³ + a·x + b`. For twisted Edwards curves `a` and `b` hold the
/// coefficients `a` and `d` of `a·x² + y² = 1 + d·x²·y²`. Integers
/// serialize as `0x`-prefixed hex strings and deserialize from hex or
/// decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveParams {
    pub name: String,
    #[serde(with = "biguint_str")]
    pub modulus: BigUint,
    #[serde(with = "biguint_str")]
    pub order: BigUint,
    #[serde(with = "biguint_str")]
    pub a: BigUint,
    #[serde(with = "biguint_str")]
    pub b: BigUint,
    #[serde(with = "biguint_str")]
    pub gx: BigUint,
    #[serde(with = "biguint_str")]
    pub gy: BigUint,
}

/// Hex literal of a built-in constant. A typo yields zero, which the curve
/// constructor then rejects.
fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap_or_default()
}

impl CurveParams {
    pub fn secp256k1() -> Self {
        Self {
            name: "secp256k1".to_owned(),
            modulus: hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
            order: hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
            a: BigUint::from(0u8),
            b: BigUint::from(7u8),
            gx: hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            gy: hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        }
    }

    pub fn secp256r1() -> Self {
        Self {
            name: "secp256r1".to_owned(),
            modulus: hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
            order: hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
            a: hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
            b: hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
            gx: hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            gy: hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        }
    }

    /// The pairing-friendly BN curve `y² = x³ + 3` of 254 bits
    pub fn bn256() -> Self {
        Self {
            name: "bn256".to_owned(),
            modulus: hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"),
            order: hex("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"),
            a: BigUint::from(0u8),
            b: BigUint::from(3u8),
            gx: BigUint::from(1u8),
            gy: BigUint::from(2u8),
        }
    }

    /// The twisted Edwards form of Curve25519 with `a = -1`
    pub fn ed25519() -> Self {
        Self {
            name: "ed25519".to_owned(),
            modulus: hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"),
            order: hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
            a: hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec"),
            b: hex("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3"),
            gx: hex("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
            gy: hex("6666666666666666666666666666666666666666666666666666666666666658"),
        }
    }

    /// Converts the parameters to `[modulus, order, a, b, gx, gy]`.
    fn to_uints<const LIMBS: usize>(&self) -> Result<[Uint<LIMBS>; 6], ArithmeticError> {
        Ok([
            Uint::from_biguint(&self.modulus)?,
            Uint::from_biguint(&self.order)?,
            Uint::from_biguint(&self.a)?,
            Uint::from_biguint(&self.b)?,
            Uint::from_biguint(&self.gx)?,
            Uint::from_biguint(&self.gy)?,
        ])
    }
}

impl<F: Field<LIMBS>, const LIMBS: usize> WeierstrassCurve<F, LIMBS> {
    /// Builds the curve over the field returned by `field` for the modulus.
    pub fn from_params(
        params: &CurveParams,
        field: impl FnOnce(Uint<LIMBS>) -> Result<F, ArithmeticError>,
    ) -> Result<Self, CurveError> {
        let [p, n, a, b, gx, gy] = params.to_uints()?;
        Self::new(params.name.clone(), field(p)?, n, &a, &b, &gx, &gy)
    }
}

impl<F: Field<LIMBS>, const LIMBS: usize> EdwardsCurve<F, LIMBS> {
    /// Builds the curve over the field returned by `field` for the modulus,
    /// reading `d` from [CurveParams::b].
    pub fn from_params(
        params: &CurveParams,
        field: impl FnOnce(Uint<LIMBS>) -> Result<F, ArithmeticError>,
    ) -> Result<Self, CurveError> {
        let [p, n, a, d, gx, gy] = params.to_uints()?;
        Self::new(params.name.clone(), field(p)?, n, &a, &d, &gx, &gy)
    }
}

pub fn secp256k1() -> Result<WeierstrassCurve<MontgomeryField<4>, 4>, CurveError> {
    WeierstrassCurve::from_params(&CurveParams::secp256k1(), MontgomeryField::<4>::new)
}

pub fn secp256r1() -> Result<WeierstrassCurve<MontgomeryField<4>, 4>, CurveError> {
    WeierstrassCurve::from_params(&CurveParams::secp256r1(), MontgomeryField::<4>::new)
}

pub fn bn256() -> Result<WeierstrassCurve<MontgomeryField<4>, 4>, CurveError> {
    WeierstrassCurve::from_params(&CurveParams::bn256(), MontgomeryField::<4>::new)
}

pub fn ed25519() -> Result<EdwardsCurve<MontgomeryField<4>, 4>, CurveError> {
    EdwardsCurve::from_params(&CurveParams::ed25519(), MontgomeryField::<4>::new)
}

mod biguint_str {
    use num_bigint::BigUint;
    use serde::de::Visitor;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(v: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!("0x{v:x}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigUintVisitor;

        impl<'de> Visitor<'de> for BigUintVisitor {
            type Value = BigUint;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a 0x-prefixed hex string or a decimal string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let parsed = match v.strip_prefix("0x") {
                    Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
                    None => BigUint::parse_bytes(v.as_bytes(), 10),
                };
                parsed.ok_or_else(|| E::custom(format!("invalid integer: {v}")))
            }
        }

        deserializer.deserialize_str(BigUintVisitor)
    }
}
