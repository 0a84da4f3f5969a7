use serde::{de::Visitor, Deserialize, Serialize};

use super::Uint;

impl<const LIMBS: usize> Serialize for Uint<LIMBS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const LIMBS: usize> Deserialize<'de> for Uint<LIMBS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct UintVisitor<const LIMBS: usize>;

        impl<'de, const LIMBS: usize> Visitor<'de> for UintVisitor<LIMBS> {
            type Value = Uint<LIMBS>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    formatter,
                    "a hex string of up to {} digits with an optional '0x' prefix",
                    LIMBS * 16
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Uint::from_hex_str(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(UintVisitor::<LIMBS>)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions_sorted::assert_eq;

    use crate::algebra::uint::{U128, U256};

    const ZERO: &str = r#""0x0""#;
    const ODD: &str = "0x1234567890abcde";
    const MAX: &str = "0xffffffffffffffffffffffffffffffff";

    #[test]
    fn empty() {
        assert_eq!(serde_json::from_str::<U256>(r#""""#).unwrap(), U256::ZERO);
        assert_eq!(serde_json::from_str::<U256>(r#""0x""#).unwrap(), U256::ZERO);
    }

    #[test]
    fn zero() {
        assert_eq!(serde_json::to_string(&U256::ZERO).unwrap(), ZERO);
        assert_eq!(serde_json::from_str::<U256>(ZERO).unwrap(), U256::ZERO);
    }

    #[test]
    fn odd() {
        let original = U256::from_hex_str(ODD).unwrap();
        let expected = format!("\"{ODD}\"");
        assert_eq!(serde_json::to_string(&original).unwrap(), expected);
        assert_eq!(serde_json::from_str::<U256>(&expected).unwrap(), original);
    }

    #[test]
    fn max() {
        let expected = format!("\"{MAX}\"");
        assert_eq!(serde_json::to_string(&U128::MAX).unwrap(), expected);
        assert_eq!(serde_json::from_str::<U128>(&expected).unwrap(), U128::MAX);
    }

    #[test]
    fn overflow_is_rejected() {
        let too_big = format!("\"0x1{}\"", "0".repeat(32));
        assert!(serde_json::from_str::<U128>(&too_big).is_err());
    }
}
