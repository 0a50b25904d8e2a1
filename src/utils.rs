//! Shared helpers: hex parsing and formatting, hex-string serde for fixed-size types

/// First eight bytes as hex, for log lines and `Debug` output
pub(crate) fn short_hex(bytes: &[u8]) -> String {
    let end = bytes.len().min(8);
    format!("{}..", hex::encode(&bytes[..end]))
}

/// Decode a hex string, tolerating surrounding whitespace and an optional `0x` prefix
pub fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.trim();
    hex::decode(text.strip_prefix("0x").unwrap_or(text))
}

/// `Serialize`/`Deserialize` as a lowercase hex string
///
/// The type needs `as_bytes(&self) -> &[u8; _]` and a fallible
/// `from_slice(&[u8])` whose error implements `Display`.
macro_rules! impl_hex_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(self.as_bytes()))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                let bytes = $crate::utils::decode_hex(&text).map_err(serde::de::Error::custom)?;
                <$ty>::from_slice(&bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_hex_serde;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex() {
        assert_eq!(short_hex(&[0xab; 32]), "abababababababab..");
        assert_eq!(short_hex(&[0x01, 0x02]), "0102..");
    }

    #[test]
    fn test_decode_hex_prefix() {
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex(" 0a0b\n").unwrap(), vec![0x0a, 0x0b]);
        assert!(decode_hex("0g").is_err());
    }
}
