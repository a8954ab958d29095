//! Byte-level codec helpers shared by every game derivation.
//!
//! All digests cross the public API as lowercase hex; all seed material is
//! reduced to raw bytes before it touches the MAC. Concatenation always
//! produces a single freshly-allocated contiguous buffer, because the HMAC
//! message is defined over the concatenated bytes, never over parts fed
//! incrementally.

use crate::errors::VerifyError;

/// Decode a hex string into bytes. Accepts an optional `0x`/`0X` prefix and
/// mixed case; rejects odd-length input instead of truncating.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, VerifyError> {
    hex_to_bytes_named("hex", input)
}

/// Like [`hex_to_bytes`], with the caller's field name in any error so the
/// offending input is identifiable at the API boundary.
pub fn hex_to_bytes_named(field: &'static str, input: &str) -> Result<Vec<u8>, VerifyError> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if stripped.len() % 2 != 0 {
        return Err(VerifyError::format(
            field,
            format!("odd number of hex digits ({})", stripped.len()),
        ));
    }

    hex::decode(stripped).map_err(|e| VerifyError::format(field, e.to_string()))
}

/// Encode bytes as lowercase hex, two characters per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// UTF-8 encode a string into its own buffer.
pub fn str_to_bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Concatenate chunks into one contiguous buffer, order preserved,
/// length = sum of inputs.
pub fn concat_bytes(chunks: &[&[u8]]) -> Vec<u8> {
    let total: usize = chunks.iter().map(|c| c.len()).sum();
    let mut out = Vec::with_capacity(total);
    for chunk in chunks {
        out.extend_from_slice(chunk);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_decode_accepts_prefix_and_mixed_case() {
        assert_eq!(hex_to_bytes("0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_decode_rejects_odd_length() {
        let err = hex_to_bytes("abc").unwrap_err();
        assert!(err.to_string().contains("odd"));
    }

    #[test]
    fn test_named_decode_reports_the_caller_field() {
        let err = hex_to_bytes_named("server_seed_hex", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid server_seed_hex: odd number of hex digits (3)"
        );
        let err = hex_to_bytes_named("committed_hash_hex", "zz").unwrap_err();
        assert!(err.to_string().starts_with("invalid committed_hash_hex:"));
    }

    #[test]
    fn test_hex_decode_rejects_non_hex_characters() {
        // Must error, never return empty or garbage bytes.
        assert!(hex_to_bytes("0xZZ").is_err());
        assert!(hex_to_bytes("zz").is_err());
    }

    #[test]
    fn test_hex_encode_is_lowercase_and_padded() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
    }

    #[test]
    fn test_concat_preserves_order_and_length() {
        let joined = concat_bytes(&[b"ab", b"", b"c"]);
        assert_eq!(joined, b"abc");
        assert_eq!(joined.capacity(), 3);
    }

    #[test]
    fn test_utf8_encoding_is_exact() {
        assert_eq!(str_to_bytes("a|b"), vec![0x61, 0x7c, 0x62]);
        assert_eq!(str_to_bytes("é"), vec![0xc3, 0xa9]);
    }
}
