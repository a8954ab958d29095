//! HMAC-SHA256 / SHA-256 engine behind every derivation.
//!
//! The message is always the full concatenation of its parts, hashed in one
//! pass. Feeding parts into an incremental MAC would produce the same bytes
//! mathematically, but the reference backends define their digests over the
//! pre-concatenated buffer, so this engine concatenates first and keeps that
//! shape observable in one place.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::codec;
use crate::errors::VerifyError;

type HmacSha256 = Hmac<Sha256>;

/// One part of an HMAC message: raw bytes or UTF-8 text.
#[derive(Debug, Clone, Copy)]
pub enum MacPart<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> MacPart<'a> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            MacPart::Bytes(b) => b,
            MacPart::Text(s) => s.as_bytes(),
        }
    }
}

/// HMAC-SHA256 over the concatenation of `parts`, keyed with `key`.
pub fn hmac_sha256(key: &[u8], parts: &[MacPart<'_>]) -> Result<[u8; 32], VerifyError> {
    let chunks: Vec<&[u8]> = parts.iter().map(|p| p.as_bytes()).collect();
    let message = codec::concat_bytes(&chunks);

    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| VerifyError::Environment(e.to_string()))?;
    mac.update(&message);

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Plain SHA-256 digest over bytes or text.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// Check a revealed server seed against the hash the backend committed to
/// before the round. Comparison is trimmed and case-insensitive; the seed
/// hash covers the raw seed bytes, not the hex string.
pub fn verify_seed_commitment(
    server_seed_hex: &str,
    committed_hash_hex: &str,
) -> Result<bool, VerifyError> {
    let seed = codec::hex_to_bytes_named("server_seed_hex", server_seed_hex)?;
    let computed = codec::bytes_to_hex(&sha256(&seed));
    Ok(computed.eq_ignore_ascii_case(committed_hash_hex.trim()))
}
