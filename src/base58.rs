//! Base58 decoder for Solana-style public keys.
//!
//! Bitcoin/Solana alphabet (no `0`, `O`, `I`, `l`). Only the mines layout
//! derivation needs this: the player's public key is mixed into the
//! per-round HMAC key as its 32 raw bytes.

use crate::errors::VerifyError;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Decode a base58 string into bytes. Each leading `'1'` becomes one leading
/// zero byte; any character outside the alphabet is rejected.
pub fn decode(input: &str) -> Result<Vec<u8>, VerifyError> {
    // Multiply-by-58 accumulate into little-endian bytes, then reverse.
    let mut accum: Vec<u8> = Vec::new();
    for ch in input.bytes() {
        let digit = ALPHABET
            .iter()
            .position(|&a| a == ch)
            .ok_or_else(|| {
                VerifyError::format("base58", format!("invalid character {:?}", ch as char))
            })? as u32;

        let mut carry = digit;
        for byte in accum.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            accum.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    // Leading '1's are zero bytes the big-integer pass cannot represent.
    let leading_zeros = input.bytes().take_while(|&c| c == b'1').count();
    let mut out = vec![0u8; leading_zeros];
    out.extend(accum.iter().rev());
    Ok(out)
}

/// Decode a base58-encoded 32-byte public key.
pub fn decode_pubkey(input: &str) -> Result<[u8; 32], VerifyError> {
    let bytes = decode(input)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        VerifyError::format(
            "player_pubkey",
            format!("expected 32 bytes, got {}", len),
        )
    })
}
