//! Coinflip verification.

use serde::{Deserialize, Serialize};

use crate::crypto::{hmac_sha256, MacPart};
use crate::errors::VerifyError;
use crate::games::{server_seed_bytes, CoinSide, Nonce};

/// A recomputed coinflip plus the digest bit that decided it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinflipOutcome {
    pub outcome: CoinSide,
    /// `digest[0] & 1`: 0 is heads, 1 is tails.
    pub bit: u8,
    pub hmac_hex: String,
}

/// Recompute a coinflip from revealed seed material.
///
/// Two client seeds, one per side. Message = seedA ++ "|" ++ seedB ++ "|" ++
/// nonceString. The literal pipes are part of the signed message: without
/// them, different seed splits ("ab"+"c" vs "a"+"bc") would collide.
pub fn verify_coinflip(
    server_seed_hex: &str,
    client_seed_a: &str,
    client_seed_b: &str,
    nonce: &Nonce,
) -> Result<CoinflipOutcome, VerifyError> {
    let server_seed = server_seed_bytes(server_seed_hex)?;
    let nonce_str = nonce.to_string();

    let digest = hmac_sha256(
        &server_seed,
        &[
            MacPart::Text(client_seed_a),
            MacPart::Text("|"),
            MacPart::Text(client_seed_b),
            MacPart::Text("|"),
            MacPart::Text(&nonce_str),
        ],
    )?;

    let bit = digest[0] & 1;
    let outcome = if bit == 0 {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    };

    tracing::debug!(%outcome, bit, "coinflip outcome recomputed");

    Ok(CoinflipOutcome {
        outcome,
        bit,
        hmac_hex: hex::encode(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "8b2f6c1a9d4e73055fa0b8c6d2e491377cd5a3e8f1b09264d7c8e5a2f6b3d190";
    const ZERO_SEED: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_known_vectors() {
        let out = verify_coinflip(ZERO_SEED, "a", "b", &Nonce::from(42u64)).unwrap();
        assert_eq!(out.bit, 0);
        assert_eq!(out.outcome, CoinSide::Heads);
        assert_eq!(
            out.hmac_hex,
            "92949af8366966854e8a97b7036d7f190b554321e8f126a81f26829f755c7019"
        );

        let out = verify_coinflip(SEED, "a", "b", &Nonce::from(42u64)).unwrap();
        assert_eq!(out.bit, 1);
        assert_eq!(out.outcome, CoinSide::Tails);
        assert_eq!(
            out.hmac_hex,
            "87fadd4f899b7224ce9fca0a8c42e7626d2ef5c869138b45f0d0f9cb373712ed"
        );
    }

    #[test]
    fn test_swapping_sides_changes_the_message() {
        let ab = verify_coinflip(ZERO_SEED, "a", "b", &Nonce::from(42u64)).unwrap();
        let ba = verify_coinflip(ZERO_SEED, "b", "a", &Nonce::from(42u64)).unwrap();
        assert_ne!(ab.hmac_hex, ba.hmac_hex);
        assert_eq!(
            ba.hmac_hex,
            "7c10d61aa487f94dd96fbe4f876cdd74762c7e26313eab81f6b108a8bf32c0e6"
        );
    }

    #[test]
    fn test_separators_prevent_seed_split_collisions() {
        let x = verify_coinflip(ZERO_SEED, "ab", "c", &Nonce::from(1u64)).unwrap();
        let y = verify_coinflip(ZERO_SEED, "a", "bc", &Nonce::from(1u64)).unwrap();
        assert_ne!(x.hmac_hex, y.hmac_hex);
    }
}
