//! Dice roll verification.

use serde::{Deserialize, Serialize};

use crate::crypto::{hmac_sha256, MacPart};
use crate::errors::VerifyError;
use crate::games::{server_seed_bytes, Nonce};

/// A recomputed dice roll plus the digest it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiceOutcome {
    /// Roll in [1, 100].
    pub roll: u32,
    pub hmac_hex: String,
}

/// Recompute a dice roll from revealed seed material.
///
/// Message = clientSeed ++ nonceString. The first 4 digest bytes, read as a
/// big-endian u32, are mapped with `% 100 + 1`. The modulo bias of folding
/// 2^32 onto 100 buckets is part of the reference algorithm and is
/// reproduced, not corrected.
pub fn verify_dice(
    server_seed_hex: &str,
    client_seed: &str,
    nonce: &Nonce,
) -> Result<DiceOutcome, VerifyError> {
    let server_seed = server_seed_bytes(server_seed_hex)?;
    let nonce_str = nonce.to_string();

    let digest = hmac_sha256(
        &server_seed,
        &[MacPart::Text(client_seed), MacPart::Text(&nonce_str)],
    )?;

    let v = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let roll = v % 100 + 1;

    tracing::debug!(roll, nonce = %nonce_str, "dice outcome recomputed");

    Ok(DiceOutcome {
        roll,
        hmac_hex: hex::encode(digest),
    })
}
