//! Generic first-keystream check for slots and plinko.
//!
//! The full multi-stage slot/plinko algorithms are not exposed client-side,
//! so full replay is impossible. What can be checked is that the revealed
//! seed material reproduces the backend's claimed first HMAC, which anchors
//! the rest of the keystream.

use serde::{Deserialize, Serialize};

use crate::crypto::{hmac_sha256, MacPart};
use crate::errors::VerifyError;
use crate::games::{server_seed_bytes, Nonce};

/// The recomputed first HMAC and, when an expected value was supplied,
/// whether it matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeystreamOutcome {
    pub hmac_hex: String,
    /// `None` when no expected digest was given to compare against.
    pub matches: Option<bool>,
}

/// Recompute HMAC(serverSeed, clientSeed ++ nonceString) and optionally
/// compare it to the backend's claimed digest (trimmed, case-insensitive).
pub fn verify_first_hmac(
    server_seed_hex: &str,
    client_seed: &str,
    nonce: &Nonce,
    expected_hmac_hex: Option<&str>,
) -> Result<KeystreamOutcome, VerifyError> {
    let server_seed = server_seed_bytes(server_seed_hex)?;
    let nonce_str = nonce.to_string();

    let digest = hmac_sha256(
        &server_seed,
        &[MacPart::Text(client_seed), MacPart::Text(&nonce_str)],
    )?;
    let hmac_hex = hex::encode(digest);

    let matches = expected_hmac_hex.map(|expected| hmac_hex.eq_ignore_ascii_case(expected.trim()));
    if let Some(ok) = matches {
        tracing::debug!(matched = ok, "first keystream compared");
    }

    Ok(KeystreamOutcome { hmac_hex, matches })
}
