//! Crash multiplier verification.

use serde::{Deserialize, Serialize};

use crate::crypto::{hmac_sha256, MacPart};
use crate::errors::VerifyError;
use crate::games::{server_seed_bytes, Nonce};

const HOUSE_EDGE: f64 = 0.99;
const MIN_MULTIPLIER: f64 = 1.01;
const MAX_MULTIPLIER: f64 = 10_000.0;
// Keeps the divisor nonzero as r approaches 1.
const R_CAP: f64 = 0.999999999999;

/// A recomputed crash point plus its intermediate values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrashOutcome {
    /// Multiplier in [1.01, 10000].
    pub crash_at_mul: f64,
    /// Uniform variate in [0, 1) derived from the digest.
    pub r: f64,
    /// First 8 digest bytes as a big-endian u64, decimal string. Kept as a
    /// string because the value can exceed what a double carries exactly.
    pub n64: String,
    pub hmac_hex: String,
}

/// Recompute a crash point from revealed seed material.
///
/// The first 8 digest bytes form a big-endian u64; dropping the low 11 bits
/// leaves 53 bits, normalized into [0, 1) at full double-mantissa width.
/// The inverse-uniform transform `0.99 / (1 - r)` produces the heavy-tailed
/// crash distribution, clamped to [1.01, 10000].
pub fn verify_crash(
    server_seed_hex: &str,
    client_seed: &str,
    nonce: &Nonce,
) -> Result<CrashOutcome, VerifyError> {
    let server_seed = server_seed_bytes(server_seed_hex)?;
    let nonce_str = nonce.to_string();

    let digest = hmac_sha256(
        &server_seed,
        &[MacPart::Text(client_seed), MacPart::Text(&nonce_str)],
    )?;

    let n64 = u64::from_be_bytes([
        digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
    ]);
    let r = (n64 >> 11) as f64 / (1u64 << 53) as f64;
    let m = HOUSE_EDGE / (1.0 - r.min(R_CAP));
    let crash_at_mul = m.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);

    tracing::debug!(crash_at_mul, r, n64, "crash outcome recomputed");

    Ok(CrashOutcome {
        crash_at_mul,
        r,
        n64: n64.to_string(),
        hmac_hex: hex::encode(digest),
    })
}
