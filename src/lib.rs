//! Fairproof - Provably-Fair Outcome Verification
//!
//! Pure functions that recompute casino game results (dice, crash, coinflip,
//! mines bomb layouts, and a generic first-HMAC check for slots/plinko) from
//! revealed seed material, so a third party can confirm the backend did not
//! manipulate outcomes.
//!
//! This is the verifier side only: it never generates seeds or randomness,
//! holds no state, and performs no I/O. Every derivation takes the revealed
//! server seed (hex), the client seed(s), and the round nonce, and returns
//! the human-meaningful result together with the digest it was derived from,
//! for comparison against the backend's declared values.
//!
//! The exact message byte layouts (part order, literal separators, decimal
//! nonce stringification) are the cryptographic contract. A deviation does
//! not raise an error; it silently yields a different, wrong digest. When a
//! recomputed result disagrees with the backend's claim, suspect the inputs'
//! stringification before suspecting the backend.
//!
//! ```
//! use fairproof::{verify_dice, Nonce};
//!
//! let seed = "8b2f6c1a9d4e73055fa0b8c6d2e491377cd5a3e8f1b09264d7c8e5a2f6b3d190";
//! let outcome = verify_dice(seed, "abc", &Nonce::from(1u64)).unwrap();
//! assert!((1..=100).contains(&outcome.roll));
//! ```

pub mod base58;
pub mod codec;
pub mod crypto;
pub mod errors;
pub mod games;

pub use crypto::{hmac_sha256, sha256, verify_seed_commitment, MacPart};
pub use errors::VerifyError;
pub use games::{
    verify_coinflip, verify_crash, verify_dice, verify_first_hmac, verify_mines, CoinSide,
    CoinflipOutcome, CrashOutcome, DiceOutcome, GameOutcome, KeystreamOutcome, MinesOutcome,
    MinesParams, Nonce,
};
