//! Shared types for the per-game derivations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::games::coinflip::CoinflipOutcome;
use crate::games::crash::CrashOutcome;
use crate::games::dice::DiceOutcome;
use crate::games::keystream::KeystreamOutcome;
use crate::games::mines::MinesOutcome;

/// Per-round nonce, accepted as an integer or a string and always
/// re-stringified before UTF-8 encoding. Integer nonces render as plain
/// decimal (no leading zeros or signs); string nonces are used verbatim.
/// The stringified form is part of the signed message, so it must match the
/// backend's convention byte for byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Nonce {
    Int(u64),
    Text(String),
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nonce::Int(n) => write!(f, "{}", n),
            Nonce::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Nonce {
    fn from(n: u64) -> Self {
        Nonce::Int(n)
    }
}

impl From<&str> for Nonce {
    fn from(s: &str) -> Self {
        Nonce::Text(s.to_string())
    }
}

impl From<String> for Nonce {
    fn from(s: String) -> Self {
        Nonce::Text(s)
    }
}

/// Which side a coin landed on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinSide::Heads => write!(f, "heads"),
            CoinSide::Tails => write!(f, "tails"),
        }
    }
}

/// A verified outcome from any supported game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameOutcome {
    Dice(DiceOutcome),
    Crash(CrashOutcome),
    Coinflip(CoinflipOutcome),
    Mines(MinesOutcome),
    Keystream(KeystreamOutcome),
}
