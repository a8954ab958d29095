pub mod coinflip;
pub mod crash;
pub mod dice;
pub mod keystream;
pub mod mines;
pub mod types;

pub use coinflip::{verify_coinflip, CoinflipOutcome};
pub use crash::{verify_crash, CrashOutcome};
pub use dice::{verify_dice, DiceOutcome};
pub use keystream::{verify_first_hmac, KeystreamOutcome};
pub use mines::{verify_mines, MinesOutcome, MinesParams};
pub use types::{CoinSide, GameOutcome, Nonce};

use crate::codec;
use crate::errors::VerifyError;

/// Decode the revealed server seed; the raw bytes are the HMAC key for every
/// game. Typically 64 hex chars (32 bytes), but any even-length hex is
/// accepted since the backend owns the seed format.
pub(crate) fn server_seed_bytes(server_seed_hex: &str) -> Result<Vec<u8>, VerifyError> {
    codec::hex_to_bytes_named("server_seed_hex", server_seed_hex)
}
