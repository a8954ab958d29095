//! Mines bomb-layout verification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::base58;
use crate::crypto::{hmac_sha256, MacPart};
use crate::errors::VerifyError;
use crate::games::{server_seed_bytes, Nonce};

// Rejection sampling terminates in a handful of draws for real grids; a
// budget this size is only ever hit by adversarial parameters.
const DRAW_BUDGET_PER_CELL: u64 = 10;

/// Grid and layout parameters for a mines round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinesParams {
    pub rows: u32,
    pub cols: u32,
    pub mine_count: u32,
    /// Cell index guaranteed bomb-free (the player's first pick).
    pub first_safe_index: Option<u32>,
}

/// A recomputed bomb layout plus the seed sanity digest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesOutcome {
    /// Bomb cell indices, sorted ascending, each in [0, rows*cols).
    pub bomb_indices: Vec<u32>,
    /// HMAC(serverSeed, clientSeed ++ nonceString): a grid-independent
    /// "right server seed?" check, not part of the layout derivation.
    pub first_hmac_hex: String,
}

/// Recompute a mines bomb layout from revealed seed material.
///
/// The layout key is HMAC(serverSeed, pubkey32 ++ nonceString ++ clientSeed),
/// binding the layout to one player and round. Bomb cells are then drawn by
/// rejection sampling: draw `i` hashes the decimal counter with the layout
/// key, the first 4 digest bytes map onto the grid, and draws landing on the
/// first-safe cell or an already-chosen cell are discarded. The counter keeps
/// advancing across rejections, so the draw order is part of the contract.
pub fn verify_mines(
    server_seed_hex: &str,
    client_seed: &str,
    nonce: &Nonce,
    player_pubkey_b58: &str,
    params: &MinesParams,
) -> Result<MinesOutcome, VerifyError> {
    let cells = validate(params)?;
    let server_seed = server_seed_bytes(server_seed_hex)?;
    let pubkey = base58::decode_pubkey(player_pubkey_b58)?;
    let nonce_str = nonce.to_string();

    let seed_key = hmac_sha256(
        &server_seed,
        &[
            MacPart::Bytes(&pubkey),
            MacPart::Text(&nonce_str),
            MacPart::Text(client_seed),
        ],
    )?;

    let draw_budget = u64::from(cells) * DRAW_BUDGET_PER_CELL;
    let mut bombs: BTreeSet<u32> = BTreeSet::new();
    let mut i: u64 = 0;
    while (bombs.len() as u32) < params.mine_count {
        if i >= draw_budget {
            return Err(VerifyError::Domain(format!(
                "draw budget exhausted after {} draws ({} of {} mines placed)",
                i,
                bombs.len(),
                params.mine_count
            )));
        }
        let digest = hmac_sha256(&seed_key, &[MacPart::Text(&i.to_string())])?;
        i += 1;

        let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        let idx = n % cells;
        if params.first_safe_index == Some(idx) {
            continue;
        }
        // BTreeSet also rejects duplicates, continuing on the next counter.
        bombs.insert(idx);
    }

    let first_hmac = hmac_sha256(
        &server_seed,
        &[MacPart::Text(client_seed), MacPart::Text(&nonce_str)],
    )?;

    tracing::debug!(
        draws = i,
        mines = params.mine_count,
        cells,
        "mines layout recomputed"
    );

    Ok(MinesOutcome {
        bomb_indices: bombs.into_iter().collect(),
        first_hmac_hex: hex::encode(first_hmac),
    })
}

fn validate(params: &MinesParams) -> Result<u32, VerifyError> {
    let cells = params
        .rows
        .checked_mul(params.cols)
        .filter(|&c| c > 0)
        .ok_or_else(|| {
            VerifyError::Domain(format!(
                "grid {}x{} has no cells",
                params.rows, params.cols
            ))
        })?;

    if let Some(safe) = params.first_safe_index {
        if safe >= cells {
            return Err(VerifyError::Domain(format!(
                "first_safe_index {} outside {}-cell grid",
                safe, cells
            )));
        }
    }

    // A full grid cannot terminate once a safe cell is reserved, and an
    // all-bomb board is not a playable round either way.
    if params.mine_count >= cells {
        return Err(VerifyError::Domain(format!(
            "mine_count {} >= {} grid cells",
            params.mine_count, cells
        )));
    }

    Ok(cells)
}
