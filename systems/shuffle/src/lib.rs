#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Solvable-by-construction scramble planning.
//!
//! A scramble is a random walk of legal moves starting from the current
//! empty slot. Because every step is itself a legal move, the resulting
//! permutation is reachable from the starting state by definition and is
//! therefore solvable, with no permutation-parity analysis required.
//!
//! Legality depends only on the empty slot and the board size, so the walk
//! is planned over the empty slot alone: each chosen cell becomes the next
//! empty position. The board applies the finished walk silently via
//! `Command::Scramble`.

use rand::Rng;
use tile_slide_core::{GridCoord, GridSize};
use tile_slide_system_moves::legal_moves;

/// Number of walk steps used when the caller has no preference.
pub const DEFAULT_STEPS: u32 = 100;

/// Plans a scramble walk of `steps` legal moves.
///
/// Each step picks uniformly at random among the cells adjacent to the
/// walk's current empty position. `steps = 0` produces an empty walk and
/// leaves the puzzle trivially solved; callers wanting an actual scramble
/// should pass at least [`DEFAULT_STEPS`] for boards of size three or more.
#[must_use]
pub fn plan_walk<R>(empty: GridCoord, size: GridSize, steps: u32, rng: &mut R) -> Vec<GridCoord>
where
    R: Rng + ?Sized,
{
    let mut walk = Vec::with_capacity(steps as usize);
    let mut cursor = empty;
    for _ in 0..steps {
        let candidates = legal_moves(cursor, size);
        if candidates.is_empty() {
            break;
        }
        let chosen = candidates[rng.gen_range(0..candidates.len())];
        walk.push(chosen);
        cursor = chosen;
    }
    walk
}
