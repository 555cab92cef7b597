//! Random games.
//!
//! A playout repeatedly picks a random empty point and offers it to the
//! engine for the side to move. Rejected points are skipped until every
//! empty point has been tried, so a playout always terminates.

use log::debug;

use crate::board::Point;
use crate::engine::{BoardEngine, MoveOutcome};

/// Play up to `max_moves` random legal moves on `engine`.
///
/// Returns the applied moves in order. Stops early when no empty point
/// accepts a stone for the side to move.
pub fn random_game(
    engine: &mut BoardEngine,
    max_moves: usize,
    rng: &mut fastrand::Rng,
) -> Vec<(Point, MoveOutcome)> {
    let mut played = Vec::with_capacity(max_moves);

    while played.len() < max_moves {
        match random_move(engine, rng) {
            Some(mv) => played.push(mv),
            None => {
                debug!(
                    "No legal move for {} after {} moves",
                    engine.current_turn(),
                    played.len()
                );
                break;
            }
        }
    }

    played
}

/// Play one random legal move for the side to move, if any exists.
pub fn random_move(engine: &mut BoardEngine, rng: &mut fastrand::Rng) -> Option<(Point, MoveOutcome)> {
    let mut candidates: Vec<Point> = engine
        .board()
        .points()
        .filter(|&pt| engine.board().is_empty_at(pt))
        .collect();

    while !candidates.is_empty() {
        let i = rng.usize(..candidates.len());
        let pt = candidates.swap_remove(i);
        if let Ok(outcome) = engine.play(pt) {
            return Some((pt, outcome));
        }
    }

    None
}
