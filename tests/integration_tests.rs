//! Integration tests for simple-go
//!
//! Scenarios covering group discovery, capture and suicide resolution,
//! turn order and the (unimplemented) Ko rule.

use std::collections::BTreeSet;

use simple_go::board::{Color, Point};
use simple_go::engine::{BoardEngine, MoveError};
use simple_go::group::compute_groups;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place stones directly with the turn-agnostic entry point.
/// Black stones go first, then white ones. Every placement must be legal.
/// The turn counter is left wherever the setup moves put it, so tests use
/// `play_as` for the move under test.
fn setpos(size: usize, black: &[Point], white: &[Point]) -> BoardEngine {
    let mut engine = BoardEngine::new(size);
    for &pt in black {
        engine
            .play_as(pt, Color::Black)
            .unwrap_or_else(|e| panic!("setup black {pt:?}: {e}"));
    }
    for &pt in white {
        engine
            .play_as(pt, Color::White)
            .unwrap_or_else(|e| panic!("setup white {pt:?}: {e}"));
    }
    engine
}

fn occupied(engine: &BoardEngine) -> BTreeSet<Point> {
    let board = engine.board();
    board.points().filter(|&pt| board.get(pt).is_some()).collect()
}

// =============================================================================
// Group discovery
// =============================================================================

#[test]
fn test_groups_partition_occupied_points() {
    let engine = setpos(
        9,
        &[(0, 0), (0, 1), (1, 1), (4, 4), (4, 5)],
        &[(1, 0), (2, 0), (3, 3), (8, 8)],
    );
    let groups = engine.compute_groups();

    let mut union = BTreeSet::new();
    let mut total = 0;
    for g in &groups {
        total += g.stones.len();
        union.extend(g.stones.iter().copied());
        for &pt in &g.stones {
            assert_eq!(engine.board().get(pt), Some(g.color));
        }
    }
    assert_eq!(total, union.len(), "stone sets must be disjoint");
    assert_eq!(union, occupied(&engine));
    assert_eq!(groups.len(), 5);
}

#[test]
fn test_liberties_are_distinct() {
    // A 2x2 block in the middle
    let engine = setpos(9, &[(3, 3), (3, 4), (4, 3), (4, 4)], &[]);
    let groups = engine.compute_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].liberty_count(), 8);

    // Two stones sharing a liberty at (1, 1)
    let engine = setpos(9, &[(0, 1), (1, 0), (0, 0)], &[]);
    let groups = engine.compute_groups();
    assert_eq!(groups.len(), 1);
    let expected: BTreeSet<Point> = [(0, 2), (1, 1), (2, 0)].into_iter().collect();
    assert_eq!(groups[0].liberties, expected);
}

#[test]
fn test_compute_groups_is_idempotent() {
    let engine = setpos(9, &[(2, 2), (2, 3), (5, 5)], &[(3, 2), (6, 6), (6, 7)]);
    let first = engine.compute_groups();
    let second = engine.compute_groups();
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.color, b.color);
        assert_eq!(a.liberties, b.liberties);
    }
}

#[test]
fn test_returned_groups_are_independent_snapshots() {
    let mut engine = setpos(9, &[(4, 4)], &[]);
    let before = engine.compute_groups();
    engine.play_as((4, 5), Color::Black).unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].stones.len(), 1);
    assert_eq!(before[0].liberty_count(), 4);
    assert_eq!(engine.compute_groups()[0].stones.len(), 2);
}

#[test]
fn test_group_discovery_on_full_width_wall() {
    let wall: Vec<Point> = (0..19).map(|col| (9, col)).collect();
    let engine = setpos(19, &wall, &[]);
    let groups = compute_groups(engine.board());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].stones.len(), 19);
    assert_eq!(groups[0].liberty_count(), 38);
}

// =============================================================================
// Move legality
// =============================================================================

#[test]
fn test_occupied_point_never_mutates() {
    let mut engine = setpos(9, &[(4, 4)], &[]);
    let board = engine.board().clone();
    let turn = engine.current_turn();

    for color in [Color::Black, Color::White] {
        let result = engine.attempt_move((4, 4), color);
        assert!(!result.legal);
        assert_eq!(result.rejection, Some(MoveError::Occupied));
    }
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.current_turn(), turn);
}

#[test]
fn test_single_stone_suicide_is_illegal() {
    let mut engine = setpos(9, &[], &[(0, 1), (2, 1), (1, 0), (1, 2)]);
    let board = engine.board().clone();
    let turn = engine.current_turn();

    let result = engine.attempt_move((1, 1), Color::Black);
    assert!(!result.legal);
    assert_eq!(result.rejection, Some(MoveError::Suicide));
    assert!(result.captured.is_empty());
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.board().get((1, 1)), None);
    assert_eq!(engine.current_turn(), turn);
}

#[test]
fn test_multi_stone_suicide_is_illegal() {
    // Black (0,0) would join (0,1) and leave the pair with no liberties.
    let mut engine = setpos(9, &[(0, 1)], &[(0, 2), (1, 1), (1, 0)]);
    assert_eq!(engine.play_as((0, 0), Color::Black), Err(MoveError::Suicide));
    assert_eq!(engine.board().get((0, 0)), None);
    assert_eq!(engine.board().get((0, 1)), Some(Color::Black));
}

#[test]
fn test_joining_own_stones_in_corner_is_legal() {
    // The joined group keeps liberties, so this is not suicide.
    let mut engine = setpos(9, &[], &[(0, 1), (1, 0)]);
    assert!(engine.play_as((0, 0), Color::White).is_ok());
}

#[test]
fn test_capture_overrides_suicide() {
    // White (0,1) is alone with one liberty at (0,0). White (1,0)-(2,0) still
    // has (3,0). Black at (0,0) has no liberties until (0,1) is removed.
    let mut engine = setpos(
        9,
        &[(0, 2), (1, 1), (2, 1)],
        &[(0, 1), (1, 0), (2, 0)],
    );

    let result = engine.attempt_move((0, 0), Color::Black);
    assert!(result.legal);
    assert_eq!(result.captured, vec![(0, 1)]);
    assert_eq!(engine.board().get((0, 0)), Some(Color::Black));
    assert_eq!(engine.board().get((0, 1)), None);
    assert_eq!(engine.board().get((1, 0)), Some(Color::White));

    let own = engine
        .groups()
        .iter()
        .find(|g| g.contains((0, 0)))
        .expect("placed stone has a group");
    assert_eq!(own.liberties, [(0, 1)].into_iter().collect());
}

#[test]
fn test_multi_group_capture_in_one_move() {
    // Two separate white stones, each with a single liberty at (4,4).
    let mut engine = setpos(
        9,
        &[(3, 3), (5, 3), (4, 2), (3, 5), (5, 5), (4, 6)],
        &[(4, 3), (4, 5)],
    );
    let groups = engine.compute_groups();
    let white: Vec<_> = groups.iter().filter(|g| g.color == Color::White).collect();
    assert_eq!(white.len(), 2);

    let outcome = engine.play_as((4, 4), Color::Black).unwrap();
    assert_eq!(outcome.captured, vec![(4, 3), (4, 5)]);
    assert!(engine.groups().iter().all(|g| g.color == Color::Black));
    assert_eq!(engine.board().stone_count(), 7);
}

#[test]
fn test_multi_group_capture_with_apparent_suicide() {
    // Corner point surrounded by two white stones that each only breathe there.
    let mut engine = setpos(
        9,
        &[(0, 2), (1, 1), (2, 0)],
        &[(0, 1), (1, 0)],
    );
    let outcome = engine.play_as((0, 0), Color::Black).unwrap();
    assert_eq!(outcome.captured, vec![(0, 1), (1, 0)]);
    assert_eq!(engine.board().get((0, 0)), Some(Color::Black));
}

#[test]
fn test_capture_of_large_group() {
    // White wall along the top edge, sealed by Black beneath.
    let white: Vec<Point> = (0..8).map(|col| (0, col)).collect();
    let mut black: Vec<Point> = (0..8).map(|col| (1, col)).collect();
    black.push((1, 8));
    let mut engine = setpos(9, &black, &white);

    let outcome = engine.play_as((0, 8), Color::Black).unwrap();
    assert_eq!(outcome.captured.len(), 8);
    assert!((0..8).all(|col| engine.board().get((0, col)).is_none()));
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut engine = BoardEngine::new(9);
    let result = engine.attempt_move((3, 9), Color::Black);
    assert!(!result.legal);
    assert_eq!(
        result.rejection,
        Some(MoveError::OutOfBounds { row: 3, col: 9 })
    );
    assert_eq!(engine.board().stone_count(), 0);
    assert_eq!(engine.current_turn(), Color::Black);
}

// =============================================================================
// Turn order
// =============================================================================

#[test]
fn test_turn_alternation() {
    let mut engine = BoardEngine::new(9);
    let moves = [(0, 0), (8, 8), (2, 2), (6, 6), (4, 4), (3, 3), (5, 5)];
    for (n, &pt) in moves.iter().enumerate() {
        engine.play(pt).unwrap();
        let expected = if (n + 1) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };
        assert_eq!(engine.current_turn(), expected, "after {} moves", n + 1);

        // An illegal attempt leaves the turn alone.
        assert!(engine.play(pt).is_err());
        assert_eq!(engine.current_turn(), expected);
    }
}

#[test]
fn test_play_uses_engine_turn() {
    let mut engine = BoardEngine::new(9);
    assert_eq!(engine.play((0, 0)).unwrap().player, Color::Black);
    assert_eq!(engine.play((0, 1)).unwrap().player, Color::White);
    assert_eq!(engine.board().get((0, 1)), Some(Color::White));
}

#[test]
fn test_play_as_trusts_caller_color() {
    // Out-of-turn play is accepted and the turn still flips.
    let mut engine = BoardEngine::new(9);
    let outcome = engine.play_as((4, 4), Color::White).unwrap();
    assert_eq!(outcome.player, Color::White);
    assert_eq!(engine.board().get((4, 4)), Some(Color::White));
    assert_eq!(engine.current_turn(), Color::White);
}

#[test]
fn test_move_result_names_out_of_turn_player() {
    let mut engine = BoardEngine::new(9);
    let result = engine.attempt_move((0, 0), Color::White);
    assert!(result.legal);
    assert_eq!(result.player, Color::White);
    assert_eq!(result.next_color, Color::White);
    assert_eq!(engine.board().get((0, 0)), Some(Color::White));

    let result = engine.attempt_move((0, 0), Color::Black);
    assert!(!result.legal);
    assert_eq!(result.player, Color::Black);
    assert_eq!(result.next_color, Color::White);
}

// =============================================================================
// Ko
// =============================================================================

#[test]
fn test_ko_recapture_is_not_rejected() {
    // Ko is not implemented: immediate recapture repeating a position is allowed.
    let mut engine = setpos(
        9,
        &[(0, 1), (1, 0), (2, 1), (1, 2)],
        &[(0, 2), (2, 2), (1, 3)],
    );
    let before = engine.board().clone();

    let w = engine.play_as((1, 1), Color::White).unwrap();
    assert_eq!(w.captured, vec![(1, 2)]);

    let b = engine.play_as((1, 2), Color::Black).unwrap();
    assert_eq!(b.captured, vec![(1, 1)]);
    assert_eq!(engine.board(), &before);

    // And again.
    let w = engine.play_as((1, 1), Color::White).unwrap();
    assert_eq!(w.captured, vec![(1, 2)]);
}

// =============================================================================
// Independent engines
// =============================================================================

#[test]
fn test_engines_are_independent() {
    let mut a = BoardEngine::new(9);
    let b = BoardEngine::new(19);
    a.play((0, 0)).unwrap();
    assert_eq!(b.board().stone_count(), 0);
    assert_eq!(b.current_turn(), Color::Black);
    assert_eq!(b.size(), 19);
}

#[test]
fn test_oversized_engine_rejects_every_move() {
    let mut engine = BoardEngine::new(usize::MAX);
    assert_eq!(engine.size(), 0);
    assert_eq!(
        engine.play((0, 0)),
        Err(MoveError::OutOfBounds { row: 0, col: 0 })
    );
    assert!(engine.board_view().is_empty());
}

#[test]
fn test_board_view_snapshot() {
    let mut engine = BoardEngine::new(9);
    engine.play((2, 3)).unwrap();
    let view = engine.board_view();
    engine.play((2, 4)).unwrap();
    assert_eq!(view.len(), 9);
    assert!(view.iter().all(|row| row.len() == 9));
    assert_eq!(view[2][3], Some(Color::Black));
    assert_eq!(view[2][4], None);
}
