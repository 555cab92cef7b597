//! Move validation, capture resolution and turn tracking.
//!
//! [`BoardEngine`] owns one board and whose turn it is. Groups are recomputed
//! from scratch after every structural change, so the cached set returned by
//! [`BoardEngine::groups`] always matches the board.
//!
//! Ko is not enforced: an immediate recapture that repeats the previous
//! position is accepted.

use log::{debug, info, trace};
use thiserror::Error;

use crate::board::{Board, BoardView, Color, Point};
use crate::group::{Group, compute_groups};

/// Why a placement was rejected. The board and turn are unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Illegal move: point ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Illegal move: point is already occupied")]
    Occupied,
    #[error("Illegal move: suicide")]
    Suicide,
}

/// A successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Color of the stone just placed.
    pub player: Color,
    /// Points emptied by the capture, sorted.
    pub captured: Vec<Point>,
    /// Color to move next.
    pub next: Color,
}

/// Flat report of one placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub legal: bool,
    /// Color that was placed, or that was attempted when rejected.
    pub player: Color,
    pub captured: Vec<Point>,
    pub next_color: Color,
    pub rejection: Option<MoveError>,
}

impl MoveResult {
    /// `color` is the attempted color and `turn` the engine's turn after the attempt.
    pub fn from_outcome(
        result: Result<MoveOutcome, MoveError>,
        color: Color,
        turn: Color,
    ) -> Self {
        match result {
            Ok(outcome) => MoveResult {
                legal: true,
                player: outcome.player,
                captured: outcome.captured,
                next_color: outcome.next,
                rejection: None,
            },
            Err(e) => MoveResult {
                legal: false,
                player: color,
                captured: Vec::new(),
                next_color: turn,
                rejection: Some(e),
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct BoardEngine {
    board: Board,
    to_move: Color,
    groups: Vec<Group>,
}

impl BoardEngine {
    /// Empty `size` x `size` board with Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Color::Black,
            groups: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the grid for renderers.
    pub fn board_view(&self) -> BoardView {
        self.board.view()
    }

    pub fn current_turn(&self) -> Color {
        self.to_move
    }

    /// Groups as of the last applied move.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// A fresh connectivity pass over the current board.
    pub fn compute_groups(&self) -> Vec<Group> {
        compute_groups(&self.board)
    }

    /// Place a stone for the side to move.
    pub fn play(&mut self, pt: Point) -> Result<MoveOutcome, MoveError> {
        self.play_as(pt, self.to_move)
    }

    /// Place a stone of `color`, trusting the caller on turn order.
    ///
    /// Liberties are judged on the tentative board before any capture is
    /// removed. A placement that leaves its own group without liberties is
    /// legal only if it also leaves some opposing group without liberties.
    /// On success the turn passes to the other color.
    pub fn play_as(&mut self, pt: Point, color: Color) -> Result<MoveOutcome, MoveError> {
        let result = self.try_place(pt, color);
        if let Err(e) = &result {
            debug!("{color} at {pt:?} rejected: {e}");
        }
        result
    }

    /// Like [`play_as`](Self::play_as), reported as a [`MoveResult`].
    pub fn attempt_move(&mut self, pt: Point, color: Color) -> MoveResult {
        let result = self.play_as(pt, color);
        MoveResult::from_outcome(result, color, self.to_move)
    }

    fn try_place(&mut self, pt: Point, color: Color) -> Result<MoveOutcome, MoveError> {
        if !self.board.contains(pt) {
            let (row, col) = pt;
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.board.get(pt).is_some() {
            return Err(MoveError::Occupied);
        }

        self.board.set(pt, Some(color));
        let tentative = compute_groups(&self.board);

        let suicide = tentative
            .iter()
            .any(|g| g.color == color && g.contains(pt) && g.is_dead());
        let mut captured: Vec<Point> = tentative
            .iter()
            .filter(|g| g.color != color && g.is_dead())
            .flat_map(|g| g.stones.iter().copied())
            .collect();

        if suicide && captured.is_empty() {
            self.board.set(pt, None);
            return Err(MoveError::Suicide);
        }

        for &stone in &captured {
            self.board.set(stone, None);
        }
        captured.sort_unstable();
        self.groups = if captured.is_empty() {
            tentative
        } else {
            compute_groups(&self.board)
        };

        let (row, col) = pt;
        info!("{color} placed a stone at ({}, {})", row + 1, col + 1);
        if !captured.is_empty() {
            info!("{color} captured {} stone(s): {captured:?}", captured.len());
        }
        self.log_groups();

        self.to_move = self.to_move.opponent();
        Ok(MoveOutcome {
            player: color,
            captured,
            next: self.to_move,
        })
    }

    fn log_groups(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        for (i, group) in self.groups.iter().enumerate() {
            trace!("Group {} {group}", i + 1);
        }
    }
}
