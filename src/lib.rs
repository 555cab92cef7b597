//! Simple-Go: a rules engine for the game of Go.
//!
//! This crate tracks stones on a square board, finds connected groups and
//! their liberties, decides whether a placement is legal, removes captured
//! stones and keeps track of whose turn it is. Scoring, game end, history
//! and the Ko rule are not part of it.
//!
//! ## Modules
//!
//! - [`constants`] - Board-size bounds and display glyphs
//! - [`board`] - Stone grid, colors and vertex notation
//! - [`group`] - Group and liberty discovery
//! - [`engine`] - Move legality, capture and turn tracking
//! - [`gtp`] - Go Text Protocol front end
//! - [`playout`] - Random legal games
//!
//! ## Example
//!
//! ```
//! use simple_go::board::Color;
//! use simple_go::engine::BoardEngine;
//!
//! let mut engine = BoardEngine::new(9);
//! engine.play_as((0, 0), Color::White).unwrap();
//! engine.play_as((0, 1), Color::Black).unwrap();
//! let outcome = engine.play_as((1, 0), Color::Black).unwrap();
//! assert_eq!(outcome.captured, vec![(0, 0)]);
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod group;
pub mod gtp;
pub mod playout;
