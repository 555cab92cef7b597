//! Board-size bounds and display glyphs.
//!
//! Unlike a fixed-size engine, the board side length here is a runtime value
//! chosen when a [`BoardEngine`](crate::engine::BoardEngine) is built. These
//! constants only describe the range the front ends accept.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board side length offered by the front ends.
pub const MIN_BOARD_SIZE: usize = 9;

/// Largest board side length offered by the front ends.
pub const MAX_BOARD_SIZE: usize = 19;

/// Board size used when none is requested.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Column letters used in vertex notation. `I` is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

// =============================================================================
// Display Glyphs
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';

// =============================================================================
// Playout
// =============================================================================

/// Default number of legal moves played by the demo.
pub const DEMO_MOVES: usize = 60;
