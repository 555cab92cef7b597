//! Connected groups of stones and their liberties.
//!
//! Groups are derived data: [`compute_groups`] rebuilds the complete set from
//! a board in one pass. Nothing is patched incrementally and no group keeps an
//! identity from one pass to the next.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Board, Color, Point};

/// A maximal set of 4-connected stones of one color, plus the distinct
/// empty points adjacent to it.
#[derive(Clone, Debug)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    pub fn contains(&self, pt: Point) -> bool {
        self.stones.contains(&pt)
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Two groups are the same group iff they hold the same stones.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.stones == other.stones
    }
}

impl Eq for Group {}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: stones {:?}, liberties {:?}",
            self.color, self.stones, self.liberties
        )
    }
}

/// Find every group on the board.
///
/// Scans points in row-major order and floods each unvisited stone with an
/// explicit stack, so a group covering most of a 19x19 board costs no call
/// depth. Every point is visited at most once per pass. Callers must not rely
/// on the order of the returned groups.
pub fn compute_groups(board: &Board) -> Vec<Group> {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut groups = Vec::new();

    for start in board.points() {
        let Some(color) = board.get(start) else {
            continue;
        };
        if visited[start.0 * size + start.1] {
            continue;
        }
        visited[start.0 * size + start.1] = true;

        let mut stones = BTreeSet::new();
        let mut liberties = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(pt) = stack.pop() {
            stones.insert(pt);
            for n in board.neighbors(pt) {
                match board.get(n) {
                    None => {
                        liberties.insert(n);
                    }
                    Some(c) if c == color => {
                        let ni = n.0 * size + n.1;
                        if !visited[ni] {
                            visited[ni] = true;
                            stack.push(n);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        groups.push(Group {
            color,
            stones,
            liberties,
        });
    }

    groups
}
