#![warn(missing_docs)]

//! # `sagitta`
//!
//! A solver for arrows-and-targets grid puzzles: given a rows×cols board, per-row and
//! per-column arrow quotas, and a set of fixed target cells, it places one arrow per
//! target so that every row and column holds exactly its quota of arrows and aims each
//! arrow in one of eight compass directions so that every target is struck by an
//! unobstructed straight shot.
//!
//! Begin by assembling a puzzle with a [`PuzzleBuilder`]: quotas first, then targets.
//! Convert it to a [`Board`] with [`build()`](PuzzleBuilder::build), which rejects
//! inconsistent input, then call [`solve()`](Board::solve), consuming the board and
//! yielding the first solved arrangement, or [`None`] when the puzzle has no solution.
//!
//! # Internals
//! Solving is split into two backtracking phases. The first enumerates every board
//! whose arrow positions satisfy the quotas, in row-major lexicographic order,
//! pruning only on quota feasibility. The second takes each candidate board in turn,
//! computes the directions in which each arrow has line of sight to a target, and
//! backtracks over those assignments until one covers every target. The first full
//! assignment that does is returned immediately.
//!
//! The search is exhaustive by construction, single-threaded, and depth-first; the
//! placement board is mutated in place with every placement undone on backtrack.

pub use board::Board;
pub use builder::{PuzzleBuilder, ValidationError};
pub use direction::Direction;
pub use location::{Coord, Location};
pub use piece::Piece;

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod direction;
pub(crate) mod location;
pub(crate) mod piece;
pub(crate) mod solver;
