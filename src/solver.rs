//! The two-phase backtracking search behind [`Board::solve`].
//!
//! Splitting placement from aiming keeps each search simple: phase one enumerates
//! every board whose arrow positions satisfy the row and column quotas, ignoring
//! direction entirely; phase two takes each candidate in turn and backtracks over
//! legal arrow directions until every target is struck.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use strum::VariantArray;
use tracing::{debug, trace};

use crate::board::Board;
use crate::direction::Direction;
use crate::location::Location;
use crate::piece::Piece;

/// Directions in which an arrow has unobstructed line of sight to a target, paired
/// with that target's location. Computed once per candidate board.
pub(crate) type LegalDirections = Vec<(Direction, Location)>;

/// Find the first solved arrangement for `board`, in placement enumeration order.
pub(crate) fn solve(board: &Board) -> Option<Board> {
    let arrow_count = board.targets().len();

    let mut scratch = board.clone();
    let mut candidates = Vec::new();
    arrow_placements(&mut scratch, arrow_count, None, &mut candidates);
    debug!(candidates = candidates.len(), "arrow placements enumerated");

    for (index, mut candidate) in candidates.into_iter().enumerate() {
        trace!(index, signature = %candidate.signature(), "aiming arrows");

        if aim_arrows(&mut candidate) {
            debug!(index, signature = %candidate.signature(), "solved");
            return Some(candidate);
        }
    }

    None
}

/// Enumerate every placement of `remaining` arrows into cells with quota room,
/// scanning row-major strictly after `resume`, and push a clone of each completed
/// board onto `found`.
///
/// Each placement is undone after its recursive call returns, so `board` is unchanged
/// once the whole enumeration finishes. Completed boards come out in lexicographic
/// order of their arrow coordinates.
pub(crate) fn arrow_placements(
    board: &mut Board,
    remaining: usize,
    resume: Option<Location>,
    found: &mut Vec<Board>,
) {
    if remaining == 0 {
        found.push(board.clone());
        return;
    }

    let mut cursor = resume;
    while let Some(location) = board.next_empty_cell_from(cursor) {
        cursor = Some(location);

        if !board.room_for_arrow(location) {
            continue;
        }

        board.set_piece(location, Piece::arrow());
        arrow_placements(board, remaining - 1, Some(location), found);
        board.remove_piece(location);
    }
}

/// The legal directions for the arrow at `arrow`, in increasing numeric order.
pub(crate) fn legal_directions(board: &Board, arrow: Location) -> LegalDirections {
    Direction::VARIANTS
        .iter()
        .filter_map(|&direction| {
            board
                .target_in_direction(arrow, direction)
                .map(|target| (direction, target))
        })
        .collect_vec()
}

/// Search for a direction assignment under which every target is struck, committing
/// it onto `board`. Returns whether one was found.
pub(crate) fn aim_arrows(board: &mut Board) -> bool {
    let arrows = board.arrows();
    let legal: HashMap<Location, LegalDirections> = arrows
        .iter()
        .map(|&arrow| (arrow, legal_directions(board, arrow)))
        .collect();

    try_directions(board, &arrows, &legal)
}

fn try_directions(
    board: &mut Board,
    pending: &[Location],
    legal: &HashMap<Location, LegalDirections>,
) -> bool {
    let Some((&arrow, rest)) = pending.split_first() else {
        return all_targets_hit(board, legal);
    };

    // An arrow with no legal direction makes the loop body unreachable, failing
    // this branch outright.
    for &(direction, _) in &legal[&arrow] {
        board.set_arrow_direction(arrow, direction);

        if try_directions(board, rest, legal) {
            return true;
        }
    }

    false
}

/// Whether every target is struck under the directions currently committed on `board`.
///
/// Each arrow's direction resolves to one target, which is deleted from the set of all
/// targets; the board is solved iff the set empties. Deletion is idempotent, so two
/// arrows resolving to the same target leave the others still owed.
fn all_targets_hit(board: &Board, legal: &HashMap<Location, LegalDirections>) -> bool {
    let mut unhit: HashSet<Location> = board.targets().into_iter().collect();

    for arrow in board.arrows() {
        let Some(Piece::Arrow { direction }) = board.piece(arrow) else {
            continue;
        };

        if let Some(&(_, target)) = legal[&arrow].iter().find(|(aimed, _)| *aimed == direction) {
            unhit.remove(&target);
        }
    }

    unhit.is_empty()
}
