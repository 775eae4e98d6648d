use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::direction::Direction;
use crate::location::{Coord, Location};
use crate::piece::Piece;
use crate::solver;

/// A rows×cols puzzle board with per-row and per-column arrow quotas.
///
/// Cells are 1-indexed in both axes from the top-left corner. Each cell holds at most
/// one [`Piece`]. Boards are built from a [`PuzzleBuilder`](crate::PuzzleBuilder) and
/// solved with [`solve`](Board::solve); the search clones and mutates boards freely, so
/// `Clone` performs a full deep copy.
#[derive(Clone)]
pub struct Board {
    pub(crate) rows: Coord,
    pub(crate) cols: Coord,
    pub(crate) row_quotas: Vec<usize>,
    pub(crate) col_quotas: Vec<usize>,
    pub(crate) pieces: HashMap<Location, Piece>,
}

impl Board {
    /// The number of rows.
    pub fn rows(&self) -> Coord {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> Coord {
        self.cols
    }

    /// The required arrow count for row `y`, which must be in `1..=rows`.
    pub fn row_quota(&self, y: Coord) -> usize {
        self.row_quotas[y - 1]
    }

    /// The required arrow count for column `x`, which must be in `1..=cols`.
    pub fn col_quota(&self, x: Coord) -> usize {
        self.col_quotas[x - 1]
    }

    /// Whether `location` lies inside the playable grid.
    pub fn contains(&self, location: Location) -> bool {
        (1..=self.cols).contains(&location.0) && (1..=self.rows).contains(&location.1)
    }

    /// The piece at `location`, if any.
    pub fn piece(&self, location: Location) -> Option<Piece> {
        self.pieces.get(&location).copied()
    }

    /// Whether the cell at `location` is unoccupied.
    pub fn is_empty(&self, location: Location) -> bool {
        !self.pieces.contains_key(&location)
    }

    /// Whether the cell at `location` holds an arrow.
    pub fn is_arrow(&self, location: Location) -> bool {
        self.piece(location).is_some_and(|piece| piece.is_arrow())
    }

    /// Whether the cell at `location` holds a target.
    pub fn is_target(&self, location: Location) -> bool {
        self.piece(location).is_some_and(|piece| piece.is_target())
    }

    /// Place `piece` at `location`, replacing any existing occupant.
    pub fn set_piece(&mut self, location: Location, piece: Piece) {
        self.pieces.insert(location, piece);
    }

    /// Remove the piece at `location`. Removing from an empty cell is a no-op.
    pub fn remove_piece(&mut self, location: Location) {
        self.pieces.remove(&location);
    }

    pub(crate) fn set_arrow_direction(&mut self, location: Location, direction: Direction) {
        if let Some(Piece::Arrow { direction: current }) = self.pieces.get_mut(&location) {
            *current = direction;
        }
    }

    /// Locations of all placed arrows, in row-major order.
    pub fn arrows(&self) -> Vec<Location> {
        self.piece_locations(Piece::is_arrow)
    }

    /// Locations of all placed targets, in row-major order.
    ///
    /// Targets admitted at coordinate 0 sort ahead of the grid interior; they still
    /// count toward the coverage check even though no arrow can strike them.
    pub fn targets(&self) -> Vec<Location> {
        self.piece_locations(Piece::is_target)
    }

    fn piece_locations(&self, keep: impl Fn(&Piece) -> bool) -> Vec<Location> {
        self.pieces
            .iter()
            .filter(|&(_, piece)| keep(piece))
            .map(|(&location, _)| location)
            .sorted_by_key(|location| (location.1, location.0))
            .collect_vec()
    }

    /// The next cell after `from` in row-major order (left to right, top to bottom).
    ///
    /// `None` input means "before the first cell", so the first cell is returned;
    /// `None` is returned once the last cell has been passed. This is the only cell
    /// ordering the search uses, and it fixes the tie-break among equally valid
    /// solutions: first found in this order wins.
    pub fn next_cell_from(&self, from: Option<Location>) -> Option<Location> {
        let Some(Location(x, y)) = from else {
            return Some(Location(1, 1));
        };

        if x < self.cols {
            return Some(Location(x + 1, y));
        }

        if y + 1 > self.rows {
            return None;
        }

        Some(Location(1, y + 1))
    }

    /// The next empty cell strictly after `from` in row-major order, if any.
    pub fn next_empty_cell_from(&self, from: Option<Location>) -> Option<Location> {
        let mut at = from;

        loop {
            let location = self.next_cell_from(at)?;
            if self.is_empty(location) {
                return Some(location);
            }

            at = Some(location);
        }
    }

    /// Whether an arrow may be placed at `location` without busting a quota.
    ///
    /// True iff the cell is empty, both the row and column quotas are nonzero, and the
    /// arrows already present in that row and column each number strictly below their
    /// quota. Placing arrows only ever grows row and column counts, so once this turns
    /// false for a cell it stays false for the rest of the branch.
    pub fn room_for_arrow(&self, location: Location) -> bool {
        if !self.is_empty(location) {
            return false;
        }

        let Location(x, y) = location;
        let col_quota = self.col_quota(x);
        let row_quota = self.row_quota(y);

        if col_quota == 0 || row_quota == 0 {
            return false;
        }

        let arrows_in_col = (1..=self.rows)
            .filter(|&ty| self.is_arrow(Location(x, ty)))
            .count();
        if arrows_in_col >= col_quota {
            return false;
        }

        let arrows_in_row = (1..=self.cols)
            .filter(|&tx| self.is_arrow(Location(tx, y)))
            .count();

        arrows_in_row < row_quota
    }

    /// Ray cast from `from` toward `direction`, one cell at a time.
    ///
    /// Returns the location of the first target on the ray, or `None` if the ray
    /// leaves the grid or is blocked by an arrow first.
    pub fn target_in_direction(&self, from: Location, direction: Direction) -> Option<Location> {
        let mut at = from;

        loop {
            at = direction.step_from(at);

            if !self.contains(at) {
                return None;
            }

            match self.piece(at) {
                None => continue,
                Some(piece) if piece.is_target() => return Some(at),
                Some(_) => return None,
            }
        }
    }

    /// A string uniquely encoding all arrow coordinates and directions, in row-major
    /// order, e.g. `"2,1;5-1,2;1"`. Used for diagnostics only.
    pub fn signature(&self) -> String {
        self.arrows()
            .into_iter()
            .filter_map(|location| match self.piece(location) {
                Some(Piece::Arrow { direction }) => {
                    Some(format!("{};{}", location, direction.number()))
                }
                _ => None,
            })
            .join("-")
    }

    /// Solve this board, returning the first solved arrangement in scan order.
    ///
    /// `None` means the search space is exhausted without a solution; that is an
    /// ordinary outcome, not a fault.
    pub fn solve(self) -> Option<Board> {
        solver::solve(&self)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = format!("{}┼", "┼───".repeat(self.cols));

        writeln!(f, "{}", separator)?;
        for y in 1..=self.rows {
            for x in 1..=self.cols {
                let glyph = self.piece(Location(x, y)).map_or(' ', |piece| piece.glyph());
                write!(f, "│ {} ", glyph)?;
            }
            writeln!(f, "│ {}", self.row_quota(y))?;
            writeln!(f, "{}", separator)?;
        }

        let footer = (1..=self.cols).map(|x| self.col_quota(x)).join("   ");
        writeln!(f, "  {}", footer)
    }
}
