use std::collections::HashMap;

use thiserror::Error;

use crate::board::Board;
use crate::location::Location;
use crate::piece::Piece;

/// Reasons a puzzle is rejected before any search begins.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// The row quota total and column quota total differ.
    #[error("row quota total {row_total} does not equal column quota total {col_total}")]
    QuotaMismatch {
        /// Sum of all row quotas.
        row_total: usize,
        /// Sum of all column quotas.
        col_total: usize,
    },
    /// The number of targets differs from the shared quota total, which also fixes the
    /// number of arrows the search will place.
    #[error("quota total {quota_total} does not equal target count {target_count}")]
    TargetCountMismatch {
        /// The shared row/column quota total.
        quota_total: usize,
        /// How many targets were added.
        target_count: usize,
    },
    /// A target coordinate lies outside `[0, cols]`×`[0, rows]`.
    #[error("target at ({0}) lies outside the board")]
    TargetOutOfBounds(Location),
}

/// Assembles an arrows-and-targets puzzle and validates it into a [`Board`].
///
/// Grid dimensions derive from the quota sequences: one row per row quota, one column
/// per column quota. Builders mutate themselves while building but can be [`Clone`]d to
/// save their state at some point.
#[derive(Clone, Default)]
pub struct PuzzleBuilder {
    row_quotas: Vec<usize>,
    col_quotas: Vec<usize>,
    targets: Vec<Location>,
}

impl PuzzleBuilder {
    /// Construct a builder with the given per-row and per-column arrow quotas.
    pub fn with_quotas(row_quotas: Vec<usize>, col_quotas: Vec<usize>) -> Self {
        Self {
            row_quotas,
            col_quotas,
            targets: Vec::new(),
        }
    }

    /// Add a target at `location`.
    ///
    /// A duplicated location keeps a single piece on the board, but every addition
    /// counts toward the target-count validation, so a duplicate demands one more
    /// arrow than there are distinct targets.
    pub fn add_target(&mut self, location: Location) -> &mut Self {
        self.targets.push(location);
        self
    }

    /// Validate the puzzle and produce a board holding only its targets.
    ///
    /// The bounds check admits coordinate 0 even though the playable grid starts at 1;
    /// a target there can never be struck, so such puzzles report no solution.
    pub fn build(&self) -> Result<Board, ValidationError> {
        let row_total: usize = self.row_quotas.iter().sum();
        let col_total: usize = self.col_quotas.iter().sum();

        if row_total != col_total {
            return Err(ValidationError::QuotaMismatch {
                row_total,
                col_total,
            });
        }

        if self.targets.len() != row_total {
            return Err(ValidationError::TargetCountMismatch {
                quota_total: row_total,
                target_count: self.targets.len(),
            });
        }

        let rows = self.row_quotas.len();
        let cols = self.col_quotas.len();

        for &target in &self.targets {
            if target.0 > cols || target.1 > rows {
                return Err(ValidationError::TargetOutOfBounds(target));
            }
        }

        let mut board = Board {
            rows,
            cols,
            row_quotas: self.row_quotas.clone(),
            col_quotas: self.col_quotas.clone(),
            pieces: HashMap::new(),
        };

        for &target in &self.targets {
            board.set_piece(target, Piece::Target);
        }

        Ok(board)
    }
}
