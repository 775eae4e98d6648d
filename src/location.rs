/// Scalar coordinate type for grid positions and dimensions.
pub type Coord = usize;

/// A position on (or just off) the board, in `(x, y)` order, 1-indexed from the top-left.
///
/// Coordinate 0 is outside the playable grid but representable; validation deliberately
/// admits it for targets (see [`PuzzleBuilder`](crate::PuzzleBuilder)).
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Step by a signed offset, wrapping on underflow.
    ///
    /// A wrapped coordinate is far outside any board, so the bounds check applied by
    /// every consumer rejects it.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(
            self.0.wrapping_add_signed(rhs.0),
            self.1.wrapping_add_signed(rhs.1),
        )
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}
