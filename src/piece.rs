use crate::direction::Direction;

/// A piece occupying a board cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    /// A fixed target that must be struck by an arrow.
    Target,
    /// An arrow, aimed in one of the eight compass directions.
    Arrow {
        /// The direction this arrow currently points.
        direction: Direction,
    },
}

impl Piece {
    /// An arrow pointing in the default direction (North).
    pub fn arrow() -> Self {
        Self::Arrow {
            direction: Direction::default(),
        }
    }

    /// Whether this piece is a target.
    pub fn is_target(&self) -> bool {
        matches!(self, Self::Target)
    }

    /// Whether this piece is an arrow.
    pub fn is_arrow(&self) -> bool {
        matches!(self, Self::Arrow { .. })
    }

    /// Single-character rendering: `O` for a target, a direction glyph for an arrow.
    pub fn glyph(&self) -> char {
        match self {
            Self::Target => 'O',
            Self::Arrow { direction } => direction.glyph(),
        }
    }
}
