use strum::VariantArray;

use crate::location::Location;

/// One of the eight compass directions an arrow can point, diagonals included.
///
/// Declaration order is the numeric order 1 through 8, clockwise from North, so
/// [`Direction::VARIANTS`] iterates directions in increasing numeric order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Default, Ord, PartialOrd)]
pub enum Direction {
    /// Direction 1, straight up.
    #[default]
    North,
    /// Direction 2.
    NorthEast,
    /// Direction 3, straight right.
    East,
    /// Direction 4.
    SouthEast,
    /// Direction 5, straight down.
    South,
    /// Direction 6.
    SouthWest,
    /// Direction 7, straight left.
    West,
    /// Direction 8.
    NorthWest,
}

impl Direction {
    /// The unit step for this direction; x grows rightward, y grows downward.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Step from `location` one cell in this direction.
    pub fn step_from(self, location: Location) -> Location {
        location.offset_by(self.offset())
    }

    /// The numeric encoding, 1 through 8 clockwise from North.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Single-character rendering of an arrow pointing this way.
    pub fn glyph(self) -> char {
        match self {
            Self::North | Self::South => '|',
            Self::NorthEast | Self::SouthWest => '/',
            Self::East | Self::West => '-',
            Self::SouthEast | Self::NorthWest => '\\',
        }
    }
}
