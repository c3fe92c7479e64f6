#![forbid(unsafe_code)]

//! Compass directions used as placement hints.

/// One of the eight compass directions.
///
/// As a placement hint, a direction names the edge or corner of the viewport
/// an overlay should be pushed against when it cannot fit next to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Vertical half of a diagonal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    North,
    South,
}

/// Horizontal half of a diagonal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    East,
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Join a vertical and a horizontal half into a diagonal.
    #[must_use]
    pub const fn diagonal(vertical: Vertical, horizontal: Horizontal) -> Self {
        match (vertical, horizontal) {
            (Vertical::North, Horizontal::East) => Self::NE,
            (Vertical::North, Horizontal::West) => Self::NW,
            (Vertical::South, Horizontal::East) => Self::SE,
            (Vertical::South, Horizontal::West) => Self::SW,
        }
    }

    /// Horizontal component, if any (`N` and `S` have none).
    #[must_use]
    pub const fn horizontal(self) -> Option<Horizontal> {
        match self {
            Self::E | Self::NE | Self::SE => Some(Horizontal::East),
            Self::W | Self::NW | Self::SW => Some(Horizontal::West),
            Self::N | Self::S => None,
        }
    }

    /// Vertical component, if any (`E` and `W` have none).
    #[must_use]
    pub const fn vertical(self) -> Option<Vertical> {
        match self {
            Self::N | Self::NE | Self::NW => Some(Vertical::North),
            Self::S | Self::SE | Self::SW => Some(Vertical::South),
            Self::E | Self::W => None,
        }
    }
}
