//! Four-directional adjacency for rectangular grids

/// One of the four cardinal neighbor directions
///
/// Iteration order is always up, right, down, left to keep traversal
/// deterministic across propagators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative y
    Up,
    /// Positive x
    Right,
    /// Positive y
    Down,
    /// Negative x
    Left,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Number of directions
    pub const COUNT: usize = 4;

    /// The direction pointing back at the source cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Unit offset along the x axis
    pub const fn dx(self) -> i64 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
            Self::Up | Self::Down => 0,
        }
    }

    /// Unit offset along the y axis
    pub const fn dy(self) -> i64 {
        match self {
            Self::Down => 1,
            Self::Up => -1,
            Self::Right | Self::Left => 0,
        }
    }

    /// Dense index for direction-keyed tables
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}
