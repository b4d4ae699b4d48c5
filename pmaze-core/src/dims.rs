use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid, `Coord(row, col)`.
///
/// Signed, so that a displacement can step outside of the grid and be rejected
/// by a bounds check instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn arithmetic() {
        assert_eq!(Coord(2, 3) + Coord(-1, 0), Coord(1, 3));
        assert_eq!(Coord(2, 3) + Coord(-2, -3), Coord::ZERO);
        assert_eq!(Coord(4, 7).row(), 4);
        assert_eq!(Coord(4, 7).col(), 7);
        assert!(!Coord(0, -1).all_non_negative());
        assert!(Coord::ZERO.all_non_negative());
    }
}
