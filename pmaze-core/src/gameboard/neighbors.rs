use smallvec::SmallVec;

use super::{CellWall, Grid};
use crate::dims::Coord;

/// Directions out of a cell, at most one per wall.
pub type Directions = SmallVec<[CellWall; 4]>;

impl Grid {
    /// Directions from `cell` towards in-bounds neighbors that were not visited yet.
    ///
    /// Enumerated in [`CellWall::ALL`] order: top, bottom, left, right. An empty result means
    /// the carver has to backtrack.
    pub fn unvisited_neighbors(&self, cell: Coord) -> Directions {
        CellWall::ALL
            .into_iter()
            .filter(|dir| {
                self.get_cell(cell + dir.to_coord())
                    .is_some_and(|neighbor| !neighbor.visited)
            })
            .collect()
    }

    /// Applies the displacement of `dir` to `cell`.
    ///
    /// `None` when the target is outside of the grid, which never happens for a direction
    /// returned by [`Grid::unvisited_neighbors`].
    pub fn resolve(&self, cell: Coord, dir: CellWall) -> Option<Coord> {
        let pos = cell + dir.to_coord();
        self.is_in_bounds(pos).then_some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            grid.unvisited_neighbors(Coord(0, 0)).as_slice(),
            &[CellWall::Bottom, CellWall::Right]
        );
        assert_eq!(
            grid.unvisited_neighbors(Coord(2, 2)).as_slice(),
            &[CellWall::Top, CellWall::Left]
        );
    }

    #[test]
    fn center_enumerates_in_order() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            grid.unvisited_neighbors(Coord(1, 1)).as_slice(),
            &CellWall::ALL
        );
    }

    #[test]
    fn visited_cells_are_skipped() {
        let mut grid = Grid::new(3, 3);
        grid.mark_visited(Coord(0, 1));
        grid.mark_visited(Coord(1, 2));
        assert_eq!(
            grid.unvisited_neighbors(Coord(1, 1)).as_slice(),
            &[CellWall::Bottom, CellWall::Left]
        );

        let all: Vec<_> = grid.iter_pos().collect();
        for pos in all {
            grid.mark_visited(pos);
        }
        assert!(grid.unvisited_neighbors(Coord(1, 1)).is_empty());
    }

    #[test]
    fn one_by_one_has_no_neighbors() {
        let grid = Grid::new(1, 1);
        assert!(grid.unvisited_neighbors(Coord::ZERO).is_empty());
        assert_eq!(grid.resolve(Coord::ZERO, CellWall::Bottom), None);
    }

    #[test]
    fn resolve_applies_offset() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.resolve(Coord(1, 1), CellWall::Top), Some(Coord(0, 1)));
        assert_eq!(grid.resolve(Coord(1, 1), CellWall::Right), Some(Coord(1, 2)));
        assert_eq!(grid.resolve(Coord(0, 0), CellWall::Left), None);
    }
}
