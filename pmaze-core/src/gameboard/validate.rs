use hashbrown::HashSet;

use super::{CellWall, Grid};
use crate::dims::Coord;

/// A boundary wall that was opened, i.e. an entry or an exit of the maze.
pub type BoundaryOpening = (Coord, CellWall);

impl Grid {
    /// Number of open walls between two in-bounds cells, counting each pair once.
    pub fn carved_pairs(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                [CellWall::Bottom, CellWall::Right]
                    .into_iter()
                    .filter(|&w| self.is_in_bounds(pos + w.to_coord()))
                    .filter(|&w| !self.cells[pos].get_wall(w))
                    .count()
            })
            .sum()
    }

    /// Checks that every wall shared by two cells is either open on both sides or closed on both.
    pub fn is_symmetric(&self) -> bool {
        self.iter_pos().all(|pos| {
            CellWall::ALL.into_iter().all(|w| match self.get_cell(pos + w.to_coord()) {
                Some(other) => self.cells[pos].get_wall(w) == other.get_wall(w.reverse_wall()),
                None => true,
            })
        })
    }

    /// Positions reachable from `start` by walking through open walls.
    pub fn reachable_from(&self, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::with_capacity(self.cell_count());
        if !self.is_in_bounds(start) {
            return seen;
        }

        let mut stack = vec![start];
        seen.insert(start);
        while let Some(pos) = stack.pop() {
            for wall in self.cells[pos].open_walls() {
                let next = pos + wall.to_coord();
                if self.is_in_bounds(next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(Coord::ZERO).len() == self.cell_count()
    }

    /// Connected with exactly `cells - 1` passages, so every pair of cells has a single path.
    pub fn is_perfect(&self) -> bool {
        self.is_symmetric()
            && self.carved_pairs() + 1 == self.cell_count()
            && self.is_connected()
    }

    /// All walls facing the exterior that are open, in row-major order.
    pub fn open_boundary_walls(&self) -> Vec<BoundaryOpening> {
        self.iter_pos()
            .flat_map(|pos| {
                self.cells[pos]
                    .open_walls()
                    .filter(move |&w| self.is_boundary(pos, w))
                    .map(move |w| (pos, w))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(rows: usize, columns: usize) -> Grid {
        // right along row 0, down the last column, ... simple serpentine
        let mut grid = Grid::new(rows, columns);
        for row in 0..rows as i32 {
            for col in 0..columns as i32 - 1 {
                grid.remove_wall(Coord(row, col), CellWall::Right);
            }
            let end = if row % 2 == 0 { columns as i32 - 1 } else { 0 };
            if row + 1 < rows as i32 {
                grid.remove_wall(Coord(row, end), CellWall::Bottom);
            }
        }
        grid
    }

    #[test]
    fn closed_grid() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.carved_pairs(), 0);
        assert!(grid.is_symmetric());
        assert!(!grid.is_connected());
        assert_eq!(grid.reachable_from(Coord(1, 1)).len(), 1);
        assert!(grid.open_boundary_walls().is_empty());
    }

    #[test]
    fn serpentine_is_perfect() {
        let grid = snake(4, 5);
        assert_eq!(grid.carved_pairs(), 19);
        assert!(grid.is_perfect());
    }

    #[test]
    fn cycle_is_not_perfect() {
        let mut grid = snake(3, 3);
        grid.remove_wall(Coord(0, 0), CellWall::Bottom);
        assert!(grid.is_connected());
        assert!(!grid.is_perfect());
    }

    #[test]
    fn asymmetric_wall_detected() {
        let mut grid = Grid::new(2, 2);
        grid.cells[Coord(0, 0)].remove_wall(CellWall::Right);
        assert!(!grid.is_symmetric());
    }

    #[test]
    fn boundary_openings() {
        let mut grid = Grid::new(5, 5);
        grid.open_boundary_wall(Coord(0, 2), CellWall::Top);
        grid.open_boundary_wall(Coord(3, 4), CellWall::Right);
        grid.remove_wall(Coord(2, 2), CellWall::Left);
        assert_eq!(
            grid.open_boundary_walls(),
            vec![(Coord(0, 2), CellWall::Top), (Coord(3, 4), CellWall::Right)]
        );
    }
}
