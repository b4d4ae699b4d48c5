use super::{GenError, MazeCarver, RandomSource};
use crate::{dims::Coord, gameboard::Grid};

/// Randomized depth-first search with an explicit stack instead of recursion.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl MazeCarver for DepthFirstSearch {
    fn carve(&self, grid: &mut Grid, rng: &mut dyn RandomSource) -> Result<Coord, GenError> {
        let cell_count = grid.cell_count();
        let start = grid
            .get_cells()
            .idx_to_dim(rng.pick_index(cell_count))
            .ok_or(GenError::InternalInvariant("start cell outside of the grid"))?;
        log::debug!("carving {}x{} grid from {:?}", grid.rows(), grid.columns(), start);

        let mut stack = Vec::with_capacity(cell_count);
        let mut max_depth = 1;

        grid.mark_visited(start);
        stack.push(start);
        let mut current = start;
        while !stack.is_empty() {
            let unvisited = grid.unvisited_neighbors(current);

            if unvisited.is_empty() {
                stack.pop();
                match stack.last() {
                    Some(&top) => current = top,
                    None => break,
                }
                continue;
            }

            let dir = unvisited[rng.pick_index(unvisited.len())];
            let next = grid
                .resolve(current, dir)
                .ok_or(GenError::InternalInvariant("neighbor direction left the grid"))?;
            if !grid.remove_wall(current, dir) {
                return Err(GenError::InternalInvariant("carved wall has no neighbor"));
            }

            grid.mark_visited(next);
            stack.push(next);
            max_depth = max_depth.max(stack.len());
            current = next;
        }

        let visited = grid.visited_count();
        if visited != cell_count {
            return Err(GenError::InternalInvariant(
                "carving finished without visiting every cell",
            ));
        }
        log::trace!("carved {} cells, deepest stack {}", visited, max_depth);

        Ok(start)
    }
}
