use pmaze_core::Maze;

use crate::error::AppError;

/// Re-verifies the structural guarantees of a generated maze.
pub fn check_maze(maze: &Maze) -> Result<(), AppError> {
    let grid = &maze.grid;

    if !grid.is_symmetric() {
        return Err(AppError::Validation("wall pairs are not symmetric"));
    }
    if grid.carved_pairs() + 1 != grid.cell_count() {
        return Err(AppError::Validation("passage count does not form a tree"));
    }
    if !grid.is_connected() {
        return Err(AppError::Validation("some cells are unreachable"));
    }

    let openings = grid.open_boundary_walls();
    if openings.len() != 2 || openings[0].1 == openings[1].1 {
        return Err(AppError::Validation(
            "expected two openings on different sides",
        ));
    }

    log::info!(
        "maze ok: {} passages, entry {:?}, exit {:?}",
        grid.carved_pairs(),
        maze.entry,
        maze.exit
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::zeros_maze;

    #[test]
    fn generated_maze_passes() {
        assert!(check_maze(&zeros_maze()).is_ok());
    }

    #[test]
    fn closed_maze_fails() {
        let mut maze = zeros_maze();
        maze.grid = pmaze_core::Grid::new(5, 5);
        assert!(matches!(
            check_maze(&maze),
            Err(AppError::Validation("passage count does not form a tree"))
        ));
    }
}
