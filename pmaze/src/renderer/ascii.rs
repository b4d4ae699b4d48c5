use pmaze_core::{CellWall, Coord, Maze};

use super::Render;
use crate::error::AppError;

const CORNER: char = '+';
const H_WALL: &str = "---";
const V_WALL: char = '|';
const GAP: &str = "   ";

/// Draws the maze with `+`, `-` and `|`, three characters per cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    fn horizontal(out: &mut String, maze: &Maze, row: i32, wall: CellWall) {
        for col in 0..maze.columns() as i32 {
            out.push(CORNER);
            let closed = maze.grid.get_cell(Coord(row, col)).map(|c| c.get_wall(wall));
            out.push_str(if closed.unwrap_or(true) { H_WALL } else { GAP });
        }
        out.push(CORNER);
        out.push('\n');
    }

    fn wall_char(closed: bool) -> char {
        if closed {
            V_WALL
        } else {
            ' '
        }
    }
}

impl Render for AsciiRenderer {
    fn render(&self, maze: &Maze) -> Result<String, AppError> {
        let (rows, columns) = (maze.rows() as i32, maze.columns() as i32);
        let mut out = String::with_capacity(((columns as usize) * 4 + 2) * (rows as usize * 2 + 1));

        for row in 0..rows {
            Self::horizontal(&mut out, maze, row, CellWall::Top);

            for col in 0..columns {
                let Some(cell) = maze.grid.get_cell(Coord(row, col)) else {
                    continue;
                };
                out.push(Self::wall_char(cell.get_wall(CellWall::Left)));
                out.push_str(GAP);
                if col == columns - 1 {
                    out.push(Self::wall_char(cell.get_wall(CellWall::Right)));
                }
            }
            out.push('\n');
        }
        Self::horizontal(&mut out, maze, rows - 1, CellWall::Bottom);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::zeros_maze;

    #[test]
    fn zeros_maze_drawing() {
        let expected = "\
+---+---+   +---+---+
|   |       |       |
+   +   +   +   +   +
|   |   |   |   |   |
+   +   +   +   +   +
|   |   |   |   |   |
+   +   +   +   +   +
|   |   |   |   |   |
+   +   +   +   +   +
|       |       |   |
+---+---+   +---+---+
";
        assert_eq!(AsciiRenderer.render(&zeros_maze()).unwrap(), expected);
    }

    #[test]
    fn line_count() {
        let out = AsciiRenderer.render(&zeros_maze()).unwrap();
        assert_eq!(out.lines().count(), 11);
        assert!(out.lines().all(|l| l.chars().count() == 21));
    }
}
