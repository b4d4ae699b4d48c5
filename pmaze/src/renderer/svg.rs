use std::fmt::Write as _;

use pmaze_core::{CellWall, Coord, Maze, MazeConfig};

use super::Render;
use crate::{error::AppError, viewport};

/// Draws every standing wall as a line segment on a canvas of `cell_size` pixels per cell.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    pub cell_size: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            cell_size: viewport::DEFAULT_CELL_SIZE,
        }
    }
}

impl SvgRenderer {
    fn line(out: &mut String, from: (u32, u32), to: (u32, u32)) -> Result<(), AppError> {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            from.0, from.1, to.0, to.1
        )?;
        Ok(())
    }
}

impl Render for SvgRenderer {
    fn render(&self, maze: &Maze) -> Result<String, AppError> {
        let s = self.cell_size;
        let config = MazeConfig::new(maze.rows(), maze.columns());
        let (width, height) = viewport::canvas_size(&config, s);

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(out, r#"<g stroke="black" stroke-width="2" stroke-linecap="square">"#)?;

        // shared walls are drawn once, from the cell above or to the left
        for pos in maze.grid.iter_pos() {
            let Some(cell) = maze.grid.get_cell(pos) else {
                continue;
            };
            let Coord(row, col) = pos;
            let (x, y) = (col as u32 * s, row as u32 * s);

            if cell.get_wall(CellWall::Top) {
                Self::line(&mut out, (x, y), (x + s, y))?;
            }
            if cell.get_wall(CellWall::Left) {
                Self::line(&mut out, (x, y), (x, y + s))?;
            }
            if row as usize == config.rows - 1 && cell.get_wall(CellWall::Bottom) {
                Self::line(&mut out, (x, y + s), (x + s, y + s))?;
            }
            if col as usize == config.columns - 1 && cell.get_wall(CellWall::Right) {
                Self::line(&mut out, (x + s, y), (x + s, y + s))?;
            }
        }

        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;
        Ok(out)
    }
}
