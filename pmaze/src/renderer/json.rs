use pmaze_core::Maze;

use super::Render;
use crate::error::AppError;

/// Serializes the whole maze, grid included, for renderers living outside of this program.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, maze: &Maze) -> Result<String, AppError> {
        Ok(json5::to_string(maze)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::zeros_maze;

    #[test]
    fn parses_back() {
        let maze = zeros_maze();
        let out = JsonRenderer.render(&maze).unwrap();
        assert_eq!(json5::from_str::<Maze>(&out).unwrap(), maze);
    }

    #[test]
    fn mentions_exits() {
        let out = JsonRenderer.render(&zeros_maze()).unwrap();
        assert!(out.contains("entry"));
        assert!(out.contains("Bottom"));
    }
}
