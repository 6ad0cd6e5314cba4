//! Diagnostic rendering of the distance map.

use crate::engine::{UNVISITED, WaveEngine};

impl WaveEngine {
    /// Render the distance map of the most recent search as text.
    ///
    /// Each cell is right-aligned in a column of `cell_width` characters;
    /// cells the wave never reached show an `X`. One line per grid row.
    /// Returns the empty string before the first search.
    pub fn render_distances(&self, cell_width: usize) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let i = (y * self.width + x) as usize;
                let d = self.dist[i];
                if d == UNVISITED {
                    out.push_str(&format!("{:>cell_width$}", 'X'));
                } else {
                    out.push_str(&format!("{d:>cell_width$}"));
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use wavegrid_core::{Grid, Point};

    use crate::WaveEngine;

    #[test]
    fn renders_fixed_width_columns() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        let mut engine = WaveEngine::new();
        engine.find_path(&grid, Point::new(0, 0), Point::new(1, 1), 0);
        assert_eq!(engine.render_distances(3), "  0  X\n  1  2\n");
    }

    #[test]
    fn fresh_engine_renders_nothing() {
        let engine = WaveEngine::new();
        assert_eq!(engine.render_distances(3), "");
    }
}
