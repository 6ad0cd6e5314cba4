//! Wave-propagation pathfinding demo.
//!
//! Finds a shortest path across a sample obstacle course, then prints the
//! path (goal first, `[row, col]`) and the distance map the wave left
//! behind.
//!
//! Run: cargo run --bin lee-demo

use wavegrid_core::{Grid, Point};
use wavegrid_paths::WaveEngine;

fn sample_matrix() -> Grid<i32> {
    let rows = vec![
        vec![
            0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0,
            0, 0,
        ],
        vec![
            0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0,
            1, 0,
        ],
        vec![
            0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0,
            5, 0,
        ],
        vec![
            0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2,
            1, 0,
        ],
        vec![
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0,
        ],
    ];
    match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let grid = sample_matrix();
    let from = Point::new(0, 0); // row 0, col 0
    let to = Point::new(27, 2); // row 2, col 27

    let mut engine = WaveEngine::new();
    let path = engine.find_path(&grid, from, to, 0);

    if path.is_empty() {
        println!("no path from {from} to {to}");
    } else {
        for p in &path {
            println!("[{}, {}]", p.y, p.x);
        }
    }

    println!();
    print!("{}", engine.render_distances(3));
}
