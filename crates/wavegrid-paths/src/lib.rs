//! Shortest paths on 2D grids via wave propagation.
//!
//! This crate implements the classical Lee algorithm: a breadth-first
//! "wave" expands from the start cell one layer per step over the
//! traversable cells of a [`Grid`](wavegrid_core::Grid), recording in a
//! distance map the layer at which each cell was first reached; once the
//! goal has been seen, the path is walked backward from it along strictly
//! decreasing distances.
//!
//! All searches go through [`WaveEngine`], which owns its distance map and
//! wavefront buffers and reuses them across calls, so repeated queries
//! incur no allocations after warm-up. The distance map of the most recent
//! search stays queryable ([`WaveEngine::distance_at`]) and renderable
//! ([`WaveEngine::render_distances`]) until the next search.

mod engine;
mod render;

pub use engine::{UNVISITED, WaveEngine};
