use log::{debug, trace};

use wavegrid_core::{Grid, Point};

/// Sentinel distance meaning "not reached" in the engine's distance map.
pub const UNVISITED: i32 = -1;

/// Breadth-first wave-propagation pathfinder (Lee algorithm).
///
/// The engine owns a grid-shaped distance map and two wavefront buffers
/// (the layer being expanded and the layer being built). Both are fully
/// re-initialized at the start of every [`find_path`](Self::find_path)
/// call, so no state visible to callers carries over between searches.
pub struct WaveEngine {
    pub(crate) dist: Vec<i32>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    wave: Vec<Point>,
    next: Vec<Point>,
    step: i32,
}

impl Default for WaveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveEngine {
    /// Create a new engine. Buffers are sized on first use.
    pub fn new() -> Self {
        Self {
            dist: Vec::new(),
            width: 0,
            height: 0,
            wave: Vec::new(),
            next: Vec::new(),
            step: 0,
        }
    }

    /// Compute a shortest path from `from` to `to` over cells of `grid`
    /// equal to `empty`.
    ///
    /// The returned path runs from `to` back to `from`, both inclusive;
    /// reverse it for start-to-goal order. Its length is always the goal's
    /// BFS distance plus one. An empty vector means "no path": endpoints
    /// out of bounds, a zero-area grid, and an unreachable goal all
    /// collapse to this one outcome.
    ///
    /// The start cell is seeded without checking its own value against
    /// `empty`, so a search may begin on an obstacle; every other path
    /// cell is guaranteed traversable.
    pub fn find_path<T: Copy + PartialEq>(
        &mut self,
        grid: &Grid<T>,
        from: Point,
        to: Point,
        empty: T,
    ) -> Vec<Point> {
        if !grid.contains(from) || !grid.contains(to) {
            return Vec::new();
        }

        self.init(grid.width(), grid.height(), from);

        while !self.wave.is_empty() {
            if self.step_wave(grid, to, empty) {
                break;
            }
        }

        let path = self.make_path(grid, to, empty);
        if path.is_empty() {
            debug!("wave search {from} -> {to}: no path");
        } else {
            debug!(
                "wave search {from} -> {to}: {} cells after {} steps",
                path.len(),
                self.step
            );
        }
        path
    }

    /// BFS distance of `p` in the most recent completed search.
    ///
    /// Returns [`UNVISITED`] if the point is out of range or the wave never
    /// reached it.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNVISITED,
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    fn init(&mut self, width: i32, height: i32, from: Point) {
        self.width = width;
        self.height = height;
        self.dist.clear();
        self.dist.resize((width as usize) * (height as usize), UNVISITED);
        self.wave.clear();
        self.next.clear();
        self.step = 0;

        // The seed is admitted unconditionally: its grid value is never
        // compared against the traversable value.
        if let Some(si) = self.idx(from) {
            self.dist[si] = 0;
            self.wave.push(from);
        }
    }

    /// Expand the current wavefront by one layer. Returns `true` when the
    /// goal was seen among the enumerated neighbours.
    fn step_wave<T: Copy + PartialEq>(&mut self, grid: &Grid<T>, to: Point, empty: T) -> bool {
        self.step += 1;
        self.next.clear();

        for i in 0..self.wave.len() {
            let cp = self.wave[i];
            for np in cp.neighbors_4() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if grid.at(np) != Some(empty) {
                    continue;
                }
                if self.dist[ni] == UNVISITED {
                    self.dist[ni] = self.step;
                    self.next.push(np);
                }
                if np == to {
                    return true;
                }
            }
        }

        trace!("wave step {}: {} cells reached", self.step, self.next.len());
        std::mem::swap(&mut self.wave, &mut self.next);
        false
    }

    /// Walk backward from the goal along strictly decreasing distances.
    fn make_path<T: Copy + PartialEq>(&self, grid: &Grid<T>, to: Point, empty: T) -> Vec<Point> {
        let Some(ti) = self.idx(to) else {
            return Vec::new();
        };
        let goal_dist = self.dist[ti];
        if goal_dist == UNVISITED {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(goal_dist as usize + 1);
        path.push(to);

        let mut cur = to;
        let mut d = goal_dist;
        while d != 0 {
            for np in cur.neighbors_4() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // First neighbour one layer closer wins. The seed cell
                // (distance 0) is steppable regardless of its grid value,
                // matching its unconditional admission at seeding time.
                if self.dist[ni] + 1 == d && (self.dist[ni] == 0 || grid.at(np) == Some(empty)) {
                    cur = np;
                    d = self.dist[ni];
                    break;
                }
            }
            path.push(cur);
        }

        path
    }
}
