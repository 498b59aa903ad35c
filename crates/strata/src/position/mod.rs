//! Coordinate assignment.
//!
//! Levels are first packed left to right, then vertices are pulled toward the barycenter of
//! their neighbours in alternating down and up sweeps. A vertex only moves as far as the
//! free space next to it allows; higher-priority vertices act as walls that are never pushed.

mod straighten;

use tracing::{debug, trace};

pub use straighten::StraightenLongEdge;

use crate::graph::{Graph, Point, VertexId};
use crate::level::{Level, LevelDirection, LevelMap};

#[derive(Debug, Clone)]
pub struct Coordinator {
    /// Minimum horizontal space between two vertices of one level.
    pub x_gap: f64,
    /// Vertical space between two levels.
    pub y_gap: f64,
    /// Number of unconditional relaxation sweeps.
    pub max_iterations: usize,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self {
            x_gap: 10.0,
            y_gap: 10.0,
            max_iterations: 8,
        }
    }
}

impl Coordinator {
    pub fn new(x_gap: f64, y_gap: f64) -> Self {
        Self {
            x_gap,
            y_gap,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Places every vertex of an ordered level map.
    pub fn layout<T>(&self, g: &mut Graph<T>, map: &LevelMap) {
        self.initial_placement(g, map);
        debug!(cost = objective(g, map), "initial placement");

        let mut dir = LevelDirection::Down;
        for iteration in 0..self.max_iterations {
            self.sweep(g, map, dir);
            trace!(iteration, ?dir, cost = objective(g, map), "coordinate sweep");
            dir = dir.opposite();
        }

        loop {
            let before = objective(g, map);
            self.sweep(g, map, LevelDirection::Down);
            self.sweep(g, map, LevelDirection::Up);
            let after = objective(g, map);
            trace!(before, after, "extra coordinate sweeps");
            if after >= before {
                break;
            }
        }
        debug!(cost = objective(g, map), "coordinates assigned");
    }

    /// Packs every level from x = 0 with `x_gap` between vertices. Each level's band is as
    /// tall as its tallest vertex; vertices are centred vertically in the band.
    pub fn initial_placement<T>(&self, g: &mut Graph<T>, map: &LevelMap) {
        let mut y = 0.0;
        for level in map.levels() {
            let height = level
                .vertices()
                .iter()
                .map(|&v| g[v].size().height)
                .fold(0.0, f64::max);
            let mut x = 0.0;
            for &v in level.vertices() {
                let width = g[v].size().width;
                g[v].pos = Point::new(x + width / 2.0, y + height / 2.0);
                x += width + self.x_gap;
            }
            y += height + self.y_gap;
        }
    }

    fn sweep<T>(&self, g: &mut Graph<T>, map: &LevelMap, dir: LevelDirection) {
        for (fixed, next) in dir.sweep(map) {
            self.move_level(g, &map[fixed], &map[next], dir);
        }
    }

    /// Pulls each vertex of `next` toward the barycenter of its neighbours in `fixed`,
    /// highest priority first. A vertex never pushes a neighbour whose priority is at least
    /// its own.
    pub fn move_level<T>(
        &self,
        g: &mut Graph<T>,
        fixed: &Level,
        next: &Level,
        dir: LevelDirection,
    ) {
        let mut movers: Vec<(usize, VertexId)> = next
            .vertices()
            .iter()
            .map(|&v| (priority(g, v, fixed, dir), v))
            .collect();
        movers.sort_by(|a, b| b.0.cmp(&a.0));

        let row = next.vertices();
        for (priority, v) in movers {
            let Some(target) = barycenter(g, v, dir) else {
                continue;
            };
            let x = g[v].pos.x;
            let order = g[v].order;
            if target > x {
                let run = &row[order..];
                let slack = self.find_slack(g, priority, v, run.iter().rev(), fixed, dir);
                self.shift_right(g, run, (target - x).min(slack));
            } else if target < x {
                let run = &row[..=order];
                let slack = self.find_slack(g, priority, v, run.iter(), fixed, dir);
                self.shift_left(g, run, (x - target).min(slack));
            }
        }
    }

    /// Room `mover` has to travel toward the far end of `run`, which is walked from the far
    /// end back to `mover`. Any vertex with at least `mover`'s priority is a wall: the slack
    /// restarts from zero there.
    fn find_slack<'a, T>(
        &self,
        g: &Graph<T>,
        priority: usize,
        mover: VertexId,
        run: impl Iterator<Item = &'a VertexId>,
        fixed: &Level,
        dir: LevelDirection,
    ) -> f64 {
        let mut width = f64::INFINITY;
        let mut last: Option<VertexId> = None;
        for &w in run {
            if w != mover && self::priority(g, w, fixed, dir) >= priority {
                width = 0.0;
            } else if let Some(l) = last {
                width = width.max(width + self.gap_slack(g, l, w));
            }
            last = Some(w);
        }
        width
    }

    /// Free space between two neighbours beyond the required spacing.
    fn gap_slack<T>(&self, g: &Graph<T>, a: VertexId, b: VertexId) -> f64 {
        let (a, b) = (&g[a], &g[b]);
        (b.pos.x - a.pos.x).abs() - (a.size().width / 2.0 + b.size().width / 2.0 + self.x_gap)
    }

    /// Moves `run[0]` right by `amount`, pushing the vertices after it only as far as the
    /// spacing requires.
    fn shift_right<T>(&self, g: &mut Graph<T>, run: &[VertexId], amount: f64) {
        let Some(&first) = run.first() else {
            return;
        };
        let mut x = g[first].pos.x + amount;
        for (i, &v) in run.iter().enumerate() {
            if x <= g[v].pos.x {
                return;
            }
            g[v].pos.x = x;
            if let Some(&w) = run.get(i + 1) {
                x += g[v].size().width / 2.0 + self.x_gap + g[w].size().width / 2.0;
            }
        }
    }

    /// Mirror of [`Coordinator::shift_right`]: moves the last vertex of `run` left.
    fn shift_left<T>(&self, g: &mut Graph<T>, run: &[VertexId], amount: f64) {
        let Some(&last) = run.last() else {
            return;
        };
        let mut x = g[last].pos.x - amount;
        for (i, &v) in run.iter().enumerate().rev() {
            if x >= g[v].pos.x {
                return;
            }
            g[v].pos.x = x;
            if let Some(&w) = i.checked_sub(1).and_then(|j| run.get(j)) {
                x -= g[v].size().width / 2.0 + self.x_gap + g[w].size().width / 2.0;
            }
        }
    }
}

/// Neighbour count in the fixed level. A dummy following another dummy outranks every real
/// vertex so long edges stay straight.
fn priority<T>(g: &Graph<T>, v: VertexId, fixed: &Level, dir: LevelDirection) -> usize {
    let vertex = &g[v];
    let back = dir.backward_edges(vertex);
    match back.first() {
        Some(&u) if vertex.is_dummy() && g[u].is_dummy() => fixed.len() + 1,
        _ => back.len(),
    }
}

/// Mean x of `v`'s neighbours on the level the sweep came from.
fn barycenter<T>(g: &Graph<T>, v: VertexId, dir: LevelDirection) -> Option<f64> {
    let back = dir.backward_edges(&g[v]);
    if back.is_empty() {
        return None;
    }
    let sum: f64 = back.iter().map(|&u| g[u].pos.x).sum();
    Some(sum / back.len() as f64)
}

/// Layout cost: squared horizontal length of every edge, plus the squared distance of each
/// vertex with several neighbours on one side from those neighbours' barycenter.
///
/// Only used to detect convergence.
pub fn objective<T>(g: &Graph<T>, map: &LevelMap) -> f64 {
    let mut closeness = 0.0;
    let mut balance = 0.0;
    for level in map.levels() {
        for &v in level.vertices() {
            let vertex = &g[v];
            let x = vertex.pos.x;
            for &w in vertex.forward() {
                closeness += (x - g[w].pos.x).powi(2);
            }
            for dir in [LevelDirection::Down, LevelDirection::Up] {
                if dir.backward_edges(vertex).len() > 1 {
                    if let Some(bc) = barycenter(g, v, dir) {
                        balance += (bc - x).powi(2);
                    }
                }
            }
        }
    }
    closeness + balance
}
