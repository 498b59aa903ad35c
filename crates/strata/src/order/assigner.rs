use tracing::{debug, trace};

use super::{OrderingHeuristic, WeightedMedian};
use crate::graph::{Graph, VertexId};
use crate::level::{LevelDirection, LevelMap};

/// Default cap on the bounded optimisation phase.
pub const MAX_ITERATIONS: usize = 8;

/// Reorders each level to reduce edge crossings.
///
/// Runs up to `max_iterations` rounds of reorder-and-transpose, stopping early once a round
/// leaves the crossing count unchanged. If the cap is reached it keeps going for as long as
/// a round strictly improves, rolling back the first round that makes things worse. The map
/// is never left with more crossings than the best ordering seen.
#[derive(Debug, Clone)]
pub struct OrderAssigner<H = WeightedMedian> {
    heuristic: H,
    max_iterations: usize,
}

impl Default for OrderAssigner<WeightedMedian> {
    fn default() -> Self {
        Self::new(WeightedMedian)
    }
}

impl<H: OrderingHeuristic> OrderAssigner<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            max_iterations: MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builds the level map of a proper, levelled graph and orders it.
    pub fn layout<T>(&self, g: &mut Graph<T>) -> LevelMap {
        let mut map = LevelMap::build(g);
        self.layout_map(g, &mut map);
        map
    }

    /// Orders an existing level map in place.
    pub fn layout_map<T>(&self, g: &mut Graph<T>, map: &mut LevelMap) {
        let initial = map.count_crossing(g);
        let mut best = (initial, map.memento());
        debug!(crossings = initial, "ordering levels");

        let mut converged = false;
        for iteration in 0..self.max_iterations {
            let before = map.count_crossing(g);
            self.reorder_and_transpose(g, map);
            let after = map.count_crossing(g);
            debug!(iteration, before, after, "order iteration");
            if after < best.0 {
                best = (after, map.memento());
            }
            if after == before {
                converged = true;
                break;
            }
        }

        if !converged {
            loop {
                let before = map.count_crossing(g);
                let memento = map.memento();
                self.reorder_and_transpose(g, map);
                let after = map.count_crossing(g);
                trace!(before, after, "extra order iteration");
                if after > before {
                    map.restore(g, &memento);
                    break;
                }
                if after == before {
                    break;
                }
                if after < best.0 {
                    best = (after, map.memento());
                }
            }
        }

        if map.count_crossing(g) > best.0 {
            map.restore(g, &best.1);
        }
        debug!(
            initial,
            crossings = map.count_crossing(g),
            "levels ordered"
        );
    }

    /// One round: four reorder+transpose sweeps, alternating down and up. The first two
    /// break ties by flipping equal-weight vertices; the last two keep them in place.
    fn reorder_and_transpose<T>(&self, g: &mut Graph<T>, map: &mut LevelMap) {
        let mut dir = LevelDirection::Down;
        for pass in 0..4 {
            let flip = pass < 2;
            self.reorder(g, map, dir, flip);
            trace!(?dir, flip, crossings = map.count_crossing(g), "reordered");
            transpose(g, map, flip);
            trace!(
                ?dir,
                flip,
                crossings = map.count_crossing(g),
                "transposed\n{}",
                map.display(g)
            );
            dir = dir.opposite();
        }
    }

    /// Sorts every level by heuristic weight, sweeping in `dir`. Vertices without a weight
    /// keep their slots; the others fill the remaining slots in weight order. With `flip`,
    /// equal weights come out in reverse of their current order.
    pub fn reorder<T>(
        &self,
        g: &mut Graph<T>,
        map: &mut LevelMap,
        dir: LevelDirection,
        flip: bool,
    ) {
        for (fixed, next) in dir.sweep(map) {
            let weighted: Vec<(VertexId, Option<f64>)> = map[next]
                .vertices()
                .iter()
                .map(|&v| (v, self.heuristic.weight(g, v, &map[fixed], dir)))
                .collect();

            let mut movable: Vec<(VertexId, f64)> = weighted
                .iter()
                .filter_map(|&(v, w)| w.map(|w| (v, w)))
                .collect();
            if flip {
                movable.sort_by(|a, b| {
                    a.1.total_cmp(&b.1)
                        .then_with(|| g[b.0].order.cmp(&g[a.0].order))
                });
            } else {
                movable.sort_by(|a, b| a.1.total_cmp(&b.1));
            }

            let mut sorted = movable.into_iter().map(|(v, _)| v);
            let reordered: Vec<VertexId> = weighted
                .iter()
                .filter_map(|&(v, w)| if w.is_none() { Some(v) } else { sorted.next() })
                .collect();
            map[next].reorder(g, reordered);
        }
    }
}

/// Swaps adjacent vertices while that lowers the crossings around their level. On `flip`
/// passes swaps that leave the count unchanged are taken too. Repeats until a whole scan of
/// the map makes no strict improvement.
fn transpose<T>(g: &mut Graph<T>, map: &mut LevelMap, flip: bool) {
    loop {
        let mut improved = false;
        for number in map.numbers() {
            let mut crossings = map.adjacent_crossings(g, number);
            for i in 0..map[number].len().saturating_sub(1) {
                let (v, w) = (map[number].vertices()[i], map[number].vertices()[i + 1]);
                let swapped = map.adjacent_swap_crossings(g, number, v, w);
                if swapped < crossings || (flip && swapped == crossings) {
                    map[number].swap(g, v, w);
                    improved |= swapped < crossings;
                    crossings = swapped;
                }
            }
        }
        if !improved {
            break;
        }
    }
}
