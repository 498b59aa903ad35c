use crate::graph::{Graph, VertexId};
use crate::level::{Level, LevelDirection};
use crate::model::Heuristic;

/// Computes the sort key of a vertex from its neighbours in the fixed level.
pub trait OrderingHeuristic {
    /// Weight of `v`, a vertex of the level after `fixed` in sweep direction `dir`.
    ///
    /// `None` means `v` has no neighbour in `fixed` and must keep its position.
    fn weight<T>(&self, g: &Graph<T>, v: VertexId, fixed: &Level, dir: LevelDirection)
    -> Option<f64>;
}

fn neighbour_orders<T>(
    g: &Graph<T>,
    v: VertexId,
    fixed: &Level,
    dir: LevelDirection,
) -> Vec<usize> {
    dir.backward_edges(&g[v])
        .iter()
        .inspect(|&&u| debug_assert!(fixed.contains(g, u), "{u} is not on the fixed level"))
        .map(|&u| g[u].order)
        .collect()
}

/// Median of the neighbours' orders. With an even count above two the result leans toward
/// the denser side of the neighbour range.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMedian;

impl OrderingHeuristic for WeightedMedian {
    fn weight<T>(
        &self,
        g: &Graph<T>,
        v: VertexId,
        fixed: &Level,
        dir: LevelDirection,
    ) -> Option<f64> {
        let mut orders = neighbour_orders(g, v, fixed, dir);
        orders.sort_unstable();

        let n = orders.len();
        let at = |i: usize| orders[i] as f64;
        match n {
            0 => None,
            _ if n % 2 == 1 => Some(at(n / 2)),
            2 => Some((at(0) + at(1)) / 2.0),
            _ => {
                let (med_l, med_r) = (at(n / 2 - 1), at(n / 2));
                let left = med_l - at(0);
                let right = at(n - 1) - med_r;
                if left + right == 0.0 {
                    return Some((med_l + med_r) / 2.0);
                }
                Some((med_l * right + med_r * left) / (left + right))
            }
        }
    }
}

/// Mean of the neighbours' orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Barycenter;

impl OrderingHeuristic for Barycenter {
    fn weight<T>(
        &self,
        g: &Graph<T>,
        v: VertexId,
        fixed: &Level,
        dir: LevelDirection,
    ) -> Option<f64> {
        let orders = neighbour_orders(g, v, fixed, dir);
        if orders.is_empty() {
            return None;
        }
        let sum: usize = orders.iter().sum();
        Some(sum as f64 / orders.len() as f64)
    }
}

impl OrderingHeuristic for Heuristic {
    fn weight<T>(
        &self,
        g: &Graph<T>,
        v: VertexId,
        fixed: &Level,
        dir: LevelDirection,
    ) -> Option<f64> {
        match self {
            Heuristic::WeightedMedian => WeightedMedian.weight(g, v, fixed, dir),
            Heuristic::Barycenter => Barycenter.weight(g, v, fixed, dir),
        }
    }
}
