//! Splits long edges into chains of dummy vertices.

use tracing::debug;

use crate::graph::{EdgeDirection, Graph, VertexId};

/// Replaces every edge spanning more than one level with a chain of dummies, one per
/// intervening level. Each dummy remembers the real endpoints of the edge it stands for.
///
/// Levels must already be assigned and every edge must point to a higher level. Returns the
/// number of dummies inserted.
pub fn make_proper<T>(g: &mut Graph<T>) -> usize {
    let originals: Vec<VertexId> = g.ids().collect();
    let mut inserted = 0;

    for v in originals {
        for w in g.neighbors(v, EdgeDirection::Forward) {
            let (from, to) = (g[v].level, g[w].level);
            debug_assert!(from < to, "edge {v} -> {w} does not point down");
            if to - from <= 1 {
                continue;
            }

            g.remove_edge(v, w);
            let mut tail = v;
            for level in from + 1..to {
                let dummy = g.add_dummy(v, w, level);
                g.add_edge(tail, dummy);
                tail = dummy;
                inserted += 1;
            }
            g.add_edge(tail, w);
        }
    }

    debug!(inserted, "graph made proper");
    inserted
}

/// True when every edge spans exactly one level.
pub fn is_proper<T>(g: &Graph<T>) -> bool {
    g.edges().all(|(v, w)| g[w].level == g[v].level + 1)
}
