//! The layout phases in order.

use tracing::{debug, debug_span};

use crate::graph::Graph;
use crate::hierarchy;
use crate::level::LevelMap;
use crate::model::LayoutOptions;
use crate::order::OrderAssigner;
use crate::position::{Coordinator, StraightenLongEdge};
use crate::proper;

/// Lays out `g` in place: levels, dummy chains, level order and coordinates. Returns the
/// final level map; every vertex's `level`, `order` and `pos` are set.
///
/// `options` is assumed valid (see [`LayoutOptions::validate`]).
pub fn run<T>(g: &mut Graph<T>, options: &LayoutOptions) -> LevelMap {
    let _span = debug_span!("layout", vertices = g.len(), edges = g.edge_count()).entered();

    debug_span!("levels").in_scope(|| hierarchy::assign_levels(g, options.leveling));

    let dummies = debug_span!("proper").in_scope(|| proper::make_proper(g));

    let map = debug_span!("order").in_scope(|| {
        OrderAssigner::new(options.heuristic)
            .with_max_iterations(options.max_order_iterations)
            .layout(g)
    });

    debug_span!("position").in_scope(|| {
        Coordinator::new(options.x_gap, options.y_gap)
            .with_max_iterations(options.max_coordinate_iterations)
            .layout(g, &map);
    });

    if options.straighten_long_edges {
        debug_span!("straighten").in_scope(|| {
            StraightenLongEdge::new(options.x_gap, options.max_straighten_passes).layout(g, &map)
        });
    }

    debug!(
        levels = map.len(),
        dummies,
        crossings = map.count_crossing(g),
        "layout finished"
    );
    map
}
