use strata::graph::{EdgeDirection, Graph, Size, VertexId};
use strata::level::{Level, LevelDirection, LevelMap};

fn new_graph(levels: &[i32]) -> (Graph<usize>, Vec<VertexId>) {
    let mut g = Graph::new();
    let ids = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let id = g.add_vertex(i, Size::new(10.0, 10.0));
            g[id].level = level;
            id
        })
        .collect();
    (g, ids)
}

fn names(map: &LevelMap, number: i32) -> Vec<VertexId> {
    map[number].vertices().to_vec()
}

/// Top level `[a, b]`, bottom level `[c, d]`, edges `a -> d` and `b -> c`.
fn crossed() -> (Graph<usize>, LevelMap, [VertexId; 4]) {
    let (mut g, ids) = new_graph(&[0, 0, 1, 1]);
    let [a, b, c, d] = [ids[0], ids[1], ids[2], ids[3]];
    g.add_edge(a, d);
    g.add_edge(b, c);
    let mut map = LevelMap::build(&mut g);
    map[0].reorder(&mut g, vec![a, b]);
    map[1].reorder(&mut g, vec![c, d]);
    (g, map, [a, b, c, d])
}

#[test]
fn level_map_build_groups_vertices_by_level() {
    let (mut g, ids) = new_graph(&[0, 1, 1, 2]);
    g.add_edge(ids[0], ids[1]);
    g.add_edge(ids[0], ids[2]);
    g.add_edge(ids[1], ids[3]);

    let map = LevelMap::build(&mut g);

    assert_eq!(map.len(), 3);
    assert_eq!(map.first_number(), Some(0));
    assert_eq!(map.last_number(), Some(2));
    assert_eq!(names(&map, 0), vec![ids[0]]);
    assert_eq!(map[1].len(), 2);
    assert_eq!(names(&map, 2), vec![ids[3]]);
}

#[test]
fn level_map_build_seeds_order_from_a_depth_first_walk() {
    let (mut g, ids) = new_graph(&[0, 1, 1]);
    g.add_edge(ids[0], ids[1]);
    g.add_edge(ids[0], ids[2]);

    let map = LevelMap::build(&mut g);

    // The last neighbour added is explored first.
    assert_eq!(names(&map, 1), vec![ids[2], ids[1]]);
}

#[test]
fn level_map_orders_match_positions() {
    let (mut g, ids) = new_graph(&[0, 0, 0, 1, 1]);
    g.add_edge(ids[0], ids[3]);
    g.add_edge(ids[2], ids[4]);

    let map = LevelMap::build(&mut g);

    for level in map.levels() {
        for (i, &v) in level.vertices().iter().enumerate() {
            assert_eq!(g[v].order, i);
            assert_eq!(g[v].level, level.number());
            assert!(level.contains(&g, v));
        }
    }
}

#[test]
fn level_map_make_fills_the_range() {
    let mut map = LevelMap::new();
    assert!(map.is_empty());
    assert!(map.get(0).is_none());

    map.make(3);
    map.make(0);
    map.make(-2);

    assert_eq!(map.len(), 6);
    assert_eq!(map.numbers().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2, 3]);
    assert!(map.get(1).is_some_and(Level::is_empty));
    assert_eq!(map.prev(0).map(Level::number), Some(-1));
    assert_eq!(map.next(3).map(Level::number), None);
    assert_eq!(map.first().map(Level::number), Some(-2));
    assert_eq!(map.last().map(Level::number), Some(3));
}

#[test]
fn level_map_make_returns_the_requested_level() {
    let (mut g, ids) = new_graph(&[5, 2, 7]);
    let mut map = LevelMap::new();

    for &v in &ids {
        let level = g[v].level;
        let made = map.make(level);
        assert_eq!(made.number(), level);
        made.push(&mut g, v);
    }

    assert_eq!(map.numbers().collect::<Vec<_>>(), (2..=7).collect::<Vec<_>>());
    assert_eq!(map.make(6).number(), 6);
    assert_eq!(map.len(), 6);
    assert_eq!(names(&map, 2), vec![ids[1]]);
    assert_eq!(names(&map, 5), vec![ids[0]]);
    assert_eq!(names(&map, 7), vec![ids[2]]);
}

#[test]
fn level_map_get_mut_edits_in_place() {
    let (mut g, ids) = new_graph(&[0, 0, 1]);
    let mut map = LevelMap::build(&mut g);
    assert!(map.get_mut(2).is_none());
    assert!(map.get_mut(-1).is_none());

    let top = map.get_mut(0).unwrap();
    top.reorder(&mut g, vec![ids[1], ids[0]]);

    assert_eq!(names(&map, 0), vec![ids[1], ids[0]]);
    assert_eq!((g[ids[0]].order, g[ids[1]].order), (1, 0));
}

#[test]
fn level_count_crossings_counts_inverted_pairs() {
    let (g, map, _) = crossed();

    assert_eq!(map[0].count_crossings(&g, EdgeDirection::Forward), 1);
    assert_eq!(map[1].count_crossings(&g, EdgeDirection::Backward), 1);
    assert_eq!(map.count_crossing(&g), 1);
}

#[test]
fn level_count_crossings_is_zero_without_inversions() {
    let (mut g, mut map, [_, _, c, d]) = crossed();
    map[1].reorder(&mut g, vec![d, c]);

    assert_eq!(map.count_crossing(&g), 0);
}

#[test]
fn level_count_crossings_counts_every_pair_of_edges() {
    // a -> {e, f}, b -> {d}, c -> {d}; bottom order [d, e, f] puts a's edges over b and c.
    let (mut g, ids) = new_graph(&[0, 0, 0, 1, 1, 1]);
    let [a, b, c, d, e, f] = [ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]];
    g.add_edge(a, e);
    g.add_edge(a, f);
    g.add_edge(b, d);
    g.add_edge(c, d);
    let mut map = LevelMap::build(&mut g);
    map[0].reorder(&mut g, vec![a, b, c]);
    map[1].reorder(&mut g, vec![d, e, f]);

    assert_eq!(map.count_crossing(&g), 4);
}

#[test]
fn level_count_swap_crossings_does_not_mutate() {
    let (g, map, [a, b, c, d]) = crossed();

    assert_eq!(map[0].count_swap_crossings(&g, c, d, EdgeDirection::Forward), 0);
    assert_eq!(map[1].count_swap_crossings(&g, a, b, EdgeDirection::Backward), 0);
    assert_eq!(g[c].order, 0);
    assert_eq!(g[d].order, 1);
    assert_eq!(map.count_crossing(&g), 1);
}

#[test]
fn level_map_adjacent_swap_crossings_looks_both_ways() {
    // Three levels; the middle pair is crossed against both neighbours.
    let (mut g, ids) = new_graph(&[0, 0, 1, 1, 2, 2]);
    let [t0, t1, m0, m1, b0, b1] = [ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]];
    g.add_edge(t0, m1);
    g.add_edge(t1, m0);
    g.add_edge(m0, b1);
    g.add_edge(m1, b0);
    let mut map = LevelMap::build(&mut g);
    map[0].reorder(&mut g, vec![t0, t1]);
    map[1].reorder(&mut g, vec![m0, m1]);
    map[2].reorder(&mut g, vec![b0, b1]);

    assert_eq!(map.adjacent_crossings(&g, 1), 2);
    assert_eq!(map.adjacent_swap_crossings(&g, 1, m0, m1), 0);
    assert_eq!(map.adjacent_crossings(&g, 0), 1);
    assert_eq!(map.adjacent_crossings(&g, 2), 1);
}

#[test]
fn level_swap_updates_orders() {
    let (mut g, mut map, [_, _, c, d]) = crossed();

    map[1].swap(&mut g, c, d);

    assert_eq!(names(&map, 1), vec![d, c]);
    assert_eq!((g[d].order, g[c].order), (0, 1));
    assert_eq!(map.count_crossing(&g), 0);
}

#[test]
fn level_map_memento_restores_orders() {
    let (mut g, mut map, [a, b, c, d]) = crossed();
    let memento = map.memento();

    map[0].swap(&mut g, a, b);
    map[1].swap(&mut g, c, d);
    assert_ne!(map.memento(), memento);

    map.restore(&mut g, &memento);

    assert_eq!(map.memento(), memento);
    assert_eq!(names(&map, 0), vec![a, b]);
    assert_eq!(names(&map, 1), vec![c, d]);
    assert_eq!([g[a].order, g[b].order, g[c].order, g[d].order], [0, 1, 0, 1]);
}

#[test]
fn level_direction_sweeps_pair_adjacent_levels() {
    let mut map = LevelMap::new();
    map.make(0);
    map.make(2);

    assert_eq!(LevelDirection::Down.sweep(&map), vec![(0, 1), (1, 2)]);
    assert_eq!(LevelDirection::Up.sweep(&map), vec![(2, 1), (1, 0)]);
    assert_eq!(LevelDirection::Down.first(&map), Some(0));
    assert_eq!(LevelDirection::Up.first(&map), Some(2));
    assert_eq!(LevelDirection::Down.next(4), 5);
    assert_eq!(LevelDirection::Up.next(4), 3);
    assert!(LevelDirection::Down.sweep(&LevelMap::new()).is_empty());
}

#[test]
fn level_direction_picks_edge_sides() {
    let (g, _, [a, _, _, d]) = crossed();

    assert!(LevelDirection::Down.forward_edges(&g[a]).contains(&d));
    assert!(LevelDirection::Down.backward_edges(&g[d]).contains(&a));
    assert!(LevelDirection::Up.forward_edges(&g[d]).contains(&a));
    assert!(LevelDirection::Up.backward_edges(&g[a]).contains(&d));
    assert_eq!(LevelDirection::Down.opposite(), LevelDirection::Up);
}

#[test]
fn level_map_display_lists_levels() {
    let (g, map, [a, ..]) = crossed();

    let text = map.display(&g).to_string();

    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().next().unwrap().contains(&format!("{a}@")));
}
