use strata_graph::{EdgeDirection, Graph, Point, Rect, Size, VertexId};

fn new_graph(tags: &[&'static str]) -> (Graph<&'static str>, Vec<VertexId>) {
    let mut g = Graph::new();
    let ids = tags
        .iter()
        .map(|t| g.add_vertex(*t, Size::new(10.0, 10.0)))
        .collect();
    (g, ids)
}

fn assert_mutual_inverse(g: &Graph<&'static str>) {
    for (v, vertex) in g.iter() {
        for &w in vertex.forward() {
            assert!(g[w].backward().contains(&v), "{v} -> {w} missing backward");
        }
        for &u in vertex.backward() {
            assert!(g[u].forward().contains(&v), "{u} -> {v} missing forward");
        }
    }
}

#[test]
fn add_edge_links_both_directions() {
    let (mut g, ids) = new_graph(&["a", "b"]);
    g.add_edge(ids[0], ids[1]);

    assert!(g.has_edge(ids[0], ids[1]));
    assert!(!g.has_edge(ids[1], ids[0]));
    assert!(g[ids[1]].backward().contains(&ids[0]));
    assert_eq!(g.edge_count(), 1);
    assert_mutual_inverse(&g);
}

#[test]
fn add_edge_twice_keeps_a_single_edge() {
    let (mut g, ids) = new_graph(&["a", "b"]);
    g.add_edge(ids[0], ids[1]);
    g.add_edge(ids[0], ids[1]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g[ids[1]].backward().len(), 1);
}

#[test]
fn remove_edge_unlinks_both_directions() {
    let (mut g, ids) = new_graph(&["a", "b"]);
    g.add_edge(ids[0], ids[1]);

    assert!(g.remove_edge(ids[0], ids[1]));
    assert!(!g.remove_edge(ids[0], ids[1]));
    assert!(g[ids[0]].forward().is_empty());
    assert!(g[ids[1]].backward().is_empty());
}

#[test]
fn reverse_edge_flips_only_that_edge() {
    let (mut g, ids) = new_graph(&["a", "b", "c"]);
    g.add_edge(ids[0], ids[1]);
    g.add_edge(ids[1], ids[2]);

    g.reverse_edge(ids[0], ids[1]);

    assert!(g.has_edge(ids[1], ids[0]));
    assert!(!g.has_edge(ids[0], ids[1]));
    assert!(g.has_edge(ids[1], ids[2]));
    assert_mutual_inverse(&g);
}

#[test]
fn reverse_edge_ignores_missing_edges() {
    let (mut g, ids) = new_graph(&["a", "b"]);
    g.reverse_edge(ids[0], ids[1]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn adjacency_keeps_insertion_order() {
    let (mut g, ids) = new_graph(&["a", "b", "c", "d"]);
    g.add_edge(ids[0], ids[3]);
    g.add_edge(ids[0], ids[1]);
    g.add_edge(ids[0], ids[2]);
    g.remove_edge(ids[0], ids[1]);

    let forward: Vec<VertexId> = g[ids[0]].forward().iter().copied().collect();
    assert_eq!(forward, vec![ids[3], ids[2]]);
    assert_eq!(g.neighbors(ids[0], EdgeDirection::Forward), forward);
}

#[test]
fn dummy_vertices_carry_their_edge_endpoints() {
    let (mut g, ids) = new_graph(&["a", "b"]);
    let d = g.add_dummy(ids[0], ids[1], 1);

    assert!(g[d].is_dummy());
    assert!(!g[ids[0]].is_dummy());
    assert_eq!(g[d].source(), Some(ids[0]));
    assert_eq!(g[d].sink(), Some(ids[1]));
    assert_eq!(g[d].tag(), None);
    assert_eq!(g[d].level, 1);
    assert_eq!(g[d].size(), Size::default());
    assert_eq!(g.len(), 3);
}

#[test]
fn vertex_lookup_is_checked() {
    let (g, ids) = new_graph(&["a", "b"]);
    let (bigger, more) = new_graph(&["a", "b", "c"]);

    assert_eq!(g.vertex(ids[1]).and_then(|v| v.tag()), Some(&"b"));
    assert!(g.vertex(more[2]).is_none());
    assert!(bigger.vertex(more[2]).is_some());
}

#[test]
fn bound_box_is_centered_on_pos() {
    let mut g: Graph<&str> = Graph::new();
    let a = g.add_vertex("a", Size::new(40.0, 20.0));
    g[a].pos = Point::new(100.0, 50.0);

    assert_eq!(g[a].bound_box(), Rect::new(80.0, 40.0, 40.0, 20.0));
    assert_eq!(g[a].left(), 80.0);
    assert_eq!(g[a].right(), 120.0);
}

#[test]
fn rect_union_covers_both() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, -5.0, 5.0, 5.0);
    assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    assert_eq!(a.include(Point::new(-3.0, 4.0)), Rect::new(-3.0, 0.0, 13.0, 10.0));
}

#[test]
fn edge_direction_table() {
    assert_eq!(EdgeDirection::Forward.opposite(), EdgeDirection::Backward);
    assert_eq!(EdgeDirection::Backward.opposite(), EdgeDirection::Forward);
    assert_eq!(EdgeDirection::Forward.sign(), 1);
    assert_eq!(EdgeDirection::Backward.sign(), -1);

    let (mut g, ids) = new_graph(&["a", "b"]);
    g.add_edge(ids[0], ids[1]);
    assert!(EdgeDirection::Forward.edges(&g[ids[0]]).contains(&ids[1]));
    assert!(EdgeDirection::Backward.edges(&g[ids[1]]).contains(&ids[0]));
}
