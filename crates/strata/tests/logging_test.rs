use strata::graph::Size;
use strata::{AdjacencyNavigator, Layout, LayoutOptions};
use tracing::Level;

fn tangled() -> AdjacencyNavigator<u32> {
    let mut edges = Vec::new();
    for i in 0..12u32 {
        edges.push((i, (i * 7 + 3) % 12));
        edges.push((i, (i * 5 + 1) % 12));
    }
    AdjacencyNavigator::from_edges(edges, Size::new(10.0, 10.0))
}

#[test]
fn logging_does_not_change_the_layout() {
    let options = LayoutOptions {
        straighten_long_edges: true,
        ..LayoutOptions::default()
    };
    let quiet = Layout::new(&tangled(), options.clone()).unwrap();

    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .finish();
    let traced = tracing::subscriber::with_default(subscriber, || {
        Layout::new(&tangled(), options).unwrap()
    });

    assert_eq!(quiet.to_json().unwrap(), traced.to_json().unwrap());
}
