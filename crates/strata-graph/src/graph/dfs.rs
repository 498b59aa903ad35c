//! Depth-first traversal with an explicit work stack.
//!
//! Call-stack recursion is avoided so that arbitrarily deep graphs (long chains of dummies)
//! cannot overflow the stack. Each run keeps its own visitation marks, so traversals never
//! interfere with each other.

use super::{EdgeDirection, Graph, VertexId};

/// Callbacks fired by [`Dfs::run`], once per reachable vertex.
pub trait Visitor {
    /// Called when `v` is first reached (pre-order).
    fn enter(&mut self, _v: VertexId) {}

    /// Called once every vertex reachable from `v` has been visited (post-order).
    fn exit(&mut self, _v: VertexId) {}
}

#[derive(Debug, Clone, Copy)]
enum Task {
    Enter(VertexId),
    Exit(VertexId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dfs {
    dir: EdgeDirection,
}

impl Dfs {
    /// `Forward` follows edges; `Backward` walks them in reverse.
    pub fn new(dir: EdgeDirection) -> Self {
        Self { dir }
    }

    /// Runs the search from each root in the order given. Roots already reached from an
    /// earlier root are skipped.
    pub fn run<T, V>(
        &self,
        g: &Graph<T>,
        roots: impl IntoIterator<Item = VertexId>,
        visitor: &mut V,
    ) where
        V: Visitor + ?Sized,
    {
        let mut visited = vec![false; g.len()];
        let mut stack: Vec<Task> = Vec::new();

        for root in roots {
            stack.push(Task::Enter(root));

            while let Some(task) = stack.pop() {
                match task {
                    Task::Enter(v) => {
                        if visited[v.index()] {
                            continue;
                        }
                        visited[v.index()] = true;
                        visitor.enter(v);

                        stack.push(Task::Exit(v));
                        for &w in self.dir.edges(&g[v]) {
                            if !visited[w.index()] {
                                stack.push(Task::Enter(w));
                            }
                        }
                    }
                    Task::Exit(v) => visitor.exit(v),
                }
            }
        }
    }
}

#[derive(Default)]
struct Order {
    pre: Vec<VertexId>,
    post: Vec<VertexId>,
}

impl Visitor for Order {
    fn enter(&mut self, v: VertexId) {
        self.pre.push(v);
    }

    fn exit(&mut self, v: VertexId) {
        self.post.push(v);
    }
}

/// Vertices in the order they are entered.
pub fn preorder<T>(
    g: &Graph<T>,
    roots: impl IntoIterator<Item = VertexId>,
    dir: EdgeDirection,
) -> Vec<VertexId> {
    let mut order = Order::default();
    Dfs::new(dir).run(g, roots, &mut order);
    order.pre
}

/// Vertices in the order they are exited. For a DAG walked `Forward` this is a reverse
/// topological order.
pub fn postorder<T>(
    g: &Graph<T>,
    roots: impl IntoIterator<Item = VertexId>,
    dir: EdgeDirection,
) -> Vec<VertexId> {
    let mut order = Order::default();
    Dfs::new(dir).run(g, roots, &mut order);
    order.post
}
