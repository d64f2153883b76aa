//! Iterative multi-source BFS with layer tracking (C6).

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::id::{EdgeIndex, VertexIndex};
use crate::store::GraphStore;

/// One vertex dequeued by [`Bfs::next`]: its BFS layer (0 for a source) and
/// the edge it was discovered through (`None` for a source).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsStep {
    pub vertex: VertexIndex,
    pub layer: usize,
    pub in_edge: Option<EdgeIndex>,
}

/// Breadth-first traversal of a [`GraphStore`], started from one or more
/// sources (all enqueued at layer 0). `next` dequeues a vertex, scans its
/// outgoing edges, and enqueues every unvisited neighbour one layer deeper.
pub struct Bfs {
    queue: VecDeque<(VertexIndex, usize, Option<EdgeIndex>)>,
    visited: FixedBitSet,
}

impl Bfs {
    pub fn new(store: &GraphStore, source: VertexIndex) -> Self {
        Self::multi_source(store, std::iter::once(source))
    }

    pub fn multi_source(store: &GraphStore, sources: impl IntoIterator<Item = VertexIndex>) -> Self {
        let mut visited = FixedBitSet::with_capacity(store.vertex_count());
        let mut queue = VecDeque::new();
        for s in sources {
            if !visited.contains(s.index()) {
                visited.insert(s.index());
                queue.push_back((s, 0, None));
            }
        }
        Bfs { queue, visited }
    }

    pub fn is_visited(&self, v: VertexIndex) -> bool {
        self.visited.contains(v.index())
    }

    pub fn next(&mut self, store: &GraphStore) -> Option<BfsStep> {
        let (vertex, layer, in_edge) = self.queue.pop_front()?;
        for e in store.out_edges(vertex) {
            let w = store.edge_endpoint_other(e, vertex);
            if !self.visited.contains(w.index()) {
                self.visited.insert(w.index());
                self.queue.push_back((w, layer + 1, Some(e)));
            }
        }
        Some(BfsStep {
            vertex,
            layer,
            in_edge,
        })
    }
}
