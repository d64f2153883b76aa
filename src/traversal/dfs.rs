//! Iterative DFS with an explicit stack of edge iterators (C6), avoiding
//! recursion-depth limits on deep graphs.

use std::vec;

use fixedbitset::FixedBitSet;

use crate::id::VertexIndex;
use crate::store::GraphStore;

/// Depth-first traversal of a [`GraphStore`]. `next` advances the iterator
/// at the top of the stack; the first unvisited target it finds is pushed as
/// a new frame and returned. An exhausted frame is popped and the search
/// resumes at its parent.
pub struct Dfs {
    visited: FixedBitSet,
    stack: Vec<(VertexIndex, vec::IntoIter<crate::id::EdgeIndex>)>,
}

impl Dfs {
    pub fn new(store: &GraphStore, source: VertexIndex) -> Self {
        let mut visited = FixedBitSet::with_capacity(store.vertex_count());
        visited.insert(source.index());
        Dfs {
            visited,
            stack: vec![(source, store.out_edges(source).into_iter())],
        }
    }

    pub fn is_visited(&self, v: VertexIndex) -> bool {
        self.visited.contains(v.index())
    }

    /// Reuse this traversal for another source, e.g. to cover every
    /// connected component of a graph by re-starting once `next` returns
    /// `None` for the previous source's component.
    pub fn move_to(&mut self, store: &GraphStore, source: VertexIndex) {
        if !self.visited.contains(source.index()) {
            self.visited.insert(source.index());
            self.stack.push((source, store.out_edges(source).into_iter()));
        }
    }

    /// The vertices discovered by the source(s) passed so far that have not
    /// yet been yielded by `next`; the source itself is never re-yielded.
    pub fn next(&mut self, store: &GraphStore) -> Option<VertexIndex> {
        loop {
            let (v, iter) = self.stack.last_mut()?;
            let v = *v;
            match iter.next() {
                Some(e) => {
                    let w = store.edge_endpoint_other(e, v);
                    if !self.visited.contains(w.index()) {
                        self.visited.insert(w.index());
                        self.stack.push((w, store.out_edges(w).into_iter()));
                        return Some(w);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
