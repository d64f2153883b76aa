//! Linked-list-backed adjacency: a doubly-threaded list of edge indices per
//! vertex, following the classic rustc/petgraph `Graph` representation.
//! Each vertex keeps two chain heads (`next[0]` for edges where it is the
//! stored source, `next[1]` for edges where it is the stored target); each
//! edge keeps the corresponding two continuation pointers. Insertion and
//! removal are both O(1) plus whatever O(deg) pointer-chasing a removal
//! needs to splice itself out of its two chains.
//!
//! Unlike the upstream representation this crate does not duplicate edge
//! endpoints here: the source/target pair lives once, in
//! [`super::GraphStore`]'s central endpoint table. The chain pointers this
//! module threads are purely a traversal order, addressed by plain `usize`
//! with `END` (`usize::MAX`) as the null sentinel -- mirroring petgraph's
//! `EdgeIndex::end()` convention.

use crate::id::{EdgeIndex, VertexIndex};

const END: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct LinkedNode {
    next: [usize; 2],
}

impl Default for LinkedNode {
    fn default() -> Self {
        LinkedNode { next: [END, END] }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct LinkedEdge {
    next: [usize; 2],
}

#[derive(Debug, Clone, Default)]
pub struct LinkedAdjacency {
    nodes: Vec<LinkedNode>,
    edges: Vec<LinkedEdge>,
}

impl LinkedAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn push_vertex(&mut self) {
        self.nodes.push(LinkedNode::default());
    }

    pub(crate) fn pop_vertex(&mut self) {
        self.nodes.pop();
    }

    pub(crate) fn swap_vertices(&mut self, i: VertexIndex, j: VertexIndex) {
        self.nodes.swap(i.index(), j.index());
    }

    /// `link_edge` assumes the edge record for `e` has already been pushed
    /// by `GraphStore::add_edge` (i.e. `e.index() == self.edges.len()`).
    pub(crate) fn link_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        debug_assert_eq!(e.index(), self.edges.len());
        let ei = e.index();
        if self_loop {
            if directed {
                // Directed self-loop: one occurrence in the "out" chain, one
                // in the "in" chain, matching how a directed non-loop edge
                // occupies source's slot 0 and target's slot 1 (here the same
                // vertex for both).
                let old = self.nodes[source.index()].next;
                self.edges.push(LinkedEdge { next: old });
                self.nodes[source.index()].next = [ei, ei];
            } else {
                // Undirected self-loop: a single adjacency list, so the edge
                // must appear exactly once, not once per chain slot.
                let old0 = self.nodes[source.index()].next[0];
                self.edges.push(LinkedEdge {
                    next: [old0, END],
                });
                self.nodes[source.index()].next[0] = ei;
            }
        } else {
            let old0 = self.nodes[source.index()].next[0];
            let old1 = self.nodes[target.index()].next[1];
            self.edges.push(LinkedEdge {
                next: [old0, old1],
            });
            self.nodes[source.index()].next[0] = ei;
            self.nodes[target.index()].next[1] = ei;
        }
    }

    /// Splice `e` out of the two chains it participates in, using the
    /// endpoints it was threaded under (its own `next` pointers are still
    /// intact at this point).
    pub(crate) fn unlink_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        let ei = e.index();
        let edge_next = self.edges[ei].next;
        if self_loop {
            self.unlink_from_chain(source, 0, ei, edge_next[0]);
            if directed {
                self.unlink_from_chain(source, 1, ei, edge_next[1]);
            }
        } else {
            let owner = [source, target];
            for k in 0..2 {
                self.unlink_from_chain(owner[k], k, ei, edge_next[k]);
            }
        }
    }

    fn unlink_from_chain(&mut self, owner: VertexIndex, slot: usize, target_edge: usize, replacement: usize) {
        let node = &mut self.nodes[owner.index()];
        if node.next[slot] == target_edge {
            node.next[slot] = replacement;
            return;
        }
        let mut cur = node.next[slot];
        while cur != END {
            if self.edges[cur].next[slot] == target_edge {
                self.edges[cur].next[slot] = replacement;
                return;
            }
            cur = self.edges[cur].next[slot];
        }
        debug_assert!(false, "edge not found in its own adjacency chain");
    }

    /// `old` is the dense index of the edge that is being swap-removed into
    /// slot `new` (i.e. `old` was the tail of the edge array). Moves the
    /// physical record and re-threads whichever chains referenced `old`.
    pub(crate) fn relabel_edge(
        &mut self,
        old: EdgeIndex,
        new: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        let oi = old.index();
        let ni = new.index();
        self.edges.swap(ni, oi);
        self.edges.pop();
        if self_loop {
            self.unlink_from_chain(source, 0, oi, ni);
            if directed {
                self.unlink_from_chain(source, 1, oi, ni);
            }
        } else {
            let owner = [source, target];
            for k in 0..2 {
                self.unlink_from_chain(owner[k], k, oi, ni);
            }
        }
    }

    pub(crate) fn first_incident(&self, v: VertexIndex) -> Option<EdgeIndex> {
        let node = self.nodes[v.index()];
        if node.next[0] != END {
            Some(EdgeIndex(node.next[0]))
        } else if node.next[1] != END {
            Some(EdgeIndex(node.next[1]))
        } else {
            None
        }
    }

    fn chain(&self, mut head: usize, slot: usize, out: &mut Vec<EdgeIndex>) {
        while head != END {
            out.push(EdgeIndex(head));
            head = self.edges[head].next[slot];
        }
    }

    pub(crate) fn out_edges(&self, v: VertexIndex, directed: bool) -> Vec<EdgeIndex> {
        let node = self.nodes[v.index()];
        let mut out = Vec::new();
        self.chain(node.next[0], 0, &mut out);
        if !directed {
            self.chain(node.next[1], 1, &mut out);
        }
        out
    }

    pub(crate) fn in_edges(&self, v: VertexIndex, directed: bool) -> Vec<EdgeIndex> {
        let node = self.nodes[v.index()];
        let mut out = Vec::new();
        if directed {
            self.chain(node.next[1], 1, &mut out);
        } else {
            self.chain(node.next[0], 0, &mut out);
            self.chain(node.next[1], 1, &mut out);
        }
        out
    }
}
