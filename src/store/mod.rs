//! The dense-index graph store (C1): array/linked edge lists per vertex, a
//! central endpoint table, directed/undirected capability flags, and the
//! swap-on-remove protocol that keeps indices packed into `[0, n)`.
//!
//! Every vertex-keyed or edge-keyed observer (weight columns, the stable-id
//! layer, user code) registers as a [`GraphListener`] and is notified of
//! every `add`/`remove`/swap exactly once, in registration order, before the
//! mutating call returns.

pub mod array;
pub mod linked;

use crate::error::{GraphError, GraphResult};
use crate::id::{EdgeIndex, GraphListener, VertexIndex};

pub use array::ArrayAdjacency;
pub use linked::LinkedAdjacency;

/// Which adjacency representation a [`GraphStore`] was built with. Chosen
/// once, at construction time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdjacencyKind {
    /// Dynamic array per vertex: O(1) amortised append, O(deg) removal.
    Array,
    /// Doubly-linked list threaded through the edge array: O(1) removal,
    /// O(1) append, no reallocation on growth.
    Linked,
}

/// The capability profile of a graph: directed vs. undirected, and whether
/// self-loops / parallel edges are permitted. Algorithms that require a
/// specific profile check this and fail with
/// [`GraphError::CapabilityMismatch`] on mismatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub directed: bool,
    pub allow_self_loops: bool,
    pub allow_parallel_edges: bool,
}

impl Capabilities {
    pub const fn directed() -> Self {
        Capabilities {
            directed: true,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }

    pub const fn undirected() -> Self {
        Capabilities {
            directed: false,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }

    pub const fn simple(mut self) -> Self {
        self.allow_self_loops = false;
        self.allow_parallel_edges = false;
        self
    }
}

enum Backing {
    Array(ArrayAdjacency),
    Linked(LinkedAdjacency),
}

impl Backing {
    fn vertex_count(&self) -> usize {
        match self {
            Backing::Array(b) => b.vertex_count(),
            Backing::Linked(b) => b.vertex_count(),
        }
    }

    fn push_vertex(&mut self) {
        match self {
            Backing::Array(b) => b.push_vertex(),
            Backing::Linked(b) => b.push_vertex(),
        }
    }

    fn pop_vertex(&mut self) {
        match self {
            Backing::Array(b) => b.pop_vertex(),
            Backing::Linked(b) => b.pop_vertex(),
        }
    }

    fn swap_vertices(&mut self, i: VertexIndex, j: VertexIndex) {
        match self {
            Backing::Array(b) => b.swap_vertices(i, j),
            Backing::Linked(b) => b.swap_vertices(i, j),
        }
    }

    fn link_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        match self {
            Backing::Array(b) => b.link_edge(e, source, target, directed, self_loop),
            Backing::Linked(b) => b.link_edge(e, source, target, directed, self_loop),
        }
    }

    fn unlink_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        match self {
            Backing::Array(b) => b.unlink_edge(e, source, target, directed, self_loop),
            Backing::Linked(b) => b.unlink_edge(e, source, target, directed, self_loop),
        }
    }

    fn relabel_edge(
        &mut self,
        old: EdgeIndex,
        new: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        match self {
            Backing::Array(b) => b.relabel_edge(old, new, source, target, directed, self_loop),
            Backing::Linked(b) => b.relabel_edge(old, new, source, target, directed, self_loop),
        }
    }

    fn first_incident(&self, v: VertexIndex) -> Option<EdgeIndex> {
        match self {
            Backing::Array(b) => b.first_incident(v),
            Backing::Linked(b) => b.first_incident(v),
        }
    }

    fn out_edges(&self, v: VertexIndex, directed: bool) -> Vec<EdgeIndex> {
        match self {
            Backing::Array(b) => b.out_edges(v, directed),
            Backing::Linked(b) => b.out_edges(v, directed),
        }
    }

    fn in_edges(&self, v: VertexIndex, directed: bool) -> Vec<EdgeIndex> {
        match self {
            Backing::Array(b) => b.in_edges(v, directed),
            Backing::Linked(b) => b.in_edges(v, directed),
        }
    }
}

/// The dense-index graph store (C1).
///
/// `GraphStore` owns the adjacency structure and the central endpoint table;
/// it does not know about stable external ids (see [`crate::id::IdMap`]) or
/// the user-facing façade (see [`crate::graph::Graph`]) — those are built on
/// top of it.
pub struct GraphStore {
    capabilities: Capabilities,
    backing: Backing,
    endpoints: Vec<[VertexIndex; 2]>,
    vertex_listeners: Vec<Box<dyn GraphListener>>,
    edge_listeners: Vec<Box<dyn GraphListener>>,
}

impl GraphStore {
    pub fn new(kind: AdjacencyKind, capabilities: Capabilities) -> Self {
        let backing = match kind {
            AdjacencyKind::Array => Backing::Array(ArrayAdjacency::new()),
            AdjacencyKind::Linked => Backing::Linked(LinkedAdjacency::new()),
        };
        GraphStore {
            capabilities,
            backing,
            endpoints: Vec::new(),
            vertex_listeners: Vec::new(),
            edge_listeners: Vec::new(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Register a vertex-keyed listener (a weight column, an `IdMap`, ...).
    /// It is immediately brought up to the current vertex count via
    /// repeated `on_add` calls, mirroring a column created after some
    /// vertices already exist.
    pub fn register_vertex_listener(&mut self, mut listener: Box<dyn GraphListener>) {
        for _ in 0..self.vertex_count() {
            listener.on_add();
        }
        self.vertex_listeners.push(listener);
    }

    pub fn register_edge_listener(&mut self, mut listener: Box<dyn GraphListener>) {
        for _ in 0..self.edge_count() {
            listener.on_add();
        }
        self.edge_listeners.push(listener);
    }

    pub fn vertex_count(&self) -> usize {
        self.backing.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> {
        (0..self.vertex_count()).map(VertexIndex)
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> {
        (0..self.edge_count()).map(EdgeIndex)
    }

    fn validate_vertex(&self, v: VertexIndex) -> GraphResult<()> {
        if v.index() < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange(v.index()))
        }
    }

    fn validate_edge(&self, e: EdgeIndex) -> GraphResult<()> {
        if e.index() < self.edge_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange(e.index()))
        }
    }

    pub fn add_vertex(&mut self) -> VertexIndex {
        let v = VertexIndex(self.vertex_count());
        self.backing.push_vertex();
        for l in &mut self.vertex_listeners {
            l.on_add();
        }
        v
    }

    fn has_edge_between(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.out_edges(a)
            .into_iter()
            .any(|e| self.edge_endpoint_other(e, a) == b)
    }

    pub fn add_edge(&mut self, source: VertexIndex, target: VertexIndex) -> GraphResult<EdgeIndex> {
        self.validate_vertex(source)?;
        self.validate_vertex(target)?;
        let self_loop = source == target;
        if self_loop && !self.capabilities.allow_self_loops {
            return Err(GraphError::CapabilityMismatch(
                "graph does not allow self loops",
            ));
        }
        if !self_loop
            && !self.capabilities.allow_parallel_edges
            && self.has_edge_between(source, target)
        {
            return Err(GraphError::CapabilityMismatch(
                "graph does not allow parallel edges",
            ));
        }

        let e = EdgeIndex(self.edge_count());
        self.endpoints.push([source, target]);
        self.backing
            .link_edge(e, source, target, self.capabilities.directed, self_loop);
        for l in &mut self.edge_listeners {
            l.on_add();
        }
        Ok(e)
    }

    pub fn remove_edge(&mut self, e: EdgeIndex) -> GraphResult<()> {
        self.validate_edge(e)?;
        let [s, t] = self.endpoints[e.index()];
        let self_loop = s == t;
        self.backing
            .unlink_edge(e, s, t, self.capabilities.directed, self_loop);

        let last_index = self.edge_count() - 1;
        if e.index() != last_index {
            let last = EdgeIndex(last_index);
            let [ls, lt] = self.endpoints[last_index];
            let last_self_loop = ls == lt;
            self.backing
                .relabel_edge(last, e, ls, lt, self.capabilities.directed, last_self_loop);
            self.endpoints.swap(e.index(), last_index);
            for l in &mut self.edge_listeners {
                l.on_swap(e.index(), last_index);
            }
        }
        self.endpoints.pop();
        for l in &mut self.edge_listeners {
            l.on_remove();
        }
        Ok(())
    }

    /// Rewrite every edge endpoint equal to `old` to `new`, for edges
    /// currently incident to `old`. Used only while relabelling the vertex
    /// that is about to be swapped into a removed slot.
    fn retarget_vertex_edges(&mut self, old: VertexIndex, new: VertexIndex) {
        let mut touched = self.backing.out_edges(old, self.capabilities.directed);
        touched.extend(self.backing.in_edges(old, self.capabilities.directed));
        touched.sort_unstable_by_key(|e| e.index());
        touched.dedup();
        for e in touched {
            let ep = &mut self.endpoints[e.index()];
            if ep[0] == old {
                ep[0] = new;
            }
            if ep[1] == old {
                ep[1] = new;
            }
        }
    }

    pub fn remove_vertex(&mut self, v: VertexIndex) -> GraphResult<()> {
        self.validate_vertex(v)?;
        while let Some(e) = self.backing.first_incident(v) {
            self.remove_edge(e)?;
        }

        let last_index = self.vertex_count() - 1;
        if v.index() != last_index {
            let last = VertexIndex(last_index);
            self.retarget_vertex_edges(last, v);
            self.backing.swap_vertices(v, last);
            for l in &mut self.vertex_listeners {
                l.on_swap(v.index(), last_index);
            }
        }
        self.backing.pop_vertex();
        for l in &mut self.vertex_listeners {
            l.on_remove();
        }
        Ok(())
    }

    /// Reverse a single edge's direction in place. Directed graphs only; a
    /// self-loop reversal is a no-op.
    pub fn reverse_edge(&mut self, e: EdgeIndex) -> GraphResult<()> {
        if !self.capabilities.directed {
            return Err(GraphError::CapabilityMismatch(
                "reverse_edge requires a directed graph",
            ));
        }
        self.validate_edge(e)?;
        let [s, t] = self.endpoints[e.index()];
        if s == t {
            return Ok(());
        }
        self.backing.unlink_edge(e, s, t, true, false);
        self.endpoints[e.index()] = [t, s];
        self.backing.link_edge(e, t, s, true, false);
        Ok(())
    }

    pub fn edge_source(&self, e: EdgeIndex) -> VertexIndex {
        self.endpoints[e.index()][0]
    }

    pub fn edge_target(&self, e: EdgeIndex) -> VertexIndex {
        self.endpoints[e.index()][1]
    }

    /// The endpoint of `e` that is not `from` (for a self-loop, returns
    /// `from` itself).
    pub fn edge_endpoint_other(&self, e: EdgeIndex, from: VertexIndex) -> VertexIndex {
        let [s, t] = self.endpoints[e.index()];
        if s == from {
            t
        } else {
            s
        }
    }

    pub fn out_edges(&self, v: VertexIndex) -> Vec<EdgeIndex> {
        self.backing.out_edges(v, self.capabilities.directed)
    }

    pub fn in_edges(&self, v: VertexIndex) -> Vec<EdgeIndex> {
        self.backing.in_edges(v, self.capabilities.directed)
    }

    pub fn degree_out(&self, v: VertexIndex) -> usize {
        self.out_edges(v).len()
    }

    pub fn degree_in(&self, v: VertexIndex) -> usize {
        self.in_edges(v).len()
    }

    /// A cursor over `v`'s outgoing (or, undirected, full) adjacency, able to
    /// remove the edge it is positioned on mid-traversal. See
    /// [`AdjacencyCursor`].
    pub fn out_cursor(&self, v: VertexIndex) -> AdjacencyCursor {
        AdjacencyCursor::new(v, Direction::Out)
    }

    /// A cursor over `v`'s incoming adjacency (same as [`Self::out_cursor`]
    /// on an undirected graph).
    pub fn in_cursor(&self, v: VertexIndex) -> AdjacencyCursor {
        AdjacencyCursor::new(v, Direction::In)
    }
}

/// Which of a vertex's two adjacency lists an [`AdjacencyCursor`] walks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
}

/// An iterator-with-removal over one vertex's adjacency (§4.1's
/// `peekNext()`/`remove()`). Unlike [`GraphStore::out_edges`] /
/// [`GraphStore::in_edges`], which hand back a one-shot snapshot `Vec`, a
/// cursor re-derives its list from the store on every call -- so a `remove`
/// through the cursor is immediately visible to the next `peek`/`next`,
/// exactly as if the cursor were reading the live adjacency structure.
///
/// `remove` follows the swap-on-remove protocol: it deletes the edge most
/// recently yielded by `next` and walks the cursor back one slot, so the
/// edge the store swapped into that slot (if any) is not skipped.
pub struct AdjacencyCursor {
    vertex: VertexIndex,
    direction: Direction,
    pos: usize,
}

impl AdjacencyCursor {
    fn new(vertex: VertexIndex, direction: Direction) -> Self {
        AdjacencyCursor {
            vertex,
            direction,
            pos: 0,
        }
    }

    fn current_list(&self, store: &GraphStore) -> Vec<EdgeIndex> {
        match self.direction {
            Direction::Out => store.out_edges(self.vertex),
            Direction::In => store.in_edges(self.vertex),
        }
    }

    /// The edge `next` would return, without advancing the cursor.
    pub fn peek(&self, store: &GraphStore) -> Option<EdgeIndex> {
        self.current_list(store).get(self.pos).copied()
    }

    /// Advance past and return the next edge, or `None` once the adjacency is
    /// exhausted.
    pub fn next(&mut self, store: &GraphStore) -> Option<EdgeIndex> {
        let edge = self.current_list(store).get(self.pos).copied();
        if edge.is_some() {
            self.pos += 1;
        }
        edge
    }

    /// Remove the edge last returned by `next` from the graph. Fails with
    /// [`GraphError::NoSuchElement`] if `next` has not yet been called, or was
    /// already followed by a `remove`.
    pub fn remove(&mut self, store: &mut GraphStore) -> GraphResult<()> {
        let pos = self.pos.checked_sub(1).ok_or(GraphError::NoSuchElement)?;
        let edge = *self
            .current_list(store)
            .get(pos)
            .ok_or(GraphError::NoSuchElement)?;
        store.remove_edge(edge)?;
        self.pos = pos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed_store() -> GraphStore {
        GraphStore::new(AdjacencyKind::Linked, Capabilities::directed())
    }

    #[test]
    fn add_and_query_edges() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let e1 = g.add_edge(a, b).unwrap();
        let e2 = g.add_edge(b, c).unwrap();
        assert_eq!(g.out_edges(a), vec![e1]);
        assert_eq!(g.in_edges(b), vec![e1]);
        assert_eq!(g.out_edges(b), vec![e2]);
        assert_eq!(g.edge_source(e2), b);
        assert_eq!(g.edge_target(e2), c);
    }

    #[test]
    fn remove_edge_swaps_tail() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let e0 = g.add_edge(a, b).unwrap();
        let e1 = g.add_edge(a, b).unwrap();
        let e2 = g.add_edge(a, b).unwrap();
        g.remove_edge(e0).unwrap();
        assert_eq!(g.edge_count(), 2);
        // e2 (the former tail) now lives at e0's old slot.
        let mut remaining: Vec<_> = g.out_edges(a);
        remaining.sort_by_key(|e| e.index());
        assert_eq!(remaining, vec![EdgeIndex(0), e1]);
        let _ = e2;
    }

    #[test]
    fn remove_vertex_detaches_incident_edges() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, c).unwrap();
        g.remove_vertex(b).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loop_respects_capability() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::directed().simple());
        let a = g.add_vertex();
        assert!(g.add_edge(a, a).is_err());
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let a = g.add_vertex();
        let b = g.add_vertex();
        let e = g.add_edge(a, b).unwrap();
        assert_eq!(g.out_edges(a), vec![e]);
        assert_eq!(g.out_edges(b), vec![e]);
        assert_eq!(g.in_edges(a), vec![e]);
    }

    #[test]
    fn self_loop_counted_once_on_linked_undirected() {
        let mut g = GraphStore::new(AdjacencyKind::Linked, Capabilities::undirected());
        let a = g.add_vertex();
        let e = g.add_edge(a, a).unwrap();
        assert_eq!(g.out_edges(a), vec![e]);
        assert_eq!(g.in_edges(a), vec![e]);
        g.remove_edge(e).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert!(g.out_edges(a).is_empty());
    }

    #[test]
    fn self_loop_counted_once_per_direction_on_linked_directed() {
        let mut g = GraphStore::new(AdjacencyKind::Linked, Capabilities::directed());
        let a = g.add_vertex();
        let e = g.add_edge(a, a).unwrap();
        assert_eq!(g.out_edges(a), vec![e]);
        assert_eq!(g.in_edges(a), vec![e]);
        g.remove_edge(e).unwrap();
        assert!(g.out_edges(a).is_empty());
        assert!(g.in_edges(a).is_empty());
    }

    #[test]
    fn array_and_linked_agree() {
        for kind in [AdjacencyKind::Array, AdjacencyKind::Linked] {
            let mut g = GraphStore::new(kind, Capabilities::directed());
            let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
            for i in 0..4 {
                g.add_edge(vs[i], vs[i + 1]).unwrap();
            }
            g.remove_vertex(vs[2]).unwrap();
            assert_eq!(g.vertex_count(), 4);
            assert_eq!(g.edge_count(), 2);
        }
    }

    #[test]
    fn cursor_peek_does_not_advance() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let e = g.add_edge(a, b).unwrap();
        let mut cursor = g.out_cursor(a);
        assert_eq!(cursor.peek(&g), Some(e));
        assert_eq!(cursor.peek(&g), Some(e));
        assert_eq!(cursor.next(&g), Some(e));
        assert_eq!(cursor.next(&g), None);
    }

    #[test]
    fn cursor_remove_during_traversal_does_not_skip_the_swapped_in_edge() {
        // A middle edge is removed mid-traversal, which swaps the tail edge
        // into its slot; stepping the cursor back by one must still visit
        // that swapped-in edge rather than skipping past it.
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b).unwrap();
        let middle = g.add_edge(a, b).unwrap();
        g.add_edge(a, b).unwrap();

        let mut cursor = g.out_cursor(a);
        let mut step_count = 0;
        let mut removed = false;
        while let Some(e) = cursor.next(&g) {
            step_count += 1;
            if !removed && e == middle {
                cursor.remove(&mut g).unwrap();
                removed = true;
            }
        }
        assert!(removed);
        // Every edge incident to `a` was visited exactly once despite the
        // mid-traversal removal: two survive removal, plus the one removed.
        assert_eq!(step_count, 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn cursor_remove_all_edges_drains_the_vertex() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let b = g.add_vertex();
        for _ in 0..4 {
            g.add_edge(a, b).unwrap();
        }
        let mut cursor = g.out_cursor(a);
        while cursor.next(&g).is_some() {
            cursor.remove(&mut g).unwrap();
        }
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree_out(a), 0);
    }

    #[test]
    fn cursor_remove_without_next_fails() {
        let mut g = directed_store();
        let a = g.add_vertex();
        let mut cursor = g.out_cursor(a);
        assert!(cursor.remove(&mut g).is_err());
    }
}
