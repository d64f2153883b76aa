//! Array-backed adjacency: each vertex owns a `Vec<EdgeIndex>` per direction.
//! Appending an edge is amortised O(1); removing one is O(deg) (find the
//! position, then `swap_remove`).

use crate::id::{EdgeIndex, VertexIndex};

fn remove_value(list: &mut Vec<EdgeIndex>, value: EdgeIndex) {
    if let Some(pos) = list.iter().position(|&e| e == value) {
        list.swap_remove(pos);
    }
}

fn replace_value(list: &mut Vec<EdgeIndex>, old: EdgeIndex, new: EdgeIndex) {
    if let Some(pos) = list.iter().position(|&e| e == old) {
        list[pos] = new;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArrayAdjacency {
    /// For a directed graph: edges leaving this vertex. For an undirected
    /// graph: every edge touching this vertex (the single adjacency list).
    out: Vec<Vec<EdgeIndex>>,
    /// For a directed graph: edges entering this vertex. Unused (always
    /// empty) for undirected graphs, which only populate `out`.
    incoming: Vec<Vec<EdgeIndex>>,
}

impl ArrayAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.out.len()
    }

    pub(crate) fn push_vertex(&mut self) {
        self.out.push(Vec::new());
        self.incoming.push(Vec::new());
    }

    pub(crate) fn pop_vertex(&mut self) {
        self.out.pop();
        self.incoming.pop();
    }

    pub(crate) fn swap_vertices(&mut self, i: VertexIndex, j: VertexIndex) {
        self.out.swap(i.index(), j.index());
        self.incoming.swap(i.index(), j.index());
    }

    pub(crate) fn link_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        if directed {
            self.out[source.index()].push(e);
            self.incoming[target.index()].push(e);
        } else if self_loop {
            self.out[source.index()].push(e);
        } else {
            self.out[source.index()].push(e);
            self.out[target.index()].push(e);
        }
    }

    pub(crate) fn unlink_edge(
        &mut self,
        e: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        if directed {
            remove_value(&mut self.out[source.index()], e);
            remove_value(&mut self.incoming[target.index()], e);
        } else if self_loop {
            remove_value(&mut self.out[source.index()], e);
        } else {
            remove_value(&mut self.out[source.index()], e);
            remove_value(&mut self.out[target.index()], e);
        }
    }

    pub(crate) fn relabel_edge(
        &mut self,
        old: EdgeIndex,
        new: EdgeIndex,
        source: VertexIndex,
        target: VertexIndex,
        directed: bool,
        self_loop: bool,
    ) {
        if directed {
            replace_value(&mut self.out[source.index()], old, new);
            replace_value(&mut self.incoming[target.index()], old, new);
        } else if self_loop {
            replace_value(&mut self.out[source.index()], old, new);
        } else {
            replace_value(&mut self.out[source.index()], old, new);
            replace_value(&mut self.out[target.index()], old, new);
        }
    }

    pub(crate) fn first_incident(&self, v: VertexIndex) -> Option<EdgeIndex> {
        self.out[v.index()]
            .first()
            .copied()
            .or_else(|| self.incoming[v.index()].first().copied())
    }

    pub(crate) fn out_edges(&self, v: VertexIndex, _directed: bool) -> Vec<EdgeIndex> {
        self.out[v.index()].clone()
    }

    pub(crate) fn in_edges(&self, v: VertexIndex, directed: bool) -> Vec<EdgeIndex> {
        if directed {
            self.incoming[v.index()].clone()
        } else {
            self.out[v.index()].clone()
        }
    }
}
