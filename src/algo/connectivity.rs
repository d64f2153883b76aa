//! Connectivity algorithms (C7): iterative Tarjan strongly connected
//! components and iterative Hopcroft-Tarjan biconnected components. Both
//! drive an explicit stack of edge iterators rather than recursion, the same
//! shape [`crate::traversal::Dfs`] uses, but each carries extra per-depth
//! bookkeeping that a general-purpose traversal has no business owning.

use std::collections::HashSet;

use crate::id::{EdgeIndex, VertexIndex};
use crate::store::GraphStore;

/// The vertex sets of a connected-component partition, shared by both SCC and
/// BCC results. For strongly connected components every vertex belongs to
/// exactly one component; for biconnected components a cut vertex belongs to
/// every component it bridges.
#[derive(Debug, Clone)]
pub struct ConnectivityResult {
    components: Vec<Vec<VertexIndex>>,
    vertex_components: Vec<Vec<usize>>,
}

impl ConnectivityResult {
    fn new(vertex_count: usize) -> Self {
        ConnectivityResult {
            components: Vec::new(),
            vertex_components: vec![Vec::new(); vertex_count],
        }
    }

    fn push_component(&mut self, members: Vec<VertexIndex>) -> usize {
        let id = self.components.len();
        for &v in &members {
            self.vertex_components[v.index()].push(id);
        }
        self.components.push(members);
        id
    }

    pub fn number_of_ccs(&self) -> usize {
        self.components.len()
    }

    pub fn cc_vertices(&self, i: usize) -> &[VertexIndex] {
        &self.components[i]
    }

    /// The component index of `v`. Meaningful when every vertex belongs to at
    /// most one component (strongly connected components); for biconnected
    /// components a cut vertex may belong to several, and this returns the
    /// first one recorded. Use [`Self::vertex_ccs`] when that distinction
    /// matters.
    pub fn vertex_cc(&self, v: VertexIndex) -> usize {
        self.vertex_components[v.index()][0]
    }

    /// Every component `v` belongs to, in discovery order.
    pub fn vertex_ccs(&self, v: VertexIndex) -> &[usize] {
        &self.vertex_components[v.index()]
    }

    /// Edges with both endpoints in component `i`. Computed lazily by
    /// scanning the edge set once, rather than carried in the component
    /// itself, matching spec's description of BCC edge sets.
    pub fn cc_edges(&self, store: &GraphStore, i: usize) -> Vec<EdgeIndex> {
        let members: HashSet<usize> = self.components[i].iter().map(|v| v.index()).collect();
        store
            .edge_indices()
            .filter(|&e| {
                let s = store.edge_source(e).index();
                let t = store.edge_target(e).index();
                members.contains(&s) && members.contains(&t)
            })
            .collect()
    }
}

/// Strongly connected components of a directed graph, via the two-stack
/// iterative variant of Tarjan's algorithm: `s_stack` holds every discovered
/// vertex not yet assigned to a component, `p_stack` holds candidates for the
/// root of the component currently being built. `preorder[v]` is `v`'s
/// discovery order; a vertex is "assigned" once it appears in some finished
/// component.
pub fn tarjan_scc(store: &GraphStore) -> ConnectivityResult {
    let n = store.vertex_count();
    const UNVISITED: usize = usize::MAX;
    let mut preorder = vec![UNVISITED; n];
    let mut assigned = vec![false; n];
    let mut s_stack: Vec<usize> = Vec::new();
    let mut p_stack: Vec<usize> = Vec::new();
    let mut next_preorder = 0usize;
    let mut result = ConnectivityResult::new(n);

    let mut call_stack: Vec<(usize, std::vec::IntoIter<EdgeIndex>)> = Vec::new();

    for start in 0..n {
        if preorder[start] != UNVISITED {
            continue;
        }
        preorder[start] = next_preorder;
        next_preorder += 1;
        s_stack.push(start);
        p_stack.push(start);
        call_stack.push((start, store.out_edges(VertexIndex(start)).into_iter()));

        while let Some((u, _)) = call_stack.last() {
            let u = *u;
            let next_edge = call_stack.last_mut().unwrap().1.next();
            match next_edge {
                Some(e) => {
                    let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
                    if preorder[v] == UNVISITED {
                        preorder[v] = next_preorder;
                        next_preorder += 1;
                        s_stack.push(v);
                        p_stack.push(v);
                        call_stack.push((v, store.out_edges(VertexIndex(v)).into_iter()));
                    } else if !assigned[v] {
                        while preorder[*p_stack.last().unwrap()] > preorder[v] {
                            p_stack.pop();
                        }
                    }
                }
                None => {
                    call_stack.pop();
                    if *p_stack.last().unwrap() == u {
                        p_stack.pop();
                        let mut members = Vec::new();
                        loop {
                            let w = s_stack.pop().unwrap();
                            assigned[w] = true;
                            members.push(VertexIndex(w));
                            if w == u {
                                break;
                            }
                        }
                        result.push_component(members);
                    }
                }
            }
        }
    }

    result
}

/// Biconnected components of an undirected graph via iterative Hopcroft-
/// Tarjan: a DFS tree with `depth`/`low` per vertex and an explicit stack of
/// the edges traversed so far. Leaving a child `c` of `u` with
/// `low[c] >= depth[u]` means `u` is a cut vertex (or the DFS root) isolating
/// `c`'s subtree; the edges back to the tree edge `(u,c)` are popped off as
/// one component. Requires an undirected graph capability.
pub fn hopcroft_tarjan_bcc(store: &GraphStore) -> crate::error::GraphResult<ConnectivityResult> {
    if store.capabilities().directed {
        return Err(crate::error::GraphError::CapabilityMismatch(
            "biconnected components require an undirected graph",
        ));
    }
    let n = store.vertex_count();
    let mut depth: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![usize::MAX; n];
    let mut parent_edge: Vec<Option<EdgeIndex>> = vec![None; n];
    let mut edge_stack: Vec<EdgeIndex> = Vec::new();
    let mut timer = 0usize;
    let mut result = ConnectivityResult::new(n);

    let mut call_stack: Vec<(usize, std::vec::IntoIter<EdgeIndex>)> = Vec::new();

    for start in 0..n {
        if depth[start].is_some() {
            continue;
        }
        depth[start] = Some(timer);
        low[start] = timer;
        timer += 1;
        call_stack.push((start, store.out_edges(VertexIndex(start)).into_iter()));

        while let Some((u, _)) = call_stack.last() {
            let u = *u;
            let next_edge = call_stack.last_mut().unwrap().1.next();
            match next_edge {
                Some(e) => {
                    if Some(e) == parent_edge[u] {
                        continue;
                    }
                    let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
                    match depth[v] {
                        None => {
                            edge_stack.push(e);
                            depth[v] = Some(timer);
                            low[v] = timer;
                            timer += 1;
                            parent_edge[v] = Some(e);
                            call_stack.push((v, store.out_edges(VertexIndex(v)).into_iter()));
                        }
                        Some(dv) if dv < depth[u].unwrap() => {
                            edge_stack.push(e);
                            low[u] = low[u].min(dv);
                        }
                        Some(_) => {
                            // v already finished and strictly deeper than u:
                            // only possible via a second parallel edge to the
                            // same tree edge's target, already covered by it.
                        }
                    }
                }
                None => {
                    call_stack.pop();
                    if let Some(&(pu, _)) = call_stack.last() {
                        if low[u] >= depth[pu].unwrap() {
                            let pe = parent_edge[u].unwrap();
                            let mut members: HashSet<usize> = HashSet::new();
                            loop {
                                let popped = edge_stack.pop().unwrap();
                                members.insert(store.edge_source(popped).index());
                                members.insert(store.edge_target(popped).index());
                                if popped == pe {
                                    break;
                                }
                            }
                            let mut vertices: Vec<VertexIndex> =
                                members.into_iter().map(VertexIndex).collect();
                            vertices.sort_by_key(|v| v.index());
                            result.push_component(vertices);
                        } else {
                            low[pu] = low[pu].min(low[u]);
                        }
                    }
                }
            }
        }
    }

    // Isolated vertices (no incident edges) form a trivial component of their
    // own; the edge-driven sweep above never visits them.
    for v in 0..n {
        if result.vertex_components[v].is_empty() {
            result.push_component(vec![VertexIndex(v)]);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AdjacencyKind, Capabilities};

    #[test]
    fn tarjan_finds_two_components() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::directed());
        let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]).unwrap();
        g.add_edge(vs[1], vs[2]).unwrap();
        g.add_edge(vs[2], vs[0]).unwrap();
        g.add_edge(vs[1], vs[3]).unwrap();
        g.add_edge(vs[3], vs[4]).unwrap();
        g.add_edge(vs[4], vs[3]).unwrap();

        let result = tarjan_scc(&g);
        assert_eq!(result.number_of_ccs(), 2);
        let mut sizes: Vec<usize> = (0..result.number_of_ccs())
            .map(|i| result.cc_vertices(i).len())
            .collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 3]);
        assert_eq!(result.vertex_cc(vs[0]), result.vertex_cc(vs[1]));
        assert_eq!(result.vertex_cc(vs[1]), result.vertex_cc(vs[2]));
        assert_eq!(result.vertex_cc(vs[3]), result.vertex_cc(vs[4]));
        assert_ne!(result.vertex_cc(vs[0]), result.vertex_cc(vs[3]));
    }

    #[test]
    fn tarjan_single_vertex_no_edges_is_its_own_component() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::directed());
        let a = g.add_vertex();
        let result = tarjan_scc(&g);
        assert_eq!(result.number_of_ccs(), 1);
        assert_eq!(result.cc_vertices(0), &[a]);
    }

    #[test]
    fn bcc_splits_at_cut_vertex() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]).unwrap();
        g.add_edge(vs[1], vs[2]).unwrap();
        g.add_edge(vs[2], vs[0]).unwrap();
        g.add_edge(vs[2], vs[3]).unwrap();
        g.add_edge(vs[3], vs[4]).unwrap();
        g.add_edge(vs[4], vs[2]).unwrap();

        let result = hopcroft_tarjan_bcc(&g).unwrap();
        assert_eq!(result.number_of_ccs(), 2);
        let mut components: Vec<Vec<usize>> = (0..result.number_of_ccs())
            .map(|i| {
                let mut idx: Vec<usize> = result.cc_vertices(i).iter().map(|v| v.index()).collect();
                idx.sort_unstable();
                idx
            })
            .collect();
        components.sort();
        assert_eq!(components, vec![vec![0, 1, 2], vec![2, 3, 4]]);
        assert_eq!(result.vertex_ccs(vs[2]).len(), 2);
        assert_eq!(result.vertex_ccs(vs[0]).len(), 1);
    }

    #[test]
    fn bcc_rejects_directed_graphs() {
        let g = GraphStore::new(AdjacencyKind::Array, Capabilities::directed());
        assert!(hopcroft_tarjan_bcc(&g).is_err());
    }
}
