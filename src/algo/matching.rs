//! Maximum matching (C11): Hopcroft-Karp for bipartite graphs and Gabow's
//! 1976 algorithm for general graphs. Both converge on the same result type;
//! the difference is entirely in how each finds augmenting paths.

use std::collections::VecDeque;

use crate::error::{GraphError, GraphResult};
use crate::id::{EdgeIndex, VertexIndex};
use crate::store::GraphStore;
use crate::weight::BoolWeightColumn;

/// A matching: a set of vertex-disjoint edges.
#[derive(Debug, Clone)]
pub struct Matching {
    mate: Vec<Option<usize>>,
    edge: Vec<Option<EdgeIndex>>,
}

impl Matching {
    pub fn is_vertex_matched(&self, v: VertexIndex) -> bool {
        self.mate[v.index()].is_some()
    }

    pub fn matched_edge(&self, v: VertexIndex) -> Option<EdgeIndex> {
        self.edge[v.index()]
    }

    /// The matched edges, one entry each (not once per endpoint), in the
    /// order their owning vertex was first visited.
    pub fn edges(&self) -> Vec<EdgeIndex> {
        let mut seen: indexmap::IndexSet<usize> = indexmap::IndexSet::new();
        for v in 0..self.mate.len() {
            if let (Some(_), Some(e)) = (self.mate[v], self.edge[v]) {
                seen.insert(e.index());
            }
        }
        seen.into_iter().map(EdgeIndex).collect()
    }

    /// Whether every vertex is matched — computed generically as
    /// `2 * edges().len() == vertex_count`, not via a dedicated search.
    pub fn is_perfect(&self) -> bool {
        2 * self.edges().len() == self.mate.len()
    }
}

fn edge_between(store: &GraphStore, a: usize, b: usize) -> Option<EdgeIndex> {
    store
        .out_edges(VertexIndex(a))
        .into_iter()
        .find(|&e| store.edge_endpoint_other(e, VertexIndex(a)).index() == b)
}

/// Hopcroft-Karp maximum bipartite matching. `side` is a two-coloring of the
/// vertices (`true` = left side); every edge must cross sides, or this fails
/// with [`GraphError::NotBipartite`].
pub fn hopcroft_karp(store: &GraphStore, side: &BoolWeightColumn) -> GraphResult<Matching> {
    let n = store.vertex_count();
    for e in store.edge_indices() {
        let s = store.edge_source(e).index();
        let t = store.edge_target(e).index();
        if side.get(s) == side.get(t) {
            return Err(GraphError::NotBipartite);
        }
    }

    const INF: usize = usize::MAX;
    let mut mate: Vec<Option<usize>> = vec![None; n];
    let mut match_edge: Vec<Option<EdgeIndex>> = vec![None; n];

    loop {
        let mut dist = vec![INF; n];
        let mut queue = VecDeque::new();
        for v in 0..n {
            if side.get(v) && mate[v].is_none() {
                dist[v] = 0;
                queue.push_back(v);
            }
        }
        let mut found_unmatched_right = false;
        while let Some(u) = queue.pop_front() {
            for e in store.out_edges(VertexIndex(u)) {
                let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
                match mate[v] {
                    None => found_unmatched_right = true,
                    Some(w) => {
                        if dist[w] == INF {
                            dist[w] = dist[u] + 1;
                            queue.push_back(w);
                        }
                    }
                }
            }
        }
        if !found_unmatched_right {
            break;
        }

        fn dfs_augment(
            store: &GraphStore,
            dist: &mut [usize],
            mate: &mut [Option<usize>],
            match_edge: &mut [Option<EdgeIndex>],
            u: usize,
        ) -> bool {
            for e in store.out_edges(VertexIndex(u)) {
                let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
                let proceed = match mate[v] {
                    None => true,
                    Some(w) => {
                        dist[w] == dist[u] + 1 && dfs_augment(store, dist, mate, match_edge, w)
                    }
                };
                if proceed {
                    mate[u] = Some(v);
                    mate[v] = Some(u);
                    match_edge[u] = Some(e);
                    match_edge[v] = Some(e);
                    return true;
                }
            }
            dist[u] = usize::MAX;
            false
        }

        for u in 0..n {
            if side.get(u) && mate[u].is_none() {
                dfs_augment(store, &mut dist, &mut mate, &mut match_edge, u);
            }
        }
    }

    Ok(Matching {
        mate,
        edge: match_edge,
    })
}

/// Gabow's 1976 algorithm for maximum cardinality matching in a general
/// (not-necessarily-bipartite) graph: one BFS per attempted augmentation,
/// contracting odd cycles ("blossoms") into their base vertex via the
/// standard `base[]`/lowest-common-ancestor reconstruction so the alternating
/// tree stays a tree even across odd cycles. Runs until a full BFS sweep
/// finds no augmenting path.
pub fn gabow_matching(store: &GraphStore) -> GraphResult<Matching> {
    if store.capabilities().directed {
        return Err(GraphError::CapabilityMismatch(
            "maximum matching requires an undirected graph",
        ));
    }
    let n = store.vertex_count();
    let adjacency: Vec<Vec<usize>> = (0..n)
        .map(|v| {
            store
                .out_edges(VertexIndex(v))
                .into_iter()
                .map(|e| store.edge_endpoint_other(e, VertexIndex(v)).index())
                .filter(|&w| w != v)
                .collect()
        })
        .collect();

    let mut mate: Vec<Option<usize>> = vec![None; n];

    for root in 0..n {
        if mate[root].is_some() {
            continue;
        }
        if let Some(found) = find_augmenting_path(&adjacency, &mate, root) {
            apply_augmenting_path(&mut mate, found);
        }
    }

    let match_edge: Vec<Option<EdgeIndex>> = (0..n)
        .map(|v| mate[v].and_then(|w| edge_between(store, v, w)))
        .collect();

    Ok(Matching {
        mate,
        edge: match_edge,
    })
}

/// One vertex of the augmenting path found, together with the parent array
/// needed to flip matches along it back to the root.
struct AugmentingPath {
    terminal: usize,
    parent: Vec<Option<usize>>,
}

fn find_augmenting_path(
    adjacency: &[Vec<usize>],
    mate: &[Option<usize>],
    root: usize,
) -> Option<AugmentingPath> {
    let n = adjacency.len();
    let mut used = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut base: Vec<usize> = (0..n).collect();

    used[root] = true;
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(v) = queue.pop_front() {
        for &to in &adjacency[v] {
            if base[v] == base[to] || mate[v] == Some(to) {
                continue;
            }
            let to_in_tree = mate[to].map(|m| parent[m].is_some()).unwrap_or(false);
            if to == root || to_in_tree {
                let curbase = lowest_common_ancestor(v, to, &base, &parent, mate);
                let mut in_blossom = vec![false; n];
                mark_blossom_path(v, curbase, to, &mut in_blossom, &mut base, &mut parent, mate);
                mark_blossom_path(to, curbase, v, &mut in_blossom, &mut base, &mut parent, mate);
                for i in 0..n {
                    if in_blossom[base[i]] {
                        base[i] = curbase;
                        if !used[i] {
                            used[i] = true;
                            queue.push_back(i);
                        }
                    }
                }
            } else if parent[to].is_none() {
                parent[to] = Some(v);
                if mate[to].is_none() {
                    return Some(AugmentingPath { terminal: to, parent });
                }
                let w = mate[to].unwrap();
                used[w] = true;
                queue.push_back(w);
            }
        }
    }
    None
}

fn lowest_common_ancestor(
    a: usize,
    b: usize,
    base: &[usize],
    parent: &[Option<usize>],
    mate: &[Option<usize>],
) -> usize {
    let n = base.len();
    let mut marked = vec![false; n];
    let mut x = a;
    loop {
        x = base[x];
        marked[x] = true;
        match mate[x] {
            None => break,
            Some(mx) => x = parent[mx].expect("matched tree vertex always has a parent"),
        }
    }
    let mut y = b;
    loop {
        y = base[y];
        if marked[y] {
            return y;
        }
        y = parent[mate[y].expect("reached an unmatched vertex without finding the ancestor")]
            .expect("matched tree vertex always has a parent");
    }
}

/// Walk from `v` up to the blossom base `target_base`, marking every vertex
/// visited (by its current base) as part of the blossom and redirecting its
/// parent through `child` so the alternating structure survives contraction.
fn mark_blossom_path(
    mut v: usize,
    target_base: usize,
    mut child: usize,
    in_blossom: &mut [bool],
    base: &mut [usize],
    parent: &mut [Option<usize>],
    mate: &[Option<usize>],
) {
    while base[v] != target_base {
        in_blossom[base[v]] = true;
        in_blossom[base[mate[v].unwrap()]] = true;
        parent[v] = Some(child);
        child = mate[v].unwrap();
        v = parent[mate[v].unwrap()].unwrap();
    }
}

fn apply_augmenting_path(mate: &mut [Option<usize>], path: AugmentingPath) {
    let mut u = Some(path.terminal);
    while let Some(uu) = u {
        let pv = path.parent[uu].unwrap();
        let next = mate[pv];
        mate[uu] = Some(pv);
        mate[pv] = Some(uu);
        u = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::LifecycleListener;
    use crate::store::{AdjacencyKind, Capabilities};

    #[test]
    fn hopcroft_karp_finds_perfect_matching() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let vs: Vec<_> = (0..6).map(|_| g.add_vertex()).collect();
        let mut side = BoolWeightColumn::new();
        for _ in 0..6 {
            side.on_add();
        }
        for &l in &vs[0..3] {
            side.set(l.index(), true);
        }
        let pairs = [(0, 3), (0, 4), (1, 3), (2, 4), (2, 5)];
        for &(a, b) in &pairs {
            g.add_edge(vs[a], vs[b]).unwrap();
        }

        let matching = hopcroft_karp(&g, &side).unwrap();
        assert!(matching.is_perfect());
        for v in &vs {
            assert!(matching.is_vertex_matched(*v));
        }
    }

    #[test]
    fn hopcroft_karp_rejects_non_bipartite_edges() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let vs: Vec<_> = (0..2).map(|_| g.add_vertex()).collect();
        let mut side = BoolWeightColumn::new();
        side.on_add();
        side.on_add();
        side.set(0, true);
        side.set(1, true);
        g.add_edge(vs[0], vs[1]).unwrap();
        assert!(hopcroft_karp(&g, &side).is_err());
    }

    #[test]
    fn gabow_matches_a_triangle_leaving_one_vertex_unmatched() {
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let vs: Vec<_> = (0..3).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]).unwrap();
        g.add_edge(vs[1], vs[2]).unwrap();
        g.add_edge(vs[2], vs[0]).unwrap();

        let matching = gabow_matching(&g).unwrap();
        assert_eq!(matching.edges().len(), 1);
    }

    #[test]
    fn gabow_matches_across_an_odd_blossom() {
        // A 5-cycle (0-1-2-3-4-0) with a pendant on 0: the classic blossom
        // stress case. Maximum matching has size 2.
        let mut g = GraphStore::new(AdjacencyKind::Array, Capabilities::undirected());
        let vs: Vec<_> = (0..6).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]).unwrap();
        g.add_edge(vs[1], vs[2]).unwrap();
        g.add_edge(vs[2], vs[3]).unwrap();
        g.add_edge(vs[3], vs[4]).unwrap();
        g.add_edge(vs[4], vs[0]).unwrap();
        g.add_edge(vs[0], vs[5]).unwrap();

        let matching = gabow_matching(&g).unwrap();
        assert_eq!(matching.edges().len(), 3);
        let mut vertex_count = std::collections::HashSet::new();
        for e in matching.edges() {
            assert!(vertex_count.insert(g.edge_source(e).index()));
            assert!(vertex_count.insert(g.edge_target(e).index()));
        }
    }
}
