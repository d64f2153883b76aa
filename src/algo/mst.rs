//! Minimum spanning forest (C10): round-based Borůvka. Each round, every
//! component picks its globally cheapest leaving edge; picked edges merge
//! components (deduplicating when two components pick the same edge); the
//! component count strictly drops every round until no component has a
//! leaving edge left.

use crate::id::{EdgeIndex, VertexIndex};
use crate::store::GraphStore;
use crate::unionfind::UnionFind;
use crate::weight::WeightFn;

/// The forest produced by [`boruvka`]: one spanning tree per connected
/// component of the input graph.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    edges: Vec<EdgeIndex>,
}

impl SpanningForest {
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    pub fn weight(&self, w: &dyn WeightFn) -> f64 {
        self.edges.iter().map(|&e| w.cost(e)).sum()
    }
}

/// Borůvka's algorithm. `store` is treated as undirected for the purpose of
/// "edges leaving a component" — both endpoints of every edge are examined
/// regardless of the graph's directedness, since a minimum spanning forest is
/// only meaningful on the underlying undirected graph.
pub fn boruvka(store: &GraphStore, weight: &dyn WeightFn) -> SpanningForest {
    let n = store.vertex_count();
    let mut uf = UnionFind::new(n);
    let mut mst_edges = Vec::new();

    loop {
        // cheapest[c] = (weight, edge, other_endpoint_component) for the
        // component currently rooted at `c`.
        let mut cheapest: Vec<Option<(f64, usize)>> = vec![None; n];

        for e in store.edge_indices() {
            let s = store.edge_source(e).index();
            let t = store.edge_target(e).index();
            let cs = uf.find_immutable(s);
            let ct = uf.find_immutable(t);
            if cs == ct {
                continue;
            }
            let w = weight.cost(e);
            for &c in &[cs, ct] {
                let better = match cheapest[c] {
                    None => true,
                    Some((bw, be)) => w < bw || (w == bw && e.index() < be),
                };
                if better {
                    cheapest[c] = Some((w, e.index()));
                }
            }
        }

        let mut merged_any = false;
        let mut seen_this_round: Vec<usize> = Vec::new();
        for c in 0..n {
            if uf.find_immutable(c) != c {
                continue;
            }
            if let Some((_, e_idx)) = cheapest[c] {
                let e = EdgeIndex(e_idx);
                let s = store.edge_source(e).index();
                let t = store.edge_target(e).index();
                if uf.union(s, t) {
                    if !seen_this_round.contains(&e_idx) {
                        mst_edges.push(e);
                        seen_this_round.push(e_idx);
                    }
                    merged_any = true;
                }
            }
        }

        if !merged_any {
            break;
        }
    }

    SpanningForest { edges: mst_edges }
}

/// Bounded-rounds Borůvka: stop after `max_rounds` merge rounds (or sooner,
/// if the forest is already complete) and additionally return the quotient
/// graph obtained by contracting every surviving component to a single
/// vertex — a building block for MST algorithms layered on top of Borůvka.
pub fn boruvka_bounded(
    store: &GraphStore,
    weight: &dyn WeightFn,
    max_rounds: usize,
) -> (SpanningForest, Vec<VertexIndex>) {
    let n = store.vertex_count();
    let mut uf = UnionFind::new(n);
    let mut mst_edges = Vec::new();

    for _ in 0..max_rounds {
        let mut cheapest: Vec<Option<(f64, usize)>> = vec![None; n];
        for e in store.edge_indices() {
            let s = store.edge_source(e).index();
            let t = store.edge_target(e).index();
            let cs = uf.find_immutable(s);
            let ct = uf.find_immutable(t);
            if cs == ct {
                continue;
            }
            let w = weight.cost(e);
            for &c in &[cs, ct] {
                let better = match cheapest[c] {
                    None => true,
                    Some((bw, be)) => w < bw || (w == bw && e.index() < be),
                };
                if better {
                    cheapest[c] = Some((w, e.index()));
                }
            }
        }

        let mut merged_any = false;
        let mut seen_this_round: Vec<usize> = Vec::new();
        for c in 0..n {
            if uf.find_immutable(c) != c {
                continue;
            }
            if let Some((_, e_idx)) = cheapest[c] {
                let e = EdgeIndex(e_idx);
                let s = store.edge_source(e).index();
                let t = store.edge_target(e).index();
                if uf.union(s, t) {
                    if !seen_this_round.contains(&e_idx) {
                        mst_edges.push(e);
                        seen_this_round.push(e_idx);
                    }
                    merged_any = true;
                }
            }
        }

        if !merged_any {
            break;
        }
    }

    // Relabel surviving components to a contiguous `[0, k)` range, in
    // increasing order of their old representative index.
    let mut relabeled = vec![usize::MAX; n];
    let mut next_label = 0usize;
    for v in 0..n {
        let root = uf.find_immutable(v);
        if relabeled[root] == usize::MAX {
            relabeled[root] = next_label;
            next_label += 1;
        }
    }
    let quotient: Vec<VertexIndex> = (0..n)
        .map(|v| VertexIndex(relabeled[uf.find_immutable(v)]))
        .collect();

    (SpanningForest { edges: mst_edges }, quotient)
}
