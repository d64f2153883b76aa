//! Property-style checks over small random graphs, cross-checking
//! `algo::mst`/`algo::matching`/`algo::flow` results against independent
//! reference computations rather than hand-picked scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use densegraph::algo::flow::{max_flow_fifo, FlowNetwork};
use densegraph::algo::mst::boruvka;
use densegraph::algo::matching::hopcroft_karp;
use densegraph::id::LifecycleListener;
use densegraph::unionfind::UnionFind;
use densegraph::weight::BoolWeightColumn;
use densegraph::{AdjacencyKind, Capabilities, EdgeIndex, Graph};

/// A random connected undirected weighted graph: a random spanning tree
/// (guaranteeing connectivity) plus extra random edges.
fn random_connected_graph(rng: &mut StdRng, n: usize, extra_edges: usize) -> (Graph, Vec<f64>) {
    let mut g = Graph::new(AdjacencyKind::Array, Capabilities::undirected());
    let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    let mut weights = Vec::new();

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        g.add_edge(vs[i], vs[parent]).unwrap();
        weights.push(rng.gen_range(1..100) as f64);
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            g.add_edge(vs[a], vs[b]).unwrap();
            weights.push(rng.gen_range(1..100) as f64);
        }
    }
    (g, weights)
}

/// Kruskal's algorithm, independently implemented against this crate's own
/// `UnionFind`, as a cross-check for `boruvka`'s forest weight.
fn kruskal_weight(g: &Graph, weights: &[f64]) -> f64 {
    let mut edges: Vec<(f64, EdgeIndex)> = g.store().edge_indices().map(|e| (weights[e.index()], e)).collect();
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut uf = UnionFind::new(g.vertex_count());
    let mut total = 0.0;
    for (w, e) in edges {
        let s = g.store().edge_source(e).index();
        let t = g.store().edge_target(e).index();
        if uf.union(s, t) {
            total += w;
        }
    }
    total
}

#[test]
fn boruvka_matches_kruskal_on_random_connected_graphs() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(2..12);
        let (g, weights) = random_connected_graph(&mut rng, n, n);
        let cost = |e: EdgeIndex| weights[e.index()];

        let forest = boruvka(g.store(), &cost);
        let expected = kruskal_weight(&g, &weights);

        assert_eq!(forest.edges().len(), n - 1);
        assert!((forest.weight(&cost) - expected).abs() < 1e-9, "seed {seed}");
    }
}

#[test]
fn hopcroft_karp_matching_is_vertex_disjoint_on_random_bipartite_graphs() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let left_n = rng.gen_range(1..8);
        let right_n = rng.gen_range(1..8);

        let mut g = Graph::new(AdjacencyKind::Array, Capabilities::undirected());
        let left: Vec<_> = (0..left_n).map(|_| g.add_vertex()).collect();
        let right: Vec<_> = (0..right_n).map(|_| g.add_vertex()).collect();

        let mut side = BoolWeightColumn::new();
        for _ in 0..g.vertex_count() {
            side.on_add();
        }
        for &l in &left {
            side.set(g.vertex_index(l).unwrap().index(), true);
        }

        for &l in &left {
            for &r in &right {
                if rng.gen_bool(0.4) {
                    let _ = g.add_edge(l, r);
                }
            }
        }

        let matching = hopcroft_karp(g.store(), &side).unwrap();
        let matched_vertices: Vec<usize> = matching
            .edges()
            .iter()
            .flat_map(|&e| [g.store().edge_source(e).index(), g.store().edge_target(e).index()])
            .collect();
        let mut seen = std::collections::HashSet::new();
        for v in matched_vertices {
            assert!(seen.insert(v), "seed {seed}: vertex {v} matched more than once");
        }
        assert!(matching.edges().len() <= left_n.min(right_n));
    }
}

#[test]
fn max_flow_value_never_exceeds_the_min_cut_capacity_on_random_networks() {
    for seed in 0..15u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(3..8);
        let mut g = Graph::new(AdjacencyKind::Array, Capabilities::directed());
        let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();

        let mut edges = Vec::new();
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.gen_bool(0.3) {
                    let e = g.add_edge(vs[u], vs[v]).unwrap();
                    edges.push((e, rng.gen_range(1..20) as f64));
                }
            }
        }
        let mut network = FlowNetwork::new(edges.len());
        for (e, c) in &edges {
            network.set_capacity(g.edge_index(*e).unwrap(), *c);
        }

        let source = g.vertex_index(vs[0]).unwrap();
        let sink = g.vertex_index(vs[n - 1]).unwrap();
        let result = max_flow_fifo(g.store(), &mut network, source, sink);

        // Every arc crossing from the source side to the sink side of the
        // min cut this run found must be saturated; the flow value can never
        // exceed the sum of their capacities.
        let cut_capacity: f64 = g
            .store()
            .edge_indices()
            .filter(|&e| {
                let s = g.store().edge_source(e);
                let t = g.store().edge_target(e);
                result.is_source_side(s) && !result.is_source_side(t)
            })
            .map(|e| network.capacity(e))
            .sum();
        assert!(result.value() <= cut_capacity + 1e-6, "seed {seed}");
    }
}
