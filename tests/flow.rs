//! Integration coverage for `algo::flow`: the spec's push-relabel scenario,
//! plus the feasibility/optimality properties §8 calls out, checked against
//! every active-vertex strategy.

use densegraph::algo::flow::{
    max_flow_fifo, max_flow_highest_label, max_flow_lowest_label, max_flow_relabel_to_front,
    FlowNetwork,
};
use densegraph::{AdjacencyKind, Capabilities, Graph};

/// s -> a (3), s -> b (2), a -> b (1), a -> t (2), b -> t (3). Max flow 5.
fn scenario() -> (Graph, FlowNetwork<f64>, densegraph::VertexId, densegraph::VertexId) {
    let mut g = Graph::new(AdjacencyKind::Array, Capabilities::directed());
    let s = g.add_vertex();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let t = g.add_vertex();
    let mut caps = Vec::new();
    for &(u, v, c) in &[(s, a, 3.0), (s, b, 2.0), (a, b, 1.0), (a, t, 2.0), (b, t, 3.0)] {
        let e = g.add_edge(u, v).unwrap();
        caps.push((e, c));
    }
    let mut network = FlowNetwork::new(caps.len());
    for (e, c) in caps {
        network.set_capacity(g.edge_index(e).unwrap(), c);
    }
    (g, network, s, t)
}

#[test]
fn push_relabel_fifo_matches_the_spec_scenario() {
    let (g, mut network, s, t) = scenario();
    let source = g.vertex_index(s).unwrap();
    let sink = g.vertex_index(t).unwrap();
    let result = max_flow_fifo(g.store(), &mut network, source, sink);
    assert!((result.value() - 5.0).abs() < 1e-6);
}

#[test]
fn every_active_vertex_strategy_agrees_on_the_scenario() {
    let (g1, mut n1, s, t) = scenario();
    let v_fifo = max_flow_fifo(g1.store(), &mut n1, g1.vertex_index(s).unwrap(), g1.vertex_index(t).unwrap()).value();

    let (g2, mut n2, s, t) = scenario();
    let v_highest = max_flow_highest_label(g2.store(), &mut n2, g2.vertex_index(s).unwrap(), g2.vertex_index(t).unwrap()).value();

    let (g3, mut n3, s, t) = scenario();
    let v_lowest = max_flow_lowest_label(g3.store(), &mut n3, g3.vertex_index(s).unwrap(), g3.vertex_index(t).unwrap()).value();

    let (g4, mut n4, s, t) = scenario();
    let v_rtf = max_flow_relabel_to_front(g4.store(), &mut n4, g4.vertex_index(s).unwrap(), g4.vertex_index(t).unwrap()).value();

    for v in [v_fifo, v_highest, v_lowest, v_rtf] {
        assert!((v - 5.0).abs() < 1e-6);
    }
}

#[test]
fn flow_is_feasible_and_cut_optimal() {
    let (g, mut network, s, t) = scenario();
    let source = g.vertex_index(s).unwrap();
    let sink = g.vertex_index(t).unwrap();
    let result = max_flow_fifo(g.store(), &mut network, source, sink);

    for v in g.store().vertices() {
        if v == source || v == sink {
            continue;
        }
        let inflow: f64 = g.store().in_edges(v).iter().map(|&e| network.flow(e)).sum();
        let outflow: f64 = g.store().out_edges(v).iter().map(|&e| network.flow(e)).sum();
        assert!((inflow - outflow).abs() < 1e-6);
    }

    for e in g.store().edge_indices() {
        assert!(network.flow(e) >= -1e-6);
        assert!(network.flow(e) <= network.capacity(e) + 1e-6);
    }

    // Minimum cut is (source-side, sink-side); the source side must not
    // contain the sink, confirming no augmenting path remains.
    assert!(result.is_source_side(source));
    assert!(!result.is_source_side(sink));
}
