//! Integration coverage for `algo::connectivity`: the spec's SCC and BCC
//! scenarios, driven through the public `Graph` façade.

use densegraph::algo::connectivity::{hopcroft_tarjan_bcc, tarjan_scc};
use densegraph::{AdjacencyKind, Capabilities, Graph};

#[test]
fn tarjan_scc_finds_the_two_spec_components() {
    // {0,1,2} form a cycle; {3,4} form a cycle; 1 -> 3 bridges them but does
    // not merge the components since there is no way back from 3/4 to 0/1/2.
    let mut g = Graph::new(AdjacencyKind::Array, Capabilities::directed());
    let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
    for &(s, t) in &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 3)] {
        g.add_edge(vs[s], vs[t]).unwrap();
    }

    let result = tarjan_scc(g.store());
    assert_eq!(result.number_of_ccs(), 2);

    let idx = |i: usize| g.vertex_index(vs[i]).unwrap();
    assert_eq!(result.vertex_cc(idx(0)), result.vertex_cc(idx(1)));
    assert_eq!(result.vertex_cc(idx(1)), result.vertex_cc(idx(2)));
    assert_eq!(result.vertex_cc(idx(3)), result.vertex_cc(idx(4)));
    assert_ne!(result.vertex_cc(idx(0)), result.vertex_cc(idx(3)));
}

#[test]
fn hopcroft_tarjan_bcc_finds_the_two_spec_components_sharing_a_cut_vertex() {
    // {0,1,2} and {2,3,4} are each a triangle, sharing cut vertex 2.
    let mut g = Graph::new(AdjacencyKind::Array, Capabilities::undirected());
    let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
    for &(s, t) in &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)] {
        g.add_edge(vs[s], vs[t]).unwrap();
    }

    let result = hopcroft_tarjan_bcc(g.store()).unwrap();
    assert_eq!(result.number_of_ccs(), 2);

    let idx = |i: usize| g.vertex_index(vs[i]).unwrap();
    assert_eq!(result.vertex_ccs(idx(2)).len(), 2);
    assert_eq!(result.vertex_ccs(idx(0)).len(), 1);
    assert_eq!(result.vertex_ccs(idx(4)).len(), 1);
}

#[test]
fn bcc_rejects_a_directed_graph() {
    let g = Graph::new(AdjacencyKind::Array, Capabilities::directed());
    assert!(hopcroft_tarjan_bcc(g.store()).is_err());
}

#[test]
fn every_vertex_belongs_to_some_scc() {
    let mut g = Graph::new(AdjacencyKind::Array, Capabilities::directed());
    let vs: Vec<_> = (0..6).map(|_| g.add_vertex()).collect();
    for &(s, t) in &[(0, 1), (1, 0), (1, 2), (3, 4), (4, 5)] {
        g.add_edge(vs[s], vs[t]).unwrap();
    }
    let result = tarjan_scc(g.store());
    let total: usize = (0..result.number_of_ccs()).map(|i| result.cc_vertices(i).len()).sum();
    assert_eq!(total, 6);
}
