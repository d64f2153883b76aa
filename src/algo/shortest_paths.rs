//! Single-source shortest paths (C8): Dijkstra (float and integer
//! specializations), linear-time SSSP on a DAG, and Dial's bucket queue
//! SSSP for bounded non-negative integer weights.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::error::{GraphError, GraphResult};
use crate::id::{EdgeIndex, VertexIndex};
use crate::store::GraphStore;
use crate::support::heap::{DecreaseKeyHeap, DecreaseKeyHeapU64};
use crate::support::linked_list::BucketList;
use crate::weight::{IntWeightFn, WeightFn};

fn check_source(store: &GraphStore, source: VertexIndex) -> GraphResult<()> {
    if source.index() >= store.vertex_count() {
        Err(GraphError::IndexOutOfRange(source.index()))
    } else {
        Ok(())
    }
}

/// A shortest-path tree rooted at one source, `f64`-weighted. `distance(v)`
/// is `f64::INFINITY` for a vertex the source cannot reach.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexIndex,
    distance: Vec<f64>,
    backtrack: Vec<Option<EdgeIndex>>,
}

impl ShortestPathTree {
    pub fn distance(&self, v: VertexIndex) -> f64 {
        self.distance[v.index()]
    }

    /// The edge into `v` on the shortest-path tree, or `None` for the source
    /// itself or an unreached vertex.
    pub fn backtrack(&self, v: VertexIndex) -> Option<EdgeIndex> {
        self.backtrack[v.index()]
    }

    /// The edge sequence from the source to `v`, or `None` if `v` is
    /// unreachable.
    pub fn path(&self, store: &GraphStore, v: VertexIndex) -> Option<Vec<EdgeIndex>> {
        if self.distance[v.index()].is_infinite() {
            return None;
        }
        let mut edges = Vec::new();
        let mut cur = v;
        while cur != self.source {
            let e = self.backtrack[cur.index()]?;
            edges.push(e);
            cur = store.edge_endpoint_other(e, cur);
        }
        edges.reverse();
        Some(edges)
    }
}

/// Dijkstra's algorithm with `f64` edge weights. Fails with
/// [`GraphError::NegativeWeight`] the first time a negative weight is
/// observed during relaxation.
pub fn dijkstra(
    store: &GraphStore,
    source: VertexIndex,
    weight: &dyn WeightFn,
) -> GraphResult<ShortestPathTree> {
    check_source(store, source)?;
    let n = store.vertex_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut backtrack = vec![None; n];
    distance[source.index()] = 0.0;

    let mut heap = DecreaseKeyHeap::with_capacity(n);
    heap.push_or_decrease(source.index(), 0.0);
    let mut finalized = FixedBitSet::with_capacity(n);

    while let Some((u, du)) = heap.pop_min() {
        if finalized.contains(u) {
            continue;
        }
        finalized.insert(u);
        for e in store.out_edges(VertexIndex(u)) {
            let w = weight.cost(e);
            if w < 0.0 {
                return Err(GraphError::NegativeWeight);
            }
            let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
            if finalized.contains(v) {
                continue;
            }
            let candidate = du + w;
            if candidate < distance[v] {
                distance[v] = candidate;
                backtrack[v] = Some(e);
                heap.push_or_decrease(v, candidate);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distance,
        backtrack,
    })
}

/// A shortest-path tree rooted at one source, `u64`-weighted: the integer
/// specialization shared by [`dijkstra_u64`] and [`dial_sssp`].
#[derive(Debug, Clone)]
pub struct ShortestPathTreeU64 {
    source: VertexIndex,
    distance: Vec<Option<u64>>,
    backtrack: Vec<Option<EdgeIndex>>,
}

impl ShortestPathTreeU64 {
    pub fn distance(&self, v: VertexIndex) -> Option<u64> {
        self.distance[v.index()]
    }

    pub fn backtrack(&self, v: VertexIndex) -> Option<EdgeIndex> {
        self.backtrack[v.index()]
    }

    pub fn path(&self, store: &GraphStore, v: VertexIndex) -> Option<Vec<EdgeIndex>> {
        self.distance[v.index()]?;
        let mut edges = Vec::new();
        let mut cur = v;
        while cur != self.source {
            let e = self.backtrack[cur.index()]?;
            edges.push(e);
            cur = store.edge_endpoint_other(e, cur);
        }
        edges.reverse();
        Some(edges)
    }
}

/// Dijkstra with `u64` edge weights, avoiding the boxing and rounding a
/// shared generic over [`WeightFn`] would otherwise impose.
pub fn dijkstra_u64(
    store: &GraphStore,
    source: VertexIndex,
    weight: &dyn IntWeightFn,
) -> GraphResult<ShortestPathTreeU64> {
    check_source(store, source)?;
    let n = store.vertex_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut backtrack = vec![None; n];
    distance[source.index()] = Some(0);

    let mut heap = DecreaseKeyHeapU64::with_capacity(n);
    heap.push_or_decrease(source.index(), 0);
    let mut finalized = FixedBitSet::with_capacity(n);

    while let Some((u, du)) = heap.pop_min() {
        if finalized.contains(u) {
            continue;
        }
        finalized.insert(u);
        for e in store.out_edges(VertexIndex(u)) {
            let w = weight.cost(e);
            let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
            if finalized.contains(v) {
                continue;
            }
            let candidate = du + w;
            if distance[v].is_none() || candidate < distance[v].unwrap() {
                distance[v] = Some(candidate);
                backtrack[v] = Some(e);
                heap.push_or_decrease(v, candidate);
            }
        }
    }

    Ok(ShortestPathTreeU64 {
        source,
        distance,
        backtrack,
    })
}

/// `Some(order)` if `store` is a DAG (a valid topological order of every
/// vertex), `None` if a cycle makes no such order exist. Kahn's algorithm
/// over `in_edges`/`out_edges`, a small private collaborator rather than a
/// public topological-sort module.
fn topological_order(store: &GraphStore) -> Option<Vec<VertexIndex>> {
    let n = store.vertex_count();
    let mut indegree: Vec<usize> = (0..n).map(|v| store.degree_in(VertexIndex(v))).collect();
    let mut queue: VecDeque<VertexIndex> = (0..n)
        .filter(|&v| indegree[v] == 0)
        .map(VertexIndex)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for e in store.out_edges(u) {
            let v = store.edge_endpoint_other(e, u).index();
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(VertexIndex(v));
            }
        }
    }

    if order.len() == n {
        Some(order)
    } else {
        None
    }
}

/// Single-source shortest paths on a DAG in `O(V + E)`: relax every outgoing
/// edge of each vertex in topological order. Fails with
/// [`GraphError::NotDag`] if the graph has a cycle.
pub fn dag_sssp(
    store: &GraphStore,
    source: VertexIndex,
    weight: &dyn WeightFn,
) -> GraphResult<ShortestPathTree> {
    check_source(store, source)?;
    let order = topological_order(store).ok_or(GraphError::NotDag)?;
    let n = store.vertex_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut backtrack = vec![None; n];
    distance[source.index()] = 0.0;

    for u in order {
        let du = distance[u.index()];
        if du.is_infinite() {
            continue;
        }
        for e in store.out_edges(u) {
            let w = weight.cost(e);
            if w < 0.0 {
                return Err(GraphError::NegativeWeight);
            }
            let v = store.edge_endpoint_other(e, u).index();
            let candidate = du + w;
            if candidate < distance[v] {
                distance[v] = candidate;
                backtrack[v] = Some(e);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distance,
        backtrack,
    })
}

/// Dial's bucket-queue SSSP: non-negative `u64` weights only, `O(V + E + D)`
/// where `D` is the largest finite distance. The bucket index doubles as the
/// tentative distance, so no separate decrease-key heap is needed — moving a
/// vertex to a lower bucket via [`BucketList::insert`] *is* the decrease-key.
pub fn dial_sssp(
    store: &GraphStore,
    source: VertexIndex,
    weight: &dyn IntWeightFn,
) -> GraphResult<ShortestPathTreeU64> {
    check_source(store, source)?;
    let n = store.vertex_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut backtrack = vec![None; n];
    distance[source.index()] = Some(0);

    let mut buckets = BucketList::new(n);
    buckets.insert(0, source.index());
    let mut scan = 0usize;
    let mut max_bucket = 0usize;

    loop {
        while scan <= max_bucket && buckets.is_bucket_empty(scan) {
            scan += 1;
        }
        if scan > max_bucket {
            break;
        }
        let u = match buckets.pop_front(scan) {
            Some(u) => u,
            None => {
                scan += 1;
                continue;
            }
        };
        let du = distance[u].unwrap();
        for e in store.out_edges(VertexIndex(u)) {
            let w = weight.cost(e);
            let v = store.edge_endpoint_other(e, VertexIndex(u)).index();
            let candidate = du + w;
            if distance[v].is_none() || candidate < distance[v].unwrap() {
                distance[v] = Some(candidate);
                backtrack[v] = Some(e);
                let b = candidate as usize;
                buckets.insert(b, v);
                if b > max_bucket {
                    max_bucket = b;
                }
            }
        }
    }

    Ok(ShortestPathTreeU64 {
        source,
        distance,
        backtrack,
    })
}
