//! Typed, dynamically sized weight columns keyed by vertex or edge index
//! (C2). A column is registered with its owning [`crate::store::GraphStore`]
//! and is kept in lock-step with the index space it is keyed by: the store
//! calls `expand`/[`SwapListener::on_swap`]/[`LifecycleListener::on_remove`]
//! on every registered column before `add_vertex`/`add_edge`/`remove_vertex`/
//! `remove_edge` return.

use fixedbitset::FixedBitSet;

use crate::id::{LifecycleListener, SwapListener};

/// A typed column of per-vertex or per-edge data, geometrically grown.
#[derive(Debug, Clone)]
pub struct WeightColumn<T> {
    data: Vec<T>,
    default: T,
}

impl<T: Clone> WeightColumn<T> {
    pub fn new(default: T) -> Self {
        WeightColumn {
            data: Vec::new(),
            default,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    pub fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Grow the column so that `index` is valid, filling new slots with the
    /// default value. Used directly by callers that add a single element
    /// (the store calls this via the [`LifecycleListener`] impl below).
    fn expand_to(&mut self, len: usize) {
        if self.data.len() < len {
            self.data.resize(len, self.default.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Clone> SwapListener for WeightColumn<T> {
    fn on_swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}

impl<T: Clone> LifecycleListener for WeightColumn<T> {
    fn on_add(&mut self) {
        let len = self.data.len() + 1;
        self.expand_to(len);
    }

    fn on_remove(&mut self) {
        self.data.pop();
    }

    fn on_clear(&mut self) {
        self.data.clear();
    }
}

/// A denser boolean column, backed by [`FixedBitSet`], for the common case of
/// per-vertex/per-edge flags (bipartite side, visited sets exposed to
/// callers, and so on).
#[derive(Debug, Clone, Default)]
pub struct BoolWeightColumn {
    bits: FixedBitSet,
    len: usize,
}

impl BoolWeightColumn {
    pub fn new() -> Self {
        BoolWeightColumn {
            bits: FixedBitSet::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }
}

impl SwapListener for BoolWeightColumn {
    fn on_swap(&mut self, i: usize, j: usize) {
        let a = self.bits.contains(i);
        let b = self.bits.contains(j);
        self.bits.set(i, b);
        self.bits.set(j, a);
    }
}

impl LifecycleListener for BoolWeightColumn {
    fn on_add(&mut self) {
        self.len += 1;
        if self.bits.len() < self.len {
            self.bits.grow(self.len);
        }
    }

    fn on_remove(&mut self) {
        if self.len > 0 {
            self.bits.set(self.len - 1, false);
            self.len -= 1;
        }
    }

    fn on_clear(&mut self) {
        self.bits.clear();
        self.len = 0;
    }
}

/// A callable mapping an edge to a `f64` cost, used throughout `algo::*`.
/// Blanket-implemented for closures and for references to numeric weight
/// columns so the default cardinality weight (every edge costs `1.0`) and a
/// user-supplied column both satisfy the same bound.
pub trait WeightFn {
    fn cost(&self, edge: crate::id::EdgeIndex) -> f64;
}

impl<F> WeightFn for F
where
    F: Fn(crate::id::EdgeIndex) -> f64,
{
    fn cost(&self, edge: crate::id::EdgeIndex) -> f64 {
        self(edge)
    }
}

impl WeightFn for WeightColumn<f64> {
    fn cost(&self, edge: crate::id::EdgeIndex) -> f64 {
        *self.get(edge.index())
    }
}

impl WeightFn for WeightColumn<i64> {
    fn cost(&self, edge: crate::id::EdgeIndex) -> f64 {
        *self.get(edge.index()) as f64
    }
}

/// The cardinality weight function: every edge costs exactly `1.0`.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnitWeight;

impl WeightFn for UnitWeight {
    fn cost(&self, _edge: crate::id::EdgeIndex) -> f64 {
        1.0
    }
}

/// An edge-to-`u64` cost function for the integer specializations (Dial's
/// bucket SSSP, integer Dijkstra, integer push-relabel). Kept as a separate
/// trait from [`WeightFn`] rather than a blanket numeric generic, matching
/// how the base algorithm exists as two call sites in the source material
/// rather than one generic one.
pub trait IntWeightFn {
    fn cost(&self, edge: crate::id::EdgeIndex) -> u64;
}

impl<F> IntWeightFn for F
where
    F: Fn(crate::id::EdgeIndex) -> u64,
{
    fn cost(&self, edge: crate::id::EdgeIndex) -> u64 {
        self(edge)
    }
}

impl IntWeightFn for WeightColumn<u64> {
    fn cost(&self, edge: crate::id::EdgeIndex) -> u64 {
        *self.get(edge.index())
    }
}

impl IntWeightFn for UnitWeight {
    fn cost(&self, _edge: crate::id::EdgeIndex) -> u64 {
        1
    }
}
