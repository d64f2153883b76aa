//! The `Graph` façade (C4): the type most callers reach for. It owns a
//! [`GraphStore`] plus the two [`IdMap`]s that translate externally stable
//! [`VertexId`]/[`EdgeId`] handles into the store's dense indices, and is the
//! place where weight columns are minted and wired up as listeners.
//!
//! Algorithms in `algo::*` and `traversal::*` are written directly against
//! [`GraphStore`] and dense indices -- this façade is the id-stable surface
//! users build a graph through before handing `graph.store()` off to them.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::{GraphError, GraphResult};
use crate::id::{EdgeId, EdgeIndex, GraphListener, IdMap, LifecycleListener, SwapListener, VertexId, VertexIndex};
use crate::store::{AdjacencyKind, Capabilities, GraphStore};
use crate::weight::WeightColumn;

/// Shared, interior-mutable handle to a listener (an [`IdMap`] or a
/// [`WeightColumn`]) that is simultaneously registered with a [`GraphStore`]
/// and held onto by the façade or a caller for direct reads/writes. This
/// crate is single-threaded by design (see the store's swap-on-remove
/// protocol, which assumes no concurrent mutation), so `Rc<RefCell<_>>` is
/// the appropriate sharing primitive rather than `Arc<Mutex<_>>`.
struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    fn new(inner: T) -> Self {
        Shared(Rc::new(RefCell::new(inner)))
    }

    fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: SwapListener> SwapListener for Shared<T> {
    fn on_swap(&mut self, i: usize, j: usize) {
        self.0.borrow_mut().on_swap(i, j);
    }
}

impl<T: LifecycleListener> LifecycleListener for Shared<T> {
    fn on_add(&mut self) {
        self.0.borrow_mut().on_add();
    }

    fn on_remove(&mut self) {
        self.0.borrow_mut().on_remove();
    }

    fn on_clear(&mut self) {
        self.0.borrow_mut().on_clear();
    }
}

/// A handle to a registered weight column, returned by
/// [`Graph::add_vertex_weights`] / [`Graph::add_edge_weights`]. Reads and
/// writes go through the id layer, so callers never see dense indices.
#[derive(Clone)]
pub struct WeightHandle<T> {
    column: Shared<WeightColumn<T>>,
    ids: Shared<IdMap>,
}

impl<T: Clone> WeightHandle<T> {
    pub fn get(&self, id_value: u64) -> GraphResult<T> {
        let index = self
            .ids
            .borrow()
            .index_of(id_value)
            .ok_or(GraphError::NoSuchElement)?;
        Ok(self.column.borrow().get(index).clone())
    }

    pub fn set(&self, id_value: u64, value: T) -> GraphResult<()> {
        let index = self
            .ids
            .borrow()
            .index_of(id_value)
            .ok_or(GraphError::NoSuchElement)?;
        self.column.borrow_mut().set(index, value);
        Ok(())
    }

    pub fn get_by_index(&self, index: usize) -> T {
        self.column.borrow().get(index).clone()
    }

    pub fn set_by_index(&self, index: usize, value: T) {
        self.column.borrow_mut().set(index, value);
    }
}

/// The id-stable graph façade (C4).
pub struct Graph {
    store: GraphStore,
    vertex_ids: Shared<IdMap>,
    edge_ids: Shared<IdMap>,
}

impl Graph {
    pub fn new(kind: AdjacencyKind, capabilities: Capabilities) -> Self {
        let mut store = GraphStore::new(kind, capabilities);
        let vertex_ids = Shared::new(IdMap::new());
        let edge_ids = Shared::new(IdMap::new());
        store.register_vertex_listener(Box::new(vertex_ids.clone()) as Box<dyn GraphListener>);
        store.register_edge_listener(Box::new(edge_ids.clone()) as Box<dyn GraphListener>);
        Graph {
            store,
            vertex_ids,
            edge_ids,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.store.capabilities()
    }

    /// Direct access to the dense-index store, for algorithms that consume
    /// C1 directly rather than the id-stable surface.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn vertex_index(&self, id: VertexId) -> GraphResult<VertexIndex> {
        self.vertex_ids
            .borrow()
            .index_of(id.0)
            .map(VertexIndex)
            .ok_or(GraphError::NoSuchElement)
    }

    pub fn edge_index(&self, id: EdgeId) -> GraphResult<EdgeIndex> {
        self.edge_ids
            .borrow()
            .index_of(id.0)
            .map(EdgeIndex)
            .ok_or(GraphError::NoSuchElement)
    }

    pub fn vertex_id(&self, index: VertexIndex) -> VertexId {
        VertexId(
            self.vertex_ids
                .borrow()
                .id_of(index.index())
                .expect("vertex index in range has a minted id"),
        )
    }

    pub fn edge_id(&self, index: EdgeIndex) -> EdgeId {
        EdgeId(
            self.edge_ids
                .borrow()
                .id_of(index.index())
                .expect("edge index in range has a minted id"),
        )
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let index = self.store.add_vertex();
        self.vertex_id(index)
    }

    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        let index = self.vertex_index(id)?;
        self.store.remove_vertex(index)
    }

    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<EdgeId> {
        let s = self.vertex_index(source)?;
        let t = self.vertex_index(target)?;
        let index = self.store.add_edge(s, t)?;
        Ok(self.edge_id(index))
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        let index = self.edge_index(id)?;
        self.store.remove_edge(index)
    }

    pub fn reverse_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        let index = self.edge_index(id)?;
        self.store.reverse_edge(index)
    }

    pub fn edge_source(&self, id: EdgeId) -> GraphResult<VertexId> {
        let index = self.edge_index(id)?;
        Ok(self.vertex_id(self.store.edge_source(index)))
    }

    pub fn edge_target(&self, id: EdgeId) -> GraphResult<VertexId> {
        let index = self.edge_index(id)?;
        Ok(self.vertex_id(self.store.edge_target(index)))
    }

    pub fn edge_endpoint(&self, id: EdgeId, from: VertexId) -> GraphResult<VertexId> {
        let e = self.edge_index(id)?;
        let v = self.vertex_index(from)?;
        Ok(self.vertex_id(self.store.edge_endpoint_other(e, v)))
    }

    pub fn out_edges(&self, id: VertexId) -> GraphResult<Vec<EdgeId>> {
        let v = self.vertex_index(id)?;
        Ok(self
            .store
            .out_edges(v)
            .into_iter()
            .map(|e| self.edge_id(e))
            .collect())
    }

    pub fn in_edges(&self, id: VertexId) -> GraphResult<Vec<EdgeId>> {
        let v = self.vertex_index(id)?;
        Ok(self
            .store
            .in_edges(v)
            .into_iter()
            .map(|e| self.edge_id(e))
            .collect())
    }

    pub fn degree_out(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.store.degree_out(self.vertex_index(id)?))
    }

    pub fn degree_in(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.store.degree_in(self.vertex_index(id)?))
    }

    pub fn vertices(&self) -> Vec<VertexId> {
        self.store.vertices().map(|v| self.vertex_id(v)).collect()
    }

    pub fn edges(&self) -> Vec<EdgeId> {
        self.store.edge_indices().map(|e| self.edge_id(e)).collect()
    }

    /// Register a new per-vertex weight column, defaulted to `default` for
    /// every vertex that already exists.
    pub fn add_vertex_weights<T: Clone + 'static>(&mut self, default: T) -> WeightHandle<T> {
        let column = Shared::new(WeightColumn::new(default));
        self.store
            .register_vertex_listener(Box::new(column.clone()) as Box<dyn GraphListener>);
        WeightHandle {
            column,
            ids: self.vertex_ids.clone(),
        }
    }

    /// Register a new per-edge weight column, defaulted to `default` for
    /// every edge that already exists.
    pub fn add_edge_weights<T: Clone + 'static>(&mut self, default: T) -> WeightHandle<T> {
        let column = Shared::new(WeightColumn::new(default));
        self.store
            .register_edge_listener(Box::new(column.clone()) as Box<dyn GraphListener>);
        WeightHandle {
            column,
            ids: self.edge_ids.clone(),
        }
    }
}
