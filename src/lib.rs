//! `densegraph` is a graph algorithms library built around one dense-index
//! graph substrate: array- or linked-list-backed adjacency, a central
//! endpoint table, typed weight columns, and a stable-id layer that survives
//! swap-on-remove mutation.
//!
//! The most prominent type is [`graph::Graph`], a directed or undirected
//! graph whose vertices and edges are addressed by externally stable
//! [`id::VertexId`]/[`id::EdgeId`] handles. Algorithm kernels in [`algo`] and
//! [`traversal`] consume the lower-level [`store::GraphStore`] directly, by
//! dense [`id::VertexIndex`]/[`id::EdgeIndex`], for the duration of one call.

pub mod algo;
pub mod error;
pub mod graph;
pub mod id;
pub mod store;
pub mod support;
pub mod traversal;
pub mod unionfind;
pub mod weight;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use id::{EdgeId, EdgeIndex, VertexId, VertexIndex};
pub use store::{AdjacencyCursor, AdjacencyKind, Capabilities, Direction};

pub use algo::connectivity::ConnectivityResult;
pub use algo::flow::{FlowNetwork, FlowValue, MaxFlowResult};
pub use algo::matching::Matching;
pub use algo::mst::SpanningForest;
pub use algo::shortest_paths::{ShortestPathTree, ShortestPathTreeU64};
