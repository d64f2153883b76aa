//! Algorithm kernels (C7-C11): connectivity, shortest paths, maximum flow,
//! minimum spanning forests, and maximum matching. Every algorithm consumes
//! a [`crate::store::GraphStore`] directly, by dense index, for the
//! duration of one call; none of them mutate the graph.

pub mod connectivity;
pub mod flow;
pub mod matching;
pub mod mst;
pub mod shortest_paths;
