//! Iterative traversals (C6): breadth-first with layer tracking and
//! depth-first with an explicit edge-iterator stack. Both consume a
//! [`crate::store::GraphStore`] snapshot directly by dense index and never
//! mutate it.

pub mod bfs;
pub mod dfs;

pub use bfs::{Bfs, BfsStep};
pub use dfs::Dfs;
