//! Support structures shared by the algorithm kernels (C5): fixed-capacity
//! bucket lists (C5.b) and the decrease-key heap used by Dijkstra (C5,
//! "heaps").

pub mod heap;
pub mod linked_list;
