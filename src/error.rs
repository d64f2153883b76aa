//! Crate-wide error type.
//!
//! Validation errors are raised at the entry of an operation, before any
//! state is mutated. Internal invariants (e.g. "the priority queue is
//! non-empty because we just checked") stay `debug_assert!`s: their
//! violation is a bug in this crate, not a condition a caller can trigger.

use thiserror::Error;

/// Everything that can go wrong calling into this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex or edge index/id was not valid for the graph it was used with.
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),

    /// An algorithm requires a capability (directed/undirected, no self
    /// loops, no parallel edges) that the graph does not have.
    #[error("capability mismatch: {0}")]
    CapabilityMismatch(&'static str),

    /// A non-negative-weight algorithm (Dijkstra, Dial) observed a negative
    /// edge weight during relaxation.
    #[error("negative edge weight encountered")]
    NegativeWeight,

    /// A catch-all for malformed call-site input: empty source sets,
    /// non-finite weights, an integer-only algorithm handed a fractional
    /// weight, Eulerian-tour preconditions violated, and so on.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A connectivity precondition was not met.
    #[error("graph is not connected")]
    NotConnected,

    /// The DAG-linear SSSP variant was handed a cyclic graph.
    #[error("graph is not a DAG")]
    NotDag,

    /// Hopcroft-Karp was handed a graph whose 2-coloring is not bipartite
    /// (or not supplied).
    #[error("graph is not bipartite")]
    NotBipartite,

    /// An iterator or cursor was advanced past its last element.
    #[error("no more elements")]
    NoSuchElement,

    /// The caller asked for something a result object cannot provide in its
    /// current state (e.g. a negative cycle from a run that found none).
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

/// Convenience alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;
