//! Failure kinds for incidence-graph operations.

use thiserror::Error;

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Every fallible graph or iterator operation fails with exactly one of these kinds.
///
/// A failed operation leaves the graph exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// A vertex value referenced by the call is not in the graph.
    #[error("vertex does not exist in the graph")]
    VertexNotExists,

    /// `add_vertex` was called with a value that is already present.
    #[error("vertex already exists in the graph")]
    VertexAlreadyExists,

    /// The ordered pair referenced by the call is not an edge of the graph.
    #[error("edge does not exist in the graph")]
    EdgeNotExists,

    /// `add_edge` was called with an ordered pair that is already present.
    #[error("edge already exists in the graph")]
    EdgeAlreadyExists,

    /// An iterator stepped outside its snapshot.
    #[error("iterator exhausted")]
    Exhausted,

    /// The iterator was not built from this graph's current vertex or edge sequence.
    #[error("iterator does not belong to this graph's current sequence")]
    ForeignIterator,

    /// The iterator is not positioned over an element.
    #[error("iterator position is out of range")]
    IteratorOutOfRange,
}
