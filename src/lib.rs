//! # `incidence_graph` - Directed Graphs on an Incidence Matrix
//!
//! A generic directed graph whose vertices are arbitrary equality-comparable values
//! and whose structure is kept as an incidence matrix: one row per vertex, one
//! column per edge, each cell marking the vertex as the edge's source, destination,
//! or neither.
//!
//! ## Key Features
//!
//! - **Value-addressed vertices**: vertices are located with `==`; `T` needs neither
//!   `Hash` nor `Ord`
//! - **Positional ids**: vertex and edge ids are storage indices, renumbered on removal
//! - **Failure atomicity**: every error is detected before anything is modified
//! - **Snapshot iterators**: restartable bidirectional cursors, in mutable and
//!   read-only flavours, that can drive erase-by-iterator removals
//!
//! ## Architecture
//!
//! Three parallel sequences (vertices, edges, incidence matrix) are owned by
//! [`IncidenceGraph`] and only ever change together. Iterators never observe the live
//! graph; each factory call materializes a snapshot. A snapshot remembers which graph
//! and which graph revision it came from, so `erase_vertex`/`erase_edge` can reject
//! iterators that belong to another graph or predate a mutation.
//!
//! ## Example
//!
//! ```rust
//! use incidence_graph::{GraphIterator, IncidenceGraph};
//!
//! let mut g = IncidenceGraph::new();
//! g.add_vertex('a')?;
//! g.add_vertex('b')?;
//! g.add_edge(&'a', &'b')?;
//! g.add_edge(&'b', &'b')?;
//!
//! let forward: Vec<_> = g.begin_edges().collect();
//! assert_eq!(forward, vec![('a', 'b'), ('b', 'b')]);
//!
//! let it = g.rbegin_edges();
//! assert_eq!(it.current(), Some(&('b', 'b')));
//! g.erase_edge(&it)?;
//! assert!(!g.has_edge(&'b', &'b'));
//! # Ok::<(), incidence_graph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` TRACE event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Emits a `tracing` DEBUG event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod collections;
pub mod graph;

pub use collections::IncidenceMatrix;
pub use graph::{
    BidirectionalIter, ConstBidirectionalIter, GraphConfig, GraphError, GraphIterator,
    GraphResult, Incidence, IncidenceGraph, SelfLoopPolicy,
};
