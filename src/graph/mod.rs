//! Graph representations.
//!
//! - `incidence`: value-addressed directed graph backed by an incidence matrix

pub mod incidence;

pub use incidence::{
    BidirectionalIter, ConstBidirectionalIter, GraphConfig, GraphError, GraphIterator,
    GraphResult, Incidence, IncidenceGraph, SelfLoopPolicy,
};
