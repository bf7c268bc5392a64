//! Storage collections backing the graph types.
//!
//! - `vec`: contiguous, vector-backed collections

pub mod vec;

pub use vec::IncidenceMatrix;
