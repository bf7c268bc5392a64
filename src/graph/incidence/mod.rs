//! Directed graph over arbitrary equality-comparable values, stored as an incidence matrix.
//!
//! Vertical split:
//! - `mod.rs`: storage, mutation, queries, iterator factories
//! - `iter`: bidirectional snapshot iterators
//! - `config`: self-loop policy
//! - `error`: failure kinds
//! - `tests`: module tests
//!
//! # Layout
//!
//! Three parallel structures are kept in lock-step:
//! - `vertices`: the user's values; a vertex id is its index here
//! - `edges`: `(source id, destination id)` pairs; an edge id is its index here
//! - `incidence`: one row per vertex, one column per edge
//!
//! Ids are positional. Removing a vertex or an edge shifts every later id down by one,
//! so ids must not be held across mutations.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(n + m)\) | Duplicate scan, then row append |
//! | `add_edge` | \(O(n \cdot m)\) | Column append rebuilds the matrix |
//! | `remove_edge` | \(O(n \cdot m)\) | Column removal |
//! | `remove_vertex` | \(O(n \cdot m)\) | One compaction pass for all incident columns |
//! | `in_degree` / `out_degree` | \(O(n + m)\) | Lookup, then one row scan |

use core::cmp::Ordering;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::collections::vec::IncidenceMatrix;

mod config;
mod error;
mod iter;

pub use config::{GraphConfig, SelfLoopPolicy};
pub use error::{GraphError, GraphResult};
pub use iter::{BidirectionalIter, ConstBidirectionalIter, GraphIterator};

use iter::{Origin, Sequence};

/// Value of one incidence-matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Incidence {
    /// The vertex is the edge's source (`-1`).
    Source,
    /// The vertex is not an endpoint of the edge (`0`).
    #[default]
    None,
    /// The vertex is the edge's destination (`+1`).
    Target,
    /// The edge is a self-loop on the vertex, recorded under [`SelfLoopPolicy::Both`].
    Loop,
}

impl Incidence {
    /// Numeric cell value: `-1`, `0`, `+1`, or `2` for [`Incidence::Loop`].
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Self::Source => -1,
            Self::None => 0,
            Self::Target => 1,
            Self::Loop => 2,
        }
    }

    /// Counts toward out-degree.
    #[inline]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Source | Self::Loop)
    }

    /// Counts toward in-degree.
    #[inline]
    pub const fn is_target(self) -> bool {
        matches!(self, Self::Target | Self::Loop)
    }
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

fn next_graph_id() -> u64 {
    NEXT_GRAPH_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A directed graph with at most one edge per ordered vertex pair.
///
/// Vertices are located by `==`, never by hashing, so `T` only needs `PartialEq`.
///
/// ```rust
/// use incidence_graph::IncidenceGraph;
///
/// let mut g = IncidenceGraph::new();
/// for v in ["A", "B", "C"] {
///     g.add_vertex(v)?;
/// }
/// g.add_edge(&"A", &"B")?;
/// g.add_edge(&"C", &"B")?;
///
/// assert_eq!(g.in_degree(&"B")?, 2);
/// assert_eq!(g.edge_degree(&"A", &"B")?, 2);
///
/// g.remove_vertex(&"B")?;
/// assert_eq!((g.vertex_count(), g.edge_count()), (2, 0));
/// # Ok::<(), incidence_graph::GraphError>(())
/// ```
pub struct IncidenceGraph<T> {
    vertices: Vec<T>,
    edges: Vec<(usize, usize)>,
    incidence: IncidenceMatrix<Incidence>,
    config: GraphConfig,
    /// Distinguishes this graph from every other one, clones included.
    id: u64,
    /// Bumped on every successful mutation; iterators remember the value they saw.
    revision: u64,
}

impl<T> IncidenceGraph<T> {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            incidence: IncidenceMatrix::new(),
            config,
            id: next_graph_id(),
            revision: 0,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            incidence: IncidenceMatrix::with_capacity(vertices, edges),
            ..Self::new()
        }
    }

    /// Returns the configuration the graph was built with.
    #[inline]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in id order.
    #[inline]
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Edges as `(source id, destination id)` pairs, in id order.
    #[inline]
    pub fn edge_ids(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Edges as `(source, destination)` value pairs, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.edges
            .iter()
            .map(move |&(u, v)| (&self.vertices[u], &self.vertices[v]))
    }

    /// Removes every vertex and edge. Calling it on an empty graph is a no-op.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.incidence.clear();
        self.bump();
        trace_event!(graph = self.id, "cleared");
    }

    /// Compares edge counts only.
    ///
    /// This is a coarse preorder: unequal graphs with the same number of edges
    /// compare `Equal` here.
    #[inline]
    pub fn edge_count_cmp(&self, other: &Self) -> Ordering {
        self.edges.len().cmp(&other.edges.len())
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    #[inline]
    fn origin(&self, sequence: Sequence) -> Origin {
        Origin {
            graph: self.id,
            revision: self.revision,
            sequence,
        }
    }

    /// Checks that `origin` is this graph's live `sequence`.
    fn check_origin(&self, origin: Option<Origin>, sequence: Sequence) -> GraphResult<()> {
        if origin == Some(self.origin(sequence)) {
            Ok(())
        } else {
            debug_event!(graph = self.id, ?origin, "rejected foreign iterator");
            Err(GraphError::ForeignIterator)
        }
    }

    /// Deletes edge `e` and its incidence column.
    fn delete_edge_at(&mut self, e: usize) {
        self.edges.remove(e);
        self.incidence.remove_col(e);
    }
}

impl<T: PartialEq> IncidenceGraph<T> {
    /// Returns the id of `value`, if present.
    pub fn vertex_id(&self, value: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v == value)
    }

    fn resolve(&self, value: &T) -> GraphResult<usize> {
        self.vertex_id(value).ok_or(GraphError::VertexNotExists)
    }

    /// Resolves both endpoints and finds the edge between them.
    fn edge_id(&self, from: &T, to: &T) -> Option<usize> {
        let u = self.vertex_id(from)?;
        let v = self.vertex_id(to)?;
        self.edges.iter().position(|&e| e == (u, v))
    }

    /// Returns true if `value` is a vertex.
    pub fn has_vertex(&self, value: &T) -> bool {
        self.vertices.contains(value)
    }

    /// Returns true if `from -> to` is an edge. Missing endpoints yield `false`.
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.edge_id(from, to).is_some()
    }

    /// Adds a vertex with no edges.
    ///
    /// # Errors
    /// [`GraphError::VertexAlreadyExists`] if `value` is already a vertex.
    pub fn add_vertex(&mut self, value: T) -> GraphResult<()> {
        if self.has_vertex(&value) {
            debug_event!(graph = self.id, "duplicate vertex");
            return Err(GraphError::VertexAlreadyExists);
        }
        self.vertices.push(value);
        self.incidence.push_row(Incidence::None);
        self.bump();
        trace_event!(
            graph = self.id,
            vertex = self.vertices.len() - 1,
            "vertex added"
        );
        Ok(())
    }

    /// Adds the edge `from -> to`. Self-loops are allowed.
    ///
    /// # Errors
    /// - [`GraphError::EdgeAlreadyExists`] if the ordered pair is already an edge.
    /// - [`GraphError::VertexNotExists`] if either endpoint is missing.
    pub fn add_edge(&mut self, from: &T, to: &T) -> GraphResult<()> {
        if self.has_edge(from, to) {
            debug_event!(graph = self.id, "duplicate edge");
            return Err(GraphError::EdgeAlreadyExists);
        }
        let u = self.resolve(from)?;
        let v = self.resolve(to)?;

        let e = self.edges.len();
        self.edges.push((u, v));
        self.incidence.push_col(Incidence::None);
        if u == v {
            if let Some(cell) = self.incidence.get_mut(u, e) {
                *cell = self.config.self_loops.cell();
            }
        } else {
            if let Some(cell) = self.incidence.get_mut(u, e) {
                *cell = Incidence::Source;
            }
            if let Some(cell) = self.incidence.get_mut(v, e) {
                *cell = Incidence::Target;
            }
        }
        self.bump();
        trace_event!(graph = self.id, edge = e, from = u, to = v, "edge added");
        Ok(())
    }

    /// Incidence row of `value`: one cell per edge, in edge id order.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn incidence_row(&self, value: &T) -> GraphResult<&[Incidence]> {
        let id = self.resolve(value)?;
        Ok(self.incidence.row(id).unwrap_or_default())
    }

    /// Number of edges entering `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn in_degree(&self, value: &T) -> GraphResult<usize> {
        let row = self.incidence_row(value)?;
        Ok(row.iter().filter(|c| c.is_target()).count())
    }

    /// Number of edges leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn out_degree(&self, value: &T) -> GraphResult<usize> {
        let row = self.incidence_row(value)?;
        Ok(row.iter().filter(|c| c.is_source()).count())
    }

    /// Number of distinct endpoints of the edge: 1 for a self-loop, otherwise 2.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotExists`] if `from -> to` is not an edge.
    pub fn edge_degree(&self, from: &T, to: &T) -> GraphResult<usize> {
        let e = self.edge_id(from, to).ok_or(GraphError::EdgeNotExists)?;
        let (u, v) = self.edges[e];
        Ok(if u == v { 1 } else { 2 })
    }

    /// Removes the edge `from -> to`.
    ///
    /// Every edge after it shifts down one id.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotExists`] if an endpoint is missing or the pair is not an edge.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> GraphResult<()> {
        let Some(e) = self.edge_id(from, to) else {
            debug_event!(graph = self.id, "missing edge");
            return Err(GraphError::EdgeNotExists);
        };
        self.delete_edge_at(e);
        self.bump();
        trace_event!(graph = self.id, edge = e, "edge removed");
        Ok(())
    }

    /// Removes `value` together with every edge entering or leaving it.
    ///
    /// Remaining endpoint ids above the removed vertex shift down by one.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn remove_vertex(&mut self, value: &T) -> GraphResult<()> {
        let id = self.resolve(value)?;
        self.remove_vertex_at(id);
        Ok(())
    }

    /// Removes the vertex under a vertex iterator's cursor.
    ///
    /// The iterator is stale afterwards; erasing through it again fails with
    /// [`GraphError::ForeignIterator`].
    ///
    /// # Errors
    /// - [`GraphError::ForeignIterator`] unless `it` came from this graph's `*begin_vertices`
    ///   with no mutation since.
    /// - [`GraphError::IteratorOutOfRange`] if `it` is not over an element.
    pub fn erase_vertex<I>(&mut self, it: &I) -> GraphResult<()>
    where
        I: GraphIterator<T>,
    {
        self.check_origin(it.cursor().origin(), Sequence::Vertices)?;
        // An unmutated vertex snapshot mirrors the live sequence, so the cursor index is the id.
        let id = it
            .current_index()
            .filter(|&i| i < self.vertices.len())
            .ok_or(GraphError::IteratorOutOfRange)?;
        self.remove_vertex_at(id);
        Ok(())
    }

    /// Removes the edge under an edge iterator's cursor.
    ///
    /// # Errors
    /// - [`GraphError::ForeignIterator`] unless `it` came from this graph's `*begin_edges`
    ///   with no mutation since.
    /// - [`GraphError::IteratorOutOfRange`] if `it` is not over an element.
    pub fn erase_edge<I>(&mut self, it: &I) -> GraphResult<()>
    where
        I: GraphIterator<(T, T)>,
    {
        self.check_origin(it.cursor().origin(), Sequence::Edges)?;
        let (from, to) = it.current().ok_or(GraphError::IteratorOutOfRange)?;
        self.remove_edge(from, to)
    }

    /// Drops every edge touching `id`, then the vertex, then renumbers the survivors.
    fn remove_vertex_at(&mut self, id: usize) {
        let incident: Vec<bool> = self
            .edges
            .iter()
            .map(|&(u, v)| u == id || v == id)
            .collect();
        self.incidence.retain_cols(|e| !incident[e]);
        let mut e = 0;
        self.edges.retain(|_| {
            let keep = !incident[e];
            e += 1;
            keep
        });

        self.incidence.remove_row(id);
        self.vertices.remove(id);

        for (u, v) in &mut self.edges {
            if *u > id {
                *u -= 1;
            }
            if *v > id {
                *v -= 1;
            }
        }
        self.bump();
        trace_event!(
            graph = self.id,
            vertex = id,
            dropped_edges = incident.iter().filter(|&&i| i).count(),
            "vertex removed"
        );
    }
}

impl<T: PartialEq + Clone> IncidenceGraph<T> {
    /// Builds a graph from `(source, destination)` pairs.
    ///
    /// Vertices are added in order of first appearance.
    ///
    /// # Errors
    /// [`GraphError::EdgeAlreadyExists`] if a pair repeats.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            if !graph.has_vertex(&from) {
                graph.add_vertex(from.clone())?;
            }
            if !graph.has_vertex(&to) {
                graph.add_vertex(to.clone())?;
            }
            graph.add_edge(&from, &to)?;
        }
        Ok(graph)
    }

    fn vertex_snapshot(&self) -> Vec<T> {
        self.vertices.clone()
    }

    fn edge_snapshot(&self) -> Vec<(T, T)> {
        self.edges
            .iter()
            .map(|&(u, v)| (self.vertices[u].clone(), self.vertices[v].clone()))
            .collect()
    }

    fn incident_snapshot(&self, value: &T) -> GraphResult<Vec<(T, T)>> {
        let id = self.resolve(value)?;
        Ok(self
            .edges
            .iter()
            .filter(|&&(u, v)| u == id || v == id)
            .map(|&(u, v)| (self.vertices[u].clone(), self.vertices[v].clone()))
            .collect())
    }

    fn adjacent_snapshot(&self, value: &T) -> GraphResult<Vec<T>> {
        let id = self.resolve(value)?;
        Ok(self
            .edges
            .iter()
            .filter(|&&(u, _)| u == id)
            .map(|&(_, v)| self.vertices[v].clone())
            .collect())
    }

    /// Forward iterator over a snapshot of the vertices.
    pub fn begin_vertices(&self) -> BidirectionalIter<T> {
        BidirectionalIter::with_origin(self.vertex_snapshot(), false, self.origin(Sequence::Vertices))
    }

    /// Reverse iterator over a snapshot of the vertices.
    pub fn rbegin_vertices(&self) -> BidirectionalIter<T> {
        BidirectionalIter::with_origin(self.vertex_snapshot(), true, self.origin(Sequence::Vertices))
    }

    /// Read-only forward iterator over a snapshot of the vertices.
    pub fn const_begin_vertices(&self) -> ConstBidirectionalIter<T> {
        ConstBidirectionalIter::with_origin(
            self.vertex_snapshot(),
            false,
            self.origin(Sequence::Vertices),
        )
    }

    /// Read-only reverse iterator over a snapshot of the vertices.
    pub fn const_rbegin_vertices(&self) -> ConstBidirectionalIter<T> {
        ConstBidirectionalIter::with_origin(
            self.vertex_snapshot(),
            true,
            self.origin(Sequence::Vertices),
        )
    }

    /// Forward iterator over a snapshot of the edges as value pairs.
    pub fn begin_edges(&self) -> BidirectionalIter<(T, T)> {
        BidirectionalIter::with_origin(self.edge_snapshot(), false, self.origin(Sequence::Edges))
    }

    /// Reverse iterator over a snapshot of the edges as value pairs.
    pub fn rbegin_edges(&self) -> BidirectionalIter<(T, T)> {
        BidirectionalIter::with_origin(self.edge_snapshot(), true, self.origin(Sequence::Edges))
    }

    /// Read-only forward iterator over a snapshot of the edges.
    pub fn const_begin_edges(&self) -> ConstBidirectionalIter<(T, T)> {
        ConstBidirectionalIter::with_origin(self.edge_snapshot(), false, self.origin(Sequence::Edges))
    }

    /// Read-only reverse iterator over a snapshot of the edges.
    pub fn const_rbegin_edges(&self) -> ConstBidirectionalIter<(T, T)> {
        ConstBidirectionalIter::with_origin(self.edge_snapshot(), true, self.origin(Sequence::Edges))
    }

    /// Forward iterator over the edges entering or leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn begin_incident_edges(&self, value: &T) -> GraphResult<BidirectionalIter<(T, T)>> {
        let items = self.incident_snapshot(value)?;
        Ok(BidirectionalIter::with_origin(items, false, self.origin(Sequence::IncidentEdges)))
    }

    /// Reverse iterator over the edges entering or leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn rbegin_incident_edges(&self, value: &T) -> GraphResult<BidirectionalIter<(T, T)>> {
        let items = self.incident_snapshot(value)?;
        Ok(BidirectionalIter::with_origin(items, true, self.origin(Sequence::IncidentEdges)))
    }

    /// Read-only forward iterator over the edges entering or leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn const_begin_incident_edges(
        &self,
        value: &T,
    ) -> GraphResult<ConstBidirectionalIter<(T, T)>> {
        let items = self.incident_snapshot(value)?;
        Ok(ConstBidirectionalIter::with_origin(items, false, self.origin(Sequence::IncidentEdges)))
    }

    /// Read-only reverse iterator over the edges entering or leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn const_rbegin_incident_edges(
        &self,
        value: &T,
    ) -> GraphResult<ConstBidirectionalIter<(T, T)>> {
        let items = self.incident_snapshot(value)?;
        Ok(ConstBidirectionalIter::with_origin(items, true, self.origin(Sequence::IncidentEdges)))
    }

    /// Forward iterator over the destinations of edges leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn begin_adjacent_vertices(&self, value: &T) -> GraphResult<BidirectionalIter<T>> {
        let items = self.adjacent_snapshot(value)?;
        Ok(BidirectionalIter::with_origin(items, false, self.origin(Sequence::AdjacentVertices)))
    }

    /// Reverse iterator over the destinations of edges leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn rbegin_adjacent_vertices(&self, value: &T) -> GraphResult<BidirectionalIter<T>> {
        let items = self.adjacent_snapshot(value)?;
        Ok(BidirectionalIter::with_origin(items, true, self.origin(Sequence::AdjacentVertices)))
    }

    /// Read-only forward iterator over the destinations of edges leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn const_begin_adjacent_vertices(&self, value: &T) -> GraphResult<ConstBidirectionalIter<T>> {
        let items = self.adjacent_snapshot(value)?;
        Ok(ConstBidirectionalIter::with_origin(
            items,
            false,
            self.origin(Sequence::AdjacentVertices),
        ))
    }

    /// Read-only reverse iterator over the destinations of edges leaving `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotExists`] if `value` is missing.
    pub fn const_rbegin_adjacent_vertices(&self, value: &T) -> GraphResult<ConstBidirectionalIter<T>> {
        let items = self.adjacent_snapshot(value)?;
        Ok(ConstBidirectionalIter::with_origin(
            items,
            true,
            self.origin(Sequence::AdjacentVertices),
        ))
    }
}

impl<T> Default for IncidenceGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy is a different graph: iterators taken from `self` are foreign to it.
impl<T: Clone> Clone for IncidenceGraph<T> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            incidence: self.incidence.clone(),
            config: self.config,
            id: next_graph_id(),
            revision: 0,
        }
    }
}

/// Same vertices in the same order, and the same edge id pairs in the same order.
impl<T: PartialEq> PartialEq for IncidenceGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<T: Eq> Eq for IncidenceGraph<T> {}

/// Orders by edge count. Unequal graphs with the same edge count are incomparable,
/// which keeps `partial_cmp` consistent with `==`; see [`IncidenceGraph::edge_count_cmp`]
/// for the plain preorder.
impl<T: PartialEq> PartialOrd for IncidenceGraph<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edge_count_cmp(other) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            ord => Some(ord),
        }
    }
}

impl<T: fmt::Display> fmt::Display for IncidenceGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertices:")?;
        for v in &self.vertices {
            write!(f, "\n  {v}")?;
        }
        f.write_str("\nEdges:")?;
        for (u, v) in self.edges() {
            write!(f, "\n  {u} -> {v}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for IncidenceGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidenceGraph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .field("config", &self.config)
            .finish()
    }
}
