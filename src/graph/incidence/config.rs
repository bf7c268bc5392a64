//! Construction-time settings for [`IncidenceGraph`](super::IncidenceGraph).

use super::Incidence;

/// How a self-loop `v -> v` is recorded in the single incidence cell it occupies.
///
/// A self-loop's source and destination marks land on the same cell, so only one
/// of them can be stored as a plain `-1`/`+1` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelfLoopPolicy {
    /// The destination mark is written last and wins: the loop counts toward in-degree only.
    #[default]
    DestinationWins,
    /// The source mark wins: the loop counts toward out-degree only.
    SourceWins,
    /// The cell holds [`Incidence::Loop`] and counts toward both degrees.
    Both,
}

impl SelfLoopPolicy {
    /// The cell value a self-loop is stored as.
    #[inline]
    pub const fn cell(self) -> Incidence {
        match self {
            Self::DestinationWins => Incidence::Target,
            Self::SourceWins => Incidence::Source,
            Self::Both => Incidence::Loop,
        }
    }
}

/// Graph configuration.
///
/// ```rust
/// use incidence_graph::{GraphConfig, IncidenceGraph, SelfLoopPolicy};
///
/// let config = GraphConfig::new().self_loops(SelfLoopPolicy::Both);
/// let mut g = IncidenceGraph::with_config(config);
/// g.add_vertex("a").unwrap();
/// g.add_edge(&"a", &"a").unwrap();
/// assert_eq!(g.in_degree(&"a"), Ok(1));
/// assert_eq!(g.out_degree(&"a"), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphConfig {
    /// Self-loop recording policy.
    pub self_loops: SelfLoopPolicy,
}

impl GraphConfig {
    /// Default configuration.
    pub const fn new() -> Self {
        Self {
            self_loops: SelfLoopPolicy::DestinationWins,
        }
    }

    /// Sets the self-loop policy.
    #[must_use]
    pub const fn self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }
}
