use anyhow::Result;
use incidence_graph::{
    ConstBidirectionalIter, GraphError, GraphIterator, IncidenceGraph,
};

/// A vertex type with neither `Hash` nor `Ord`.
#[derive(Debug, Clone, PartialEq)]
struct Sample {
    weight: f64,
    label: String,
}

impl Sample {
    fn new(weight: f64) -> Self {
        Self {
            weight,
            label: format!("sample-{weight}"),
        }
    }
}

fn graph_of(vertices: &[&'static str], edges: &[(&'static str, &'static str)]) -> Result<IncidenceGraph<&'static str>> {
    let mut g = IncidenceGraph::new();
    for &v in vertices {
        g.add_vertex(v)?;
    }
    for (from, to) in edges {
        g.add_edge(from, to)?;
    }
    Ok(g)
}

#[test]
fn new_graph_is_empty() {
    let g: IncidenceGraph<String> = IncidenceGraph::new();
    assert!(g.empty());
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_vertex_and_edge() -> Result<()> {
    let mut g = IncidenceGraph::new();
    g.add_vertex("A".to_string())?;
    assert!(!g.empty());
    assert!(g.has_vertex(&"A".to_string()));

    g.add_vertex("B".to_string())?;
    g.add_edge(&"A".to_string(), &"B".to_string())?;
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(&"A".to_string(), &"B".to_string()));
    assert!(!g.has_edge(&"B".to_string(), &"A".to_string()));
    assert!(!g.has_edge(&"A".to_string(), &"Z".to_string()));
    Ok(())
}

#[test]
fn duplicates_are_rejected_without_changes() -> Result<()> {
    let mut g = graph_of(&["A", "B"], &[("A", "B")])?;

    assert_eq!(g.add_vertex("A"), Err(GraphError::VertexAlreadyExists));
    assert_eq!(g.vertex_count(), 2);

    assert_eq!(g.add_edge(&"A", &"B"), Err(GraphError::EdgeAlreadyExists));
    assert_eq!(g.edge_count(), 1);

    assert_eq!(g.add_edge(&"A", &"C"), Err(GraphError::VertexNotExists));
    assert_eq!(g.edge_count(), 1);
    Ok(())
}

#[test]
fn degrees_and_vertex_removal() -> Result<()> {
    let mut g = graph_of(&["A", "B", "C"], &[("A", "B"), ("C", "B")])?;

    assert_eq!(g.in_degree(&"B")?, 2);
    assert_eq!(g.out_degree(&"B")?, 0);
    assert_eq!(g.out_degree(&"A")?, 1);
    assert_eq!(g.edge_degree(&"A", &"B")?, 2);

    g.remove_vertex(&"B")?;
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_vertex(&"B"));
    Ok(())
}

#[test]
fn self_loop_degree_and_rendering() -> Result<()> {
    let mut g = graph_of(&["A"], &[])?;
    g.add_edge(&"A", &"A")?;
    assert_eq!(g.edge_degree(&"A", &"A")?, 1);

    let text = g.to_string();
    assert!(text.contains("Vertices:"));
    assert!(text.contains("Edges:"));
    assert!(text.lines().any(|l| l.trim() == "A -> A"));
    Ok(())
}

#[test]
fn display_layout() -> Result<()> {
    let g = graph_of(&["x", "y"], &[("x", "y"), ("y", "x")])?;
    assert_eq!(
        g.to_string(),
        "Vertices:\n  x\n  y\nEdges:\n  x -> y\n  y -> x"
    );
    let empty: IncidenceGraph<u8> = IncidenceGraph::new();
    assert_eq!(empty.to_string(), "Vertices:\nEdges:");
    Ok(())
}

#[test]
fn remove_edge_keeps_vertices() -> Result<()> {
    let mut g = graph_of(&["A", "B"], &[("A", "B")])?;
    g.remove_edge(&"A", &"B")?;
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertex_count(), 2);
    assert!(!g.has_edge(&"A", &"B"));

    assert_eq!(g.remove_edge(&"A", &"B"), Err(GraphError::EdgeNotExists));
    assert_eq!(g.remove_vertex(&"X"), Err(GraphError::VertexNotExists));
    Ok(())
}

#[test]
fn vertex_iterators() -> Result<()> {
    let g = graph_of(&["A", "B"], &[])?;
    assert_eq!(g.begin_vertices().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(g.rbegin_vertices().collect::<Vec<_>>(), vec!["B", "A"]);
    assert_eq!(g.const_begin_vertices().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(g.const_rbegin_vertices().collect::<Vec<_>>(), vec!["B", "A"]);
    Ok(())
}

#[test]
fn edge_iterators() -> Result<()> {
    let g = graph_of(&["A", "B", "C"], &[("A", "B"), ("B", "C")])?;
    let forward = vec![("A", "B"), ("B", "C")];
    let backward = vec![("B", "C"), ("A", "B")];
    assert_eq!(g.begin_edges().collect::<Vec<_>>(), forward);
    assert_eq!(g.rbegin_edges().collect::<Vec<_>>(), backward);
    assert_eq!(g.const_begin_edges().collect::<Vec<_>>(), forward);
    assert_eq!(g.const_rbegin_edges().collect::<Vec<_>>(), backward);
    Ok(())
}

#[test]
fn incident_edge_iterators() -> Result<()> {
    let g = graph_of(&["A", "B", "C"], &[("A", "B"), ("C", "B"), ("A", "C")])?;
    let incident: Vec<_> = g.begin_incident_edges(&"B")?.collect();
    assert_eq!(incident, vec![("A", "B"), ("C", "B")]);

    let mut reversed = incident.clone();
    reversed.reverse();
    assert_eq!(g.rbegin_incident_edges(&"B")?.collect::<Vec<_>>(), reversed);
    assert_eq!(g.const_begin_incident_edges(&"B")?.collect::<Vec<_>>(), incident);
    assert_eq!(g.const_rbegin_incident_edges(&"B")?.collect::<Vec<_>>(), reversed);

    assert_eq!(
        g.begin_incident_edges(&"Z").err(),
        Some(GraphError::VertexNotExists)
    );
    Ok(())
}

#[test]
fn adjacent_vertex_iterators_follow_out_edges_only() -> Result<()> {
    let g = graph_of(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("C", "A")])?;
    let adjacent: Vec<_> = g.begin_adjacent_vertices(&"A")?.collect();
    assert_eq!(adjacent, vec!["B", "C"]);
    assert_eq!(g.rbegin_adjacent_vertices(&"A")?.collect::<Vec<_>>(), vec!["C", "B"]);
    assert_eq!(g.const_begin_adjacent_vertices(&"A")?.collect::<Vec<_>>(), adjacent);
    assert_eq!(g.const_rbegin_adjacent_vertices(&"A")?.collect::<Vec<_>>(), vec!["C", "B"]);
    assert_eq!(g.begin_adjacent_vertices(&"B")?.count(), 0);

    assert_eq!(
        g.const_rbegin_adjacent_vertices(&"Z").err(),
        Some(GraphError::VertexNotExists)
    );
    Ok(())
}

#[test]
fn snapshots_ignore_later_mutation() -> Result<()> {
    let mut g = graph_of(&["A", "B"], &[("A", "B")])?;
    let vertices = g.const_begin_vertices();
    let edges = g.begin_edges();

    g.add_vertex("C")?;
    g.remove_edge(&"A", &"B")?;

    assert_eq!(vertices.collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(edges.collect::<Vec<_>>(), vec![("A", "B")]);
    Ok(())
}

#[test]
fn erase_vertex_by_iterator() -> Result<()> {
    let mut g = graph_of(&["A", "B"], &[])?;
    let it = g.begin_vertices();
    g.erase_vertex(&it)?;
    assert_eq!(g.vertex_count(), 1);
    assert!(g.has_vertex(&"B"));
    assert!(!g.has_vertex(&"A"));
    Ok(())
}

#[test]
fn erase_edge_by_iterator() -> Result<()> {
    let mut g = graph_of(&["A", "B"], &[("A", "B")])?;
    let it = g.begin_edges();
    g.erase_edge(&it)?;
    assert_eq!(g.edge_count(), 0);

    // The iterator is stale after the erase.
    assert_eq!(g.erase_edge(&it), Err(GraphError::ForeignIterator));
    Ok(())
}

#[test]
fn erase_matches_direct_removal() -> Result<()> {
    let edges = [("A", "B"), ("B", "C"), ("C", "A"), ("C", "C")];
    let base = graph_of(&["A", "B", "C", "D"], &edges)?;

    for target in ["A", "B", "C", "D"] {
        let mut direct = base.clone();
        direct.remove_vertex(&target)?;

        let mut erased = base.clone();
        let mut it = erased.const_begin_vertices();
        while it.current() != Some(&target) {
            it.next();
        }
        erased.erase_vertex(&it)?;
        assert_eq!(erased, direct, "erasing {target}");
    }

    for (from, to) in edges {
        let mut direct = base.clone();
        direct.remove_edge(&from, &to)?;

        let mut erased = base.clone();
        let mut it = erased.rbegin_edges();
        while it.current() != Some(&(from, to)) {
            it.next();
        }
        erased.erase_edge(&it)?;
        assert_eq!(erased, direct, "erasing {from} -> {to}");
    }
    Ok(())
}

#[test]
fn equality_is_structural_and_order_sensitive() -> Result<()> {
    let g1 = graph_of(&["A", "B"], &[("A", "B")])?;
    let g2 = graph_of(&["A", "B"], &[("A", "B")])?;
    let g3 = graph_of(&["X"], &[])?;
    let swapped = graph_of(&["B", "A"], &[("A", "B")])?;

    assert_eq!(g1, g1);
    assert_eq!(g1, g2);
    assert_eq!(g2, g1);
    assert_ne!(g1, g3);
    assert_ne!(g1, swapped);
    Ok(())
}

#[test]
fn ordering_compares_edge_counts() -> Result<()> {
    let g1 = graph_of(&["A", "B"], &[("A", "B")])?;
    let g2 = graph_of(&["X", "Y"], &[("X", "Y"), ("Y", "X")])?;
    assert!(g1 < g2);
    assert!(g2 > g1);
    assert!(g1 <= g2);
    assert!(g2 >= g1);
    Ok(())
}

#[test]
fn deep_copy_with_custom_type() -> Result<()> {
    let a = Sample::new(10.0);
    let b = Sample::new(20.0);
    let mut g1 = IncidenceGraph::new();
    g1.add_vertex(a.clone())?;
    g1.add_vertex(b.clone())?;
    g1.add_edge(&a, &b)?;

    let mut g2 = g1.clone();
    assert_eq!(g1, g2);
    assert!(g2.has_edge(&a, &b));
    assert_eq!(g2.vertex_count(), 2);

    g2.remove_vertex(&b)?;
    assert!(g1.has_edge(&a, &b));
    assert_eq!(g1.in_degree(&b)?, 1);
    assert_eq!(g1.out_degree(&a)?, 1);
    assert_eq!(g1.vertices()[1].label, "sample-20");
    Ok(())
}

#[test]
fn iterator_prev_and_equality() -> Result<()> {
    let g = graph_of(&["A", "B", "C"], &[])?;
    let start = g.begin_vertices();
    let mut it = start.clone();
    assert_eq!(it.next(), Some("A"));
    assert_eq!(it.next(), Some("B"));
    assert_ne!(it, start);
    assert_eq!(it.prev()?, "B");
    assert_eq!(it.prev()?, "A");
    assert_eq!(it, start);
    assert_eq!(it.prev(), Err(GraphError::Exhausted));

    // Separate factory calls build separate snapshots.
    assert_ne!(g.begin_vertices(), g.begin_vertices());

    let const_it: ConstBidirectionalIter<_> = start.clone().into();
    assert!(start == const_it);
    assert_eq!(const_it.snapshot(), &["A", "B", "C"]);
    Ok(())
}

#[test]
fn from_edges_adds_vertices_in_order() -> Result<()> {
    let g = IncidenceGraph::from_edges([(1, 2), (3, 1), (2, 2)])?;
    assert_eq!(g.vertices(), &[1, 2, 3]);
    assert_eq!(g.edge_ids(), &[(0, 1), (2, 0), (1, 1)]);

    let dup = IncidenceGraph::from_edges([(1, 2), (1, 2)]);
    assert_eq!(dup.err(), Some(GraphError::EdgeAlreadyExists));
    Ok(())
}
