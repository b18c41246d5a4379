use serde::Serialize;

use crate::distance::Kilometers;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeEdge {
    parent: String,
    child: String,
    weight: Kilometers,
}

impl SpanningTreeEdge {
    pub fn new(parent: String, child: String, weight: Kilometers) -> Self {
        SpanningTreeEdge {
            parent,
            child,
            weight,
        }
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn child(&self) -> &str {
        &self.child
    }

    pub fn weight(&self) -> Kilometers {
        self.weight
    }
}

/// Minimum spanning tree of the root's connected component. Nodes in other components
/// are not part of it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SpanningTree {
    root: Option<String>,
    edges: Vec<SpanningTreeEdge>,
    total_weight: Kilometers,
}

impl SpanningTree {
    pub fn new(root: String, edges: Vec<SpanningTreeEdge>) -> Self {
        let total_weight = edges.iter().map(SpanningTreeEdge::weight).sum();
        SpanningTree {
            root: Some(root),
            edges,
            total_weight,
        }
    }

    /// Result for an unknown root.
    pub fn empty() -> Self {
        SpanningTree::default()
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Edges in the order their child node joined the tree.
    pub fn edges(&self) -> &[SpanningTreeEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Kilometers {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Root followed by every child, in the order they joined the tree.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_deref()
            .into_iter()
            .chain(self.edges.iter().map(SpanningTreeEdge::child))
    }
}
