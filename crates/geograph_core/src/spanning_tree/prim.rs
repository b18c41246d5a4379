use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::distance::Kilometers;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;

use super::spanning_tree::{SpanningTree, SpanningTreeEdge};

#[derive(Copy, Clone, Debug)]
struct HeapItem<'a> {
    node_id: &'a str,
    /// Weight of the cheapest known edge connecting `node_id` to the tree
    key: Kilometers,
}

impl PartialEq for HeapItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem<'_> {}

impl PartialOrd for HeapItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip key to make this a min-heap
        other
            .key
            .cmp(&self.key)
            .then_with(|| self.node_id.cmp(other.node_id))
    }
}

struct NodeData<'a> {
    key: Kilometers,
    visited: bool,
    parent: Option<&'a str>,
}

impl NodeData<'_> {
    fn new() -> Self {
        NodeData {
            key: Kilometers::INFINITY,
            visited: false,
            parent: None,
        }
    }
}

/// Prim's minimum spanning tree, grown from a root node.
///
/// Only the root's connected component is covered: nodes that never receive a parent
/// are left out of the result.
pub struct Prim<'a, G: Graph> {
    graph: &'a G,
    heap: BinaryHeap<HeapItem<'a>>,
    data: FxHashMap<&'a str, NodeData<'a>>,
}

impl<'a, G: Graph> Prim<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Prim {
            graph,
            heap: BinaryHeap::with_capacity(64),
            data: FxHashMap::default(),
        }
    }

    fn init(&mut self, root: &'a str) {
        self.heap.clear();
        self.data.clear();

        self.heap.push(HeapItem {
            node_id: root,
            key: Kilometers::ZERO,
        });
        self.data.insert(
            root,
            NodeData {
                key: Kilometers::ZERO,
                visited: false,
                parent: None,
            },
        );
    }

    #[inline(always)]
    fn is_visited(&self, node: &str) -> bool {
        self.data.get(node).is_some_and(|data| data.visited)
    }

    #[inline(always)]
    fn key(&self, node: &str) -> Kilometers {
        self.data
            .get(node)
            .map_or(Kilometers::INFINITY, |data| data.key)
    }

    /// Marks `node` as part of the tree and returns the parent it was attached to.
    fn visit(&mut self, node: &'a str) -> Option<&'a str> {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.visited = true;
        data.parent
    }

    /// Minimum spanning tree of `root`'s component. An unknown root gives an empty tree.
    pub fn calc_tree(&mut self, root: &str) -> SpanningTree {
        let graph = self.graph;

        let Some(root) = graph.node_key(root) else {
            debug!(root, "prim: unknown root node");
            return SpanningTree::empty();
        };

        let stopwatch = Stopwatch::new("prim/calc_tree");
        self.init(root);

        let mut edges: Vec<SpanningTreeEdge> = Vec::new();

        while let Some(HeapItem { node_id, key }) = self.heap.pop() {
            if self.is_visited(node_id) {
                continue;
            }

            if let Some(parent) = self.visit(node_id) {
                edges.push(SpanningTreeEdge::new(
                    parent.to_string(),
                    node_id.to_string(),
                    key,
                ));
            }

            for (adj_node, weight) in graph.neighbors(node_id) {
                if self.is_visited(adj_node) {
                    continue;
                }

                if weight < self.key(adj_node) {
                    let data = self.data.entry(adj_node).or_insert_with(NodeData::new);
                    data.key = weight;
                    data.parent = Some(node_id);

                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        key: weight,
                    });
                }
            }
        }

        let tree = SpanningTree::new(root.to_string(), edges);

        debug!(
            root,
            edges = tree.len(),
            total_weight = tree.total_weight().value(),
            "prim finished"
        );
        stopwatch.report();

        tree
    }

    /// Like [`Prim::calc_tree`] but fails on an unknown root.
    pub fn try_calc_tree(&mut self, root: &str) -> GraphResult<SpanningTree> {
        if !self.graph.contains(root) {
            return Err(GraphError::UnknownNode(root.to_string()));
        }

        Ok(self.calc_tree(root))
    }
}
