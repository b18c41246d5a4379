use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::distance::Kilometers;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;

use super::routing_path::RoutingPath;

#[derive(Copy, Clone, Debug)]
struct HeapItem<'a> {
    node_id: &'a str,
    distance: Kilometers,
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
        // Flip distance to make this a min-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.node_id.cmp(other.node_id))
    }
}

struct NodeData<'a> {
    distance: Kilometers,
    settled: bool,
    parent: Option<&'a str>,
}

impl NodeData<'_> {
    fn new() -> Self {
        NodeData {
            distance: Kilometers::INFINITY,
            settled: false,
            parent: None,
        }
    }
}

/// Single source shortest path search with early exit on the target.
///
/// Nodes that are not in `data` have an infinite tentative distance. Heap entries for
/// settled nodes, or entries whose distance was improved after they were pushed, are
/// skipped on pop.
pub struct Dijkstra<'a, G: Graph> {
    graph: &'a G,
    heap: BinaryHeap<HeapItem<'a>>,
    data: FxHashMap<&'a str, NodeData<'a>>,
}

impl<'a, G: Graph> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Dijkstra {
            graph,
            heap: BinaryHeap::with_capacity(64),
            data: FxHashMap::default(),
        }
    }

    fn init(&mut self, start: &'a str) {
        self.heap.clear();
        self.data.clear();

        self.heap.push(HeapItem {
            node_id: start,
            distance: Kilometers::ZERO,
        });
        self.update_node_data(start, Kilometers::ZERO, None);
    }

    fn update_node_data(&mut self, node: &'a str, distance: Kilometers, parent: Option<&'a str>) {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.distance = distance;
        data.parent = parent;
    }

    #[inline(always)]
    fn is_settled(&self, node: &str) -> bool {
        self.data.get(node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_distance(&self, node: &str) -> Kilometers {
        self.data
            .get(node)
            .map_or(Kilometers::INFINITY, |data| data.distance)
    }

    fn set_settled(&mut self, node: &'a str) {
        self.data.entry(node).or_insert_with(NodeData::new).settled = true;
    }

    fn build_path(&self, start: &'a str, end: &'a str) -> RoutingPath {
        let distance = self.current_shortest_distance(end);
        if !distance.is_finite() {
            return RoutingPath::empty();
        }

        let mut node_ids = vec![end.to_string()];
        let mut node = end;

        while node != start {
            match self.data.get(node).and_then(|data| data.parent) {
                Some(parent) => {
                    node_ids.push(parent.to_string());
                    node = parent;
                }
                None => return RoutingPath::empty(),
            }
        }

        node_ids.reverse();

        RoutingPath::new(node_ids, distance)
    }

    /// Shortest path from `start` to `end`. Unknown ids and disconnected pairs give an
    /// empty path.
    pub fn calc_path(&mut self, start: &str, end: &str) -> RoutingPath {
        let graph = self.graph;

        let (Some(start), Some(end)) = (graph.node_key(start), graph.node_key(end)) else {
            debug!(start, end, "dijkstra: unknown start or end node");
            return RoutingPath::empty();
        };

        let stopwatch = Stopwatch::new("dijkstra/calc_path");
        self.init(start);

        let mut settled_nodes = 0;
        let mut relaxed_edges = 0;

        while let Some(HeapItem { node_id, distance }) = self.heap.pop() {
            if self.is_settled(node_id) {
                continue;
            }

            // Superseded by a shorter distance pushed later
            if distance > self.current_shortest_distance(node_id) {
                continue;
            }

            self.set_settled(node_id);
            settled_nodes += 1;

            if node_id == end {
                break;
            }

            for (adj_node, weight) in graph.neighbors(node_id) {
                if self.is_settled(adj_node) {
                    continue;
                }

                let next_distance = distance + weight;

                if next_distance < self.current_shortest_distance(adj_node) {
                    relaxed_edges += 1;
                    self.update_node_data(adj_node, next_distance, Some(node_id));
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        distance: next_distance,
                    });
                }
            }
        }

        let path = self.build_path(start, end);

        debug!(
            start,
            end,
            settled_nodes,
            relaxed_edges,
            path_len = path.len(),
            "dijkstra finished"
        );
        stopwatch.report();

        path
    }

    /// Like [`Dijkstra::calc_path`] but reports why no path was returned.
    pub fn try_calc_path(&mut self, start: &str, end: &str) -> GraphResult<RoutingPath> {
        for node in [start, end] {
            if !self.graph.contains(node) {
                return Err(GraphError::UnknownNode(node.to_string()));
            }
        }

        let path = self.calc_path(start, end);

        if path.is_empty() {
            return Err(GraphError::NoPath {
                from: start.to_string(),
                to: end.to_string(),
            });
        }

        Ok(path)
    }
}
