#[cfg(test)]
pub mod test_graph {
    use fxhash::FxHashMap;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::{
        distance::Kilometers,
        geopoint::GeoPoint,
        graph::{GeoGraph, Graph},
    };

    pub mod london {
        use super::*;

        pub const A: (&str, f64, f64) = ("A", 51.505, -0.09);
        pub const B: (&str, f64, f64) = ("B", 51.51, -0.1);
        pub const C: (&str, f64, f64) = ("C", 51.515, -0.095);
        pub const D: (&str, f64, f64) = ("D", 51.52, -0.085);

        pub fn points() -> Vec<GeoPoint> {
            [A, B, C, D]
                .iter()
                .map(|&(_, lat, lon)| GeoPoint::new(lat, lon))
                .collect()
        }

        fn with_nodes(nodes: &[(&str, f64, f64)]) -> GeoGraph {
            let mut graph = GeoGraph::new();
            for &(id, lat, lon) in nodes {
                graph.add_node(id, lat, lon).unwrap();
            }
            graph
        }

        /// A - B - C
        pub fn line_graph() -> GeoGraph {
            let mut graph = with_nodes(&[A, B, C]);
            graph.add_edge("A", "B");
            graph.add_edge("B", "C");
            graph
        }

        /// A-B, A-C, B-C, B-D, C-D
        pub fn diamond_graph() -> GeoGraph {
            let mut graph = with_nodes(&[A, B, C, D]);
            graph.add_edge("A", "B");
            graph.add_edge("A", "C");
            graph.add_edge("B", "C");
            graph.add_edge("B", "D");
            graph.add_edge("C", "D");
            graph
        }

        /// {A, B} and {X, Y}, no edge between the two
        pub fn two_components() -> GeoGraph {
            let mut graph = with_nodes(&[A, B, ("X", 48.8566, 2.3522), ("Y", 48.86, 2.34)]);
            graph.add_edge("A", "B");
            graph.add_edge("X", "Y");
            graph
        }
    }

    /// Seeded graph of `nodes` points around central London, each pair connected with
    /// probability `density`.
    pub fn random_graph(seed: u64, nodes: usize, density: f64) -> GeoGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = GeoGraph::new();

        for i in 0..nodes {
            let lat = 51.45 + rng.random_range(0.0..0.1);
            let lon = -0.2 + rng.random_range(0.0..0.2);
            graph.add_node(format!("N{i}"), lat, lon).unwrap();
        }

        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if rng.random_bool(density) {
                    graph.add_edge(&format!("N{i}"), &format!("N{j}"));
                }
            }
        }

        graph
    }

    /// Lightest entry between two adjacent nodes.
    pub fn edge_weight(graph: &impl Graph, from: &str, to: &str) -> Option<Kilometers> {
        graph
            .neighbors(from)
            .filter(|&(id, _)| id == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Sum of edge weights along `path`, `None` if two consecutive nodes are not adjacent.
    pub fn path_weight(graph: &impl Graph, path: &[String]) -> Option<Kilometers> {
        path.windows(2)
            .map(|pair| edge_weight(graph, &pair[0], &pair[1]))
            .sum()
    }

    /// Cheapest simple path by exhaustive depth first enumeration.
    pub fn brute_force_shortest(graph: &impl Graph, start: &str, end: &str) -> Option<Kilometers> {
        fn visit(
            graph: &impl Graph,
            current: &str,
            end: &str,
            visited: &mut Vec<String>,
            weight: Kilometers,
            best: &mut Option<Kilometers>,
        ) {
            if current == end {
                if best.is_none_or(|b| weight < b) {
                    *best = Some(weight);
                }
                return;
            }

            let neighbors: Vec<(String, Kilometers)> = graph
                .neighbors(current)
                .map(|(id, w)| (id.to_string(), w))
                .collect();

            for (next, w) in neighbors {
                if visited.contains(&next) {
                    continue;
                }
                visited.push(next.clone());
                visit(graph, &next, end, visited, weight + w, best);
                visited.pop();
            }
        }

        if !graph.contains(start) || !graph.contains(end) {
            return None;
        }

        let mut best = None;
        let mut visited = vec![start.to_string()];
        visit(graph, start, end, &mut visited, Kilometers::ZERO, &mut best);
        best
    }

    /// Nodes reachable from `start`, `start` included.
    pub fn component(graph: &impl Graph, start: &str) -> Vec<String> {
        let mut seen = vec![start.to_string()];
        let mut stack = vec![start.to_string()];

        while let Some(current) = stack.pop() {
            for (next, _) in graph.neighbors(&current) {
                if !seen.iter().any(|s| s == next) {
                    seen.push(next.to_string());
                    stack.push(next.to_string());
                }
            }
        }

        seen
    }

    struct UnionFind {
        parent: FxHashMap<String, String>,
    }

    impl UnionFind {
        fn new(ids: &[String]) -> Self {
            UnionFind {
                parent: ids.iter().map(|id| (id.clone(), id.clone())).collect(),
            }
        }

        fn find(&mut self, id: &str) -> String {
            let parent = self.parent[id].clone();
            if parent == id {
                parent
            } else {
                let root = self.find(&parent);
                self.parent.insert(id.to_string(), root.clone());
                root
            }
        }

        /// `false` when both ids already share a root.
        fn union(&mut self, a: &str, b: &str) -> bool {
            let root_a = self.find(a);
            let root_b = self.find(b);
            if root_a == root_b {
                return false;
            }
            self.parent.insert(root_a, root_b);
            true
        }
    }

    /// `true` when `edges` connect all of `nodes` without a cycle.
    pub fn is_spanning_tree(nodes: &[String], edges: &[(String, String)]) -> bool {
        if edges.len() + 1 != nodes.len() {
            return false;
        }

        let mut union_find = UnionFind::new(nodes);
        edges.iter().all(|(from, to)| {
            nodes.contains(from) && nodes.contains(to) && union_find.union(from, to)
        })
    }

    /// Lightest spanning tree of `start`'s component, trying every subset of its edges.
    pub fn brute_force_mst_weight(graph: &impl Graph, start: &str) -> Kilometers {
        let nodes = component(graph, start);

        let mut edges: Vec<(String, String, Kilometers)> = Vec::new();
        for from in nodes.iter() {
            for (to, weight) in graph.neighbors(from) {
                if from.as_str() < to {
                    edges.push((from.clone(), to.to_string(), weight));
                }
            }
        }

        let mut best = Kilometers::INFINITY;
        let edge_count = edges.len();
        assert!(edge_count < 24, "graph too large for brute force");

        for mask in 0u32..(1 << edge_count) {
            if mask.count_ones() as usize + 1 != nodes.len() {
                continue;
            }

            let subset: Vec<&(String, String, Kilometers)> = (0..edge_count)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| &edges[bit])
                .collect();

            let pairs: Vec<(String, String)> = subset
                .iter()
                .map(|(from, to, _)| (from.clone(), to.clone()))
                .collect();

            if is_spanning_tree(&nodes, &pairs) {
                let weight: Kilometers = subset.iter().map(|(_, _, weight)| *weight).sum();
                best = best.min(weight);
            }
        }

        best
    }
}
