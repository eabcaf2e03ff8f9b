//! Graph traversal recorders
//!
//! Each traversal starts from a step whose `visited` list holds only the start
//! node. Every time a node is discovered across an edge, one step is appended
//! with that discovery added to the list. The run ends with exactly one
//! resolution step that carries the path from start to target, rebuilt from the
//! predecessor map. The path stays empty if the target was never reached.

use super::AlgorithmInfo;
use crate::step::{GraphStep, NodeId, StepLog, StepSequence, Visit};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::VecDeque;

/// Outgoing edge in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub node: NodeId,
    pub weight: u32,
}

/// Node → ordered outgoing edges
///
/// Edge order is significant: traversals visit neighbours in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    nodes: FxHashMap<NodeId, Vec<Edge>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with nodes `0..count` and no edges
    pub fn with_nodes(count: usize) -> Self {
        let mut graph = Self::new();
        for node in 0..count {
            graph.add_node(node);
        }
        graph
    }

    /// Directed graph from `(from, to, weight)` triples
    pub fn from_edges(edges: &[(NodeId, NodeId, u32)]) -> Self {
        let mut graph = Self::new();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.entry(node).or_default();
    }

    /// Add a directed edge, creating either endpoint if needed
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: u32) {
        self.add_node(to);
        self.nodes
            .entry(from)
            .or_default()
            .push(Edge { node: to, weight });
    }

    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: u32) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Outgoing edges of `node`; unknown nodes have none
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.nodes.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    /// All node ids in ascending order
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.nodes.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Lightest edge from `from` to `to`, if any
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .filter(|edge| edge.node == to)
            .map(|edge| edge.weight)
            .min()
    }
}

/// Total weight of a resolved path, or `None` if it uses a missing edge
pub fn path_weight(graph: &AdjacencyList, path: &[Visit]) -> Option<u64> {
    path.iter().try_fold(0u64, |total, visit| match visit.from {
        Some(from) => graph
            .edge_weight(from, visit.node)
            .map(|weight| total + u64::from(weight)),
        None => Some(total),
    })
}

/// Recording state shared by the traversals
struct Traversal {
    start: NodeId,
    log: StepLog<GraphStep>,
    predecessors: FxHashMap<NodeId, NodeId>,
}

impl Traversal {
    fn new(graph: &AdjacencyList, start: NodeId) -> Self {
        if !graph.contains(start) {
            log::debug!("start node {} is not in the graph", start);
        }
        Traversal {
            start,
            log: StepLog::new(GraphStep {
                visited: vec![Visit::origin(start)],
                path: Vec::new(),
            }),
            predecessors: FxHashMap::default(),
        }
    }

    /// Record that `to` was reached from `from`
    fn discover(&mut self, from: NodeId, to: NodeId) {
        self.predecessors.insert(to, from);
        let mut visited = self.log.last().visited.clone();
        visited.push(Visit::edge(from, to));
        self.log.push(GraphStep {
            visited,
            path: Vec::new(),
        });
    }

    fn resolve(
        mut self,
        algorithm: GraphAlgorithm,
        target: Option<NodeId>,
        reached: bool,
    ) -> StepSequence<GraphStep> {
        let path = match target {
            Some(target) if reached => self.reconstruct_path(target),
            _ => Vec::new(),
        };
        log::debug!(
            "{} recorded {} steps, path of {} nodes",
            algorithm.name(),
            self.log.len() + 1,
            path.len()
        );
        let visited = self.log.last().visited.clone();
        self.log.push(GraphStep { visited, path });
        self.log.finish()
    }

    /// Walk predecessors back from `target` and reverse
    fn reconstruct_path(&self, target: NodeId) -> Vec<Visit> {
        let mut path = Vec::new();
        let mut current = target;

        while current != self.start {
            // A predecessor chain can never be longer than the map itself
            if path.len() > self.predecessors.len() {
                return Vec::new();
            }
            match self.predecessors.get(&current) {
                Some(&prev) => {
                    path.push(Visit::edge(prev, current));
                    current = prev;
                }
                None => return Vec::new(),
            }
        }

        path.push(Visit {
            node: self.start,
            from: None,
            to: Some(self.start),
        });
        path.reverse();
        path
    }
}

/// Breadth-first search; the target is checked when it leaves the frontier
pub fn breadth_first_steps(
    graph: &AdjacencyList,
    start: NodeId,
    target: Option<NodeId>,
) -> StepSequence<GraphStep> {
    let mut trace = Traversal::new(graph, start);
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::from([start]);
    let mut reached = false;
    seen.insert(start);

    while let Some(current) = queue.pop_front() {
        if Some(current) == target {
            reached = true;
            break;
        }

        for edge in graph.neighbors(current) {
            if seen.insert(edge.node) {
                queue.push_back(edge.node);
                trace.discover(current, edge.node);
            }
        }
    }

    trace.resolve(GraphAlgorithm::Bfs, target, reached)
}

/// Depth-first search; stops on the first branch that reaches the target
pub fn depth_first_steps(
    graph: &AdjacencyList,
    start: NodeId,
    target: Option<NodeId>,
) -> StepSequence<GraphStep> {
    let mut trace = Traversal::new(graph, start);
    let mut seen = FxHashSet::default();
    let reached = dfs_visit(graph, start, target, &mut seen, &mut trace);
    trace.resolve(GraphAlgorithm::Dfs, target, reached)
}

fn dfs_visit(
    graph: &AdjacencyList,
    node: NodeId,
    target: Option<NodeId>,
    seen: &mut FxHashSet<NodeId>,
    trace: &mut Traversal,
) -> bool {
    seen.insert(node);
    if Some(node) == target {
        return true;
    }

    for edge in graph.neighbors(node) {
        if !seen.contains(&edge.node) {
            trace.discover(node, edge.node);
            if dfs_visit(graph, edge.node, target, seen, trace) {
                return true;
            }
        }
    }

    false
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    node: NodeId,
    distance: u64,
}

/// Dijkstra's shortest path.
///
/// The working set is a plain list re-sorted by distance on every iteration.
/// The sort is stable, so equal distances are taken in insertion order. A node
/// may sit in the list several times; stale entries are skipped once the node
/// is finalized.
pub fn dijkstra_steps(
    graph: &AdjacencyList,
    start: NodeId,
    target: Option<NodeId>,
) -> StepSequence<GraphStep> {
    let mut trace = Traversal::new(graph, start);
    let mut distances: FxHashMap<NodeId, u64> = FxHashMap::default();
    let mut finalized = FxHashSet::default();
    let mut working = vec![Candidate {
        node: start,
        distance: 0,
    }];
    distances.insert(start, 0);

    while !working.is_empty() {
        working.sort_by_key(|candidate| candidate.distance);
        let current = working.remove(0);

        if !finalized.insert(current.node) {
            continue;
        }
        if Some(current.node) == target {
            break;
        }

        for edge in graph.neighbors(current.node) {
            if finalized.contains(&edge.node) {
                continue;
            }
            let distance = current.distance + u64::from(edge.weight);
            let shorter = distances
                .get(&edge.node)
                .map_or(true, |&known| distance < known);
            if shorter {
                distances.insert(edge.node, distance);
                working.push(Candidate {
                    node: edge.node,
                    distance,
                });
                trace.discover(current.node, edge.node);
            }
        }
    }

    let reached = target.is_some_and(|t| finalized.contains(&t));
    trace.resolve(GraphAlgorithm::Dijkstra, target, reached)
}

/// Selectable graph traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 3] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::Dijkstra,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "bfs",
            GraphAlgorithm::Dfs => "dfs",
            GraphAlgorithm::Dijkstra => "dijkstra",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.id() == id)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            GraphAlgorithm::Bfs => AlgorithmInfo {
                name: "Breadth-First Search",
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                summary: "Explores every node at the current depth before going deeper; \
                          finds the fewest-edges path.",
            },
            GraphAlgorithm::Dfs => AlgorithmInfo {
                name: "Depth-First Search",
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                summary: "Follows each branch as far as possible before backtracking; \
                          the path found is not necessarily the shortest.",
            },
            GraphAlgorithm::Dijkstra => AlgorithmInfo {
                name: "Dijkstra's Algorithm",
                time_complexity: "O(V^2 log V) with a re-sorted working list",
                space_complexity: "O(V + E)",
                summary: "Finalizes nodes in order of distance from the start; \
                          finds the lightest path when weights are non-negative.",
            },
        }
    }

    pub fn record(
        self,
        graph: &AdjacencyList,
        start: NodeId,
        target: Option<NodeId>,
    ) -> StepSequence<GraphStep> {
        match self {
            GraphAlgorithm::Bfs => breadth_first_steps(graph, start, target),
            GraphAlgorithm::Dfs => depth_first_steps(graph, start, target),
            GraphAlgorithm::Dijkstra => dijkstra_steps(graph, start, target),
        }
    }

    pub fn next(self) -> Self {
        match self {
            GraphAlgorithm::Bfs => GraphAlgorithm::Dfs,
            GraphAlgorithm::Dfs => GraphAlgorithm::Dijkstra,
            GraphAlgorithm::Dijkstra => GraphAlgorithm::Bfs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = AdjacencyList::with_nodes(2);
        assert!(graph.neighbors(7).is_empty());
        assert!(graph.contains(1));
        assert!(!graph.contains(7));
    }

    #[test]
    fn test_edge_target_becomes_a_node() {
        let graph = AdjacencyList::from_edges(&[(3, 5, 1)]);
        assert!(graph.contains(5));
        assert!(graph.neighbors(5).is_empty());
    }

    #[test]
    fn test_edge_weight_picks_lightest_parallel_edge() {
        let graph = AdjacencyList::from_edges(&[(0, 1, 4), (0, 1, 2)]);
        assert_eq!(graph.edge_weight(0, 1), Some(2));
        assert_eq!(graph.edge_weight(1, 0), None);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.nodes(), vec![0, 1]);
    }

    #[test]
    fn test_start_equals_target() {
        let graph = AdjacencyList::from_edges(&[(0, 1, 1)]);
        for algo in GraphAlgorithm::ALL {
            let seq = algo.record(&graph, 0, Some(0));
            assert_eq!(seq.len(), 2, "{}", algo.name());
            assert_eq!(seq[1].path_nodes(), vec![0]);
        }
    }
}
