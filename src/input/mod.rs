//! Random input generation
//!
//! This is the data source the recorders consume, kept apart from the engine:
//! recorders are deterministic, everything random happens here. Callers pass
//! the RNG in, so a seeded `StdRng` reproduces the same inputs.

use crate::recorder::AdjacencyList;
use crate::step::{NodeId, Value};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Smallest generated array value
pub const VALUE_MIN: Value = 5;
/// One past the largest generated array value
pub const VALUE_MAX: Value = 105;

/// Chance that an orthogonal neighbour gets an edge
const EDGE_PROBABILITY: f64 = 0.7;

/// Right, down, left, up
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// `size` values drawn uniformly from `VALUE_MIN..VALUE_MAX`
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Value> {
    (0..size).map(|_| random_value(rng)).collect()
}

/// One value in the same range, for inserting into a live structure
pub fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Value {
    rng.gen_range(VALUE_MIN..VALUE_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub rows: usize,
    pub cols: usize,
    pub directed: bool,
    pub weighted: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            rows: 10,
            cols: 15,
            directed: false,
            weighted: false,
        }
    }
}

/// A generated grid graph with its chosen endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    pub graph: AdjacencyList,
    pub rows: usize,
    pub cols: usize,
    pub start: NodeId,
    pub target: Option<NodeId>,
}

impl GridGraph {
    /// `(row, col)` of a node id
    pub fn position(&self, node: NodeId) -> (usize, usize) {
        (node / self.cols, node % self.cols)
    }
}

/// Random graph over a `rows × cols` grid of nodes numbered row-major.
///
/// Every orthogonal neighbour pair is considered from both sides and kept with
/// probability 0.7. In undirected mode an edge whose reverse already exists is
/// skipped and kept edges are added in both directions. Weights are `1..=9`
/// when weighted, 1 otherwise. Start and target are distinct random nodes.
pub fn random_grid_graph<R: Rng + ?Sized>(rng: &mut R, options: GridOptions) -> GridGraph {
    let GridOptions {
        rows,
        cols,
        directed,
        weighted,
    } = options;
    let node_count = rows * cols;

    let mut edges: Vec<(NodeId, NodeId, u32)> = Vec::new();
    let mut added: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();

    for row in 0..rows {
        for col in 0..cols {
            let node = row * cols + col;
            for (dr, dc) in DIRECTIONS {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };
                if r >= rows || c >= cols || !rng.gen_bool(EDGE_PROBABILITY) {
                    continue;
                }

                let neighbor = r * cols + c;
                if !directed && added.contains(&(neighbor, node)) {
                    continue;
                }

                let weight = if weighted { rng.gen_range(1..=9) } else { 1 };
                added.insert((node, neighbor));
                edges.push((node, neighbor, weight));
            }
        }
    }

    let mut graph = AdjacencyList::with_nodes(node_count);
    for &(from, to, weight) in &edges {
        if directed {
            graph.add_edge(from, to, weight);
        } else {
            graph.add_undirected_edge(from, to, weight);
        }
    }

    let (start, target) = pick_endpoints(rng, node_count);
    log::debug!(
        "generated {}x{} grid graph with {} edges, {} -> {:?}",
        rows,
        cols,
        edges.len(),
        start,
        target
    );

    GridGraph {
        graph,
        rows,
        cols,
        start,
        target,
    }
}

fn pick_endpoints<R: Rng + ?Sized>(rng: &mut R, node_count: usize) -> (NodeId, Option<NodeId>) {
    if node_count < 2 {
        return (0, None);
    }
    let start = rng.gen_range(0..node_count);
    let mut target = rng.gen_range(0..node_count);
    while target == start {
        target = rng.gen_range(0..node_count);
    }
    (start, Some(target))
}
