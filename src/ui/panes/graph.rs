//! Graph pane: grid graph drawn with box characters
//!
//! Node `row * cols + col` sits at text column `4 * col` of line `2 * row`.
//! The three cells between two nodes hold the horizontal edge, the line
//! between two rows holds the vertical edges. Directed edges show arrow heads,
//! weighted edges show their weight in the middle cell.

use super::pane_block;
use crate::recorder::AdjacencyList;
use crate::step::{GraphStep, NodeId, Visit};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

/// Grid shape and edge decoration of the graph being drawn
#[derive(Debug, Clone, Copy)]
pub struct GraphLayout {
    pub rows: usize,
    pub cols: usize,
    pub directed: bool,
    pub weighted: bool,
}

/// Data needed to render the graph pane
pub struct GraphRenderData<'a> {
    pub graph: &'a AdjacencyList,
    pub layout: GraphLayout,
    pub start: NodeId,
    pub target: Option<NodeId>,
    pub step: &'a GraphStep,
}

/// Unordered edge key
fn pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    (a.min(b), a.max(b))
}

struct Highlights {
    tree_edges: FxHashSet<(NodeId, NodeId)>,
    path_edges: FxHashSet<(NodeId, NodeId)>,
    newest: Option<NodeId>,
}

impl Highlights {
    fn new(step: &GraphStep) -> Self {
        let edges = |visits: &[Visit]| -> FxHashSet<(NodeId, NodeId)> {
            visits
                .iter()
                .filter_map(|v| v.from.map(|from| pair(from, v.node)))
                .collect()
        };
        Highlights {
            tree_edges: edges(&step.visited),
            path_edges: edges(&step.path),
            newest: if step.path.is_empty() {
                step.visited.last().map(|v| v.node)
            } else {
                None
            },
        }
    }

    fn edge_style(&self, a: NodeId, b: NodeId) -> Style {
        let key = pair(a, b);
        if self.path_edges.contains(&key) {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if self.tree_edges.contains(&key) {
            Style::default().fg(DEFAULT_THEME.primary)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        }
    }
}

fn weight_char(weight: u32) -> char {
    char::from_digit(weight, 10).unwrap_or('+')
}

fn horizontal_edge(
    graph: &AdjacencyList,
    layout: &GraphLayout,
    a: NodeId,
    b: NodeId,
) -> Option<String> {
    let right = graph.edge_weight(a, b);
    let left = graph.edge_weight(b, a);
    let weight = right.or(left)?;

    let head_left = if layout.directed && left.is_some() { '◀' } else { '─' };
    let head_right = if layout.directed && right.is_some() { '▶' } else { '─' };
    let middle = if layout.weighted { weight_char(weight) } else { '─' };
    Some([head_left, middle, head_right].iter().collect())
}

fn vertical_edge(
    graph: &AdjacencyList,
    layout: &GraphLayout,
    a: NodeId,
    b: NodeId,
) -> Option<char> {
    let down = graph.edge_weight(a, b);
    let up = graph.edge_weight(b, a);
    let weight = down.or(up)?;

    Some(match (layout.directed, down.is_some(), up.is_some()) {
        (true, true, true) => '↕',
        (true, true, false) => '▼',
        (true, false, _) => '▲',
        (false, ..) if layout.weighted => weight_char(weight),
        (false, ..) => '│',
    })
}

pub fn render_graph_pane(frame: &mut Frame, area: Rect, title: String, data: GraphRenderData) {
    let GraphRenderData {
        graph,
        layout,
        start,
        target,
        step,
    } = data;
    let highlights = Highlights::new(step);
    let node_span = |node: NodeId| {
        let glyph = if node == start {
            "S"
        } else if Some(node) == target {
            "T"
        } else if step.is_on_path(node) {
            "◆"
        } else if step.is_visited(node) {
            "●"
        } else {
            "○"
        };

        let style = if step.is_on_path(node) {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if highlights.newest == Some(node) {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else if step.is_visited(node) {
            Style::default().fg(DEFAULT_THEME.primary)
        } else if node == start || Some(node) == target {
            Style::default().fg(DEFAULT_THEME.accent)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        Span::styled(glyph, style)
    };

    let mut lines: Vec<Line> = Vec::with_capacity(layout.rows * 2);
    for row in 0..layout.rows {
        let mut spans = Vec::with_capacity(layout.cols * 2);
        for col in 0..layout.cols {
            let node = row * layout.cols + col;
            spans.push(node_span(node));
            if col + 1 < layout.cols {
                let next = node + 1;
                match horizontal_edge(graph, &layout, node, next) {
                    Some(edge) => spans.push(Span::styled(edge, highlights.edge_style(node, next))),
                    None => spans.push(Span::raw("   ")),
                }
            }
        }
        lines.push(Line::from(spans));

        if row + 1 < layout.rows {
            let mut spans = Vec::with_capacity(layout.cols * 2);
            for col in 0..layout.cols {
                let node = row * layout.cols + col;
                let below = node + layout.cols;
                match vertical_edge(graph, &layout, node, below) {
                    Some(edge) => spans.push(Span::styled(
                        edge.to_string(),
                        highlights.edge_style(node, below),
                    )),
                    None => spans.push(Span::raw(" ")),
                }
                if col + 1 < layout.cols {
                    spans.push(Span::raw("   "));
                }
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("S", Style::default().fg(DEFAULT_THEME.accent)),
        Span::raw(" start  "),
        Span::styled("T", Style::default().fg(DEFAULT_THEME.accent)),
        Span::raw(" target  "),
        Span::styled("●", Style::default().fg(DEFAULT_THEME.primary)),
        Span::raw(" visited  "),
        Span::styled("◆", Style::default().fg(DEFAULT_THEME.success)),
        Span::raw(" path"),
    ]));

    let paragraph = Paragraph::new(lines).block(pane_block(title, true));
    frame.render_widget(paragraph, area);
}
