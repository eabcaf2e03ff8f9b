//! Live structure pane

use super::pane_block;
use crate::step::Value;
use crate::structures::{StructureKind, StructureSnapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: usize = 5;

fn marker_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD)
}

fn index_style() -> Style {
    Style::default().fg(DEFAULT_THEME.comment)
}

/// Top of the stack first, with the top slot marked
fn stack_lines(items: &[Value]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = items
        .iter()
        .enumerate()
        .rev()
        .map(|(i, value)| {
            let is_top = i + 1 == items.len();
            Line::from(vec![
                Span::styled(if is_top { " top → " } else { "       " }, marker_style()),
                Span::styled(
                    format!("│{:^width$}│", value, width = CELL_WIDTH),
                    item_style(is_top),
                ),
                Span::styled(format!(" [{}]", i), index_style()),
            ])
        })
        .collect();
    lines.push(Line::styled(
        format!("       └{}┘", "─".repeat(CELL_WIDTH)),
        index_style(),
    ));
    lines
}

/// Front on the left, rear on the right
fn queue_lines(items: &[Value]) -> Vec<Line<'static>> {
    let last = items.len().saturating_sub(1);
    let mut cells = vec![Span::styled(" front → ", marker_style())];
    let mut indices = vec![Span::raw(" ".repeat(9))];
    for (i, value) in items.iter().enumerate() {
        let is_end = i == 0 || i == last;
        cells.push(Span::styled(
            format!("[{:^width$}]", value, width = CELL_WIDTH),
            item_style(is_end),
        ));
        indices.push(Span::styled(
            format!("{:^width$}", i, width = CELL_WIDTH + 2),
            index_style(),
        ));
    }
    cells.push(Span::styled(" ← rear", marker_style()));
    vec![Line::from(cells), Line::from(indices)]
}

/// Array form plus one centred line per tree level
fn heap_lines(snapshot: &StructureSnapshot<Value>, width: usize) -> Vec<Line<'static>> {
    let items = &snapshot.items;
    let mut lines = Vec::new();

    let array: Vec<Span> = items
        .iter()
        .enumerate()
        .flat_map(|(i, value)| {
            [
                Span::styled(format!("[{}]", i), index_style()),
                Span::styled(format!("{} ", value), item_style(i == 0)),
            ]
        })
        .collect();
    lines.push(Line::from(array));
    lines.push(Line::default());

    let mut level_start = 0;
    let mut level_len = 1;
    while level_start < items.len() {
        let cell = (width / level_len).max(1);
        let end = (level_start + level_len).min(items.len());
        let spans: Vec<Span> = items[level_start..end]
            .iter()
            .enumerate()
            .map(|(offset, value)| {
                let is_root = level_start + offset == 0;
                Span::styled(format!("{:^cell$}", value, cell = cell), item_style(is_root))
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());

        level_start += level_len;
        level_len *= 2;
    }

    if let Some(layout) = &snapshot.layout {
        let leaves = layout
            .iter()
            .filter(|node| node.left.is_none() && node.right.is_none())
            .count();
        lines.push(Line::styled(
            format!("{} node(s), {} leaf node(s)", layout.len(), leaves),
            index_style(),
        ));
    }
    lines
}

fn item_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    }
}

pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    kind: StructureKind,
    snapshot: &StructureSnapshot<Value>,
) {
    let title = format!(" {} ", kind.name());
    let block = pane_block(title, true);

    if snapshot.items.is_empty() {
        let paragraph = Paragraph::new(format!("(empty {})", kind.name().to_lowercase()))
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = match kind {
        StructureKind::Stack => stack_lines(&snapshot.items),
        StructureKind::Queue => queue_lines(&snapshot.items),
        StructureKind::MinHeap => heap_lines(snapshot, area.width.saturating_sub(2) as usize),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{LiveStructure, MinHeap};

    #[test]
    fn test_stack_lists_top_first() {
        let lines = stack_lines(&[1, 2, 3]);
        // Three slots plus the base
        assert_eq!(lines.len(), 4);
        assert!(lines[0].to_string().contains("top"));
        assert!(lines[0].to_string().contains('3'));
        assert!(lines[2].to_string().contains('1'));
    }

    #[test]
    fn test_heap_has_one_line_pair_per_level() {
        let mut heap = MinHeap::new();
        for value in [5, 1, 3, 7, 2] {
            heap.insert(value);
        }
        let lines = heap_lines(&heap.query(), 40);
        // Array, blank, three levels of (values, blank), summary
        assert_eq!(lines.len(), 2 + 3 * 2 + 1);
        assert!(lines.last().map_or(false, |l| l.to_string().contains("5 node(s)")));
    }
}
