//! Tower pane: three pegs with their disks, front of each peg on top
//!
//! Disk labels descend from the top of a peg, so the highest label is drawn
//! narrowest.

use super::pane_block;
use crate::step::RecursionStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::VecDeque;

const PEG_LABELS: [&str; 3] = ["A (from)", "B", "C (to)"];
const PEG_GAP: &str = "  ";

/// Cell width of one peg holding up to `disks` disks
fn peg_width(disks: usize) -> usize {
    2 * disks + 3
}

/// Disk size shown on `row` of a peg, where row 0 is the bare peg tip and row
/// `height` is the bottom slot
fn disk_at(peg: &VecDeque<u32>, row: usize, height: usize) -> Option<u32> {
    let first = (height + 1).checked_sub(peg.len())?;
    let offset = row.checked_sub(first)?;
    peg.get(offset).copied()
}

/// Drawn length of disk `size` among `disks` disks
fn disk_len(size: u32, disks: usize) -> usize {
    2 * (disks + 1).saturating_sub(size as usize) + 1
}

fn disk_span(size: Option<u32>, disks: usize, width: usize) -> Span<'static> {
    match size {
        Some(size) => {
            let len = disk_len(size, disks);
            let pad = width.saturating_sub(len) / 2;
            Span::styled(
                format!("{}{}{}", " ".repeat(pad), "█".repeat(len), " ".repeat(pad)),
                Style::default().fg(DEFAULT_THEME.disk(size)),
            )
        }
        None => {
            let pad = width.saturating_sub(1) / 2;
            Span::styled(
                format!("{}│{}", " ".repeat(pad), " ".repeat(pad)),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        }
    }
}

pub fn render_towers_pane(frame: &mut Frame, area: Rect, title: String, step: &RecursionStep) {
    let height = step.disk_count();
    let width = peg_width(height);

    let mut lines: Vec<Line> = Vec::with_capacity(height + 3);
    for row in 0..=height {
        let mut spans = Vec::with_capacity(6);
        for (i, peg) in step.towers.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(PEG_GAP));
            }
            spans.push(disk_span(disk_at(peg, row, height), height, width));
        }
        lines.push(Line::from(spans));
    }

    let base = vec!["▀".repeat(width); 3].join(PEG_GAP);
    lines.push(Line::styled(base, Style::default().fg(DEFAULT_THEME.comment)));

    let labels = PEG_LABELS
        .iter()
        .map(|label| format!("{:^width$}", label, width = width))
        .collect::<Vec<_>>()
        .join(PEG_GAP);
    lines.push(Line::styled(labels, Style::default().fg(DEFAULT_THEME.fg)));

    let paragraph = Paragraph::new(lines).block(pane_block(title, true));
    frame.render_widget(paragraph, area);
}
