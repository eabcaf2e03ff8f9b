//! Sorting pane: one bar per array slot

use super::pane_block;
use crate::input::VALUE_MAX;
use crate::step::SortStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Colour for slot `index`; swaps win over compares, compares over sorted
fn bar_color(step: &SortStep, index: usize) -> Color {
    if step.swapping.contains(&index) {
        DEFAULT_THEME.error
    } else if step.comparing.contains(&index) {
        DEFAULT_THEME.secondary
    } else if step.is_sorted_index(index) {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.primary
    }
}

pub fn render_bars_pane(frame: &mut Frame, area: Rect, title: String, step: &SortStep) {
    let block = pane_block(title, true);

    if step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let slot = (inner_width / step.array.len()).max(1);
    let (bar_width, bar_gap) = if slot >= 2 { (slot - 1, 1) } else { (1, 0) };
    // Values only fit under bars at least three cells wide
    let show_values = bar_width >= 3;

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_color(step, i);
            let bar = Bar::default()
                .value(u64::try_from(value).unwrap_or(0))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if show_values {
                bar
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width as u16)
        .bar_gap(bar_gap)
        .max(VALUE_MAX as u64);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_swap_colour_wins_over_sorted() {
        let step = SortStep {
            array: vec![1, 2, 3],
            comparing: vec![1],
            swapping: vec![0],
            sorted: BTreeSet::from([0, 1, 2]),
        };
        assert_eq!(bar_color(&step, 0), DEFAULT_THEME.error);
        assert_eq!(bar_color(&step, 1), DEFAULT_THEME.secondary);
        assert_eq!(bar_color(&step, 2), DEFAULT_THEME.success);
    }
}
