//! Info pane: what is running and how far it got

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    /// Label/value rows about the algorithm or structure itself
    pub details: Vec<(&'static str, String)>,
    /// Label/value rows about the current run
    pub stats: Vec<(&'static str, String)>,
}

fn field_lines(fields: Vec<(&'static str, String)>) -> impl Iterator<Item = Line<'static>> {
    fields.into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
        ])
    })
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let mut lines = vec![
        Line::styled(
            data.name.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    lines.extend(field_lines(data.details));
    lines.push(Line::default());
    lines.push(Line::styled(
        data.summary.to_string(),
        Style::default().fg(DEFAULT_THEME.fg),
    ));

    if !data.stats.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Progress"));
        lines.extend(field_lines(data.stats));
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Info ".to_string(), false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
