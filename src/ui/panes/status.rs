//! Status bar rendering with keybindings and state indicators

use crate::config::View;
use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `total_steps` is 0 while nothing has been recorded yet.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: View,
    message: &str,
    current_step: usize,
    total_steps: usize,
    state: PlaybackState,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let step_text = match view {
        View::Structures => " Live ".to_string(),
        _ if total_steps == 0 => " Step -/- ".to_string(),
        _ => format!(" Step {}/{} ", current_step + 1, total_steps),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = match view {
        View::Structures => &[
            ("0-9", "value"),
            ("i", "insert"),
            ("x", "remove"),
            ("p", "peek"),
            ("s", "switch"),
            ("c", "clear"),
            ("⇥", "view"),
            ("q", "quit"),
        ],
        _ => &[
            ("⎵", "play"),
            ("←/→", "step"),
            ("r", "reset"),
            ("+/-", "speed"),
            ("a", "algo"),
            ("n", "new"),
            ("⇥", "view"),
            ("q", "quit"),
        ],
    };

    let mut right_spans = Vec::with_capacity(bindings.len() * 4 + 2);
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if view != View::Structures {
        let (badge, color) = match state {
            PlaybackState::Playing => (" ▶ PLAYING ", DEFAULT_THEME.secondary),
            PlaybackState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.accent),
            PlaybackState::Completed => (" END ", DEFAULT_THEME.error),
            PlaybackState::Idle => (" START ", DEFAULT_THEME.success),
        };
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            badge,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
