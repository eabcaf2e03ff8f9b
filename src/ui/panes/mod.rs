//! TUI pane rendering modules
//!
//! - [`bars`]: array contents as a bar chart with compare/swap/sorted colours
//! - [`graph`]: grid graph with discovery order and the resolved path
//! - [`towers`]: the three pegs of the disk puzzle
//! - [`structures`]: live stack, queue or heap contents
//! - [`info`]: algorithm description, complexity and run statistics
//! - [`status`]: status bar with step counter, playback state and keybindings
//!
//! Each module exports one stateless `render_*` function that draws into the
//! area it is given.

pub mod bars;
pub mod graph;
pub mod info;
pub mod status;
pub mod structures;
pub mod towers;

pub use bars::render_bars_pane;
pub use graph::{render_graph_pane, GraphLayout, GraphRenderData};
pub use info::{render_info_pane, InfoRenderData};
pub use status::render_status_bar;
pub use structures::render_structure_pane;
pub use towers::render_towers_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the shared focus styling
fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
