//! Renderers for the tree viewer

pub mod diagram;
pub mod outline;
pub mod status_bar;

pub use diagram::DiagramRenderer;
pub use outline::OutlineRenderer;
pub use status_bar::StatusBarRenderer;

use crate::view::theme::Theme;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

/// Frame drawn around the tree in both layouts
pub fn tree_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Search Tree ")
        .style(Style::default().bg(theme.canvas_bg).fg(theme.connector_fg))
}
