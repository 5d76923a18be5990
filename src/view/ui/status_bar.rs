//! Status bar rendering

use crate::view::style::node_label;
use crate::view::theme::Theme;
use crate::view::tree::{NodeId, TreeView};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "click/Enter: toggle  arrows: move  q: quit";

/// Path of child indices from the root, e.g. `root/0/2`
pub fn format_path(view: &TreeView, id: NodeId) -> String {
    let mut text = String::from("root");
    for index in view.path(id) {
        text.push('/');
        text.push_str(&index.to_string());
    }
    text
}

pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Render a one-line status bar.
    ///
    /// Key hints are dropped first when the line does not fit.
    pub fn render(frame: &mut Frame, area: Rect, view: &TreeView, source: &str, theme: &Theme) {
        let base_style = Style::default().fg(theme.status_bar_fg).bg(theme.status_bar_bg);
        let selected = view.selected();

        let mut left = format!(" {source} | {}/{} nodes", view.visible_count(), view.len());
        if let Some(node) = view.get_node(selected) {
            left.push_str(&format!(
                " | {} {}",
                format_path(view, selected),
                node_label(&node.value)
            ));
        }

        let used = left.width();
        let mut spans = vec![Span::styled(left, base_style.add_modifier(Modifier::BOLD))];

        let hints_width = KEY_HINTS.width() + 1;
        let available = area.width as usize;
        if used + hints_width < available {
            let padding = available - used - hints_width;
            spans.push(Span::styled(" ".repeat(padding), base_style));
            spans.push(Span::styled(KEY_HINTS, base_style));
            spans.push(Span::styled(" ", base_style));
        }

        let status_line = Paragraph::new(Line::from(spans)).style(base_style);
        frame.render_widget(status_line, area);
    }
}
