use crate::view::style::{node_label, NodeStyle};
use crate::view::theme::Theme;
use crate::view::tree::{NodeId, TreeView};
use crate::view::ui::tree_block;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

pub struct OutlineRenderer;

impl OutlineRenderer {
    /// Render the visible nodes as an indented list, starting at the view's
    /// scroll offset. Returns the inner list area.
    pub fn render(frame: &mut Frame, area: Rect, view: &TreeView, theme: &Theme) -> Rect {
        let block = tree_block(theme);
        let inner = block.inner(area);

        let display_nodes = view.display_nodes();
        let scroll_offset = view.scroll_offset().min(display_nodes.len());
        let selected_index = view.selected_index();

        let items: Vec<ListItem> = display_nodes[scroll_offset..]
            .iter()
            .take(inner.height as usize)
            .map(|&(node_id, indent)| Self::render_node(view, node_id, indent, theme))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection_bg));

        let mut list_state = ListState::default();
        if let Some(selected) = selected_index {
            if selected >= scroll_offset {
                list_state.select(Some(selected - scroll_offset));
            }
        }

        frame.render_stateful_widget(list, area, &mut list_state);
        inner
    }

    fn render_node(
        view: &TreeView,
        node_id: NodeId,
        indent: usize,
        theme: &Theme,
    ) -> ListItem<'static> {
        let Some(node) = view.get_node(node_id) else {
            return ListItem::new(Line::default());
        };

        let mut spans = Vec::new();

        if indent > 0 {
            spans.push(Span::raw("  ".repeat(indent)));
        }

        // Leaves have nothing to expand
        if node.is_leaf() {
            spans.push(Span::raw("  "));
        } else {
            let indicator = if node.is_expanded() { "▼ " } else { "▶ " };
            spans.push(Span::styled(
                indicator,
                Style::default().fg(theme.connector_fg),
            ));
        }

        let style = NodeStyle::for_node(&node.value);
        spans.push(Span::styled(
            style.shape.glyph(),
            Style::default().fg(theme.tint_color(style.tint)),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            node_label(&node.value),
            Style::default().fg(theme.label_fg),
        ));

        ListItem::new(Line::from(spans))
    }
}
