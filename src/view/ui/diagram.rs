use crate::view::layout::{DiagramLayout, Pan, BLOCK_HEIGHT};
use crate::view::style::{node_label, NodeStyle};
use crate::view::theme::Theme;
use crate::view::tree::TreeView;
use crate::view::ui::tree_block;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};
use unicode_width::UnicodeWidthChar;

pub struct DiagramRenderer;

impl DiagramRenderer {
    /// Render the laid-out tree in the given frame area.
    ///
    /// Returns the inner canvas area, which the caller needs to map mouse
    /// positions back to canvas cells.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &TreeView,
        layout: &DiagramLayout,
        theme: &Theme,
        pan: Pan,
    ) -> Rect {
        let block = tree_block(theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let buf = frame.buffer_mut();
        let canvas = Canvas { buf, area: inner, pan };
        Self::draw(canvas, view, layout, theme);

        inner
    }

    fn draw(mut canvas: Canvas<'_>, view: &TreeView, layout: &DiagramLayout, theme: &Theme) {
        let connector_style = Style::default().fg(theme.connector_fg).bg(theme.canvas_bg);
        for cell in layout.connectors() {
            let mut utf8 = [0u8; 4];
            canvas.put(cell.x, cell.y, cell.glyph.encode_utf8(&mut utf8), connector_style);
        }

        for placement in layout.placements() {
            let Some(node) = view.get_node(placement.id) else {
                continue;
            };

            let style = NodeStyle::for_node(&node.value);
            let bg = if placement.id == view.selected() {
                theme.selection_bg
            } else {
                theme.canvas_bg
            };

            if bg != theme.canvas_bg {
                let blank = " ".repeat(placement.width);
                for row in 0..BLOCK_HEIGHT {
                    canvas.put(placement.x, placement.y + row, &blank, Style::default().bg(bg));
                }
            }

            canvas.put(
                placement.center,
                placement.y,
                style.shape.glyph(),
                Style::default().fg(theme.tint_color(style.tint)).bg(bg),
            );
            canvas.put(
                placement.x,
                placement.y + 1,
                &node_label(&node.value),
                Style::default().fg(theme.label_fg).bg(bg),
            );
        }
    }
}

/// Buffer region addressed in canvas coordinates, clipped to the viewport
struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    pan: Pan,
}

impl Canvas<'_> {
    fn put(&mut self, x: usize, y: usize, text: &str, style: Style) {
        if y < self.pan.y {
            return;
        }
        let row = y - self.pan.y;
        if row >= self.area.height as usize {
            return;
        }

        let mut col = x as isize - self.pan.x as isize;
        for ch in text.chars() {
            if col >= 0 && (col as usize) < self.area.width as usize {
                let position = (self.area.x + col as u16, self.area.y + row as u16);
                if let Some(cell) = self.buf.cell_mut(position) {
                    cell.set_char(ch).set_style(style);
                }
            }
            col += ch.width().unwrap_or(1).max(1) as isize;
        }
    }
}
