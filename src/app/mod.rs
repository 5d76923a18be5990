//! Viewer application state and event handling
//!
//! `Viewer` owns the tree view and everything needed to draw it. The binary
//! feeds it crossterm events and asks it to render; tests do the same against
//! a `TestBackend`.

use crate::config::{Config, ConfigError, LayoutMode};
use crate::model::{SearchNode, Tree};
use crate::view::layout::{DiagramLayout, Pan};
use crate::view::theme::Theme;
use crate::view::tree::{NodeId, TreeView};
use crate::view::ui::{self, DiagramRenderer, OutlineRenderer, StatusBarRenderer};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

/// Rows (outline) or rows/columns (diagram) moved per scroll wheel notch
const SCROLL_STEP: isize = 3;

pub struct Viewer {
    view: TreeView,
    config: Config,
    theme: Theme,
    /// Shown in the status bar
    source: String,
    /// Diagram positions for the current expand state
    layout: DiagramLayout,
    pan: Pan,
    /// Inner tree area from the last render, used for hit testing
    canvas: Rect,
    /// Bring the selection into view on the next render
    follow_selection: bool,
    should_quit: bool,
}

impl Viewer {
    pub fn new(
        tree: Tree<SearchNode>,
        config: Config,
        source: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let theme = Theme::from_config(&config.theme)?;
        let view = TreeView::new(tree);
        let layout = DiagramLayout::compute(&view, config.view.sibling_gap);
        let source = source.into();

        tracing::info!(
            "Viewing {} ({} nodes, {:?} layout)",
            source,
            view.len(),
            config.view.layout
        );

        Ok(Self {
            view,
            config,
            theme,
            source,
            layout,
            pan: Pan::default(),
            canvas: Rect::default(),
            follow_selection: true,
            should_quit: false,
        })
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.config.view.layout
    }

    pub fn diagram_layout(&self) -> &DiagramLayout {
        &self.layout
    }

    pub fn pan(&self) -> Pan {
        self.pan
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the tree and the status bar
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (tree_area, status_area) = if self.config.view.status_bar && area.height > 1 {
            let [tree_area, status_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
            (tree_area, Some(status_area))
        } else {
            (area, None)
        };

        self.canvas = ui::tree_block(&self.theme).inner(tree_area);
        let width = self.canvas.width as usize;
        let height = self.canvas.height as usize;

        match self.config.view.layout {
            LayoutMode::Diagram => {
                if self.follow_selection {
                    if let Some(placement) = self.layout.placement(self.view.selected()) {
                        self.pan.reveal(placement, width, height);
                    }
                }
                self.pan.clamp(&self.layout, width, height);
                DiagramRenderer::render(
                    frame,
                    tree_area,
                    &self.view,
                    &self.layout,
                    &self.theme,
                    self.pan,
                );
            }
            LayoutMode::Outline => {
                self.view.set_viewport_height(height);
                self.view.scroll_by(0);
                if self.follow_selection {
                    self.view.ensure_selection_visible();
                }
                OutlineRenderer::render(frame, tree_area, &self.view, &self.theme);
            }
        }
        self.follow_selection = false;

        if let Some(status_area) = status_area {
            StatusBarRenderer::render(frame, status_area, &self.view, &self.source, &self.theme);
        }
    }

    /// Handle one terminal event.
    ///
    /// Returns true if a re-render is needed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.view.selected();

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), _)
            | (KeyCode::Esc, _) => {
                tracing::info!("Quit requested");
                self.should_quit = true;
                return false;
            }
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
                self.toggle(self.view.selected());
            }
            (KeyCode::Home, _) => self.view.select_first(),
            (KeyCode::End, _) => self.view.select_last(),
            (code, _) => {
                if !self.navigate(code) {
                    return false;
                }
            }
        }

        if self.view.selected() != before {
            self.follow_selection = true;
        }
        true
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        tracing::trace!(
            "Mouse event: kind={:?}, column={}, row={}",
            mouse.kind,
            mouse.column,
            mouse.row
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(id) = self.node_at(mouse.column, mouse.row) else {
                    return false;
                };
                self.view.set_selected(id);
                self.toggle(id);
                true
            }
            MouseEventKind::ScrollDown => self.scroll(0, SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll(0, -SCROLL_STEP),
            MouseEventKind::ScrollRight => self.scroll(SCROLL_STEP, 0),
            MouseEventKind::ScrollLeft => self.scroll(-SCROLL_STEP, 0),
            _ => false,
        }
    }

    /// Node drawn at a screen cell, as of the last render
    pub fn node_at(&self, column: u16, row: u16) -> Option<NodeId> {
        if !self.canvas.contains((column, row).into()) {
            return None;
        }
        let col = (column - self.canvas.x) as usize;
        let row = (row - self.canvas.y) as usize;

        match self.config.view.layout {
            LayoutMode::Diagram => self.layout.node_at(col + self.pan.x, row + self.pan.y),
            LayoutMode::Outline => self.view.node_at_row(row),
        }
    }

    /// Screen cell of a node's shape, if it was on screen in the last render
    pub fn node_position(&self, id: NodeId) -> Option<(u16, u16)> {
        let (col, row) = match self.config.view.layout {
            LayoutMode::Diagram => {
                let placement = self.layout.placement(id)?;
                (
                    placement.center.checked_sub(self.pan.x)?,
                    placement.y.checked_sub(self.pan.y)?,
                )
            }
            LayoutMode::Outline => {
                let index = self.view.visible_nodes().iter().position(|&n| n == id)?;
                let node = self.view.get_node(id)?;
                // Indent plus the expand indicator
                (
                    node.depth * 2 + 2,
                    index.checked_sub(self.view.scroll_offset())?,
                )
            }
        };

        if col >= self.canvas.width as usize || row >= self.canvas.height as usize {
            return None;
        }
        Some((self.canvas.x + col as u16, self.canvas.y + row as u16))
    }

    fn toggle(&mut self, id: NodeId) {
        if self.view.toggle(id).is_some() {
            self.layout = DiagramLayout::compute(&self.view, self.config.view.sibling_gap);
        }
    }

    fn scroll(&mut self, dx: isize, dy: isize) -> bool {
        match self.config.view.layout {
            LayoutMode::Diagram => self.pan.scroll(dx, dy),
            LayoutMode::Outline if dy != 0 => self.view.scroll_by(dy),
            LayoutMode::Outline => return false,
        }
        true
    }

    /// Move the selection. Outline keys follow list order, diagram keys
    /// follow the drawing: up to the parent, down to the child row and
    /// sideways along siblings.
    fn navigate(&mut self, code: KeyCode) -> bool {
        let outline = self.config.view.layout == LayoutMode::Outline;
        match code {
            KeyCode::Up | KeyCode::Char('k') if outline => self.view.select_prev(),
            KeyCode::Down | KeyCode::Char('j') if outline => self.view.select_next(),
            KeyCode::Left | KeyCode::Char('h') if outline => self.view.select_parent(),
            KeyCode::Right | KeyCode::Char('l') if outline => self.view.select_first_child(),
            KeyCode::Up | KeyCode::Char('k') => self.view.select_parent(),
            KeyCode::Down | KeyCode::Char('j') => self.view.select_first_child(),
            KeyCode::Left | KeyCode::Char('h') => self.view.select_prev_sibling(),
            KeyCode::Right | KeyCode::Char('l') => self.view.select_next_sibling(),
            _ => return false,
        }
        true
    }
}
