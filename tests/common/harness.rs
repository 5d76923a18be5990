// Headless viewer driven through a ratatui TestBackend

use abtree::app::Viewer;
use abtree::config::{Config, LayoutMode};
use abtree::model::{SearchNode, Tree};
use abtree::view::tree::NodeId;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Cell;
use ratatui::Terminal;

pub struct ViewerTestHarness {
    viewer: Viewer,
    terminal: Terminal<TestBackend>,
}

impl ViewerTestHarness {
    /// Diagram viewer without the status bar, so every label on screen
    /// belongs to a drawn node
    pub fn new(tree: Tree<SearchNode>, width: u16, height: u16) -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.view.status_bar = false;
        Self::with_config(tree, config, width, height)
    }

    /// Outline viewer without the status bar
    pub fn outline(tree: Tree<SearchNode>, width: u16, height: u16) -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.view.status_bar = false;
        config.view.layout = LayoutMode::Outline;
        Self::with_config(tree, config, width, height)
    }

    pub fn with_config(
        tree: Tree<SearchNode>,
        config: Config,
        width: u16,
        height: u16,
    ) -> anyhow::Result<Self> {
        let viewer = Viewer::new(tree, config, "test.json")?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { viewer, terminal })
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn should_quit(&self) -> bool {
        self.viewer.should_quit()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let viewer = &mut self.viewer;
        self.terminal.draw(|frame| viewer.render(frame))?;
        Ok(())
    }

    /// Send a key press and re-render
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.viewer
            .handle_event(&Event::Key(KeyEvent::new(code, modifiers)));
        self.render()
    }

    /// Left click a screen cell and re-render
    pub fn click(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.viewer.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
        self.render()
    }

    /// Click the shape of a node, which must be on screen
    pub fn click_node(&mut self, id: NodeId) -> anyhow::Result<()> {
        let (column, row) = self
            .viewer
            .node_position(id)
            .ok_or_else(|| anyhow::anyhow!("{id} is not on screen"))?;
        self.click(column, row)
    }

    pub fn cell(&self, column: u16, row: u16) -> &Cell {
        &self.terminal.backend().buffer()[(column, row)]
    }

    /// Cell holding the shape glyph of a node
    pub fn node_cell(&self, id: NodeId) -> Option<&Cell> {
        let (column, row) = self.viewer.node_position(id)?;
        Some(self.cell(column, row))
    }

    pub fn screen_row(&self, row: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        (0..height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First (column, row) where the text starts
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let height = self.terminal.backend().buffer().area.height;
        (0..height).find_map(|y| {
            let line = self.screen_row(y);
            let byte = line.find(text)?;
            let column = line[..byte].chars().count() as u16;
            Some((column, y))
        })
    }

    /// Number of times a string appears on screen
    pub fn count_text(&self, text: &str) -> usize {
        self.screen_to_string().matches(text).count()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{text}'\nScreen:\n{screen}"
        );
    }
}
