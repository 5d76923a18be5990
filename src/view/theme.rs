use super::style::Tint;
use crate::config::{ColorDef, ConfigError, ThemeConfig};
use ratatui::style::Color;

/// Resolved colours used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Background of the tree area
    pub canvas_bg: Color,
    /// Shapes of nodes that were searched
    pub node_fg: Color,
    /// Shapes of pruned nodes
    pub pruned_fg: Color,
    /// `[alpha,beta] --- h_val` text
    pub label_fg: Color,
    /// Lines joining a node to its child row
    pub connector_fg: Color,
    /// Background behind the selected node
    pub selection_bg: Color,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            canvas_bg: Color::White,
            node_fg: Color::Black,
            pruned_fg: Color::Red,
            label_fg: Color::Black,
            connector_fg: Color::DarkGray,
            selection_bg: Color::LightCyan,
            status_bar_fg: Color::White,
            status_bar_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Build a theme from the `theme` section of the config
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            canvas_bg: resolve("canvas_bg", &config.canvas_bg)?,
            node_fg: resolve("node", &config.node)?,
            pruned_fg: resolve("pruned", &config.pruned)?,
            label_fg: resolve("label", &config.label)?,
            connector_fg: resolve("connector", &config.connector)?,
            selection_bg: resolve("selection_bg", &config.selection_bg)?,
            status_bar_fg: resolve("status_bar_fg", &config.status_bar_fg)?,
            status_bar_bg: resolve("status_bar_bg", &config.status_bar_bg)?,
        })
    }

    /// Colour for a node shape
    pub fn tint_color(&self, tint: Tint) -> Color {
        match tint {
            Tint::Black => self.node_fg,
            Tint::Red => self.pruned_fg,
        }
    }
}

fn resolve(field: &str, def: &ColorDef) -> Result<Color, ConfigError> {
    def.to_color().ok_or_else(|| {
        ConfigError::ValidationError(format!("theme.{field}: unknown color {def}"))
    })
}
