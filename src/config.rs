use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub load: LoadConfig,
}

/// How the tree is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Children in a horizontal row below their parent
    #[default]
    Diagram,
    /// Indented list, one node per line
    Outline,
}

/// Viewer behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewConfig {
    #[serde(default)]
    pub layout: LayoutMode,

    /// Blank columns between sibling subtrees in the diagram
    #[serde(default = "default_sibling_gap")]
    pub sibling_gap: usize,

    /// Capture the mouse so nodes can be clicked
    #[serde(default = "default_true")]
    pub mouse: bool,

    #[serde(default = "default_true")]
    pub status_bar: bool,
}

fn default_sibling_gap() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            sibling_gap: default_sibling_gap(),
            mouse: true,
            status_bar: true,
        }
    }
}

/// Tree document loading configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoadConfig {
    /// Reject trees nested deeper than this many levels (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Serializable color representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl ColorDef {
    fn named(name: &str) -> Self {
        ColorDef::Named(name.to_string())
    }

    /// Resolve to a terminal color, None for unknown names
    pub fn to_color(&self) -> Option<Color> {
        let color = match self {
            ColorDef::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                // Default/Reset uses the terminal's default color
                "Default" | "Reset" => Color::Reset,
                _ => return None,
            },
        };
        Some(color)
    }
}

impl fmt::Display for ColorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorDef::Rgb(r, g, b) => write!(f, "[{r}, {g}, {b}]"),
            ColorDef::Named(name) => write!(f, "{name:?}"),
        }
    }
}

/// Colors of the tree view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    #[serde(default = "default_canvas_bg")]
    pub canvas_bg: ColorDef,

    /// Shape color of searched nodes
    #[serde(default = "default_node")]
    pub node: ColorDef,

    /// Shape color of pruned nodes
    #[serde(default = "default_pruned")]
    pub pruned: ColorDef,

    #[serde(default = "default_label")]
    pub label: ColorDef,

    #[serde(default = "default_connector")]
    pub connector: ColorDef,

    #[serde(default = "default_selection_bg")]
    pub selection_bg: ColorDef,

    #[serde(default = "default_status_bar_fg")]
    pub status_bar_fg: ColorDef,

    #[serde(default = "default_status_bar_bg")]
    pub status_bar_bg: ColorDef,
}

fn default_canvas_bg() -> ColorDef {
    ColorDef::named("White")
}

fn default_node() -> ColorDef {
    ColorDef::named("Black")
}

fn default_pruned() -> ColorDef {
    ColorDef::named("Red")
}

fn default_label() -> ColorDef {
    ColorDef::named("Black")
}

fn default_connector() -> ColorDef {
    ColorDef::named("DarkGray")
}

fn default_selection_bg() -> ColorDef {
    ColorDef::named("LightCyan")
}

fn default_status_bar_fg() -> ColorDef {
    ColorDef::named("White")
}

fn default_status_bar_bg() -> ColorDef {
    ColorDef::named("DarkGray")
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            canvas_bg: default_canvas_bg(),
            node: default_node(),
            pruned: default_pruned(),
            label: default_label(),
            connector: default_connector(),
            selection_bg: default_selection_bg(),
            status_bar_fg: default_status_bar_fg(),
            status_bar_bg: default_status_bar_bg(),
        }
    }
}

impl Config {
    /// Default location: `{config_dir}/abtree-viewer/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("abtree-viewer").join("config.json"))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the config from the default location, falling back to defaults
    /// when the file is missing or broken.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load.max_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "load.max_depth must be greater than 0".to_string(),
            ));
        }

        if self.view.sibling_gap > 16 {
            return Err(ConfigError::ValidationError(
                "view.sibling_gap must be <= 16".to_string(),
            ));
        }

        crate::view::theme::Theme::from_config(&self.theme)?;

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
