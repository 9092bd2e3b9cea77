use std::fs;
use std::path::Path;

use anyhow::Context;
use rectsel_geometry::{AspectMode, HandleKind, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Visual style of a handle. Only carried through for the host renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleStyle {
    /// Bracket-shaped corners and bars on the edges.
    #[default]
    Edge,
    /// Circles on the corners, squares on the edges.
    CircleAndSquare,
}

/// Per-handle appearance. `size` also feeds the default minimum selection size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleConfig {
    #[serde(default = "default_handle_style")]
    pub style: HandleStyle,
    #[serde(default = "default_handle_size")]
    pub size: f64,
    #[serde(default = "default_handle_line_width")]
    pub line_width: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        default_handle_config()
    }
}

impl HandleConfig {
    /// Size clamped to a usable value (negative and non-finite sizes count as zero).
    pub fn effective_size(&self) -> f64 {
        if self.size.is_finite() {
            self.size.max(0.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleConfigs {
    #[serde(default = "default_handle_config")]
    pub vertex: HandleConfig,
    #[serde(default = "default_handle_config")]
    pub edge: HandleConfig,
    #[serde(default = "default_handle_config")]
    pub center: HandleConfig,
}

impl HandleConfigs {
    /// Same config for every handle kind.
    pub fn all(config: HandleConfig) -> Self {
        Self {
            vertex: config,
            edge: config,
            center: config,
        }
    }

    pub fn for_kind(&self, kind: HandleKind) -> &HandleConfig {
        match kind {
            HandleKind::Vertex => &self.vertex,
            HandleKind::Edge => &self.edge,
            HandleKind::Center => &self.center,
        }
    }
}

impl Default for HandleConfigs {
    fn default() -> Self {
        default_handle_configs()
    }
}

/// Selector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSettings {
    #[serde(default = "default_handle_configs")]
    pub handles: HandleConfigs,

    #[serde(default = "default_aspect_mode")]
    pub aspect_mode: AspectMode,

    /// Caller override for the minimum selection size.
    #[serde(default)]
    pub minimum_size: Option<Size>,

    /// Rectangle to start with. `None` selects the whole container.
    #[serde(default)]
    pub initial_rect: Option<Rect>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            handles: default_handle_configs(),
            aspect_mode: default_aspect_mode(),
            minimum_size: None,
            initial_rect: None,
            enabled: default_enabled(),
        }
    }
}

impl SelectorSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let settings: SelectorSettings =
            serde_json::from_str(content).context("invalid selector settings JSON")?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))
    }

    /// Load settings from a JSON file.
    ///
    /// Falls back to defaults if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load_from(path).unwrap_or_default()
    }
}
