use rectsel_geometry::AspectMode;

use crate::{HandleConfig, HandleConfigs, HandleStyle};

// Handle defaults
pub const HANDLE_SIZE: f64 = 30.0;
pub const HANDLE_LINE_WIDTH: f64 = 3.0;

pub fn default_handle_style() -> HandleStyle {
    HandleStyle::Edge
}

pub fn default_handle_size() -> f64 {
    HANDLE_SIZE
}

pub fn default_handle_line_width() -> f64 {
    HANDLE_LINE_WIDTH
}

pub fn default_handle_config() -> HandleConfig {
    HandleConfig {
        style: default_handle_style(),
        size: default_handle_size(),
        line_width: default_handle_line_width(),
    }
}

pub fn default_handle_configs() -> HandleConfigs {
    HandleConfigs::all(default_handle_config())
}

// Constraint defaults
pub fn default_aspect_mode() -> AspectMode {
    AspectMode::Free
}

pub fn default_enabled() -> bool {
    true
}
