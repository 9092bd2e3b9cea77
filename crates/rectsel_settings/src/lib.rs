pub mod defaults;
pub mod manager;
pub mod settings;

pub use manager::ConfigManager;
pub use settings::{HandleConfig, HandleConfigs, HandleStyle, SelectorSettings};
