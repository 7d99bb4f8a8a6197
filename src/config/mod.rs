mod core;
mod health;
mod loader;
mod thresholds;

pub use core::{IntegrationsConfig, OutputConfig, ProgramHealthConfig};
pub use health::HealthConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{CompletenessConfig, RecommendationConfig};
