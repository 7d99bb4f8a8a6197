use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

pub const DEFAULT_CONFIG: &str = r#"# Program Health Configuration

[health]
critical_risk_penalty = 15
overdue_milestone_penalty = 10
blocked_dependency_penalty = 10
missing_component_penalty = 5
blocked_adopter_penalty = 0
healthy_threshold = 80
attention_threshold = 60

[completeness]
min_description_length = 10

[recommendations]
dashboard_limit = 15
daily_limit = 8
pmo_program_threshold = 2
min_average_risks_per_program = 2.0

[output]
default_format = "terminal"

[integrations]
# Channels that receive alerts from `assess --notify`: jira, slack, teams, email
enabled = []
"#;

/// Write the default config into `dir`. Returns the path written.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}
