pub mod assess;
pub mod init;
pub mod recommend;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{load_config, load_config_from_path, ProgramHealthConfig};
use crate::errors::Error;
use crate::formatting::{ColorMode, FormattingConfig, Painter};
use crate::output::OutputFormat;
use crate::snapshot::{group_snapshots, PortfolioInput, ProgramSnapshot};

/// Read a portfolio JSON file and group it per program.
pub fn load_snapshots(path: &Path) -> Result<Vec<ProgramSnapshot>> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let input: PortfolioInput = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    debug!(
        programs = input.programs.len(),
        risks = input.risks.len(),
        milestones = input.milestones.len(),
        "Loaded snapshot"
    );
    Ok(group_snapshots(input))
}

/// Parse an RFC 3339 `--as-of` value; absent means now.
pub fn parse_as_of(value: Option<&str>) -> Result<DateTime<Utc>, Error> {
    match value {
        None => Ok(Utc::now()),
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::InvalidInput(format!("--as-of '{raw}' is not RFC 3339: {e}"))),
    }
}

/// An explicit `--config` must exist; otherwise search upward from the cwd.
pub fn resolve_config(path: Option<&Path>) -> Result<ProgramHealthConfig> {
    match path {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

/// CLI flag first, then `[output] default_format`, then terminal.
pub fn resolve_format(
    flag: Option<crate::cli::OutputFormat>,
    config: &ProgramHealthConfig,
) -> OutputFormat {
    if let Some(flag) = flag {
        return flag.into();
    }
    let configured = config
        .output
        .as_ref()
        .and_then(|o| o.default_format.as_deref());
    match configured {
        Some(name) => OutputFormat::parse(name).unwrap_or_else(|| {
            warn!("Unknown default_format '{}'. Using terminal.", name);
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

/// `--plain` and file output are never colored. Otherwise `--color` wins,
/// then `[output] use_color`, then the environment.
pub fn resolve_color_mode(
    plain: bool,
    color: Option<ColorMode>,
    to_file: bool,
    config: &ProgramHealthConfig,
) -> ColorMode {
    if plain || to_file {
        return ColorMode::Never;
    }
    if let Some(mode) = color {
        return mode;
    }
    match config.output.as_ref().and_then(|o| o.use_color) {
        Some(true) => ColorMode::Always,
        Some(false) => ColorMode::Never,
        None => FormattingConfig::from_env().color,
    }
}

pub fn resolve_painter(
    plain: bool,
    color: Option<ColorMode>,
    to_file: bool,
    config: &ProgramHealthConfig,
) -> Painter {
    FormattingConfig {
        color: resolve_color_mode(plain, color, to_file, config),
    }
    .apply()
}
